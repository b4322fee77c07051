//! Prelude module for age_calc crate.
//!
//! Re-exports the derive macros shared by the calendar and display types.

pub use derive_more::Display;
