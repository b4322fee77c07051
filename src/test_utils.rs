//! Shorthand constructors for tests.

use chrono::NaiveDate;

use crate::{DateComponents, HijriDate};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date should exist")
}

pub fn hijri(year: i32, month: u32, day: u32) -> HijriDate {
    HijriDate::new(year, month, day).expect("test Hijri date should be in range")
}

/// Components in form order: day, month, year.
pub const fn dmy(day: u32, month: u32, year: i32) -> DateComponents {
    DateComponents::new(day, month, year)
}
