use std::ops::RangeInclusive;

use chrono::Datelike;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::CalculatorConfig;
use crate::hijri::{HijriCalendar, TabularHijri};
use crate::picker;
use crate::summary::AgeSummary;
use crate::types::{CalendarSystem, DateComponents};
use crate::{AgeBreakdown, AgeError, calculate};

/// State behind one calculator form: the raw field values, the selected
/// calendar, and the outcome of the last `calculate`.
///
/// At most one of [`result`](Self::result) and [`error`](Self::error) is set.
/// Editing fields leaves both untouched; only `calculate`, `reset` and
/// `set_calendar` change them.
#[derive(Debug, Clone)]
pub struct AgeCalculator<C = SystemClock, H = TabularHijri> {
    config:   CalculatorConfig,
    clock:    C,
    hijri:    H,
    calendar: CalendarSystem,
    day:      String,
    month:    String,
    year:     String,
    result:   Option<AgeBreakdown>,
    error:    Option<AgeError>,
}

impl AgeCalculator {
    /// Calculator on the system clock with the tabular Hijri calendar.
    pub fn new(config: CalculatorConfig) -> Self {
        Self::with_parts(config, SystemClock, TabularHijri)
    }
}

impl Default for AgeCalculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl<C: Clock, H: HijriCalendar> AgeCalculator<C, H> {
    pub fn with_parts(config: CalculatorConfig, clock: C, hijri: H) -> Self {
        Self {
            config,
            clock,
            hijri,
            calendar: CalendarSystem::default(),
            day: String::new(),
            month: String::new(),
            year: String::new(),
            result: None,
            error: None,
        }
    }

    pub fn set_day(&mut self, raw: &str) {
        raw.clone_into(&mut self.day);
    }

    pub fn set_month(&mut self, raw: &str) {
        raw.clone_into(&mut self.month);
    }

    pub fn set_year(&mut self, raw: &str) {
        raw.clone_into(&mut self.year);
    }

    /// Validates the current fields and computes the age as of the clock's today.
    /// The outcome is also kept on the calculator.
    ///
    /// # Errors
    /// The `AgeError` now reported by [`error`](Self::error).
    pub fn calculate(&mut self) -> Result<AgeBreakdown, AgeError> {
        let today = self.clock.today();
        let outcome = self
            .components()
            .and_then(|components| calculate(&components, self.calendar, today, &self.hijri));

        match outcome {
            Ok(age) => {
                self.result = Some(age);
                self.error = None;
            }
            Err(err) => {
                debug!(%err, calendar = %self.calendar, "age calculation rejected");
                self.result = None;
                self.error = Some(err);
            }
        }
        outcome
    }

    /// Clears the fields, the result and the error. The calendar is kept.
    pub fn reset(&mut self) {
        self.day.clear();
        self.month.clear();
        self.year.clear();
        self.result = None;
        self.error = None;
    }

    /// Selects a calendar; input entered for the previous one is discarded.
    pub fn set_calendar(&mut self, calendar: CalendarSystem) {
        debug!(from = %self.calendar, to = %calendar, "switching calendar");
        self.calendar = calendar;
        self.reset();
    }

    /// Parsed form fields.
    ///
    /// # Errors
    /// Returns `AgeError::InvalidDate` if a filled-in field is not a number.
    pub fn components(&self) -> Result<DateComponents, AgeError> {
        DateComponents::from_raw(&self.day, &self.month, &self.year)
    }

    pub fn day(&self) -> &str {
        &self.day
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub const fn calendar(&self) -> CalendarSystem {
        self.calendar
    }

    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub const fn result(&self) -> Option<&AgeBreakdown> {
        self.result.as_ref()
    }

    pub const fn error(&self) -> Option<AgeError> {
        self.error
    }

    /// The current error in the configured locale.
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|err| err.message(self.config.locale))
    }

    pub fn summary(&self) -> Option<AgeSummary> {
        self.result
            .as_ref()
            .map(|age| AgeSummary::new(age, self.calendar, self.config.locale))
    }

    pub const fn day_options(&self) -> RangeInclusive<u32> {
        picker::day_options()
    }

    pub const fn month_options(&self) -> &'static [&'static str; 12] {
        picker::month_names(self.calendar, self.config.locale)
    }

    /// Birth years to offer, newest first, in the selected calendar.
    pub fn year_options(&self) -> Vec<i32> {
        picker::year_options(self.current_year(), self.config.year_span)
    }

    /// This year in the selected calendar. Falls back to the configured Hijri
    /// year when no conversion is available.
    pub fn current_year(&self) -> i32 {
        let today = self.clock.today();
        match self.calendar {
            CalendarSystem::Gregorian => today.year(),
            CalendarSystem::Hijri => self
                .hijri
                .to_hijri(today)
                .map_or(self.config.fallback_hijri_year, |h| h.year),
        }
    }
}
