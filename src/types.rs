use crate::AgeError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    HIJRI_LONG_MONTH, JANUARY, LEAP_YEAR_CYCLE, MARCH, MIN_DAY, MONTHS_PER_YEAR,
};
use crate::prelude::*;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Calendar system the birth date is entered in
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSystem {
    #[default]
    #[display(fmt = "gregorian")]
    Gregorian,
    #[display(fmt = "hijri")]
    Hijri,
}

/// Display language for messages, names and numbers
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[display(fmt = "ar")]
    Arabic,
    #[display(fmt = "en")]
    English,
}

/// Raw birth date input. Each field is `None` until the user picks it.
/// Nothing here is validated against a calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateComponents {
    pub day:   Option<u32>,
    pub month: Option<u32>,
    pub year:  Option<i32>,
}

impl DateComponents {
    pub const fn new(day: u32, month: u32, year: i32) -> Self {
        Self {
            day:   Some(day),
            month: Some(month),
            year:  Some(year),
        }
    }

    /// Builds components from the three raw form strings.
    ///
    /// A blank field outranks a malformed one: if any field is blank, the
    /// malformed fields are dropped so [`Self::require`] reports
    /// `MissingField`.
    ///
    /// # Errors
    /// Returns `AgeError::InvalidDate` if every field is filled in and one is
    /// not a number.
    pub fn from_raw(day: &str, month: &str, year: &str) -> Result<Self, AgeError> {
        let day = Self::parse_field(day);
        let month = Self::parse_field(month);
        let year = Self::parse_field(year);

        if matches!(day, Ok(None)) || matches!(month, Ok(None)) || matches!(year, Ok(None)) {
            return Ok(Self {
                day:   day.ok().flatten(),
                month: month.ok().flatten(),
                year:  year.ok().flatten(),
            });
        }

        Ok(Self {
            day:   day?,
            month: month?,
            year:  year?,
        })
    }

    /// Parses one raw field: blank means "not picked yet".
    ///
    /// # Errors
    /// Returns `AgeError::InvalidDate` if the field is not blank and not a number.
    pub fn parse_field<T: FromStr>(raw: &str) -> Result<Option<T>, AgeError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed.parse::<T>().map(Some).map_err(|_| AgeError::InvalidDate)
    }

    /// Returns `(day, month, year)` when all three are present.
    ///
    /// # Errors
    /// Returns `AgeError::MissingField` if any component is absent.
    pub fn require(&self) -> Result<(u32, u32, i32), AgeError> {
        match (self.day, self.month, self.year) {
            (Some(d), Some(m), Some(y)) => Ok((d, m, y)),
            _ => Err(AgeError::MissingField),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.day.is_none() && self.month.is_none() && self.year.is_none()
    }
}

/// A date in the Hijri calendar. Field order gives lexicographic ordering
/// (year, then month, then day).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct HijriDate {
    pub year:  i32,
    pub month: u32,
    pub day:   u32,
}

impl HijriDate {
    /// Creates a Hijri date, checking only the ranges every Hijri month shares.
    ///
    /// # Errors
    /// Returns `AgeError::InvalidDate` if year < 1, month is not 1-12 or day is not 1-30.
    pub const fn new(year: i32, month: u32, day: u32) -> Result<Self, AgeError> {
        if year < 1
            || month < JANUARY
            || month > MONTHS_PER_YEAR
            || day < MIN_DAY
            || day > HIJRI_LONG_MONTH
        {
            return Err(AgeError::InvalidDate);
        }
        Ok(Self { year, month, day })
    }
}

// Gregorian helpers

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!(month != 0 && month <= MONTHS_PER_YEAR);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Year and month of the month before `date`'s month.
pub fn previous_month(date: NaiveDate) -> (i32, u32) {
    if date.month() == JANUARY {
        (date.year() - 1, DECEMBER)
    } else {
        (date.year(), date.month() - 1)
    }
}

/// Number of days in the month before `date`'s month.
pub fn previous_month_length(date: NaiveDate) -> u32 {
    let (year, month) = previous_month(date);
    days_in_month(year, month)
}

/// Strict Gregorian date: `None` unless the fields name a real date and year >= 1.
pub fn gregorian_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Lenient Gregorian date: an overflowing day rolls into the following month
/// (e.g. 30 February becomes 1 or 2 March).
pub fn rolled_gregorian_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let day = day.checked_sub(1)?;
    NaiveDate::from_ymd_opt(year, month, MIN_DAY)?.checked_add_days(Days::new(u64::from(day)))
}

/// Birthday anniversary in `year`; 29 February falls on 1 March in common years.
pub fn anniversary(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, MARCH, MIN_DAY))
}
