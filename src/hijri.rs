//! Gregorian to Hijri conversion.
//!
//! [`TabularHijri`] implements the arithmetical Islamic civil calendar: a
//! 30-year cycle of 354/355-day years, odd months of 30 days, even months of
//! 29 days, and a 30th day added to Dhu al-Hijjah in the eleven leap years of
//! each cycle. It can disagree with sighting-based calendars by a day or two.

use chrono::{Datelike, NaiveDate};

use crate::consts::{
    DECEMBER, HIJRI_COMMON_YEAR_DAYS, HIJRI_CYCLE_DAYS, HIJRI_CYCLE_YEARS, HIJRI_EPOCH_JDN,
    HIJRI_LONG_MONTH, HIJRI_SHORT_MONTH, JANUARY, JDN_CE_OFFSET, MIN_DAY, MONTHS_PER_YEAR,
};
use crate::{AgeError, HijriDate};

/// Converts Gregorian dates to Hijri dates.
pub trait HijriCalendar {
    /// # Errors
    /// Returns `AgeError::HijriUnsupported` if no conversion is available.
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate, AgeError>;
}

impl<H: HijriCalendar + ?Sized> HijriCalendar for &H {
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate, AgeError> {
        (**self).to_hijri(date)
    }
}

/// Arithmetical (civil, Friday epoch) Hijri calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularHijri;

/// Stand-in for environments without Hijri support.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableHijri;

impl HijriCalendar for UnavailableHijri {
    fn to_hijri(&self, _date: NaiveDate) -> Result<HijriDate, AgeError> {
        Err(AgeError::HijriUnsupported)
    }
}

impl HijriCalendar for TabularHijri {
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate, AgeError> {
        Self::from_jdn(gregorian_jdn(date)).ok_or(AgeError::InvalidDate)
    }
}

impl TabularHijri {
    pub const fn is_leap_year(year: i32) -> bool {
        (14 + 11 * year as i64).rem_euclid(HIJRI_CYCLE_YEARS) < 11
    }

    pub const fn month_length(year: i32, month: u32) -> u32 {
        debug_assert!(month != 0 && month <= MONTHS_PER_YEAR);

        if month % 2 == 1 || (month == DECEMBER && Self::is_leap_year(year)) {
            HIJRI_LONG_MONTH
        } else {
            HIJRI_SHORT_MONTH
        }
    }

    pub const fn year_length(year: i32) -> u32 {
        if Self::is_leap_year(year) {
            HIJRI_COMMON_YEAR_DAYS as u32 + 1
        } else {
            HIJRI_COMMON_YEAR_DAYS as u32
        }
    }

    /// Gregorian date of a Hijri date, `None` outside chrono's range.
    pub fn to_gregorian(date: HijriDate) -> Option<NaiveDate> {
        let days = Self::to_jdn(date.year, date.month, date.day) - JDN_CE_OFFSET;
        NaiveDate::from_num_days_from_ce_opt(i32::try_from(days).ok()?)
    }

    fn to_jdn(year: i32, month: u32, day: u32) -> i64 {
        let year = i64::from(year);
        let month = i64::from(month);
        // ceil(29.5 * (month - 1)) days precede the month
        let month_offset = (59 * (month - 1) + 1) / 2;
        i64::from(day)
            + month_offset
            + (year - 1) * HIJRI_COMMON_YEAR_DAYS
            + (3 + 11 * year).div_euclid(HIJRI_CYCLE_YEARS)
            + HIJRI_EPOCH_JDN
            - 1
    }

    fn from_jdn(jdn: i64) -> Option<HijriDate> {
        if jdn < HIJRI_EPOCH_JDN {
            return None;
        }

        let estimate = (HIJRI_CYCLE_YEARS * (jdn - HIJRI_EPOCH_JDN) + 10_646).div_euclid(HIJRI_CYCLE_DAYS);
        let mut year = i32::try_from(estimate).ok()?;
        while Self::to_jdn(year + 1, JANUARY, MIN_DAY) <= jdn {
            year += 1;
        }
        while Self::to_jdn(year, JANUARY, MIN_DAY) > jdn {
            year -= 1;
        }

        let month = (JANUARY..=MONTHS_PER_YEAR)
            .rev()
            .find(|&m| Self::to_jdn(year, m, MIN_DAY) <= jdn)?;
        let day = u32::try_from(jdn - Self::to_jdn(year, month, MIN_DAY) + 1).ok()?;

        Some(HijriDate { year, month, day })
    }
}

fn gregorian_jdn(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + JDN_CE_OFFSET
}
