mod clock;
mod config;
mod consts;
mod error;
mod hijri;
mod picker;
mod prelude;
mod session;
mod summary;
mod types;
mod zodiac;

#[cfg(test)]
mod test_utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::CalculatorConfig;
pub use consts::*;
pub use error::AgeError;
pub use hijri::{HijriCalendar, TabularHijri, UnavailableHijri};
pub use picker::{day_options, month_names, year_options};
pub use session::AgeCalculator;
pub use summary::{AgePart, AgeSummary, AgeUnit, ResultRow, RowKind, format_number};
pub use types::{CalendarSystem, DateComponents, HijriDate, Locale};
pub use zodiac::Zodiac;

use chrono::{Datelike, NaiveDate};
use consts::{HIJRI_YEAR_RATIO_DEN, HIJRI_YEAR_RATIO_NUM};
use serde::Serialize;
use tracing::{debug, warn};
use types::{anniversary, gregorian_date, previous_month_length, rolled_gregorian_date};

/// Age of a person on a given day.
///
/// `zodiac` and `next_birthday_countdown` are only known for Gregorian birth
/// dates and are `None` for Hijri results.
///
/// Hijri totals count from the approximated Gregorian birth date (see
/// [`approximate_gregorian`]), which can land after today for recent birth
/// dates. `total_days`, `weeks` and `hours` are then negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeBreakdown {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub total_days: i64,
    pub weeks: i64,
    pub hours: i64,
    pub zodiac: Option<Zodiac>,
    pub next_birthday_countdown: Option<i64>,
}

impl AgeBreakdown {
    fn new((years, months, days): (i32, i32, i32), total_days: i64) -> Self {
        Self {
            years,
            months,
            days,
            total_days,
            weeks: total_days.div_euclid(DAYS_PER_WEEK),
            hours: total_days * HOURS_PER_DAY,
            zodiac: None,
            next_birthday_countdown: None,
        }
    }
}

/// Checks that `components` name a birth date in `calendar` no later than `today`.
///
/// For Hijri dates "today" comes from `hijri`; if it returns
/// `AgeError::HijriUnsupported` the future-date check is skipped.
///
/// # Errors
/// - `AgeError::MissingField` if a component is absent
/// - `AgeError::InvalidDate` if the components are not a real date
/// - `AgeError::FutureDate` if the date is after today
pub fn validate<H: HijriCalendar + ?Sized>(
    components: &DateComponents,
    calendar: CalendarSystem,
    today: NaiveDate,
    hijri: &H,
) -> Result<(), AgeError> {
    match calendar {
        CalendarSystem::Gregorian => validate_gregorian(components, today).map(drop),
        CalendarSystem::Hijri => validate_hijri(components, today, hijri).map(drop),
    }
}

/// Computes the age on `today` of someone born on `components`.
///
/// # Errors
/// Any error from [`validate`], plus `AgeError::HijriUnsupported` when a Hijri
/// age is requested and `hijri` cannot convert today's date.
pub fn calculate<H: HijriCalendar + ?Sized>(
    components: &DateComponents,
    calendar: CalendarSystem,
    today: NaiveDate,
    hijri: &H,
) -> Result<AgeBreakdown, AgeError> {
    debug!(%calendar, %today, ?components, "calculating age");

    let breakdown = match calendar {
        CalendarSystem::Gregorian => {
            let dob = validate_gregorian(components, today)?;
            gregorian_age(dob, today)
        }
        CalendarSystem::Hijri => {
            let dob = validate_hijri(components, today, hijri)?;
            hijri_age(dob, today, hijri)?
        }
    };

    debug!(
        years = breakdown.years,
        months = breakdown.months,
        days = breakdown.days,
        total_days = breakdown.total_days,
        "age calculated"
    );
    Ok(breakdown)
}

/// Gregorian date of a Hijri birth date by the linear year approximation
/// `trunc(year * 0.97 + 622)`. Month and day numbers are reused as-is; a day
/// past the end of the Gregorian month rolls into the next one. `None` when
/// the year is out of range.
pub fn approximate_gregorian(date: HijriDate) -> Option<NaiveDate> {
    let year = date
        .year
        .checked_mul(HIJRI_YEAR_RATIO_NUM)?
        .checked_div(HIJRI_YEAR_RATIO_DEN)?
        .checked_add(HIJRI_GREGORIAN_OFFSET)?;
    rolled_gregorian_date(year, date.month, date.day)
}

fn validate_gregorian(components: &DateComponents, today: NaiveDate) -> Result<NaiveDate, AgeError> {
    let (day, month, year) = components.require()?;
    let dob = gregorian_date(year, month, day).ok_or(AgeError::InvalidDate)?;
    if dob > today {
        return Err(AgeError::FutureDate);
    }
    Ok(dob)
}

fn validate_hijri<H: HijriCalendar + ?Sized>(
    components: &DateComponents,
    today: NaiveDate,
    hijri: &H,
) -> Result<HijriDate, AgeError> {
    let (day, month, year) = components.require()?;
    let dob = HijriDate::new(year, month, day)?;
    match hijri.to_hijri(today) {
        Ok(today) if dob > today => Err(AgeError::FutureDate),
        Ok(_) => Ok(dob),
        // best effort: without a converter there is no Hijri "today" to compare with
        Err(AgeError::HijriUnsupported) => Ok(dob),
        Err(err) => Err(err),
    }
}

fn gregorian_age(dob: NaiveDate, today: NaiveDate) -> AgeBreakdown {
    let borrowed = previous_month_length(today);
    // a birth day past the end of the borrowed month counts from its last day
    let dob_day = if today.day() < dob.day() {
        dob.day().min(borrowed)
    } else {
        dob.day()
    };
    let parts = borrow(
        today.year() - dob.year(),
        today.month() as i32 - dob.month() as i32,
        today.day() as i32 - dob_day as i32,
        borrowed,
    );

    let mut breakdown = AgeBreakdown::new(parts, (today - dob).num_days());
    breakdown.zodiac = Some(Zodiac::from_month_day(dob.month(), dob.day()));
    breakdown.next_birthday_countdown = next_birthday_countdown(dob, today);
    breakdown
}

fn hijri_age<H: HijriCalendar + ?Sized>(
    dob: HijriDate,
    today: NaiveDate,
    hijri: &H,
) -> Result<AgeBreakdown, AgeError> {
    let today_hijri = hijri.to_hijri(today).inspect_err(|err| {
        warn!(%today, %err, "Hijri conversion unavailable");
    })?;
    let approx_dob = approximate_gregorian(dob).ok_or(AgeError::InvalidDate)?;

    // Hijri month lengths are approximated from the Gregorian month before today
    let borrowed = if previous_month_length(today) > HIJRI_SHORT_MONTH {
        HIJRI_LONG_MONTH
    } else {
        HIJRI_SHORT_MONTH
    };
    let parts = borrow(
        today_hijri.year - dob.year,
        today_hijri.month as i32 - dob.month as i32,
        today_hijri.day as i32 - dob.day as i32,
        borrowed,
    );

    debug!(%dob, %today_hijri, %approx_dob, "Hijri age inputs");
    Ok(AgeBreakdown::new(parts, (today - approx_dob).num_days()))
}

/// Resolves negative day and month differences by borrowing a month of
/// `month_length` days and a year of twelve months.
fn borrow(mut years: i32, mut months: i32, mut days: i32, month_length: u32) -> (i32, i32, i32) {
    if days < 0 {
        months -= 1;
        days += month_length as i32;
    }
    if months < 0 {
        years -= 1;
        months += MONTHS_PER_YEAR as i32;
    }
    (years, months, days)
}

/// Days until the next birthday; a birthday today counts as a year away.
fn next_birthday_countdown(dob: NaiveDate, today: NaiveDate) -> Option<i64> {
    let mut next = anniversary(dob, today.year())?;
    if next <= today {
        next = anniversary(dob, today.year() + 1)?;
    }
    Some((next - today).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, dmy, hijri};
    use chrono::{Days, Months};

    fn gregorian(components: DateComponents, today: NaiveDate) -> Result<AgeBreakdown, AgeError> {
        calculate(&components, CalendarSystem::Gregorian, today, &TabularHijri)
    }

    fn hijri_calc(components: DateComponents, today: NaiveDate) -> Result<AgeBreakdown, AgeError> {
        calculate(&components, CalendarSystem::Hijri, today, &TabularHijri)
    }

    #[test]
    fn test_leap_day_birth() {
        let age = gregorian(dmy(29, 2, 2000), date(2023, 3, 1)).unwrap();
        assert_eq!((age.years, age.months, age.days), (23, 0, 1));
        assert_eq!(age.zodiac, Some(Zodiac::Pisces));
    }

    #[test]
    fn test_born_today() {
        let age = gregorian(dmy(15, 7, 1990), date(1990, 7, 15)).unwrap();
        assert_eq!((age.years, age.months, age.days), (0, 0, 0));
        assert_eq!(age.total_days, 0);
        assert_eq!(age.weeks, 0);
        assert_eq!(age.hours, 0);
        assert_eq!(age.zodiac, Some(Zodiac::Cancer));
        assert_eq!(age.next_birthday_countdown, Some(365));
    }

    #[test]
    fn test_birthday_today_across_leap_year() {
        let age = gregorian(dmy(1, 3, 2000), date(2023, 3, 1)).unwrap();
        assert_eq!((age.years, age.months, age.days), (23, 0, 0));
        assert_eq!(age.next_birthday_countdown, Some(366));
    }

    #[test]
    fn test_leo_birth() {
        let age = gregorian(dmy(1, 8, 1990), date(2024, 7, 31)).unwrap();
        assert_eq!(age.zodiac, Some(Zodiac::Leo));
        assert_eq!((age.years, age.months, age.days), (33, 11, 30));
        assert_eq!(age.next_birthday_countdown, Some(1));
    }

    #[test]
    fn test_future_date() {
        let result = gregorian(dmy(1, 1, 2030), date(2026, 10, 16));
        assert_eq!(result, Err(AgeError::FutureDate));
        let result = gregorian(dmy(17, 10, 2026), date(2026, 10, 16));
        assert_eq!(result, Err(AgeError::FutureDate));
    }

    #[test]
    fn test_missing_fields() {
        let components = DateComponents {
            day:   None,
            month: None,
            year:  Some(1990),
        };
        for calendar in [CalendarSystem::Gregorian, CalendarSystem::Hijri] {
            assert_eq!(
                calculate(&components, calendar, date(2024, 1, 1), &TabularHijri),
                Err(AgeError::MissingField)
            );
        }
    }

    #[test]
    fn test_invalid_gregorian_dates() {
        struct TestCase {
            components:  DateComponents,
            description: &'static str,
        }

        let cases = [
            TestCase {
                components:  dmy(30, 2, 2020),
                description: "30 February",
            },
            TestCase {
                components:  dmy(29, 2, 2023),
                description: "29 February in a common year",
            },
            TestCase {
                components:  dmy(31, 4, 2020),
                description: "31 April",
            },
            TestCase {
                components:  dmy(1, 13, 2020),
                description: "month 13",
            },
            TestCase {
                components:  dmy(0, 1, 2020),
                description: "day zero",
            },
        ];

        for case in &cases {
            assert_eq!(
                gregorian(case.components, date(2024, 1, 1)),
                Err(AgeError::InvalidDate),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_end_of_month_birth_never_goes_negative() {
        let age = gregorian(dmy(31, 1, 2023), date(2023, 3, 1)).unwrap();
        assert_eq!((age.years, age.months, age.days), (0, 1, 1));
        let age = gregorian(dmy(31, 3, 2000), date(2023, 5, 1)).unwrap();
        assert_eq!((age.years, age.months, age.days), (23, 1, 1));
    }

    #[test]
    fn test_gregorian_fields_reconstruct_birth_date() {
        let todays = [date(2023, 3, 1), date(2024, 2, 29), date(2024, 12, 31), date(2025, 7, 31)];
        for today in todays {
            let mut dob = date(2019, 1, 1);
            while dob <= today {
                let age = gregorian(dmy(dob.day(), dob.month(), dob.year()), today).unwrap();
                assert!(age.days >= 0 && age.months >= 0 && age.years >= 0);
                let months = u32::try_from(age.years * 12 + age.months).unwrap();
                let rebuilt = dob
                    .checked_add_months(Months::new(months))
                    .and_then(|d| d.checked_add_days(Days::new(u64::try_from(age.days).unwrap())))
                    .unwrap();
                assert_eq!(rebuilt, today, "dob {dob} today {today}: {age:?}");
                dob = dob.succ_opt().unwrap();
            }
        }
    }

    #[test]
    fn test_total_days_monotonic() {
        let components = dmy(15, 6, 1995);
        let mut today = date(2023, 12, 20);
        let mut previous = gregorian(components, today).unwrap().total_days;
        for _ in 0..400 {
            today = today.succ_opt().unwrap();
            let total = gregorian(components, today).unwrap().total_days;
            assert_eq!(total, previous + 1);
            previous = total;
        }
    }

    #[test]
    fn test_weeks_and_hours_derive_from_total_days() {
        let results = [
            gregorian(dmy(15, 6, 1995), date(2024, 1, 1)).unwrap(),
            gregorian(dmy(3, 1, 2024), date(2024, 1, 12)).unwrap(),
            hijri_calc(dmy(10, 3, 1420), date(2024, 1, 1)).unwrap(),
        ];
        for age in results {
            assert_eq!(age.weeks, age.total_days.div_euclid(7));
            assert_eq!(age.hours, age.total_days * 24);
        }
    }

    #[test]
    fn test_idempotent() {
        let today = date(2024, 5, 5);
        let first = gregorian(dmy(12, 12, 1988), today);
        let second = gregorian(dmy(12, 12, 1988), today);
        assert_eq!(first, second);
    }

    #[test]
    fn test_hijri_age() {
        // today 2023-07-19 is 1 Muharram 1445; previous Gregorian month (June) has 30 days
        let age = hijri_calc(dmy(15, 3, 1420), date(2023, 7, 19)).unwrap();
        assert_eq!((age.years, age.months, age.days), (24, 9, 16));
        assert_eq!(age.zodiac, None);
        assert_eq!(age.next_birthday_countdown, None);

        let approx = approximate_gregorian(hijri(1420, 3, 15)).unwrap();
        assert_eq!(approx, date(1999, 3, 15));
        assert_eq!(age.total_days, (date(2023, 7, 19) - approx).num_days());
    }

    #[test]
    fn test_hijri_borrow_uses_short_month_after_february() {
        // 2023-03-23 is 1 Ramadan 1444; February 2023 has 28 days
        let age = hijri_calc(dmy(2, 1, 1440), date(2023, 3, 23)).unwrap();
        assert_eq!((age.years, age.months, age.days), (4, 7, 28));
    }

    #[test]
    fn test_hijri_future_date() {
        // 1445-01-01 is 2023-07-19
        assert_eq!(
            hijri_calc(dmy(2, 1, 1445), date(2023, 7, 19)),
            Err(AgeError::FutureDate)
        );
        assert!(hijri_calc(dmy(1, 1, 1445), date(2023, 7, 19)).is_ok());
        assert_eq!(
            hijri_calc(dmy(1, 2, 1445), date(2023, 7, 19)),
            Err(AgeError::FutureDate)
        );
    }

    #[test]
    fn test_hijri_invalid_date() {
        assert_eq!(hijri_calc(dmy(31, 1, 1420), date(2023, 7, 19)), Err(AgeError::InvalidDate));
        assert_eq!(hijri_calc(dmy(1, 13, 1420), date(2023, 7, 19)), Err(AgeError::InvalidDate));
    }

    #[test]
    fn test_hijri_unavailable() {
        let components = dmy(1, 1, 1500);
        let today = date(2023, 7, 19);
        // validation cannot tell the date is in the future without a converter
        assert_eq!(
            validate(&components, CalendarSystem::Hijri, today, &UnavailableHijri),
            Ok(())
        );
        assert_eq!(
            calculate(&components, CalendarSystem::Hijri, today, &UnavailableHijri),
            Err(AgeError::HijriUnsupported)
        );
        // Gregorian ages never need the converter
        assert!(calculate(&dmy(1, 1, 2000), CalendarSystem::Gregorian, today, &UnavailableHijri).is_ok());
    }

    #[test]
    fn test_approximate_gregorian() {
        assert_eq!(approximate_gregorian(hijri(1446, 1, 1)), Some(date(2024, 1, 1)));
        assert_eq!(approximate_gregorian(hijri(1400, 6, 10)), Some(date(1980, 6, 10)));
        assert_eq!(approximate_gregorian(hijri(1401, 2, 30)), Some(date(1980, 3, 1)));
    }

    #[test]
    fn test_approximate_gregorian_out_of_range_year() {
        assert_eq!(approximate_gregorian(hijri(30_000_000, 1, 1)), None);
        assert_eq!(approximate_gregorian(hijri(i32::MAX, 12, 30)), None);
        assert_eq!(
            hijri_calc(dmy(1, 1, 30_000_000), date(2023, 7, 19)),
            Err(AgeError::FutureDate)
        );
    }

    #[test]
    fn test_hijri_totals_can_precede_birth() {
        // 2009-12-17 is 29 Dhu al-Hijjah 1430, but 1430 approximates to 2009-12-29
        let today = date(2009, 12, 17);
        assert_eq!(TabularHijri.to_hijri(today), Ok(hijri(1430, 12, 29)));
        let age = hijri_calc(dmy(29, 12, 1430), today).unwrap();
        assert_eq!((age.years, age.months, age.days), (0, 0, 0));
        assert_eq!(age.total_days, -12);
        assert_eq!(age.weeks, -2);
        assert_eq!(age.hours, -288);
    }

    #[test]
    fn test_breakdown_serializes_camel_case() {
        let age = gregorian(dmy(15, 7, 1990), date(1990, 7, 16)).unwrap();
        let json = serde_json::to_value(age).unwrap();
        assert_eq!(json["totalDays"], 1);
        assert_eq!(json["nextBirthdayCountdown"], 364);
        assert_eq!(json["zodiac"]["name"], "Cancer");
        assert_eq!(json["zodiac"]["symbol"], "♋");

        let age = hijri_calc(dmy(15, 3, 1420), date(2023, 7, 19)).unwrap();
        let json = serde_json::to_value(age).unwrap();
        assert!(json["zodiac"].is_null());
        assert!(json["nextBirthdayCountdown"].is_null());
    }
}
