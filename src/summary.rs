//! Human-readable wording of an [`AgeBreakdown`].

use std::fmt;

use serde::Serialize;

use crate::consts::NEWBORN_MAX_DAYS;
use crate::prelude::*;
use crate::types::{CalendarSystem, Locale};
use crate::AgeBreakdown;

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
const ARABIC_THOUSANDS_SEPARATOR: char = '٬';
const WESTERN_THOUSANDS_SEPARATOR: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeUnit {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

impl AgeUnit {
    pub const fn label(self, value: i32, locale: Locale) -> &'static str {
        let singular = value == 1;
        match (locale, self, singular) {
            (Locale::Arabic, Self::Year, true) => "سنة",
            (Locale::Arabic, Self::Year, false) => "سنوات",
            (Locale::Arabic, Self::Month, true) => "شهر",
            (Locale::Arabic, Self::Month, false) => "أشهر",
            (Locale::Arabic, Self::Day, true) => "يوم",
            (Locale::Arabic, Self::Day, false) => "أيام",
            (Locale::English, Self::Year, true) => "year",
            (Locale::English, Self::Year, false) => "years",
            (Locale::English, Self::Month, true) => "month",
            (Locale::English, Self::Month, false) => "months",
            (Locale::English, Self::Day, true) => "day",
            (Locale::English, Self::Day, false) => "days",
        }
    }
}

/// One non-zero component of an age, e.g. "3 months"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AgePart {
    pub value: i32,
    pub unit:  AgeUnit,
}

/// What a [`ResultRow`] shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RowKind {
    #[display(fmt = "total days")]
    TotalDays,
    #[display(fmt = "weeks")]
    Weeks,
    #[display(fmt = "hours")]
    Hours,
    #[display(fmt = "zodiac")]
    Zodiac,
    #[display(fmt = "next birthday")]
    NextBirthday,
}

/// One labelled line under the headline, e.g. "You have lived: 8,401 days"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{label}: {value}")]
pub struct ResultRow {
    pub kind:  RowKind,
    pub label: &'static str,
    pub value: String,
}

/// Display-ready view of an age breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeSummary {
    parts:    Vec<AgePart>,
    age:      AgeBreakdown,
    calendar: CalendarSystem,
    locale:   Locale,
}

impl AgeSummary {
    pub fn new(age: &AgeBreakdown, calendar: CalendarSystem, locale: Locale) -> Self {
        let parts = [
            (age.years, AgeUnit::Year),
            (age.months, AgeUnit::Month),
            (age.days, AgeUnit::Day),
        ]
        .into_iter()
        .filter(|&(value, _)| value > 0)
        .map(|(value, unit)| AgePart { value, unit })
        .collect();

        Self {
            parts,
            age: *age,
            calendar,
            locale,
        }
    }

    pub fn parts(&self) -> &[AgePart] {
        &self.parts
    }

    /// Born less than a month ago with nothing to count yet.
    pub fn is_newborn(&self) -> bool {
        self.parts.is_empty() && self.age.total_days < NEWBORN_MAX_DAYS
    }

    /// "23 years, 1 day" / "٢٣ سنوات و ١ يوم"; "less than a day" when every part is zero.
    pub fn headline(&self) -> String {
        if self.parts.is_empty() {
            return match self.locale {
                Locale::Arabic => "أقل من يوم",
                Locale::English => "less than a day",
            }
            .to_owned();
        }

        let separator = match self.locale {
            Locale::Arabic => " و ",
            Locale::English => ", ",
        };
        self.parts
            .iter()
            .map(|part| {
                format!(
                    "{} {}",
                    format_number(i64::from(part.value), self.calendar),
                    part.unit.label(part.value, self.locale)
                )
            })
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Every row to show, in display order. Rows with nothing to say are left out.
    pub fn rows(&self) -> Vec<ResultRow> {
        std::iter::once(self.total_days_row())
            .chain(self.weeks_row())
            .chain(self.hours_row())
            .chain(self.zodiac_row())
            .chain(self.next_birthday_row())
            .collect()
    }

    pub fn total_days_row(&self) -> ResultRow {
        let n = self.age.total_days;
        let value = self.number(n);
        match self.locale {
            Locale::Arabic => ResultRow::new(RowKind::TotalDays, "لقد عشت", format!("{value} يومًا")),
            Locale::English => ResultRow::new(
                RowKind::TotalDays,
                "You have lived",
                format!("{value} {}", english_unit(n, "day", "days")),
            ),
        }
    }

    /// `None` when there is not yet a whole week.
    pub fn weeks_row(&self) -> Option<ResultRow> {
        let n = self.age.weeks;
        if n == 0 {
            return None;
        }
        let value = self.number(n);
        Some(match self.locale {
            Locale::Arabic => ResultRow::new(RowKind::Weeks, "ما يعادل", format!("{value} أسبوعًا")),
            Locale::English => ResultRow::new(
                RowKind::Weeks,
                "That is",
                format!("{value} {}", english_unit(n, "week", "weeks")),
            ),
        })
    }

    /// `None` when the hour count is zero.
    pub fn hours_row(&self) -> Option<ResultRow> {
        let n = self.age.hours;
        if n == 0 {
            return None;
        }
        let value = self.number(n);
        Some(match self.locale {
            Locale::Arabic => ResultRow::new(RowKind::Hours, "تقريبًا", format!("{value} ساعة")),
            Locale::English => ResultRow::new(
                RowKind::Hours,
                "About",
                format!("{value} {}", english_unit(n, "hour", "hours")),
            ),
        })
    }

    pub fn zodiac_row(&self) -> Option<ResultRow> {
        let sign = self.age.zodiac?;
        let label = match self.locale {
            Locale::Arabic => "برجك الفلكي",
            Locale::English => "Your zodiac sign",
        };
        Some(ResultRow::new(RowKind::Zodiac, label, sign.label(self.locale)))
    }

    pub fn next_birthday_row(&self) -> Option<ResultRow> {
        let n = self.age.next_birthday_countdown?;
        let value = self.number(n);
        Some(match self.locale {
            Locale::Arabic => ResultRow::new(RowKind::NextBirthday, "عيد ميلادك القادم", format!("بعد {value} يومًا")),
            Locale::English => ResultRow::new(
                RowKind::NextBirthday,
                "Your next birthday",
                format!("in {value} {}", english_unit(n, "day", "days")),
            ),
        })
    }

    fn number(&self, value: i64) -> String {
        format_number(value, self.calendar)
    }
}

impl ResultRow {
    const fn new(kind: RowKind, label: &'static str, value: String) -> Self {
        Self { kind, label, value }
    }
}

const fn english_unit(n: i64, singular: &'static str, plural: &'static str) -> &'static str {
    if n == 1 { singular } else { plural }
}

impl fmt::Display for AgeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.headline())
    }
}

/// Groups digits in threes. Gregorian results use Western digits and commas,
/// Hijri results use Arabic-Indic digits and the Arabic thousands separator.
pub fn format_number(value: i64, calendar: CalendarSystem) -> String {
    let digits = value.unsigned_abs().to_string();
    let (separator, arabic) = match calendar {
        CalendarSystem::Gregorian => (WESTERN_THOUSANDS_SEPARATOR, false),
        CalendarSystem::Hijri => (ARABIC_THOUSANDS_SEPARATOR, true),
    };

    let mut out = String::with_capacity(digits.len() * 3);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        match c.to_digit(10) {
            Some(d) if arabic => out.push(ARABIC_INDIC_DIGITS[d as usize]),
            _ => out.push(c),
        }
    }
    out
}
