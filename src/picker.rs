//! Choices offered by the birth date form.

use std::ops::RangeInclusive;

use crate::consts::{MAX_PICKER_DAY, MIN_DAY};
use crate::types::{CalendarSystem, Locale};

const GREGORIAN_MONTHS_AR: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر", "أكتوبر",
    "نوفمبر", "ديسمبر",
];

const GREGORIAN_MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const HIJRI_MONTHS_AR: [&str; 12] = [
    "محرم", "صفر", "ربيع الأول", "ربيع الثاني", "جمادى الأولى", "جمادى الآخرة", "رجب", "شعبان",
    "رمضان", "شوال", "ذو القعدة", "ذو الحجة",
];

const HIJRI_MONTHS_EN: [&str; 12] = [
    "Muharram", "Safar", "Rabi al-Awwal", "Rabi al-Thani", "Jumada al-Ula", "Jumada al-Akhirah",
    "Rajab", "Shaban", "Ramadan", "Shawwal", "Dhu al-Qadah", "Dhu al-Hijjah",
];

/// Day numbers offered regardless of month; impossible dates are caught by validation.
pub const fn day_options() -> RangeInclusive<u32> {
    MIN_DAY..=MAX_PICKER_DAY
}

/// Month names, index 0 is month 1.
pub const fn month_names(calendar: CalendarSystem, locale: Locale) -> &'static [&'static str; 12] {
    match (calendar, locale) {
        (CalendarSystem::Gregorian, Locale::Arabic) => &GREGORIAN_MONTHS_AR,
        (CalendarSystem::Gregorian, Locale::English) => &GREGORIAN_MONTHS_EN,
        (CalendarSystem::Hijri, Locale::Arabic) => &HIJRI_MONTHS_AR,
        (CalendarSystem::Hijri, Locale::English) => &HIJRI_MONTHS_EN,
    }
}

/// `span` years counting down from `current_year`.
pub fn year_options(current_year: i32, span: u16) -> Vec<i32> {
    (0..i32::from(span)).map(|offset| current_year - offset).collect()
}
