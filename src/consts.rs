/// Number of months in both supported calendars
pub const MONTHS_PER_YEAR: u32 = 12;

/// First day of month
pub const MIN_DAY: u32 = 1;

/// Highest day number offered by the day picker
pub const MAX_PICKER_DAY: u32 = 31;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for February
pub const FEBRUARY: u32 = 2;
/// Month number for March
pub const MARCH: u32 = 3;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

pub const DAYS_PER_WEEK: i64 = 7;
pub const HOURS_PER_DAY: i64 = 24;

/// Longest Hijri month
pub const HIJRI_LONG_MONTH: u32 = 30;
/// Shortest Hijri month
pub const HIJRI_SHORT_MONTH: u32 = 29;

/// Hijri-to-Gregorian year approximation: `year * 97 / 100 + 622`
pub(crate) const HIJRI_YEAR_RATIO_NUM: i32 = 97;
pub(crate) const HIJRI_YEAR_RATIO_DEN: i32 = 100;
pub const HIJRI_GREGORIAN_OFFSET: i32 = 622;

/// Julian day number of 1 Muharram 1 AH (civil epoch, Friday 16 July 622 Julian)
pub(crate) const HIJRI_EPOCH_JDN: i64 = 1_948_440;
/// Days in the 30-year tabular Hijri cycle
pub(crate) const HIJRI_CYCLE_DAYS: i64 = 10_631;
/// Years in the tabular Hijri cycle
pub(crate) const HIJRI_CYCLE_YEARS: i64 = 30;
/// Days in a common tabular Hijri year
pub(crate) const HIJRI_COMMON_YEAR_DAYS: i64 = 354;
/// Julian day number of 0001-01-01 minus one (chrono counts that day as 1)
pub(crate) const JDN_CE_OFFSET: i64 = 1_721_425;

/// Number of years offered by the year picker
pub const DEFAULT_YEAR_SPAN: u16 = 120;
/// Current Hijri year assumed when conversion is unavailable
pub const FALLBACK_HIJRI_YEAR: i32 = 1446;

/// Result views below this many total days greet a newborn
pub const NEWBORN_MAX_DAYS: i64 = 31;
