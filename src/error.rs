use serde::Serialize;

use crate::types::Locale;

/// Reasons a birth date cannot be turned into an age.
///
/// Every variant is recoverable: the user fixes the input or switches
/// calendars. `Display` renders English; use [`AgeError::message`] for the
/// text shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum AgeError {
    /// Day, month or year has not been picked.
    #[error("Please select the day, month and year.")]
    MissingField,

    /// The components do not name a real date (e.g. 30 February).
    #[error("Please enter a valid date.")]
    InvalidDate,

    /// The birth date lies after today.
    #[error("Date of birth cannot be in the future.")]
    FutureDate,

    /// No Hijri calendar conversion is available.
    #[error("Cannot calculate the Hijri age. Your environment may not support it.")]
    HijriUnsupported,
}

impl AgeError {
    /// Human-readable message in the given locale.
    pub fn message(self, locale: Locale) -> String {
        match locale {
            Locale::English => self.to_string(),
            Locale::Arabic => match self {
                Self::MissingField => "الرجاء تحديد اليوم والشهر والسنة.",
                Self::InvalidDate => "الرجاء إدخال تاريخ صالح.",
                Self::FutureDate => "تاريخ الميلاد لا يمكن أن يكون في المستقبل.",
                Self::HijriUnsupported => "لا يمكن حساب العمر الهجري. قد لا يكون متصفحك مدعومًا.",
            }
            .to_owned(),
        }
    }
}
