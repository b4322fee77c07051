use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_YEAR_SPAN, FALLBACK_HIJRI_YEAR};
use crate::types::Locale;

/// Calculator settings supplied by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Language for messages, names and wording.
    #[serde(default)]
    pub locale: Locale,
    /// How many years the year picker offers, counting back from this year.
    #[serde(default = "default_year_span")]
    pub year_span: u16,
    /// Current Hijri year assumed when no Hijri conversion is available.
    #[serde(default = "default_fallback_hijri_year")]
    pub fallback_hijri_year: i32,
}

const fn default_year_span() -> u16 {
    DEFAULT_YEAR_SPAN
}

const fn default_fallback_hijri_year() -> i32 {
    FALLBACK_HIJRI_YEAR
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            year_span: DEFAULT_YEAR_SPAN,
            fallback_hijri_year: FALLBACK_HIJRI_YEAR,
        }
    }
}

impl CalculatorConfig {
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
