use serde::ser::SerializeStruct;

use crate::prelude::*;
use crate::types::Locale;

/// Western tropical zodiac sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Zodiac {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

/// First (month, day) of each sign in calendar order. A sign runs until the
/// day before the next entry; dates before the first entry are Capricorn.
const SIGN_STARTS: [(u32, u32, Zodiac); 12] = [
    (1, 20, Zodiac::Aquarius),
    (2, 19, Zodiac::Pisces),
    (3, 21, Zodiac::Aries),
    (4, 20, Zodiac::Taurus),
    (5, 21, Zodiac::Gemini),
    (6, 21, Zodiac::Cancer),
    (7, 23, Zodiac::Leo),
    (8, 23, Zodiac::Virgo),
    (9, 23, Zodiac::Libra),
    (10, 23, Zodiac::Scorpio),
    (11, 22, Zodiac::Sagittarius),
    (12, 22, Zodiac::Capricorn),
];

impl Zodiac {
    /// Sign for a birth month (1-12) and day.
    pub fn from_month_day(month: u32, day: u32) -> Self {
        SIGN_STARTS
            .iter()
            .rev()
            .find(|&&(m, d, _)| (month, day) >= (m, d))
            .map_or(Self::Capricorn, |&(_, _, sign)| sign)
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Capricorn => '♑',
            Self::Aquarius => '♒',
            Self::Pisces => '♓',
            Self::Aries => '♈',
            Self::Taurus => '♉',
            Self::Gemini => '♊',
            Self::Cancer => '♋',
            Self::Leo => '♌',
            Self::Virgo => '♍',
            Self::Libra => '♎',
            Self::Scorpio => '♏',
            Self::Sagittarius => '♐',
        }
    }

    pub const fn name(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Arabic => match self {
                Self::Capricorn => "الجدي",
                Self::Aquarius => "الدلو",
                Self::Pisces => "الحوت",
                Self::Aries => "الحمل",
                Self::Taurus => "الثور",
                Self::Gemini => "الجوزاء",
                Self::Cancer => "السرطان",
                Self::Leo => "الأسد",
                Self::Virgo => "العذراء",
                Self::Libra => "الميزان",
                Self::Scorpio => "العقرب",
                Self::Sagittarius => "القوس",
            },
            Locale::English => match self {
                Self::Capricorn => "Capricorn",
                Self::Aquarius => "Aquarius",
                Self::Pisces => "Pisces",
                Self::Aries => "Aries",
                Self::Taurus => "Taurus",
                Self::Gemini => "Gemini",
                Self::Cancer => "Cancer",
                Self::Leo => "Leo",
                Self::Virgo => "Virgo",
                Self::Libra => "Libra",
                Self::Scorpio => "Scorpio",
                Self::Sagittarius => "Sagittarius",
            },
        }
    }

    /// Name followed by symbol, e.g. "Leo ♌"
    pub fn label(self, locale: Locale) -> String {
        format!("{} {}", self.name(locale), self.symbol())
    }
}

/// Serialized as `{"name": "Leo", "symbol": "♌"}` with the English name.
impl serde::Serialize for Zodiac {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Zodiac", 2)?;
        state.serialize_field("name", self.name(Locale::English))?;
        state.serialize_field("symbol", &self.symbol())?;
        state.end()
    }
}
