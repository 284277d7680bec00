//! Zodiac signs used as lookup keys for horoscope content.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown zodiac sign: {0}")]
pub struct UnknownSign(pub String);

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Lowercase English name, as expected by the horoscope provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }

    pub fn spanish_name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Tauro",
            ZodiacSign::Gemini => "Géminis",
            ZodiacSign::Cancer => "Cáncer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Escorpio",
            ZodiacSign::Sagittarius => "Sagitario",
            ZodiacSign::Capricorn => "Capricornio",
            ZodiacSign::Aquarius => "Acuario",
            ZodiacSign::Pisces => "Piscis",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "🐏",
            ZodiacSign::Taurus => "🐂",
            ZodiacSign::Gemini => "👯",
            ZodiacSign::Cancer => "🦀",
            ZodiacSign::Leo => "🦁",
            ZodiacSign::Virgo => "🌾",
            ZodiacSign::Libra => "⚖️",
            ZodiacSign::Scorpio => "🦂",
            ZodiacSign::Sagittarius => "🏹",
            ZodiacSign::Capricorn => "🐐",
            ZodiacSign::Aquarius => "🏺",
            ZodiacSign::Pisces => "🐟",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZodiacSign {
    type Err = UnknownSign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ZodiacSign::ALL
            .into_iter()
            .find(|sign| sign.as_str() == wanted)
            .ok_or_else(|| UnknownSign(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Cancer".parse::<ZodiacSign>(), Ok(ZodiacSign::Cancer));
        assert_eq!(" AQUARIUS ".parse::<ZodiacSign>(), Ok(ZodiacSign::Aquarius));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "ophiuchus".parse::<ZodiacSign>(),
            Err(UnknownSign("ophiuchus".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for sign in ZodiacSign::ALL {
            assert_eq!(sign.to_string().parse::<ZodiacSign>(), Ok(sign));
        }
    }
}
