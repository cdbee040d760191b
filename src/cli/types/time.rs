//! Season and game-type types for the NHL API.

use crate::error::{NhlError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;


/// An NHL season, identified by the year it starts in.
///
/// The API spells seasons as eight digits, start year then end year
/// (`20232024`). Parsing also accepts `2023-2024` and `2023-24`.
/// Start years are limited to four digits whose successor is also four digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Season(u16);

const START_YEARS: RangeInclusive<u16> = 1000..=9998;

impl Season {
    pub fn new(start_year: u16) -> Result<Self> {
        if START_YEARS.contains(&start_year) {
            Ok(Self(start_year))
        } else {
            Err(NhlError::InvalidSeason {
                season: start_year.to_string(),
            })
        }
    }

    pub fn start_year(&self) -> u16 {
        self.0
    }

    pub fn end_year(&self) -> u16 {
        self.0 + 1
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2023)
    }
}

impl TryFrom<u16> for Season {
    type Error = NhlError;

    fn try_from(start_year: u16) -> Result<Self> {
        Self::new(start_year)
    }
}

impl From<Season> for u16 {
    fn from(season: Season) -> Self {
        season.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start_year(), self.end_year())
    }
}

impl FromStr for Season {
    type Err = NhlError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NhlError::InvalidSeason {
            season: s.to_string(),
        };
        let raw = s.trim();
        let digits = |part: &str| -> Option<u16> {
            if part.chars().all(|c| c.is_ascii_digit()) {
                part.parse().ok()
            } else {
                None
            }
        };

        let (start, end) = match raw.split_once('-') {
            Some((start, end)) => (start, end),
            None if raw.len() == 8 && raw.is_ascii() => raw.split_at(4),
            None => return Err(invalid()),
        };
        if start.len() != 4 {
            return Err(invalid());
        }
        let start_year = digits(start).ok_or_else(invalid)?;
        let end_year = digits(end).ok_or_else(invalid)?;

        let consecutive = match end.len() {
            4 => u32::from(end_year) == u32::from(start_year) + 1,
            2 => end_year == (start_year + 1) % 100,
            _ => false,
        };
        if consecutive && START_YEARS.contains(&start_year) {
            Ok(Self(start_year))
        } else {
            Err(invalid())
        }
    }
}

/// Game type segment of the game-log and stats endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameType {
    Preseason,
    #[default]
    RegularSeason,
    Playoffs,
}

impl GameType {
    /// Numeric code used in API paths.
    pub fn code(&self) -> u8 {
        match self {
            GameType::Preseason => 1,
            GameType::RegularSeason => 2,
            GameType::Playoffs => 3,
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for GameType {
    type Err = NhlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "pre" | "preseason" => Ok(GameType::Preseason),
            "2" | "r" | "regular" | "regular-season" => Ok(GameType::RegularSeason),
            "3" | "p" | "playoffs" => Ok(GameType::Playoffs),
            _ => Err(NhlError::InvalidGameType {
                game_type: s.to_string(),
            }),
        }
    }
}
