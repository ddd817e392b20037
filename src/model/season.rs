use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::EnumString;

use crate::error::GpError;

/// One of the four three-month scoring windows of a year.
///
/// The discriminant is the canonical season index used in tenure arithmetic.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SeasonName {
    #[default]
    Spring = 0,
    Summer = 1,
    Autumn = 2,
    Winter = 3,
}

impl SeasonName {
    /// Canonical index: spring 0, summer 1, autumn 2, winter 3.
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// A parsed season token such as `2025spring`.
///
/// Ordering is chronological. The winter season of year `Y` covers January to
/// March of `Y + 1`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Season {
    pub year: u32,
    pub name: SeasonName,
}

impl Season {
    pub const fn new(year: u32, name: SeasonName) -> Self {
        Self { year, name }
    }

    /// Parse a `<digits><letters>` token.
    ///
    /// Parsing never fails: anything that is not a year followed by a known
    /// season name yields `Season::default()` (year 0, spring).
    pub fn parse(token: &str) -> Self {
        Self::try_parse(token).unwrap_or_default()
    }

    /// Strict form of [`Season::parse`]: `None` for a malformed token.
    pub fn try_parse(token: &str) -> Option<Self> {
        let token = token.trim();
        let split = token
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(token.len());
        let (digits, name) = token.split_at(split);

        if digits.is_empty() || name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic())
        {
            return None;
        }

        Some(Self {
            year: digits.parse().ok()?,
            name: SeasonName::from_str(name).ok()?,
        })
    }

    /// The season a calendar date falls into.
    pub fn containing(date: NaiveDate) -> Self {
        let year = date.year().max(0) as u32;
        match date.month() {
            1..=3 => Self::new(year.saturating_sub(1), SeasonName::Winter),
            4..=6 => Self::new(year, SeasonName::Spring),
            7..=9 => Self::new(year, SeasonName::Summer),
            _ => Self::new(year, SeasonName::Autumn),
        }
    }

    /// The season a `YYYYMM` month falls into.
    pub fn containing_month(ym: YearMonth) -> Self {
        NaiveDate::from_ymd_opt(ym.year as i32, ym.month, 1)
            .map(Self::containing)
            .unwrap_or_default()
    }

    /// Index of the season name within its year.
    pub fn index(&self) -> u8 {
        self.name.index()
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.year, self.name)
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Season::parse(&token))
    }
}

/// A calendar month in `YYYYMM` form, used for membership periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    pub year: u32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year().max(0) as u32,
            month: date.month(),
        }
    }
}

impl FromStr for YearMonth {
    type Err = GpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GpError::InvalidYearMonth(s.to_string());
        if s.len() != 6 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let (year, month) = s.split_at(4);
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

impl TryFrom<String> for YearMonth {
    type Error = GpError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}
