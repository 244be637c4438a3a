use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a year value cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid year: {0:?}")]
pub struct YearParseError(pub String);

/// Error returned when a `"<start>-<end>"` year range cannot be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum YearRangeParseError {
    #[error("Missing '-' separator in year range {0:?}")]
    MissingSeparator(String),

    #[error("Invalid year range bound: {0}")]
    InvalidBound(#[from] YearParseError),
}

/// A calendar year.
///
/// Years are compared numerically. They deserialize from either a number
/// (`2021`) or a string (`"2021"`) and always serialize as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "YearRepr", into = "i32")]
pub struct Year(i32);

impl Year {
    pub const fn new(year: i32) -> Self {
        Self(year)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for Year {
    fn from(year: i32) -> Self {
        Self(year)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = YearParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Year)
            .map_err(|_| YearParseError(s.to_string()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Number(i32),
    Text(String),
}

impl TryFrom<YearRepr> for Year {
    type Error = YearParseError;

    fn try_from(repr: YearRepr) -> Result<Self, Self::Error> {
        match repr {
            YearRepr::Number(year) => Ok(Year(year)),
            YearRepr::Text(text) => text.parse(),
        }
    }
}

/// An inclusive pair of year bounds.
///
/// Nothing here enforces `start <= end`; a reversed range simply matches
/// no year. The `"<start>-<end>"` string form exists for single-value
/// select controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub start: Year,
    pub end: Year,
}

impl YearRange {
    pub fn new(start: impl Into<Year>, end: impl Into<Year>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Whether `year` falls within the inclusive bounds.
    pub fn contains(&self, year: Year) -> bool {
        self.start <= year && year <= self.end
    }

    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for YearRange {
    type Err = YearRangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // A leading '-' is the start bound's sign, not the separator.
        let separator = s
            .char_indices()
            .skip(1)
            .find(|(_, c)| *c == '-')
            .map(|(index, _)| index)
            .ok_or_else(|| YearRangeParseError::MissingSeparator(s.to_string()))?;

        Ok(Self {
            start: s[..separator].parse()?,
            end: s[separator + 1..].parse()?,
        })
    }
}
