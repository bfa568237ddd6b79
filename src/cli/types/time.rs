//! Season and calendar-date types.

use crate::error::{Result, SportyError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years.
///
/// European seasons span two calendar years and are named after the
/// starting year, so `2023` is the 2023/2024 season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The season in progress on `today`: July or later belongs to the
    /// season starting this year, earlier months to last year's.
    pub fn current(today: NaiveDate) -> Self {
        let year = if today.month() >= 7 {
            today.year()
        } else {
            today.year() - 1
        };
        Self(year as u16)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = SportyError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A calendar date given on the command line as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchDate(pub NaiveDate);

impl MatchDate {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for MatchDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for MatchDate {
    type Err = SportyError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(NaiveDate::parse_from_str(s.trim(), Self::FORMAT)?))
    }
}
