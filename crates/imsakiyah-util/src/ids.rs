//! Strongly-typed identifiers for imsakiyah

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unambiguous calendar day used to key persisted per-day state.
///
/// Displays as `YYYY-MM-DD`, so keys never collide across years or locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse the `YYYY-MM-DD` form produced by `Display`
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Key `offset` days after this one
    pub fn offset_days(&self, offset: u64) -> Option<Self> {
        self.0
            .checked_add_days(chrono::Days::new(offset))
            .map(Self)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// A province/city pair identifying where a schedule applies
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationKey {
    pub province: String,
    pub city: String,
}

impl LocationKey {
    pub fn new(province: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            province: province.into(),
            city: city.into(),
        }
    }

    /// Both parts are required before a schedule can be requested
    pub fn is_complete(&self) -> bool {
        !self.province.trim().is_empty() && !self.city.trim().is_empty()
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.province)
    }
}
