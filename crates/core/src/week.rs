//! ISO-8601 week keys.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Identifier for a Monday–Sunday calendar week, formatted `YYYY-Www`.
///
/// Only equality is meaningful; string ordering does not follow the
/// calendar across year boundaries. Persisted keys are taken as-is on
/// load, while [`WeekKey::from_str`](std::str::FromStr) validates the
/// format for user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekKey(String);

impl WeekKey {
    /// The week containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        let week = date.iso_week();
        Self(format!("{}-W{:02}", week.year(), week.week()))
    }

    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Compute the week key for a date.
pub fn week_key(date: NaiveDate) -> WeekKey {
    WeekKey::of(date)
}

impl std::fmt::Display for WeekKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when a string is not a valid `YYYY-Www` key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid week key '{0}', expected YYYY-Www")]
pub struct ParseWeekKeyError(String);

impl std::str::FromStr for WeekKey {
    type Err = ParseWeekKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseWeekKeyError(s.to_string());
        let (year, week) = s.split_once("-W").ok_or_else(err)?;
        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !digits(year) || week.len() != 2 || !digits(week) {
            return Err(err());
        }
        let year: i32 = year.parse().map_err(|_| err())?;
        let week: u32 = week.parse().map_err(|_| err())?;
        // Reject week 53 for years that only have 52.
        NaiveDate::from_isoywd_opt(year, week, chrono::Weekday::Mon).ok_or_else(err)?;
        Ok(Self(format!("{}-W{:02}", year, week)))
    }
}
