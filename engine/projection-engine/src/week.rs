//! Calendar week selection

use crate::error::{ProjectionError, Result};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which week to project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekOption {
    /// From today through this Sunday
    Current,
    /// Next Monday through Sunday
    Next,
}

impl FromStr for WeekOption {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "current" => Ok(WeekOption::Current),
            "2" | "next" => Ok(WeekOption::Next),
            other => Err(ProjectionError::InvalidOption(other.to_string())),
        }
    }
}

impl fmt::Display for WeekOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekOption::Current => write!(f, "current"),
            WeekOption::Next => write!(f, "next"),
        }
    }
}

/// Inclusive date range for a projection week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Compute the projection week relative to `today`.
///
/// `Current` starts today (days already elapsed this week are not included)
/// and ends on Sunday. `Next` always starts on the following Monday, a full
/// seven days out when today is itself a Monday.
pub fn week_range(option: WeekOption, today: NaiveDate) -> WeekRange {
    let weekday = i64::from(today.weekday().num_days_from_monday());

    match option {
        WeekOption::Current => WeekRange { start: today, end: today + Duration::days(6 - weekday) },
        WeekOption::Next => {
            let days_until_monday = match (7 - weekday) % 7 {
                0 => 7,
                n => n,
            };
            let start = today + Duration::days(days_until_monday);
            WeekRange { start, end: start + Duration::days(6) }
        }
    }
}
