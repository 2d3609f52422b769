use crate::error::{ProjectionError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Month in which a new season's game logs begin
const SEASON_START_MONTH: u32 = 10;

/// Configuration for the projection pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Season whose game logs feed the averages (e.g., "2025-26")
    pub season: String,
}

impl ProjectionConfig {
    /// Create a configuration, validating the season string
    pub fn new(season: impl Into<String>) -> Result<Self> {
        let season = season.into();
        validate_season(&season)?;
        Ok(Self { season })
    }
}

/// Check that `season` looks like "2025-26" with consecutive years
pub fn validate_season(season: &str) -> Result<()> {
    let invalid = || ProjectionError::config(format!("Invalid season '{season}': expected YYYY-YY"));

    let (start, end) = season.split_once('-').ok_or_else(invalid)?;
    if start.len() != 4 || end.len() != 2 {
        return Err(invalid());
    }

    let start: u32 = start.parse().map_err(|_| invalid())?;
    let end: u32 = end.parse().map_err(|_| invalid())?;
    if (start + 1) % 100 != end {
        return Err(invalid());
    }

    Ok(())
}

/// Season label in progress on `date`; seasons roll over in October
pub fn season_for_date(date: NaiveDate) -> String {
    let start_year = if date.month() >= SEASON_START_MONTH { date.year() } else { date.year() - 1 };
    format!("{}-{:02}", start_year, (start_year + 1) % 100)
}
