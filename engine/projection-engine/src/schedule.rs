//! League schedule model and per-team game counting

use crate::error::{ProjectionError, Result};
use crate::models::TeamId;
use crate::week::WeekRange;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Date format used by the league schedule feed
pub const SCHEDULE_DATE_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Full league schedule as published by the schedule feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSchedule {
    pub league_schedule: ScheduleBody,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBody {
    #[serde(default)]
    pub season_year: Option<String>,
    pub game_dates: Vec<GameDate>,
}

/// All games played on one calendar date
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDate {
    /// "MM/DD/YYYY HH:MM:SS"
    pub game_date: String,
    #[serde(default)]
    pub games: Vec<ScheduledGame>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledGame {
    #[serde(default)]
    pub game_id: Option<String>,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
}

impl ScheduledGame {
    /// True if `team_id` plays in this game, home or away
    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team.team_id == team_id || self.away_team.team_id == team_id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRef {
    pub team_id: TeamId,
    #[serde(default)]
    pub team_tricode: Option<String>,
}

impl GameDate {
    /// Parse this entry's date, failing on anything but the feed's exact format
    pub fn date(&self) -> Result<chrono::NaiveDate> {
        NaiveDateTime::parse_from_str(&self.game_date, SCHEDULE_DATE_FORMAT)
            .map(|dt| dt.date())
            .map_err(|source| ProjectionError::ScheduleFormat { date: self.game_date.clone(), source })
    }
}

impl LeagueSchedule {
    pub fn game_dates(&self) -> &[GameDate] {
        &self.league_schedule.game_dates
    }
}

/// Count the games `team_id` plays inside `range` (inclusive).
///
/// Every entry's date is validated, including entries outside the range, so a
/// malformed feed is reported rather than producing a silently short count.
pub fn count_team_games(team_id: TeamId, range: &WeekRange, schedule: &LeagueSchedule) -> Result<u32> {
    let mut count = 0;

    for entry in schedule.game_dates() {
        let date = entry.date()?;
        if !range.contains(date) {
            continue;
        }

        let games_today = entry.games.iter().filter(|game| game.involves(team_id)).count() as u32;
        if games_today > 0 {
            debug!("Team {} plays {} game(s) on {}", team_id, games_today, date);
        }
        count += games_today;
    }

    Ok(count)
}
