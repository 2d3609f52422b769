//! Capabilities the projection pipeline consumes from the outside world
//!
//! Network lookups, the player index and interactive disambiguation all sit
//! behind these traits so the pipeline itself never performs I/O.

use crate::models::{GameRecord, PlayerId, TeamId};
use crate::schedule::LeagueSchedule;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A player matched by name lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCandidate {
    pub name: String,
    pub id: PlayerId,
}

/// Name-based player lookup
pub trait PlayerDirectory: Send + Sync {
    /// Case-insensitive full-name match
    fn find_exact(&self, name: &str) -> Option<PlayerCandidate>;

    /// Case-insensitive substring match, in the order candidates should be offered
    fn search(&self, fragment: &str) -> Vec<PlayerCandidate>;
}

/// Current team membership
#[async_trait]
pub trait PlayerInfoProvider: Send + Sync {
    async fn team_id(&self, player_id: PlayerId) -> anyhow::Result<TeamId>;
}

/// Per-game box scores for a season
#[async_trait]
pub trait GameLogProvider: Send + Sync {
    /// Game log for `season` (e.g. "2025-26"); empty if the player has not played
    async fn game_log(&self, player_id: PlayerId, season: &str) -> anyhow::Result<Vec<GameRecord>>;
}

/// Full league schedule
#[async_trait]
pub trait ScheduleProvider: Send + Sync {
    async fn league_schedule(&self) -> anyhow::Result<LeagueSchedule>;
}

/// Interactive choices made while resolving roster names
pub trait PlayerSelector {
    /// Pick one of several candidates for `query`; `None` abandons the name
    fn select(&mut self, query: &str, candidates: &[PlayerCandidate]) -> Option<PlayerCandidate>;

    /// Offer a replacement for a name with no matches; `None` abandons the name
    fn retype(&mut self, query: &str) -> Option<String>;
}
