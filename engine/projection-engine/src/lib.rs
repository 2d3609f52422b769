//! Projection Engine
//!
//! Projects fantasy-basketball stats for a week from season averages scaled by
//! the number of games each player's team plays, aggregates rosters with
//! volume-weighted shooting percentages, and scores head-to-head matchups.
//! All data arrives through the traits in [`providers`]; nothing here performs I/O.

pub mod aggregation;
pub mod averager;
pub mod comparator;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod projector;
pub mod providers;
pub mod schedule;
pub mod week;

pub use aggregation::aggregate_projected_totals;
pub use averager::average_game_log;
pub use comparator::{compare_teams, CategoryResult, ComparisonResult, Outcome, SCORED_CATEGORIES};
pub use config::{season_for_date, ProjectionConfig};
pub use engine::{MatchupProjection, PlayerProjection, RosterProcessor, RosterProjection};
pub use error::{ProjectionError, Result};
pub use models::*;
pub use projector::project_weekly_totals;
pub use providers::{
    GameLogProvider, PlayerCandidate, PlayerDirectory, PlayerInfoProvider, PlayerSelector,
    ScheduleProvider,
};
pub use schedule::{count_team_games, LeagueSchedule};
pub use week::{week_range, WeekOption, WeekRange};
