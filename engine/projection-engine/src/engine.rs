use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    aggregation::aggregate_projected_totals,
    averager::average_game_log,
    comparator::{compare_teams, ComparisonResult},
    config::ProjectionConfig,
    error::{ProjectionError, Result},
    models::{AggregatedTotals, PlayerId, ProjectedTotals, StatAverages, TeamId},
    projector::project_weekly_totals,
    providers::{
        GameLogProvider, PlayerCandidate, PlayerDirectory, PlayerInfoProvider, PlayerSelector,
        ScheduleProvider,
    },
    schedule::{count_team_games, LeagueSchedule},
    week::WeekRange,
};

/// One player's season averages and weekly projection
#[derive(Debug, Clone, Serialize)]
pub struct PlayerProjection {
    pub name: String,
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub averages: StatAverages,
    /// Games the player's team plays in the week
    pub games: u32,
    pub projected: ProjectedTotals,
}

/// Projections for a whole roster
#[derive(Debug, Clone, Serialize)]
pub struct RosterProjection {
    pub week: WeekRange,
    pub season: String,
    pub players: Vec<PlayerProjection>,
    pub aggregated: AggregatedTotals,
}

/// Two rosters projected over the same week and compared
#[derive(Debug, Clone, Serialize)]
pub struct MatchupProjection {
    pub team_a: RosterProjection,
    pub team_b: RosterProjection,
    pub comparison: ComparisonResult,
}

/// Runs the projection pipeline over rosters of player names
pub struct RosterProcessor {
    config: ProjectionConfig,
    directory: Arc<dyn PlayerDirectory>,
    player_info: Arc<dyn PlayerInfoProvider>,
    game_logs: Arc<dyn GameLogProvider>,
    schedules: Arc<dyn ScheduleProvider>,
}

impl RosterProcessor {
    pub fn new(
        config: ProjectionConfig,
        directory: Arc<dyn PlayerDirectory>,
        player_info: Arc<dyn PlayerInfoProvider>,
        game_logs: Arc<dyn GameLogProvider>,
        schedules: Arc<dyn ScheduleProvider>,
    ) -> Self {
        Self { config, directory, player_info, game_logs, schedules }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project every player on a roster for `week`, fetching the schedule once
    pub async fn process_roster(
        &self,
        names: &[String],
        week: WeekRange,
        selector: &mut dyn PlayerSelector,
    ) -> Result<RosterProjection> {
        let schedule = self.schedules.league_schedule().await?;
        info!("Loaded league schedule with {} game dates", schedule.game_dates().len());

        self.process_roster_with_schedule(names, week, &schedule, selector).await
    }

    /// Project every player on a roster against an already loaded schedule
    pub async fn process_roster_with_schedule(
        &self,
        names: &[String],
        week: WeekRange,
        schedule: &LeagueSchedule,
        selector: &mut dyn PlayerSelector,
    ) -> Result<RosterProjection> {
        info!("Processing roster of {} players for {}", names.len(), week);

        let mut players = Vec::with_capacity(names.len());
        for name in names {
            let candidate = self.resolve_player(name, selector)?;
            let projection = self.project_player(candidate, week, schedule).await?;
            players.push(projection);
        }

        let aggregated = aggregate_projected_totals(players.iter().map(|p| &p.projected));
        info!(
            "Roster projection complete: {} players, {:.2} pts, FG% {:.1}, FT% {:.1}",
            aggregated.player_count, aggregated.totals.pts, aggregated.fg_pct, aggregated.ft_pct
        );

        Ok(RosterProjection { week, season: self.config.season.clone(), players, aggregated })
    }

    /// Project two rosters over the same week and compare them category by category
    pub async fn compare_rosters(
        &self,
        team_a: &[String],
        team_b: &[String],
        week: WeekRange,
        selector: &mut dyn PlayerSelector,
    ) -> Result<MatchupProjection> {
        let schedule = self.schedules.league_schedule().await?;
        info!("Loaded league schedule with {} game dates", schedule.game_dates().len());

        let team_a = self.process_roster_with_schedule(team_a, week, &schedule, selector).await?;
        let team_b = self.process_roster_with_schedule(team_b, week, &schedule, selector).await?;
        let comparison = compare_teams(&team_a.aggregated, &team_b.aggregated);

        info!(
            "Matchup result: Team A {} - Team B {} ({})",
            comparison.team_a_wins, comparison.team_b_wins, comparison.winner
        );

        Ok(MatchupProjection { team_a, team_b, comparison })
    }

    /// Resolve a typed name to a single player.
    ///
    /// An exact full-name match wins outright; a single fuzzy match is taken
    /// as-is; several go to the selector. With no match the selector may
    /// offer a new name, otherwise the lookup fails.
    pub fn resolve_player(
        &self,
        name: &str,
        selector: &mut dyn PlayerSelector,
    ) -> Result<PlayerCandidate> {
        let mut query = name.trim().to_string();

        loop {
            if let Some(player) = self.directory.find_exact(&query) {
                debug!("Exact match for '{}': {} ({})", query, player.name, player.id);
                return Ok(player);
            }

            let mut candidates = self.directory.search(&query);
            match candidates.len() {
                0 => {
                    warn!("No players found for '{}'", query);
                    match selector.retype(&query) {
                        Some(next) => query = next.trim().to_string(),
                        None => return Err(ProjectionError::player_not_found(query)),
                    }
                }
                1 => return Ok(candidates.remove(0)),
                n => {
                    debug!("{} candidates for '{}'", n, query);
                    return selector
                        .select(&query, &candidates)
                        .ok_or_else(|| ProjectionError::player_not_found(query));
                }
            }
        }
    }

    async fn project_player(
        &self,
        player: PlayerCandidate,
        week: WeekRange,
        schedule: &LeagueSchedule,
    ) -> Result<PlayerProjection> {
        info!("Processing {} ({})", player.name, player.id);

        let game_log = self.game_logs.game_log(player.id, &self.config.season).await?;
        if game_log.is_empty() {
            warn!("No game data for {} in {}; projected stats will be 0", player.name, self.config.season);
        }
        let averages = average_game_log(&game_log);

        let team_id = self.player_info.team_id(player.id).await?;
        let games = count_team_games(team_id, &week, schedule)?;
        let projected = project_weekly_totals(&averages, games);

        info!("{}'s team ({}) plays {} games from {}", player.name, team_id, games, week);

        Ok(PlayerProjection {
            name: player.name,
            player_id: player.id,
            team_id,
            averages,
            games,
            projected,
        })
    }
}
