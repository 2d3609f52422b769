use crate::config::FetcherConfig;
use crate::models::StatsResponse;
use crate::retry::run_with_retry;
use anyhow::{Context, Result};
use async_trait::async_trait;
use player_registry::PlayerEntry;
use projection_engine::{
    GameLogProvider, GameRecord, LeagueSchedule, PlayerId, PlayerInfoProvider, ScheduleProvider,
    TeamId,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// HTTP client for the NBA stats API and schedule feed
pub struct NbaStatsFetcher {
    config: FetcherConfig,
    client: Client,
}

impl NbaStatsFetcher {
    /// Create a new fetcher instance
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .user_agent(config.http.user_agent.as_str())
            .default_headers(browser_headers())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Fetch the full league schedule
    pub async fn fetch_league_schedule(&self) -> Result<LeagueSchedule> {
        let url = self.config.nba.schedule_url.as_str();
        info!("Fetching league schedule from: {}", url);

        let schedule: LeagueSchedule =
            run_with_retry(|| self.get_json(url, &[]), &self.config.retry).await?;

        info!("Successfully fetched schedule with {} game dates", schedule.game_dates().len());
        Ok(schedule)
    }

    /// Fetch a player's regular-season game log
    pub async fn fetch_game_log(&self, player_id: PlayerId, season: &str) -> Result<Vec<GameRecord>> {
        let url = self.config.stats_endpoint("playergamelog");
        let player_id = player_id.to_string();
        let params = [
            ("PlayerID", player_id.as_str()),
            ("Season", season),
            ("SeasonType", self.config.nba.season_type.as_str()),
        ];

        let response: StatsResponse =
            run_with_retry(|| self.get_json(&url, &params), &self.config.retry).await?;
        let games = response.result_set("PlayerGameLog")?.to_game_records()?;

        debug!("Fetched {} games for player {} in {}", games.len(), player_id, season);
        Ok(games)
    }

    /// Fetch the team a player currently belongs to
    pub async fn fetch_team_id(&self, player_id: PlayerId) -> Result<TeamId> {
        let url = self.config.stats_endpoint("commonplayerinfo");
        let player_id = player_id.to_string();
        let params = [("PlayerID", player_id.as_str()), ("LeagueID", self.config.nba.league_id.as_str())];

        let response: StatsResponse =
            run_with_retry(|| self.get_json(&url, &params), &self.config.retry).await?;
        let team_id = response
            .result_set("CommonPlayerInfo")?
            .to_team_id()
            .with_context(|| format!("No team information for player {}", player_id))?;

        debug!("Player {} plays for team {}", player_id, team_id);
        Ok(team_id)
    }

    /// Fetch every player the league has on record (current and historical)
    pub async fn fetch_player_index(&self, season: &str) -> Result<Vec<PlayerEntry>> {
        let url = self.config.stats_endpoint("commonallplayers");
        let params = [
            ("LeagueID", self.config.nba.league_id.as_str()),
            ("Season", season),
            ("IsOnlyCurrentSeason", "0"),
        ];
        info!("Fetching player index for {}", season);

        let response: StatsResponse =
            run_with_retry(|| self.get_json(&url, &params), &self.config.retry).await?;
        let players = response.result_set("CommonAllPlayers")?.to_player_entries()?;

        info!("Successfully fetched {} players", players.len());
        Ok(players)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, params: &[(&str, &str)]) -> Result<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        if !response.status().is_success() {
            anyhow::bail!("API request to {} failed with status: {}", url, response.status());
        }

        response.json().await.with_context(|| format!("Failed to parse JSON from {}", url))
    }
}

/// stats.nba.com rejects requests that do not look like they come from nba.com
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    headers
}

#[async_trait]
impl ScheduleProvider for NbaStatsFetcher {
    async fn league_schedule(&self) -> Result<LeagueSchedule> {
        self.fetch_league_schedule().await
    }
}

#[async_trait]
impl GameLogProvider for NbaStatsFetcher {
    async fn game_log(&self, player_id: PlayerId, season: &str) -> Result<Vec<GameRecord>> {
        self.fetch_game_log(player_id, season).await
    }
}

#[async_trait]
impl PlayerInfoProvider for NbaStatsFetcher {
    async fn team_id(&self, player_id: PlayerId) -> Result<TeamId> {
        self.fetch_team_id(player_id).await
    }
}
