//! Fantasy Scheduler
//!
//! Projects fantasy basketball rosters over the current or next week from
//! season averages and the NBA schedule, and scores head-to-head matchups.

mod cli;
mod config;
mod interactive;
mod logging;
mod report;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use nba_fetcher::NbaStatsFetcher;
use player_registry::PlayerRegistry;
use projection_engine::{season_for_date, ProjectionConfig, RosterProcessor};
use std::sync::Arc;
use tracing::{error, info};

use crate::cli::{Cli, CliHandler};
use crate::config::AppConfig;
use crate::interactive::{Console, InteractiveCLI};
use crate::logging::initialize_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let app_config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let level = cli.log_level.clone().unwrap_or_else(|| app_config.logging.level.clone());
    initialize_logging(&level, &app_config.logging.format)?;

    let today = Local::now().date_naive();
    let season = cli
        .season
        .clone()
        .or_else(|| app_config.season.clone())
        .unwrap_or_else(|| season_for_date(today));
    let projection_config = ProjectionConfig::new(season)?;
    info!(
        "Starting Fantasy Scheduler v{} for the {} season",
        env!("CARGO_PKG_VERSION"),
        projection_config.season
    );

    let fetcher = Arc::new(NbaStatsFetcher::new(app_config.fetcher_config()?)?);
    let players = fetcher
        .fetch_player_index(&projection_config.season)
        .await
        .context("Failed to load the NBA player index")?;
    let registry = Arc::new(PlayerRegistry::from_players(players));

    let processor =
        RosterProcessor::new(projection_config, registry, fetcher.clone(), fetcher.clone(), fetcher);
    let handler = CliHandler::new(processor, today);

    let outcome = match cli.command {
        Some(command) => handler.handle_command(command, &mut Console::stdin()).await,
        None => InteractiveCLI::new(&handler, Console::stdin()).run().await,
    };

    if let Err(e) = &outcome {
        error!("Fantasy Scheduler failed: {:#}", e);
    }
    outcome
}
