use chrono::Local;
use nba_fetcher::{FetcherConfig, NbaStatsFetcher};
use projection_engine::{count_team_games, season_for_date, week_range, WeekOption};
use tracing::{error, info};

/// Hit every NBA endpoint once for a single player and print what came back
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "LeBron James".to_string());
    let today = Local::now().date_naive();
    let season = season_for_date(today);
    info!("Checking NBA endpoints for '{}' in {}", name, season);

    let config = FetcherConfig::from_env()?;
    let fetcher = NbaStatsFetcher::new(config)?;

    let players = fetcher.fetch_player_index(&season).await?;
    let registry = player_registry::PlayerRegistry::from_players(players);

    let player = match registry.get_by_name(&name) {
        Ok(player) => player.clone(),
        Err(e) => {
            error!("❌ {}", e);
            for (i, candidate) in registry.search_players(&name).iter().take(5).enumerate() {
                info!("  {}. {} (ID: {})", i + 1, candidate.name, candidate.player_id);
            }
            return Ok(());
        }
    };
    info!("✅ {} -> player ID {}", player.name, player.player_id);

    let team_id = fetcher.fetch_team_id(player.player_id).await?;
    info!("✅ Team ID {}", team_id);

    match fetcher.fetch_game_log(player.player_id, &season).await {
        Ok(games) => {
            info!("✅ {} games in the {} game log", games.len(), season);
            for (i, game) in games.iter().take(3).enumerate() {
                info!("  {}. {} pts, {} reb, {} ast", i + 1, game.pts, game.reb, game.ast);
            }
        }
        Err(e) => error!("❌ Failed to fetch game log: {:#}", e),
    }

    let schedule = fetcher.fetch_league_schedule().await?;
    for option in [WeekOption::Current, WeekOption::Next] {
        let range = week_range(option, today);
        let games = count_team_games(team_id, &range, &schedule)?;
        info!("✅ {} week ({}): {} games", option, range, games);
    }

    info!("Endpoint check completed!");
    Ok(())
}
