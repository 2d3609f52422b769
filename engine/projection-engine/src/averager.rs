//! Season averages from a player's game log

use crate::models::{GameRecord, StatAverages, StatLine};
use tracing::debug;

/// Reduce a season's game log to per-game averages.
///
/// Shooting percentages are season-accurate: total makes over total attempts,
/// never the mean of per-game percentages. An empty log yields all zeros.
pub fn average_game_log(games: &[GameRecord]) -> StatAverages {
    if games.is_empty() {
        return StatAverages::default();
    }

    let totals = games.iter().fold(StatLine::default(), |acc, game| acc + StatLine::from(game));
    let count = games.len() as f64;
    let per_game = StatLine::from_fn(|stat| totals.get(stat) / count);

    let averages = StatAverages {
        per_game,
        fg_pct: totals.fg_pct(),
        ft_pct: totals.ft_pct(),
        games_played: games.len(),
    };

    debug!(
        "Averaged {} games: {:.2} pts, FG% {:.1}, FT% {:.1}",
        games.len(),
        averages.per_game.pts,
        averages.fg_pct,
        averages.ft_pct
    );

    averages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stat;

    fn game(fgm: u32, fga: u32, ftm: u32, fta: u32, pts: u32) -> GameRecord {
        GameRecord { fgm, fga, ftm, fta, pts, ..Default::default() }
    }

    #[test]
    fn test_fg_pct_uses_season_totals() {
        let games = [game(5, 10, 0, 0, 10), game(3, 5, 0, 0, 6)];
        let averages = average_game_log(&games);

        // 8 / 15, not (50% + 60%) / 2
        assert!((averages.fg_pct - 800.0 / 15.0).abs() < 1e-9);
        assert!((averages.fg_pct - 55.0).abs() > 1.0);
    }

    #[test]
    fn test_counting_stat_means() {
        let games = [
            GameRecord { pts: 20, reb: 10, ast: 4, stl: 1, blk: 2, tov: 3, fg3m: 2, ..Default::default() },
            GameRecord { pts: 30, reb: 6, ast: 8, stl: 3, blk: 0, tov: 1, fg3m: 4, ..Default::default() },
        ];
        let averages = average_game_log(&games);

        assert_eq!(averages.per_game.pts, 25.0);
        assert_eq!(averages.per_game.reb, 8.0);
        assert_eq!(averages.per_game.ast, 6.0);
        assert_eq!(averages.per_game.stl, 2.0);
        assert_eq!(averages.per_game.blk, 1.0);
        assert_eq!(averages.per_game.tov, 2.0);
        assert_eq!(averages.per_game.get(Stat::Fg3m), 3.0);
        assert_eq!(averages.games_played, 2);
    }

    #[test]
    fn test_empty_game_log_is_zero_filled() {
        let averages = average_game_log(&[]);

        for stat in Stat::ALL {
            assert_eq!(averages.per_game.get(stat), 0.0, "{stat} should be zero");
        }
        assert_eq!(averages.fg_pct, 0.0);
        assert_eq!(averages.ft_pct, 0.0);
        assert_eq!(averages.games_played, 0);
    }

    #[test]
    fn test_zero_attempts_gives_zero_pct() {
        let games = [game(0, 0, 4, 5, 4), game(0, 0, 2, 3, 2)];
        let averages = average_game_log(&games);

        assert_eq!(averages.fg_pct, 0.0);
        assert_eq!(averages.ft_pct, 75.0);
        assert_eq!(averages.per_game.ftm, 3.0);
        assert_eq!(averages.per_game.fta, 4.0);
    }
}
