//! Weekly projections from season averages

use crate::models::{ProjectedTotals, StatAverages};

/// Scale per-game averages by the number of games in the week.
///
/// Shooting percentages are copied unchanged, so a team with no games this
/// week still keeps the player's shooting profile.
pub fn project_weekly_totals(averages: &StatAverages, games: u32) -> ProjectedTotals {
    ProjectedTotals {
        totals: averages.per_game * f64::from(games),
        fg_pct: averages.fg_pct,
        ft_pct: averages.ft_pct,
        games,
    }
}
