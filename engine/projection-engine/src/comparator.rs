//! Head-to-head category comparison between two rosters

use crate::models::{AggregatedTotals, Stat};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Scored categories, in report order
pub const SCORED_CATEGORIES: [Stat; 7] =
    [Stat::Pts, Stat::Reb, Stat::Ast, Stat::Stl, Stat::Blk, Stat::Tov, Stat::Fg3m];

/// Winner of one category or of the whole matchup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    TeamA,
    TeamB,
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::TeamA => write!(f, "Team A"),
            Outcome::TeamB => write!(f, "Team B"),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Result for a single scored category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub stat: Stat,
    pub team_a: f64,
    pub team_b: f64,
    pub winner: Outcome,
}

/// Full matchup result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub categories: Vec<CategoryResult>,
    pub team_a_wins: u32,
    pub team_b_wins: u32,
    /// (Team A, Team B); informational, not scored
    pub fg_pct: (f64, f64),
    /// (Team A, Team B); informational, not scored
    pub ft_pct: (f64, f64),
    pub winner: Outcome,
}

/// Turnovers are the only scored category where lower is better
pub fn lower_is_better(stat: Stat) -> bool {
    stat == Stat::Tov
}

fn category_winner(stat: Stat, a: f64, b: f64) -> Outcome {
    let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
    let ordering = if lower_is_better(stat) { ordering.reverse() } else { ordering };

    match ordering {
        Ordering::Greater => Outcome::TeamA,
        Ordering::Less => Outcome::TeamB,
        Ordering::Equal => Outcome::Tie,
    }
}

/// Compare two rosters across the scored categories.
///
/// FG% and FT% are carried on the result for display but do not count toward
/// either team's category wins.
pub fn compare_teams(team_a: &AggregatedTotals, team_b: &AggregatedTotals) -> ComparisonResult {
    let categories: Vec<CategoryResult> = SCORED_CATEGORIES
        .iter()
        .map(|&stat| {
            let a = team_a.totals.get(stat);
            let b = team_b.totals.get(stat);
            CategoryResult { stat, team_a: a, team_b: b, winner: category_winner(stat, a, b) }
        })
        .collect();

    let team_a_wins = categories.iter().filter(|c| c.winner == Outcome::TeamA).count() as u32;
    let team_b_wins = categories.iter().filter(|c| c.winner == Outcome::TeamB).count() as u32;

    let winner = match team_a_wins.cmp(&team_b_wins) {
        Ordering::Greater => Outcome::TeamA,
        Ordering::Less => Outcome::TeamB,
        Ordering::Equal => Outcome::Tie,
    };

    ComparisonResult {
        categories,
        team_a_wins,
        team_b_wins,
        fg_pct: (team_a.fg_pct, team_b.fg_pct),
        ft_pct: (team_a.ft_pct, team_b.ft_pct),
        winner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatLine;

    fn team(totals: StatLine, fg_pct: f64) -> AggregatedTotals {
        AggregatedTotals { totals, fg_pct, ft_pct: 0.0, player_count: 1 }
    }

    fn result_for(result: &ComparisonResult, stat: Stat) -> Outcome {
        result.categories.iter().find(|c| c.stat == stat).map(|c| c.winner).unwrap()
    }

    #[test]
    fn test_turnovers_lower_wins() {
        let a = team(StatLine { tov: 10.0, ..Default::default() }, 0.0);
        let b = team(StatLine { tov: 14.0, ..Default::default() }, 0.0);

        let result = compare_teams(&a, &b);
        assert_eq!(result_for(&result, Stat::Tov), Outcome::TeamA);
        assert_eq!(result.team_a_wins, 1);
        assert_eq!(result.team_b_wins, 0);
        assert_eq!(result.winner, Outcome::TeamA);
    }

    #[test]
    fn test_higher_wins_and_ties_score_nothing() {
        let a = team(StatLine { pts: 100.0, reb: 40.0, ast: 20.0, ..Default::default() }, 0.0);
        let b = team(StatLine { pts: 90.0, reb: 40.0, ast: 25.0, ..Default::default() }, 0.0);

        let result = compare_teams(&a, &b);
        assert_eq!(result_for(&result, Stat::Pts), Outcome::TeamA);
        assert_eq!(result_for(&result, Stat::Reb), Outcome::Tie);
        assert_eq!(result_for(&result, Stat::Ast), Outcome::TeamB);
        assert_eq!(result_for(&result, Stat::Stl), Outcome::Tie);
        assert_eq!(result.team_a_wins, 1);
        assert_eq!(result.team_b_wins, 1);
        assert_eq!(result.winner, Outcome::Tie);
    }

    #[test]
    fn test_shooting_percentages_are_not_scored() {
        let a = team(StatLine::default(), 60.0);
        let b = team(StatLine::default(), 40.0);

        let result = compare_teams(&a, &b);
        assert_eq!(result.fg_pct, (60.0, 40.0));
        assert_eq!(result.team_a_wins, 0);
        assert_eq!(result.winner, Outcome::Tie);
        assert_eq!(result.categories.len(), SCORED_CATEGORIES.len());
    }

    #[test]
    fn test_empty_rosters_tie_everywhere() {
        let result = compare_teams(&AggregatedTotals::default(), &AggregatedTotals::default());
        assert!(result.categories.iter().all(|c| c.winner == Outcome::Tie));
        assert_eq!(result.winner, Outcome::Tie);
    }
}
