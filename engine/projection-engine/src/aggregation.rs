//! Roster-level aggregation of weekly projections

use crate::models::{AggregatedTotals, ProjectedTotals, StatLine};

/// Sum projections into roster totals.
///
/// Team FG% and FT% are recomputed from the summed makes and attempts. The
/// per-player percentages on the inputs are never averaged.
pub fn aggregate_projected_totals<'a, I>(projections: I) -> AggregatedTotals
where
    I: IntoIterator<Item = &'a ProjectedTotals>,
{
    let (totals, player_count) = projections
        .into_iter()
        .fold((StatLine::default(), 0usize), |(sum, n), p| (sum + p.totals, n + 1));

    AggregatedTotals { totals, fg_pct: totals.fg_pct(), ft_pct: totals.ft_pct(), player_count }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Stat, StatAverages};
    use crate::projector::project_weekly_totals;
    use proptest::prelude::*;

    fn player(fgm: f64, fga: f64, ftm: f64, fta: f64, pts: f64) -> StatAverages {
        let per_game = StatLine { fgm, fga, ftm, fta, pts, ..Default::default() };
        StatAverages { per_game, fg_pct: per_game.fg_pct(), ft_pct: per_game.ft_pct(), games_played: 1 }
    }

    #[test]
    fn test_team_fg_pct_from_summed_makes() {
        let a = project_weekly_totals(&player(5.0, 10.0, 0.0, 0.0, 12.0), 1);
        let b = project_weekly_totals(&player(8.0, 10.0, 0.0, 0.0, 18.0), 1);

        let team = aggregate_projected_totals([&a, &b]);
        assert_eq!(team.totals.fgm, 13.0);
        assert_eq!(team.totals.fga, 20.0);
        assert!((team.fg_pct - 65.0).abs() < 1e-9);
        assert_eq!(team.ft_pct, 0.0);
        assert_eq!(team.totals.pts, 30.0);
        assert_eq!(team.player_count, 2);
    }

    #[test]
    fn test_volume_weighted_not_mean_of_ratios() {
        // 1/1 over 1 game and 10/20 over 2 games: 21/41, not (100% + 50%) / 2
        let a = project_weekly_totals(&player(1.0, 1.0, 0.0, 0.0, 2.0), 1);
        let b = project_weekly_totals(&player(10.0, 20.0, 0.0, 0.0, 20.0), 2);

        let team = aggregate_projected_totals(&[a, b]);
        assert!((team.fg_pct - 21.0 / 41.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_roster() {
        let none: Vec<ProjectedTotals> = Vec::new();
        let team = aggregate_projected_totals(&none);

        assert!(team.is_empty());
        for stat in Stat::ALL {
            assert_eq!(team.totals.get(stat), 0.0);
        }
        assert_eq!(team.fg_pct, 0.0);
        assert_eq!(team.ft_pct, 0.0);
    }

    #[test]
    fn test_player_with_no_games_still_counted() {
        let idle = project_weekly_totals(&player(9.0, 18.0, 5.0, 6.0, 25.0), 0);
        let team = aggregate_projected_totals([&idle]);

        assert_eq!(team.player_count, 1);
        assert_eq!(team.fg_pct, 0.0);
        assert_eq!(team.totals.pts, 0.0);
    }

    fn arb_projection() -> impl Strategy<Value = ProjectedTotals> {
        (0u32..40, 0u32..40, 0u32..20, 0u32..20, 0u32..60, 0u32..5).prop_map(
            |(fgm, extra_fga, ftm, extra_fta, pts, games)| {
                let averages = player(
                    f64::from(fgm),
                    f64::from(fgm + extra_fga),
                    f64::from(ftm),
                    f64::from(ftm + extra_fta),
                    f64::from(pts),
                );
                project_weekly_totals(&averages, games)
            },
        )
    }

    proptest! {
        #[test]
        fn prop_order_independent(mut players in prop::collection::vec(arb_projection(), 0..8)) {
            let forward = aggregate_projected_totals(&players);
            players.reverse();
            let reversed = aggregate_projected_totals(&players);

            // integer-valued inputs keep the float sums exact
            prop_assert_eq!(forward, reversed);
        }
    }
}
