//! Console reports for projections and matchups

use colored::*;
use projection_engine::{
    ComparisonResult, Outcome, PlayerProjection, RosterProjection, Stat, StatLine,
};
use std::fmt::Write;

const RULE_WIDTH: usize = 40;

/// One `LABEL   : value` line per counting stat, then the shooting percentages
pub fn stat_table(line: &StatLine, fg_pct: f64, ft_pct: f64) -> String {
    let mut out = String::new();
    for stat in Stat::ALL {
        let _ = writeln!(out, "{:<8}: {:.2}", stat.label(), line.get(stat));
    }
    let _ = writeln!(out, "{:<8}: {:.1}%", "FG_PCT", fg_pct);
    let _ = writeln!(out, "{:<8}: {:.1}%", "FT_PCT", ft_pct);
    out
}

fn section(title: &str, extra_info: Option<&str>, body: &str) -> String {
    let mut out = format!("\n{}\n\n", title.bold());
    if let Some(extra) = extra_info {
        let _ = writeln!(out, "{}\n", extra);
    }
    out.push_str(body);
    let _ = write!(out, "\n{}\n", "-".repeat(RULE_WIDTH));
    out
}

/// Season averages followed by the weekly projection for one player
pub fn player_report(player: &PlayerProjection, season: &str, week: &str) -> String {
    let mut out = String::new();

    if player.averages.games_played == 0 {
        let _ = writeln!(
            out,
            "{}",
            format!("⚠️ No game data for {}. Projected stats will be 0.", player.name).yellow()
        );
    }

    out.push_str(&section(
        &format!("📊 {} - {} Season Averages", player.name, season),
        None,
        &stat_table(&player.averages.per_game, player.averages.fg_pct, player.averages.ft_pct),
    ));

    out.push_str(&section(
        &format!("📈 {} - Projected totals ({} games)", player.name, player.projected.games),
        Some(&format!("Week: {}", week)),
        &stat_table(&player.projected.totals, player.projected.fg_pct, player.projected.ft_pct),
    ));

    out
}

/// Every player's report, then the roster's aggregated totals when anyone was processed
pub fn roster_report(roster: &RosterProjection, title: &str) -> String {
    let week = roster.week.to_string();
    let mut out = String::new();

    for player in &roster.players {
        out.push_str(&player_report(player, &roster.season, &week));
    }

    let totals = &roster.aggregated;
    if totals.is_empty() {
        let _ = writeln!(out, "\n{}", "No players processed.".yellow());
        return out;
    }

    out.push_str(&section(
        title,
        Some(&format!("{} players, {}", totals.player_count, week)),
        &stat_table(&totals.totals, totals.fg_pct, totals.ft_pct),
    ));

    out
}

fn outcome_colored(outcome: Outcome) -> ColoredString {
    match outcome {
        Outcome::TeamA => outcome.to_string().green(),
        Outcome::TeamB => outcome.to_string().cyan(),
        Outcome::Tie => outcome.to_string().yellow(),
    }
}

/// Category-by-category matchup table and the weekly winner
pub fn comparison_report(result: &ComparisonResult) -> String {
    let mut out = format!("\n{}\n\n", "📊 Fantasy Team Comparison (Projected Totals):".bold());

    for category in &result.categories {
        let _ = writeln!(
            out,
            "{:<5}: Team A: {:.2} | Team B: {:.2} → {}",
            category.stat.label(),
            category.team_a,
            category.team_b,
            outcome_colored(category.winner)
        );
    }

    let _ = writeln!(
        out,
        "FG% : Team A: {:.1}% | Team B: {:.1}% (not scored)",
        result.fg_pct.0, result.fg_pct.1
    );
    let _ = writeln!(
        out,
        "FT% : Team A: {:.1}% | Team B: {:.1}% (not scored)",
        result.ft_pct.0, result.ft_pct.1
    );

    let _ = writeln!(
        out,
        "\nCategories: Team A {} - Team B {}",
        result.team_a_wins, result.team_b_wins
    );
    let _ = writeln!(out, "\n🏆 Weekly winner: {}", outcome_colored(result.winner).bold());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use projection_engine::{
        aggregate_projected_totals, compare_teams, AggregatedTotals, ProjectedTotals, StatAverages,
        WeekRange,
    };

    fn plain() {
        colored::control::set_override(false);
    }

    fn totals(pts: f64, tov: f64) -> AggregatedTotals {
        AggregatedTotals {
            totals: StatLine { pts, tov, fgm: 13.0, fga: 20.0, ..Default::default() },
            fg_pct: 65.0,
            ft_pct: 0.0,
            player_count: 2,
        }
    }

    #[test]
    fn test_stat_table_formatting() {
        let line = StatLine { pts: 27.456, fg3m: 2.0, ..Default::default() };
        let table = stat_table(&line, 52.631, 100.0);

        assert!(table.starts_with("PTS     : 27.46\n"));
        assert!(table.contains("FG3M    : 2.00\n"));
        assert!(table.contains("FG_PCT  : 52.6%\n"));
        assert!(table.contains("FT_PCT  : 100.0%\n"));
        assert_eq!(table.lines().count(), Stat::ALL.len() + 2);
    }

    #[test]
    fn test_comparison_report() {
        plain();
        let result = compare_teams(&totals(60.0, 5.0), &totals(50.0, 7.0));
        let report = comparison_report(&result);

        assert!(report.contains("PTS  : Team A: 60.00 | Team B: 50.00 → Team A"));
        assert!(report.contains("TOV  : Team A: 5.00 | Team B: 7.00 → Team A"));
        assert!(report.contains("REB  : Team A: 0.00 | Team B: 0.00 → Tie"));
        assert!(report.contains("FG% : Team A: 65.0% | Team B: 65.0% (not scored)"));
        assert!(report.contains("Weekly winner: Team A"));
    }

    #[test]
    fn test_empty_roster_has_no_aggregate_section() {
        plain();
        let none: Vec<ProjectedTotals> = Vec::new();
        let roster = RosterProjection {
            week: WeekRange {
                start: NaiveDate::from_ymd_opt(2025, 11, 10).unwrap(),
                end: NaiveDate::from_ymd_opt(2025, 11, 16).unwrap(),
            },
            season: "2025-26".to_string(),
            players: vec![],
            aggregated: aggregate_projected_totals(&none),
        };

        let report = roster_report(&roster, "🏆 Aggregated stats for your roster");
        assert!(!report.contains("Aggregated stats"));
        assert!(!report.contains("PTS"));
        assert!(report.contains("No players processed."));
    }

    #[test]
    fn test_roster_report_warns_on_empty_game_log() {
        plain();
        let week = WeekRange {
            start: NaiveDate::from_ymd_opt(2025, 11, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 11, 16).unwrap(),
        };
        let roster = RosterProjection {
            week,
            season: "2025-26".to_string(),
            players: vec![PlayerProjection {
                name: "Rookie Player".to_string(),
                player_id: 1,
                team_id: 10,
                averages: StatAverages::default(),
                games: 3,
                projected: ProjectedTotals { games: 3, ..Default::default() },
            }],
            aggregated: AggregatedTotals { player_count: 1, ..Default::default() },
        };

        let report = roster_report(&roster, "🏆 Aggregated stats for your roster");
        assert!(report.contains("No game data for Rookie Player"));
        assert!(report.contains("Rookie Player - 2025-26 Season Averages"));
        assert!(report.contains("Projected totals (3 games)"));
        assert!(report.contains("Week: 2025-11-10 to 2025-11-16"));
        assert!(report.contains("1 players, 2025-11-10 to 2025-11-16"));
    }
}
