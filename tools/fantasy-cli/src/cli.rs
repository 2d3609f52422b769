//! # Command Line Interface
//!
//! Argument parsing and the command handler shared by the subcommands and
//! the interactive menu.

use crate::interactive::Console;
use crate::report;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use projection_engine::{week_range, PlayerSelector, RosterProcessor, WeekOption};
use std::io::BufRead;
use std::path::PathBuf;

/// Weekly fantasy basketball projections and head-to-head matchups
#[derive(Parser)]
#[command(name = "fantasy-scheduler")]
#[command(about = "Project fantasy basketball rosters for a week and compare matchups")]
pub struct Cli {
    /// Season to project from (e.g., "2025-26")
    #[arg(long, global = true)]
    pub season: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter (e.g., "info", "debug", "projection_engine=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Command to execute; the interactive menu runs when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project a single roster
    Roster {
        /// Comma-separated player names
        #[arg(long)]
        players: String,

        /// Week to project: current (1) or next (2)
        #[arg(long, default_value = "current", value_parser = parse_week)]
        week: WeekOption,
    },
    /// Project two rosters and compare them category by category
    Compare {
        /// Comma-separated player names for Team A
        #[arg(long)]
        team_a: String,

        /// Comma-separated player names for Team B
        #[arg(long)]
        team_b: String,

        /// Week to project: current (1) or next (2)
        #[arg(long, default_value = "current", value_parser = parse_week)]
        week: WeekOption,
    },
}

fn parse_week(value: &str) -> Result<WeekOption, String> {
    value.parse().map_err(|e: projection_engine::ProjectionError| e.to_string())
}

/// Split a comma-separated roster into trimmed, non-empty names
pub fn parse_roster(input: &str) -> Vec<String> {
    input.split(',').map(str::trim).filter(|name| !name.is_empty()).map(String::from).collect()
}

/// CLI handler
pub struct CliHandler {
    processor: RosterProcessor,
    today: NaiveDate,
}

impl CliHandler {
    pub fn new(processor: RosterProcessor, today: NaiveDate) -> Self {
        Self { processor, today }
    }

    /// Handle a subcommand
    pub async fn handle_command<R: BufRead>(
        &self,
        command: Commands,
        console: &mut Console<R>,
    ) -> Result<()> {
        let outcome = match command {
            Commands::Roster { players, week } => {
                self.show_roster(&parse_roster(&players), week, console).await
            }
            Commands::Compare { team_a, team_b, week } => {
                self.show_comparison(&parse_roster(&team_a), &parse_roster(&team_b), week, console)
                    .await
            }
        };
        console.settle(outcome)
    }

    /// Project one roster and print every player plus the aggregated totals
    pub async fn show_roster(
        &self,
        names: &[String],
        week: WeekOption,
        selector: &mut dyn PlayerSelector,
    ) -> Result<()> {
        if names.is_empty() {
            println!("{}", "⚠️ No players entered; nothing to project.".yellow());
            return Ok(());
        }

        let range = week_range(week, self.today);
        println!("\n📅 Projecting the {} week: {}", week, range);

        let roster = self.processor.process_roster(names, range, selector).await?;
        print!("{}", report::roster_report(&roster, "🏆 Aggregated stats for your roster"));
        Ok(())
    }

    /// Project both rosters over the same week and print the matchup
    pub async fn show_comparison(
        &self,
        team_a: &[String],
        team_b: &[String],
        week: WeekOption,
        selector: &mut dyn PlayerSelector,
    ) -> Result<()> {
        for (label, names) in [("Team A", team_a), ("Team B", team_b)] {
            if names.is_empty() {
                println!("{}", format!("⚠️ No players entered for {}; nothing to compare.", label).yellow());
                return Ok(());
            }
        }

        let range = week_range(week, self.today);
        println!("\n📅 Projecting the {} week: {}", week, range);

        let matchup = self.processor.compare_rosters(team_a, team_b, range, selector).await?;
        print!("{}", report::roster_report(&matchup.team_a, "🏆 Team A projected totals"));
        print!("{}", report::roster_report(&matchup.team_b, "🏆 Team B projected totals"));
        print!("{}", report::comparison_report(&matchup.comparison));
        Ok(())
    }
}
