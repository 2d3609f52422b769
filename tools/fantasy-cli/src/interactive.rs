use crate::cli::{parse_roster, CliHandler};
use anyhow::Result;
use colored::*;
use projection_engine::{PlayerCandidate, PlayerSelector, WeekOption};
use std::io::{self, BufRead, StdinLock, Write};
use tracing::warn;

/// One answer read from the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    /// `q`, `quit` or end of input
    Quit,
}

pub fn is_quit(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "q" | "quit")
}

pub fn say_goodbye() {
    println!("👋 Exiting Fantasy Scheduler. Goodbye!");
}

/// Prompted line input that also answers player disambiguation
pub struct Console<R> {
    input: R,
    quit_requested: bool,
}

impl Console<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Console<R> {
    pub fn new(input: R) -> Self {
        Self { input, quit_requested: false }
    }

    /// Print `prompt` and read one trimmed line
    pub fn ask(&mut self, prompt: &str) -> Reply {
        if self.quit_requested {
            return Reply::Quit;
        }

        print!("{}", prompt);
        let _ = io::stdout().flush();

        let mut line = String::new();
        let reply = match self.input.read_line(&mut line) {
            Ok(0) => Reply::Quit,
            Ok(_) if is_quit(&line) => Reply::Quit,
            Ok(_) => Reply::Text(line.trim().to_string()),
            Err(e) => {
                warn!("Failed to read input: {}", e);
                Reply::Quit
            }
        };

        if reply == Reply::Quit {
            self.quit_requested = true;
        }
        reply
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// A failure caused by the user quitting mid-prompt is a clean exit
    pub fn settle(&self, outcome: Result<()>) -> Result<()> {
        if self.quit_requested {
            say_goodbye();
            return Ok(());
        }
        outcome
    }
}

/// 1-based menu choice within `1..=count`
pub fn parse_choice(input: &str, count: usize) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(n - 1),
        _ => None,
    }
}

impl<R: BufRead> PlayerSelector for Console<R> {
    fn select(&mut self, query: &str, candidates: &[PlayerCandidate]) -> Option<PlayerCandidate> {
        println!("Multiple players found for '{}'. Please choose:", query);
        for (i, candidate) in candidates.iter().enumerate() {
            println!("{}. {}", i + 1, candidate.name);
        }

        loop {
            match self.ask(&format!("Enter number (1-{}): ", candidates.len())) {
                Reply::Quit => return None,
                Reply::Text(text) => match parse_choice(&text, candidates.len()) {
                    Some(index) => return candidates.get(index).cloned(),
                    None => println!("{}", "Invalid choice. Try again.".red()),
                },
            }
        }
    }

    fn retype(&mut self, query: &str) -> Option<String> {
        loop {
            match self.ask(&format!("❌ No players found for '{}'. Retype: ", query)) {
                Reply::Quit => return None,
                Reply::Text(text) if text.is_empty() => continue,
                Reply::Text(text) => return Some(text),
            }
        }
    }
}

/// Week from a menu answer; anything but 1/2/current/next means the current week
pub fn week_from_input(input: &str) -> WeekOption {
    input.parse().unwrap_or_else(|_| {
        warn!("Invalid week selection '{}', using the current week", input);
        println!("{}", format!("⚠️ Invalid week '{}', using the current week.", input).yellow());
        WeekOption::Current
    })
}

/// Interactive menu
pub struct InteractiveCLI<'a, R> {
    handler: &'a CliHandler,
    console: Console<R>,
}

impl<'a, R: BufRead> InteractiveCLI<'a, R> {
    pub fn new(handler: &'a CliHandler, console: Console<R>) -> Self {
        Self { handler, console }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.show_welcome();

        let Reply::Text(choice) = self.console.ask("Select option (1 or 2, or 'q' to quit): ") else {
            say_goodbye();
            return Ok(());
        };

        let Reply::Text(week) =
            self.console.ask("Select week (1 = current, 2 = next, or 'q' to quit): ")
        else {
            say_goodbye();
            return Ok(());
        };
        let week = week_from_input(&week);

        let outcome = match choice.as_str() {
            "1" => match self.read_roster("your roster") {
                Some(names) => self.handler.show_roster(&names, week, &mut self.console).await,
                None => Ok(()),
            },
            "2" => {
                let team_a = self.read_roster("Team A players");
                let team_b = match team_a {
                    Some(_) => self.read_roster("Team B players"),
                    None => None,
                };
                match (team_a, team_b) {
                    (Some(a), Some(b)) => {
                        self.handler.show_comparison(&a, &b, week, &mut self.console).await
                    }
                    _ => Ok(()),
                }
            }
            _ => {
                println!("{}", "❌ Invalid option.".red());
                Ok(())
            }
        };

        self.console.settle(outcome)
    }

    fn show_welcome(&self) {
        println!();
        println!("{}", "🏀 Welcome to Fantasy Scheduler!".cyan().bold());
        println!();
        println!("{}", "1️⃣ Calculate your own roster stats".blue());
        println!("{}", "2️⃣ Compare two fantasy teams".blue());
        println!();
    }

    fn read_roster(&mut self, label: &str) -> Option<Vec<String>> {
        match self.console.ask(&format!("Enter {} (comma-separated, or 'q' to quit): ", label)) {
            Reply::Text(text) => Some(parse_roster(&text)),
            Reply::Quit => None,
        }
    }
}
