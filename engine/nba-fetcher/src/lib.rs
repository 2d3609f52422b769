//! NBA Fetcher
//!
//! Talks to stats.nba.com (player index, player info, game logs) and the
//! cdn.nba.com schedule feed, and exposes them through the projection
//! engine's provider traits.

pub mod config;
pub mod fetcher;
pub mod models;
pub mod retry;

pub use config::{FetcherConfig, HttpConfig, NbaApiConfig, RetryConfig};
pub use fetcher::NbaStatsFetcher;
pub use models::{ResultSet, StatsResponse};
pub use retry::run_with_retry;
