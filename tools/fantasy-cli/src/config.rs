//! Layered configuration for the fantasy scheduler
//!
//! Defaults, then `fantasy.toml` (or the file given with `--config`), then
//! `FANTASY__*` environment variables. Command-line flags are applied last
//! by the caller.

use config::{Config, ConfigError, Environment, File};
use nba_fetcher::FetcherConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "fantasy.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Season to project from (e.g., "2025-26"); derived from today's date when unset
    #[serde(default)]
    pub season: Option<String>,

    pub logging: LoggingConfig,

    /// Overrides applied on top of the fetcher's `NBA_*` environment settings
    #[serde(default)]
    pub fetcher: FetcherSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    /// "fmt", "json" or "pretty"
    pub format: String,
}

/// Only keys that are actually set override the fetcher configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FetcherSettings {
    pub timeout_secs: Option<u64>,
    pub retry: RetrySettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RetrySettings {
    pub max_retries: Option<u32>,
    pub initial_delay_ms: Option<u64>,
    pub max_delay_ms: Option<u64>,
    pub backoff_multiplier: Option<f64>,
}

impl AppConfig {
    /// Load configuration; an explicit `path` must exist, the default file may not
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = path.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let builder = Config::builder()
            .set_default("logging.level", "info")?
            .set_default("logging.format", "fmt")?
            .add_source(File::from(file).required(path.is_some()))
            // FANTASY__SEASON, FANTASY__LOGGING__LEVEL, FANTASY__FETCHER__TIMEOUT_SECS, ...
            .add_source(
                Environment::with_prefix("FANTASY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Fetcher configuration: `NBA_*` environment overrides, then any keys set here
    pub fn fetcher_config(&self) -> anyhow::Result<FetcherConfig> {
        let mut config = FetcherConfig::from_env()?;
        let settings = &self.fetcher;

        if let Some(timeout_secs) = settings.timeout_secs {
            config.http.timeout_secs = timeout_secs;
        }
        if let Some(max_retries) = settings.retry.max_retries {
            config.retry.max_retries = max_retries;
        }
        if let Some(initial_delay_ms) = settings.retry.initial_delay_ms {
            config.retry.initial_delay_ms = initial_delay_ms;
        }
        if let Some(max_delay_ms) = settings.retry.max_delay_ms {
            config.retry.max_delay_ms = max_delay_ms;
        }
        if let Some(backoff_multiplier) = settings.retry.backoff_multiplier {
            config.retry.backoff_multiplier = backoff_multiplier;
        }

        Ok(config)
    }
}
