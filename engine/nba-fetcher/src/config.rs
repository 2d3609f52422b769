use serde::{Deserialize, Serialize};

/// Configuration for the NBA data fetcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// NBA endpoints
    pub nba: NbaApiConfig,

    /// HTTP client settings
    pub http: HttpConfig,

    /// Retry configuration
    pub retry: RetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NbaApiConfig {
    /// Base URL of the stats API (e.g., "https://stats.nba.com/stats")
    pub stats_base_url: String,

    /// Full league schedule feed
    pub schedule_url: String,

    /// League ID ("00" = NBA)
    pub league_id: String,

    /// Season type for game logs
    pub season_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per request
    pub max_retries: u32,

    /// Initial retry delay in milliseconds
    pub initial_delay_ms: u64,

    /// Maximum retry delay in milliseconds
    pub max_delay_ms: u64,

    /// Backoff multiplier
    pub backoff_multiplier: f64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            nba: NbaApiConfig {
                stats_base_url: "https://stats.nba.com/stats".to_string(),
                schedule_url: "https://cdn.nba.com/static/json/staticData/scheduleLeagueV2_1.json"
                    .to_string(),
                league_id: "00".to_string(),
                season_type: "Regular Season".to_string(),
            },
            http: HttpConfig::default(),
            retry: RetryConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36".to_string(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_retries: 3, initial_delay_ms: 500, max_delay_ms: 5_000, backoff_multiplier: 2.0 }
    }
}

impl FetcherConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("NBA_STATS_BASE_URL") {
            config.nba.stats_base_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(url) = std::env::var("NBA_SCHEDULE_URL") {
            config.nba.schedule_url = url;
        }

        if let Ok(season_type) = std::env::var("NBA_SEASON_TYPE") {
            config.nba.season_type = season_type;
        }

        if let Ok(timeout) = std::env::var("NBA_HTTP_TIMEOUT_SECS") {
            config.http.timeout_secs = timeout.parse().unwrap_or(30);
        }

        if let Ok(retries) = std::env::var("NBA_MAX_RETRIES") {
            config.retry.max_retries = retries.parse().unwrap_or(3);
        }

        Ok(config)
    }

    /// URL of a stats API endpoint
    pub fn stats_endpoint(&self, endpoint: &str) -> String {
        format!("{}/{}", self.nba.stats_base_url, endpoint)
    }
}
