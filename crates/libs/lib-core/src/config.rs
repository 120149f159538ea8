//! # Application Configuration
//!
//! Endpoints, cache freshness and list size for the tracker.
//!
//! Native tools and tests read the environment at runtime with
//! [`Config::from_env`]. The wasm build has no process environment, so it reads
//! the same variable names at compile time through [`Config::from_build_env`].
//!
//! ## Global Config Access
//!
//! ```rust
//! use lib_core::config::{core_config, init_config, Config};
//!
//! init_config(Config::default()).unwrap();
//! assert_eq!(core_config().coin_list_limit, 100);
//! ```

use std::env;
use std::sync::OnceLock;

use crate::error::{AppError, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://api.coinpaprika.com/v1";
pub const DEFAULT_HISTORY_API_URL: &str = "https://ohlcv-api.nomadcoders.workers.dev";
pub const DEFAULT_STALE_TIME_SECS: i64 = 60;
pub const DEFAULT_CACHE_TIME_SECS: i64 = 300;
pub const DEFAULT_COIN_LIST_LIMIT: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// CoinPaprika-compatible REST root, without trailing slash
    pub api_base_url: String,

    /// OHLCV history endpoint, queried with `?coinId=`
    pub history_api_url: String,

    /// How long a fetched query stays fresh before it is refetched
    pub stale_time_secs: i64,

    /// How long an unused query result is kept before it is evicted
    pub cache_time_secs: i64,

    /// Number of coins shown on the list page
    pub coin_list_limit: usize,

    /// Path prefix the app is served under (`PUBLIC_URL`), empty for `/`
    pub base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            history_api_url: DEFAULT_HISTORY_API_URL.to_string(),
            stale_time_secs: DEFAULT_STALE_TIME_SECS,
            cache_time_secs: DEFAULT_CACHE_TIME_SECS,
            coin_list_limit: DEFAULT_COIN_LIST_LIMIT,
            base_path: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from variables captured when the crate was compiled.
    pub fn from_build_env() -> Result<Self> {
        Self::from_lookup(|name| {
            let value = match name {
                "COIN_API_BASE_URL" => option_env!("COIN_API_BASE_URL"),
                "COIN_HISTORY_API_URL" => option_env!("COIN_HISTORY_API_URL"),
                "COIN_STALE_TIME_SECS" => option_env!("COIN_STALE_TIME_SECS"),
                "COIN_CACHE_TIME_SECS" => option_env!("COIN_CACHE_TIME_SECS"),
                "COIN_LIST_LIMIT" => option_env!("COIN_LIST_LIMIT"),
                "PUBLIC_URL" => option_env!("PUBLIC_URL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let api_base_url = lookup("COIN_API_BASE_URL").unwrap_or(defaults.api_base_url);
        let history_api_url = lookup("COIN_HISTORY_API_URL").unwrap_or(defaults.history_api_url);

        let stale_time_secs = match lookup("COIN_STALE_TIME_SECS") {
            Some(raw) => raw.trim().parse().map_err(|e| {
                AppError::Config(format!("COIN_STALE_TIME_SECS must be a valid number: {}", e))
            })?,
            None => defaults.stale_time_secs,
        };

        let cache_time_secs = match lookup("COIN_CACHE_TIME_SECS") {
            Some(raw) => raw.trim().parse().map_err(|e| {
                AppError::Config(format!("COIN_CACHE_TIME_SECS must be a valid number: {}", e))
            })?,
            None => defaults.cache_time_secs,
        };

        let coin_list_limit = match lookup("COIN_LIST_LIMIT") {
            Some(raw) => raw.trim().parse().map_err(|e| {
                AppError::Config(format!("COIN_LIST_LIMIT must be a valid number: {}", e))
            })?,
            None => defaults.coin_list_limit,
        };

        let base_path = lookup("PUBLIC_URL").unwrap_or_default();

        let config = Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            history_api_url: history_api_url.trim_end_matches('/').to_string(),
            stale_time_secs,
            cache_time_secs,
            coin_list_limit,
            base_path: normalize_base_path(&base_path),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("COIN_API_BASE_URL", &self.api_base_url),
            ("COIN_HISTORY_API_URL", &self.history_api_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::Config(format!("{} must be an http(s) URL, got {:?}", name, url)));
            }
        }

        if self.stale_time_secs < 0 {
            return Err(AppError::Config("COIN_STALE_TIME_SECS must not be negative".to_string()));
        }

        if self.cache_time_secs < 0 {
            return Err(AppError::Config("COIN_CACHE_TIME_SECS must not be negative".to_string()));
        }

        if self.coin_list_limit == 0 {
            return Err(AppError::Config("COIN_LIST_LIMIT must be at least 1".to_string()));
        }

        Ok(())
    }

    pub fn stale_time(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.stale_time_secs)
    }

    pub fn cache_time(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.cache_time_secs)
    }
}

/// `"/app/"` and `"app"` both become `"/app"`; `"/"` and `""` become `""`.
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Install the global configuration. Fails if it was already installed.
pub fn init_config(config: Config) -> Result<()> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))
}

/// Get the global configuration, installing defaults if nothing was initialized.
pub fn core_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
