//! # Endpoints
//!
//! URL construction for the market data APIs and decoding of their bodies.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_base_url: String,
    history_api_url: String,
}

impl Endpoints {
    pub fn new(config: &Config) -> Self {
        Self {
            api_base_url: config.api_base_url.clone(),
            history_api_url: config.history_api_url.clone(),
        }
    }

    /// `GET {api}/coins`
    pub fn coins(&self) -> String {
        format!("{}/coins", self.api_base_url)
    }

    /// `GET {api}/coins/{id}`
    pub fn coin_info(&self, coin_id: &str) -> String {
        format!("{}/coins/{}", self.api_base_url, urlencoding::encode(coin_id))
    }

    /// `GET {api}/tickers/{id}`
    pub fn coin_tickers(&self, coin_id: &str) -> String {
        format!("{}/tickers/{}", self.api_base_url, urlencoding::encode(coin_id))
    }

    /// `GET {history}?coinId={id}`
    pub fn coin_history(&self, coin_id: &str) -> String {
        format!("{}?coinId={}", self.history_api_url, urlencoding::encode(coin_id))
    }
}

/// Error object some endpoints answer with instead of data, even on HTTP 200.
#[derive(Deserialize)]
struct UpstreamError {
    error: String,
}

/// Decode a successful response body from `url`.
pub fn decode_json<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    match serde_json::from_str::<T>(body) {
        Ok(value) => Ok(value),
        Err(err) => {
            if let Ok(upstream) = serde_json::from_str::<UpstreamError>(body) {
                debug!(url = %url, error = %upstream.error, "Upstream returned an error object");
                if upstream.error.to_ascii_lowercase().contains("not found") {
                    return Err(AppError::NotFound(upstream.error));
                }
                return Err(AppError::Decoding(format!("{} answered: {}", url, upstream.error)));
            }
            Err(err.into())
        }
    }
}
