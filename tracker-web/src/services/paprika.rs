//! # Paprika Client
//!
//! [`CoinApi`] over the browser `fetch` API via `gloo-net`.

use async_trait::async_trait;
use gloo_net::http::Request;
use lib_core::api::endpoints::decode_json;
use lib_core::api::{CoinApi, Endpoints};
use lib_core::config::Config;
use lib_core::error::{AppError, Result};
use serde::de::DeserializeOwned;
use shared::dto::{CoinInfo, CoinSummary, CoinTicker, HistoricalPrice};

pub struct PaprikaClient {
    endpoints: Endpoints,
}

impl PaprikaClient {
    pub fn new(config: &Config) -> Self {
        Self { endpoints: Endpoints::new(config) }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::debug!("GET {}", url);

        let response = Request::get(url).send().await.map_err(|e| {
            log::error!("Network error for {}: {}", url, e);
            AppError::Network(e.to_string())
        })?;

        if !response.ok() {
            log::warn!("{} answered {}", url, response.status());
            return Err(AppError::from_status(response.status(), url));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read body: {}", e)))?;

        decode_json(url, &body).inspect_err(|e| log::error!("Failed to decode {}: {}", url, e))
    }
}

#[async_trait(?Send)]
impl CoinApi for PaprikaClient {
    async fn coins(&self) -> Result<Vec<CoinSummary>> {
        self.get_json(&self.endpoints.coins()).await
    }

    async fn coin_info(&self, coin_id: &str) -> Result<CoinInfo> {
        self.get_json(&self.endpoints.coin_info(coin_id)).await
    }

    async fn coin_tickers(&self, coin_id: &str) -> Result<CoinTicker> {
        self.get_json(&self.endpoints.coin_tickers(coin_id)).await
    }

    async fn coin_history(&self, coin_id: &str) -> Result<Vec<HistoricalPrice>> {
        self.get_json(&self.endpoints.coin_history(coin_id)).await
    }
}
