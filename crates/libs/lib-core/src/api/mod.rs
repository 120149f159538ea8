//! # Market Data API
//!
//! The fetch seam between the view layer and the network.
//!
//! ```text
//! api/
//! ├── mod.rs        - CoinApi trait
//! ├── endpoints.rs  - URL builders and response decoding
//! └── queries.rs    - CoinQueries: CoinApi behind one QueryCache per query name
//! ```
//!
//! The browser build implements [`CoinApi`] over `gloo-net`; tests implement it
//! with canned data. Futures are not `Send` because browser fetch futures are not.

pub mod endpoints;
pub mod queries;

pub use endpoints::Endpoints;
pub use queries::CoinQueries;

use async_trait::async_trait;
use shared::dto::{CoinInfo, CoinSummary, CoinTicker, HistoricalPrice};

use crate::error::Result;

#[async_trait(?Send)]
pub trait CoinApi {
    /// Every listed coin, ordered by rank.
    async fn coins(&self) -> Result<Vec<CoinSummary>>;

    /// Static, descriptive metadata for one coin.
    async fn coin_info(&self, coin_id: &str) -> Result<CoinInfo>;

    /// Live supply and USD quote for one coin.
    async fn coin_tickers(&self, coin_id: &str) -> Result<CoinTicker>;

    /// Daily OHLCV history for one coin.
    async fn coin_history(&self, coin_id: &str) -> Result<Vec<HistoricalPrice>>;
}
