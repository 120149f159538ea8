//! # Data Transfer Objects (DTOs)
//!
//! Response shapes of the market data APIs consumed by the tracker.
//!
//! ## Module Organization
//!
//! - [`coin`] - `/coins`, `/coins/{id}` and `/tickers/{id}` responses
//! - [`history`] - OHLCV history rows used by the chart panel
//!
//! ## Example JSON
//!
//! ```text
//! GET https://api.coinpaprika.com/v1/tickers/btc-bitcoin
//!
//! {
//!   "id": "btc-bitcoin",
//!   "name": "Bitcoin",
//!   "symbol": "BTC",
//!   "rank": 1,
//!   "total_supply": 19500000,
//!   "max_supply": 21000000,
//!   "quotes": { "USD": { "price": 63245.6789, "percent_change_24h": 1.2 } }
//! }
//! ```

pub mod coin;
pub mod history;

pub use coin::*;
pub use history::*;
