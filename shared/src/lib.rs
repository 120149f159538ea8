//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the coin tracker front end and the
//! public market data APIs it reads from. All DTOs use JSON via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API responses
//!   - **[`dto::coin`]**: Coin list entries, static coin info and live tickers
//!   - **[`dto::history`]**: OHLCV rows for the historical price chart
//! - **[`utils`]**: Display formatting shared by every view
//!   - **[`utils::format_price`]**: Fixed three-decimal dollar price
//!   - **[`utils::format_percentage`]**: Signed percentage change
//!
//! ## Wire Format
//!
//! Field names follow the upstream API, which is already **snake_case**, so
//! no renaming is needed apart from the `USD` quote key and the `type` field.
//! Fields the upstream returns as `null` or omits are `Option` or `#[serde(default)]`.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::coin::CoinTicker;
//! use shared::utils::format_price;
//!
//! let json = r#"{"id":"btc-bitcoin","name":"Bitcoin","symbol":"BTC","rank":1,
//!     "quotes":{"USD":{"price":63245.6789}}}"#;
//! let ticker: CoinTicker = serde_json::from_str(json).unwrap();
//! assert_eq!(format_price(ticker.quotes.usd.price), "$ 63245.679");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
