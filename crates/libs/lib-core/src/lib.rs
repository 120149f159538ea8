//! # Core Library
//!
//! Platform-independent core of the coin tracker: configuration, errors,
//! routing, the caching query layer, the market data API seam and the view
//! models every page is rendered from.

pub mod api;
pub mod config;
pub mod error;
pub mod query;
pub mod route;
pub mod view;

// Re-export commonly used types
pub use api::{CoinApi, CoinQueries, Endpoints};
pub use config::Config;
pub use error::{AppError, Result};
pub use query::{QueryCache, QueryKey, QueryState};
pub use route::{CoinTab, Route};
