//! Network-facing services: the browser `CoinApi` and the shared query cache.

pub mod paprika;
pub mod queries;
