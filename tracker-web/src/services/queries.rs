//! Page-wide query cache.
//!
//! The cache is single-threaded, so it lives in a thread local instead of a
//! Leptos context (contexts must be `Send + Sync`).

use lib_core::api::CoinQueries;
use lib_core::config::core_config;

use super::paprika::PaprikaClient;

thread_local! {
    static QUERIES: CoinQueries<PaprikaClient> =
        CoinQueries::new(PaprikaClient::new(core_config()), core_config());
}

pub fn queries() -> CoinQueries<PaprikaClient> {
    QUERIES.with(|queries| queries.clone())
}
