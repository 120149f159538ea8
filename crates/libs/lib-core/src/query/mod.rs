//! # Query Layer
//!
//! Per-query loading state ([`QueryState`]) and the caching, deduplicating
//! [`QueryCache`] that produces it.

pub mod cache;
pub mod state;

pub use cache::{QueryCache, QueryKey};
pub use state::QueryState;
