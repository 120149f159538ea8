//! # Query Cache
//!
//! Caches fetched query results keyed by [`QueryKey`] and deduplicates
//! identical requests that are in flight at the same time.
//!
//! ## Behavior
//! - A fresh entry (younger than the stale time) is returned without fetching
//! - A second caller for a key that is already loading joins the first request
//! - Stale, failed and missing entries issue a new request
//! - Stale data stays visible while it is refetched, and survives a failed refetch
//! - [`QueryCache::invalidate`] drops an entry; a response that arrives for an
//!   invalidated request is discarded instead of stored
//! - Settled entries older than the gc time are evicted when a new request is issued
//!
//! The cache is single-threaded: it lives on the browser's event loop and
//! never holds its borrow across an `.await`.
//!
//! ## Example
//! ```rust
//! use lib_core::query::{QueryCache, QueryKey};
//!
//! # futures::executor::block_on(async {
//! let cache: QueryCache<u32> = QueryCache::new(chrono::Duration::seconds(60));
//! let key = QueryKey::coin("info", "btc-bitcoin");
//! let rank = cache.fetch(key.clone(), || async { Ok(1) }).await.unwrap();
//! assert_eq!(rank, 1);
//! assert_eq!(cache.peek(&key).data(), Some(&1));
//! # });
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use tracing::{debug, warn};

use super::state::QueryState;
use crate::error::{AppError, Result};

/// Identifies one cached query: a query name plus the coin it is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub name: &'static str,
    pub coin_id: Option<String>,
}

impl QueryKey {
    /// Key for a query that is not about a specific coin, e.g. the coin list.
    pub fn list(name: &'static str) -> Self {
        Self { name, coin_id: None }
    }

    pub fn coin(name: &'static str, coin_id: impl Into<String>) -> Self {
        Self { name, coin_id: Some(coin_id.into()) }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coin_id {
            Some(id) => write!(f, "[{}, {}]", self.name, id),
            None => write!(f, "[{}]", self.name),
        }
    }
}

type SharedFetch<T> = Shared<LocalBoxFuture<'static, Result<T>>>;

/// Entries untouched for this long are dropped by [`QueryCache::gc`].
pub const DEFAULT_GC_TIME_SECS: i64 = 300;

enum Entry<T> {
    InFlight {
        fetch: SharedFetch<T>,
        generation: u64,
        /// Data being refreshed, served until the refetch settles
        previous: Option<(T, DateTime<Utc>)>,
    },
    Ready { data: T, fetched_at: DateTime<Utc> },
    Failed { error: AppError, failed_at: DateTime<Utc> },
}

/// What `fetch` decided to do while holding the borrow.
enum Plan<T> {
    Hit(T),
    Join(SharedFetch<T>, u64),
    Issue(Option<(T, DateTime<Utc>)>),
}

type Clock = Rc<dyn Fn() -> DateTime<Utc>>;

pub struct QueryCache<T> {
    entries: Rc<RefCell<HashMap<QueryKey, Entry<T>>>>,
    stale_time: Duration,
    gc_time: Duration,
    generation: Rc<Cell<u64>>,
    clock: Clock,
}

impl<T> Clone for QueryCache<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
            stale_time: self.stale_time,
            gc_time: self.gc_time,
            generation: Rc::clone(&self.generation),
            clock: Rc::clone(&self.clock),
        }
    }
}

impl<T: Clone + 'static> QueryCache<T> {
    pub fn new(stale_time: Duration) -> Self {
        Self::with_clock(stale_time, Utc::now)
    }

    /// Build a cache that reads the current time from `clock`.
    pub fn with_clock(stale_time: Duration, clock: impl Fn() -> DateTime<Utc> + 'static) -> Self {
        Self {
            entries: Rc::new(RefCell::new(HashMap::new())),
            stale_time,
            gc_time: Duration::seconds(DEFAULT_GC_TIME_SECS),
            generation: Rc::new(Cell::new(0)),
            clock: Rc::new(clock),
        }
    }

    pub fn with_gc_time(mut self, gc_time: Duration) -> Self {
        self.gc_time = gc_time;
        self
    }

    /// Resolve `key`, calling `fetcher` only when no fresh or in-flight result exists.
    ///
    /// Returns the outcome of the request itself; see [`QueryCache::load`] for
    /// the state a view should show.
    pub async fn fetch<F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>> + 'static,
    {
        let plan = {
            let entries = self.entries.borrow();
            match entries.get(&key) {
                Some(Entry::Ready { data, fetched_at }) if self.is_fresh(*fetched_at) => {
                    Plan::Hit(data.clone())
                }
                Some(Entry::InFlight { fetch, generation, .. }) => Plan::Join(fetch.clone(), *generation),
                Some(Entry::Ready { data, fetched_at }) => Plan::Issue(Some((data.clone(), *fetched_at))),
                Some(Entry::Failed { .. }) | None => Plan::Issue(None),
            }
        };

        let (fetch, generation) = match plan {
            Plan::Hit(data) => {
                debug!(key = %key, "Query cache hit");
                return Ok(data);
            }
            Plan::Join(fetch, generation) => {
                debug!(key = %key, "Joining in-flight query");
                (fetch, generation)
            }
            Plan::Issue(previous) => {
                debug!(key = %key, refetch = previous.is_some(), "Issuing query");
                self.gc();
                let generation = self.generation.get() + 1;
                self.generation.set(generation);
                let fetch = fetcher().boxed_local().shared();
                self.entries.borrow_mut().insert(
                    key.clone(),
                    Entry::InFlight { fetch: fetch.clone(), generation, previous },
                );
                (fetch, generation)
            }
        };

        let result = fetch.await;
        self.settle(&key, generation, &result);
        result
    }

    /// Like [`QueryCache::fetch`], but a failed refetch keeps showing the data
    /// it was refreshing.
    pub async fn load<F, Fut>(&self, key: QueryKey, fetcher: F) -> QueryState<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>> + 'static,
    {
        match self.fetch(key.clone(), fetcher).await {
            Ok(data) => QueryState::Ready(data),
            Err(err) => match self.peek(&key) {
                QueryState::Ready(data) => QueryState::Ready(data),
                _ => QueryState::Failed(err),
            },
        }
    }

    /// Current state of `key` without triggering a request.
    ///
    /// Stale data is still reported as ready, also while it is being refetched.
    pub fn peek(&self, key: &QueryKey) -> QueryState<T> {
        match self.entries.borrow().get(key) {
            Some(Entry::Ready { data, .. }) => QueryState::Ready(data.clone()),
            Some(Entry::InFlight { previous: Some((data, _)), .. }) => QueryState::Ready(data.clone()),
            Some(Entry::Failed { error, .. }) => QueryState::Failed(error.clone()),
            Some(Entry::InFlight { previous: None, .. }) | None => QueryState::Pending,
        }
    }

    /// State to show for `key` when a view mounts and is about to `fetch` it.
    ///
    /// A recorded failure is about to be retried, so it reads as pending.
    pub fn initial(&self, key: &QueryKey) -> QueryState<T> {
        match self.peek(key) {
            QueryState::Failed(_) => QueryState::Pending,
            state => state,
        }
    }

    /// Drop the entry for `key`. An in-flight response for it will not be stored.
    pub fn invalidate(&self, key: &QueryKey) {
        if self.entries.borrow_mut().remove(key).is_some() {
            debug!(key = %key, "Query invalidated");
        }
    }

    /// Evict settled entries older than the gc time. In-flight entries stay.
    pub fn gc(&self) -> usize {
        let now = (self.clock)();
        let gc_time = self.gc_time;
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|_, entry| match entry {
            Entry::InFlight { .. } => true,
            Entry::Ready { fetched_at: at, .. } | Entry::Failed { failed_at: at, .. } => now - *at < gc_time,
        });
        let evicted = before - entries.len();
        if evicted > 0 {
            debug!(evicted, "Query cache collected");
        }
        evicted
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn is_fresh(&self, fetched_at: DateTime<Utc>) -> bool {
        (self.clock)() - fetched_at < self.stale_time
    }

    /// Store the outcome, but only for the request that is still current.
    ///
    /// A failed refetch puts the previous data back, still stale.
    fn settle(&self, key: &QueryKey, generation: u64, result: &Result<T>) {
        let mut entries = self.entries.borrow_mut();
        let previous = match entries.remove(key) {
            Some(Entry::InFlight { generation: g, previous, .. }) if g == generation => previous,
            Some(other) => {
                entries.insert(key.clone(), other);
                return;
            }
            None => return,
        };

        let entry = match (result, previous) {
            (Ok(data), _) => Entry::Ready { data: data.clone(), fetched_at: (self.clock)() },
            (Err(err), Some((data, fetched_at))) => {
                warn!(key = %key, error = %err, "Refetch failed, keeping previous data");
                Entry::Ready { data, fetched_at }
            }
            (Err(err), None) => {
                warn!(key = %key, error = %err, "Query failed");
                Entry::Failed { error: err.clone(), failed_at: (self.clock)() }
            }
        };
        entries.insert(key.clone(), entry);
    }
}
