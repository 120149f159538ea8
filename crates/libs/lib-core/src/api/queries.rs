//! # Coin Queries
//!
//! Wraps a [`CoinApi`] with one [`QueryCache`] per query name so that every
//! view asking for `["info", coinId]` shares one request and one cached answer.

use std::rc::Rc;

use shared::dto::{CoinInfo, CoinSummary, CoinTicker, HistoricalPrice};

use super::CoinApi;
use crate::config::Config;
use crate::query::{QueryCache, QueryKey, QueryState};

pub const ALL_COINS: &str = "allCoins";
pub const INFO: &str = "info";
pub const TICKERS: &str = "tickers";
pub const OHLCV: &str = "ohlcv";

pub struct CoinQueries<A> {
    api: Rc<A>,
    coins: QueryCache<Vec<CoinSummary>>,
    info: QueryCache<CoinInfo>,
    tickers: QueryCache<CoinTicker>,
    history: QueryCache<Vec<HistoricalPrice>>,
}

impl<A> Clone for CoinQueries<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            coins: self.coins.clone(),
            info: self.info.clone(),
            tickers: self.tickers.clone(),
            history: self.history.clone(),
        }
    }
}

impl<A: CoinApi + 'static> CoinQueries<A> {
    pub fn new(api: A, config: &Config) -> Self {
        let stale_time = config.stale_time();
        let gc_time = config.cache_time();
        Self {
            api: Rc::new(api),
            coins: QueryCache::new(stale_time).with_gc_time(gc_time),
            info: QueryCache::new(stale_time).with_gc_time(gc_time),
            tickers: QueryCache::new(stale_time).with_gc_time(gc_time),
            history: QueryCache::new(stale_time).with_gc_time(gc_time),
        }
    }

    pub async fn coins(&self) -> QueryState<Vec<CoinSummary>> {
        let api = Rc::clone(&self.api);
        self.coins
            .load(QueryKey::list(ALL_COINS), move || async move { api.coins().await })
            .await
    }

    pub async fn coin_info(&self, coin_id: &str) -> QueryState<CoinInfo> {
        let api = Rc::clone(&self.api);
        let id = coin_id.to_string();
        self.info
            .load(QueryKey::coin(INFO, coin_id), move || async move { api.coin_info(&id).await })
            .await
    }

    pub async fn coin_tickers(&self, coin_id: &str) -> QueryState<CoinTicker> {
        let api = Rc::clone(&self.api);
        let id = coin_id.to_string();
        self.tickers
            .load(QueryKey::coin(TICKERS, coin_id), move || async move { api.coin_tickers(&id).await })
            .await
    }

    pub async fn coin_history(&self, coin_id: &str) -> QueryState<Vec<HistoricalPrice>> {
        let api = Rc::clone(&self.api);
        let id = coin_id.to_string();
        self.history
            .load(QueryKey::coin(OHLCV, coin_id), move || async move { api.coin_history(&id).await })
            .await
    }

    pub fn peek_coins(&self) -> QueryState<Vec<CoinSummary>> {
        self.coins.peek(&QueryKey::list(ALL_COINS))
    }

    pub fn peek_info(&self, coin_id: &str) -> QueryState<CoinInfo> {
        self.info.peek(&QueryKey::coin(INFO, coin_id))
    }

    pub fn peek_tickers(&self, coin_id: &str) -> QueryState<CoinTicker> {
        self.tickers.peek(&QueryKey::coin(TICKERS, coin_id))
    }

    pub fn peek_history(&self, coin_id: &str) -> QueryState<Vec<HistoricalPrice>> {
        self.history.peek(&QueryKey::coin(OHLCV, coin_id))
    }

    // Seed values for a page signal right before the page fetches the query.

    pub fn initial_coins(&self) -> QueryState<Vec<CoinSummary>> {
        self.coins.initial(&QueryKey::list(ALL_COINS))
    }

    pub fn initial_info(&self, coin_id: &str) -> QueryState<CoinInfo> {
        self.info.initial(&QueryKey::coin(INFO, coin_id))
    }

    pub fn initial_tickers(&self, coin_id: &str) -> QueryState<CoinTicker> {
        self.tickers.initial(&QueryKey::coin(TICKERS, coin_id))
    }

    pub fn initial_history(&self, coin_id: &str) -> QueryState<Vec<HistoricalPrice>> {
        self.history.initial(&QueryKey::coin(OHLCV, coin_id))
    }

    /// Forget everything cached about one coin.
    pub fn invalidate_coin(&self, coin_id: &str) {
        self.info.invalidate(&QueryKey::coin(INFO, coin_id));
        self.tickers.invalidate(&QueryKey::coin(TICKERS, coin_id));
        self.history.invalidate(&QueryKey::coin(OHLCV, coin_id));
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;
    use std::collections::HashSet;

    use async_trait::async_trait;
    use shared::dto::{Quotes, UsdQuote};

    use super::*;
    use crate::error::{AppError, Result};

    pub fn bitcoin_info() -> CoinInfo {
        CoinInfo {
            id: "btc-bitcoin".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            rank: 1,
            is_new: false,
            is_active: true,
            kind: "coin".to_string(),
            description: "Bitcoin is a cryptocurrency.".to_string(),
            message: String::new(),
            open_source: true,
            hardware_wallet: true,
            started_at: Some("2009-01-03T00:00:00Z".to_string()),
            development_status: Some("Working product".to_string()),
            proof_type: Some("Proof of Work".to_string()),
            org_structure: Some("Decentralized".to_string()),
            hash_algorithm: Some("SHA256".to_string()),
            first_data_at: Some("2010-07-17T00:00:00Z".to_string()),
            last_data_at: None,
        }
    }

    pub fn bitcoin_ticker() -> CoinTicker {
        CoinTicker {
            id: "btc-bitcoin".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            rank: 1,
            circulating_supply: 19_500_000.0,
            total_supply: 19_500_000.0,
            max_supply: 21_000_000.0,
            beta_value: 1.0,
            first_data_at: None,
            last_updated: None,
            quotes: Quotes {
                usd: UsdQuote {
                    price: 63245.6789,
                    market_cap: 1_233_289_738_550.0,
                    volume_24h: 25_000_000_000.0,
                    percent_change_1h: 0.12,
                    percent_change_24h: -2.5,
                    percent_change_7d: 0.0,
                    ath_price: Some(73_750.07),
                    ath_date: Some("2024-03-14T07:10:36Z".to_string()),
                    percent_from_price_ath: Some(-14.24),
                    ..UsdQuote::default()
                },
            },
        }
    }

    pub fn history_row(time_open: i64, close: f64) -> HistoricalPrice {
        HistoricalPrice {
            time_open,
            time_close: time_open + 86_399,
            open: close,
            high: close,
            low: close,
            close,
            volume: 0.0,
            market_cap: 0.0,
        }
    }

    /// Canned API: knows Bitcoin, never answers for ids in `stuck`.
    #[derive(Default)]
    pub struct FakeApi {
        pub calls: Cell<usize>,
        pub stuck: HashSet<String>,
    }

    impl FakeApi {
        async fn lookup<T>(&self, coin_id: &str, value: impl FnOnce() -> T) -> Result<T> {
            self.calls.set(self.calls.get() + 1);
            if self.stuck.contains(coin_id) {
                futures::future::pending::<()>().await;
            }
            if coin_id == "btc-bitcoin" {
                Ok(value())
            } else {
                Err(AppError::NotFound(coin_id.to_string()))
            }
        }
    }

    #[async_trait(?Send)]
    impl CoinApi for FakeApi {
        async fn coins(&self) -> Result<Vec<CoinSummary>> {
            self.calls.set(self.calls.get() + 1);
            Ok((1..=150)
                .map(|rank| CoinSummary {
                    id: format!("coin-{}", rank),
                    name: format!("Coin {}", rank),
                    symbol: format!("C{}", rank),
                    rank,
                    is_new: false,
                    is_active: true,
                    kind: "coin".to_string(),
                })
                .collect())
        }

        async fn coin_info(&self, coin_id: &str) -> Result<CoinInfo> {
            self.lookup(coin_id, bitcoin_info).await
        }

        async fn coin_tickers(&self, coin_id: &str) -> Result<CoinTicker> {
            self.lookup(coin_id, bitcoin_ticker).await
        }

        async fn coin_history(&self, coin_id: &str) -> Result<Vec<HistoricalPrice>> {
            self.lookup(coin_id, || {
                vec![history_row(1_700_000_000, 100.0), history_row(1_700_086_400, 110.0)]
            })
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::error::AppError;
    use crate::view::CoinDetail;

    fn queries(api: FakeApi) -> CoinQueries<FakeApi> {
        CoinQueries::new(api, &Config::default())
    }

    #[tokio::test]
    async fn test_info_and_tickers_share_cache() {
        let q = queries(FakeApi::default());

        assert!(q.peek_info("btc-bitcoin").is_pending());
        let (info, tickers) = futures::join!(q.coin_info("btc-bitcoin"), q.coin_tickers("btc-bitcoin"));
        assert_eq!(info.data().map(|i| i.name.as_str()), Some("Bitcoin"));
        assert_eq!(tickers.data().map(|t| t.quotes.usd.price), Some(63245.6789));

        // revisit within the freshness window
        assert!(q.coin_info("btc-bitcoin").await.data().is_some());
        assert!(q.coin_tickers("btc-bitcoin").await.data().is_some());
        assert_eq!(q.api.calls.get(), 2);
        assert_eq!(q.peek_info("btc-bitcoin").data().map(|i| i.rank), Some(1));
    }

    #[tokio::test]
    async fn test_concurrent_mounts_issue_one_request() {
        let q = queries(FakeApi::default());
        let other = q.clone();

        let (a, b) = futures::join!(q.coin_info("btc-bitcoin"), other.coin_info("btc-bitcoin"));
        assert_eq!(a, b);
        assert_eq!(q.api.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_unknown_coin_fails() {
        let q = queries(FakeApi::default());
        assert_eq!(
            q.coin_tickers("nope").await,
            QueryState::Failed(AppError::NotFound("nope".to_string()))
        );
        assert!(q.peek_tickers("nope").error().is_some());
    }

    #[tokio::test]
    async fn test_revisit_after_failure_starts_loading() {
        let q = queries(FakeApi::default());
        assert!(q.coin_info("nope").await.error().is_some());
        assert!(q.peek_info("nope").error().is_some());

        // the page seeds its signal, then issues the retry
        assert_eq!(q.initial_info("nope"), QueryState::Pending);
        assert!(q.initial_tickers("nope").is_pending());

        assert!(q.coin_history("btc-bitcoin").await.data().is_some());
        assert!(q.initial_history("btc-bitcoin").data().is_some());
        assert!(q.initial_coins().is_pending());
    }

    #[tokio::test]
    async fn test_invalidate_coin_refetches() {
        let q = queries(FakeApi::default());
        assert!(q.coin_history("btc-bitcoin").await.data().is_some());
        q.invalidate_coin("btc-bitcoin");
        assert!(q.peek_history("btc-bitcoin").is_pending());

        assert!(q.coin_history("btc-bitcoin").await.data().is_some());
        assert_eq!(q.api.calls.get(), 2);
    }

    #[tokio::test]
    async fn test_stalled_fetch_keeps_detail_loading() {
        let mut api = FakeApi::default();
        api.stuck.insert("btc-bitcoin".to_string());
        let q = queries(api);

        let tickers = q.coin_tickers("btc-bitcoin");
        futures::pin_mut!(tickers);
        for _ in 0..3 {
            assert!(futures::poll!(tickers.as_mut()).is_pending());
        }

        let detail = CoinDetail::build(
            "btc-bitcoin",
            None,
            None,
            q.initial_info("btc-bitcoin"),
            q.initial_tickers("btc-bitcoin"),
        );
        assert!(detail.is_loading());
    }

    #[tokio::test]
    async fn test_coin_list_is_cached() {
        let q = queries(FakeApi::default());
        assert_eq!(q.coins().await.data().map(Vec::len), Some(150));
        assert!(q.coins().await.data().is_some());
        assert_eq!(q.api.calls.get(), 1);
        assert!(q.peek_coins().data().is_some());
    }
}
