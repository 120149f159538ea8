//! # Coin Detail View Model
//!
//! Everything the detail page renders, derived from the route, the name
//! carried over from the list page and the two query states.
//!
//! ```text
//! info    tickers   body
//! ------  -------   -------
//! Ready   Ready     Ready(content)
//! Failed  *         Failed
//! *       Failed    Failed
//! other             Loading
//! ```

use shared::dto::{CoinInfo, CoinTicker};
use shared::utils::{format_price, format_supply};

use crate::query::QueryState;
use crate::route::CoinTab;

pub const LOADING_TEXT: &str = "Loading...";

/// Display name handed from the list page to the detail page on navigation.
///
/// Lives only in memory; a refresh or a typed URL starts without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteState {
    pub coin_id: String,
    pub name: String,
}

impl RouteState {
    pub fn new(coin_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { coin_id: coin_id.into(), name: name.into() }
    }

    /// The carried name, if it was carried for `coin_id` and is not blank.
    pub fn name_for<'a>(state: Option<&'a RouteState>, coin_id: &str) -> Option<&'a str> {
        state
            .filter(|s| s.coin_id == coin_id)
            .map(|s| s.name.as_str())
            .filter(|name| !name.trim().is_empty())
    }
}

/// Title priority: carried name, then the loading text, then the fetched
/// name, then the raw coin id.
pub fn detail_title(carried: Option<&str>, loading: bool, fetched: Option<&str>, coin_id: &str) -> String {
    match carried {
        Some(name) => name.to_string(),
        None if loading => LOADING_TEXT.to_string(),
        None => fetched.unwrap_or(coin_id).to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewItem {
    pub label: &'static str,
    pub value: String,
}

impl OverviewItem {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self { label, value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabLink {
    pub tab: CoinTab,
    pub label: &'static str,
    /// App-relative path, without the base path
    pub href: String,
    pub active: bool,
}

/// Nested panel mounted under the detail content.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Price { coin_id: String, ticker: CoinTicker },
    Chart { coin_id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailContent {
    pub overview: Vec<OverviewItem>,
    pub description: String,
    pub supply: Vec<OverviewItem>,
    pub tabs: Vec<TabLink>,
    pub panel: Option<Panel>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailBody {
    Loading,
    Failed { message: String },
    Ready(Box<DetailContent>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoinDetail {
    pub title: String,
    pub body: DetailBody,
}

impl CoinDetail {
    pub fn build(
        coin_id: &str,
        tab: Option<CoinTab>,
        route_state: Option<&RouteState>,
        info: QueryState<CoinInfo>,
        tickers: QueryState<CoinTicker>,
    ) -> Self {
        let carried = RouteState::name_for(route_state, coin_id);
        let fetched_name = info.data().map(|i| i.name.clone());
        let combined = info.zip(tickers);

        let title = detail_title(carried, combined.is_pending(), fetched_name.as_deref(), coin_id);

        let body = match combined {
            QueryState::Pending => DetailBody::Loading,
            QueryState::Failed(err) => DetailBody::Failed { message: err.user_message() },
            QueryState::Ready((info, ticker)) => {
                DetailBody::Ready(Box::new(DetailContent::new(coin_id, tab, info, ticker)))
            }
        };

        Self { title, body }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.body, DetailBody::Loading)
    }
}

impl DetailContent {
    fn new(coin_id: &str, tab: Option<CoinTab>, info: CoinInfo, ticker: CoinTicker) -> Self {
        let overview = vec![
            OverviewItem::new("Rank:", info.rank.to_string()),
            OverviewItem::new("Symbol:", info.symbol),
            OverviewItem::new("Price:", format_price(ticker.quotes.usd.price)),
        ];
        let supply = vec![
            OverviewItem::new("Total Supply:", format_supply(ticker.total_supply)),
            OverviewItem::new("Max Supply:", format_supply(ticker.max_supply)),
        ];

        let tabs = CoinTab::ALL
            .into_iter()
            .map(|t| TabLink {
                tab: t,
                label: t.label(),
                href: t.path(coin_id),
                active: tab == Some(t),
            })
            .collect();

        let panel = tab.map(|t| match t {
            CoinTab::Price => Panel::Price { coin_id: coin_id.to_string(), ticker },
            CoinTab::Chart => Panel::Chart { coin_id: coin_id.to_string() },
        });

        Self { overview, description: info.description, supply, tabs, panel }
    }

    pub fn active_tab(&self) -> Option<CoinTab> {
        self.tabs.iter().find(|t| t.active).map(|t| t.tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::queries::testing::{bitcoin_info, bitcoin_ticker};
    use crate::error::AppError;
    use crate::route::Route;

    fn ready(tab: Option<CoinTab>, state: Option<&RouteState>) -> CoinDetail {
        CoinDetail::build(
            "btc-bitcoin",
            tab,
            state,
            QueryState::Ready(bitcoin_info()),
            QueryState::Ready(bitcoin_ticker()),
        )
    }

    fn content(detail: &CoinDetail) -> &DetailContent {
        match &detail.body {
            DetailBody::Ready(content) => content,
            other => panic!("expected ready body, got {:?}", other),
        }
    }

    #[test]
    fn test_pending_either_side_shows_loading() {
        let cases = [
            (QueryState::Pending, QueryState::Pending),
            (QueryState::Ready(bitcoin_info()), QueryState::Pending),
            (QueryState::Pending, QueryState::Ready(bitcoin_ticker())),
        ];
        for (info, tickers) in cases {
            let detail = CoinDetail::build("btc-bitcoin", Some(CoinTab::Price), None, info, tickers);
            assert_eq!(detail.body, DetailBody::Loading);
            assert_eq!(detail.title, LOADING_TEXT);
        }
    }

    #[test]
    fn test_ready_summary_panels() {
        let detail = ready(None, None);
        assert_eq!(detail.title, "Bitcoin");

        let content = content(&detail);
        let values: Vec<(&str, &str)> =
            content.overview.iter().map(|i| (i.label, i.value.as_str())).collect();
        assert_eq!(values, vec![("Rank:", "1"), ("Symbol:", "BTC"), ("Price:", "$ 63245.679")]);
        assert_eq!(content.supply[0].value, "19500000");
        assert_eq!(content.supply[1].value, "21000000");
        assert_eq!(content.description, "Bitcoin is a cryptocurrency.");
        assert_eq!(content.panel, None);
        assert_eq!(content.active_tab(), None);
    }

    #[test]
    fn test_price_sub_route() {
        let route = Route::parse("/btc-bitcoin/price", "");
        let detail = ready(route.tab(), None);
        let content = content(&detail);

        assert_eq!(content.active_tab(), Some(CoinTab::Price));
        assert_eq!(
            content.panel,
            Some(Panel::Price { coin_id: "btc-bitcoin".to_string(), ticker: bitcoin_ticker() })
        );
        assert_eq!(content.tabs[0].href, "/btc-bitcoin/price");
        assert_eq!(content.tabs[1].href, "/btc-bitcoin/chart");
    }

    #[test]
    fn test_chart_sub_route() {
        let route = Route::parse("/btc-bitcoin/chart", "");
        let detail = ready(route.tab(), None);
        let content = content(&detail);

        assert_eq!(content.active_tab(), Some(CoinTab::Chart));
        assert!(!content.tabs[0].active);
        assert_eq!(content.panel, Some(Panel::Chart { coin_id: "btc-bitcoin".to_string() }));
    }

    #[test]
    fn test_carried_name_wins_before_and_after_resolution() {
        let state = RouteState::new("btc-bitcoin", "Bitcoin");

        let loading = CoinDetail::build(
            "btc-bitcoin",
            None,
            Some(&state),
            QueryState::Pending,
            QueryState::Pending,
        );
        assert_eq!(loading.title, "Bitcoin");
        assert!(loading.is_loading());

        let carried = RouteState::new("btc-bitcoin", "Bitcoin (carried)");
        let resolved = ready(None, Some(&carried));
        assert_eq!(resolved.title, "Bitcoin (carried)");
    }

    #[test]
    fn test_carried_name_for_other_coin_ignored() {
        let state = RouteState::new("eth-ethereum", "Ethereum");
        let detail = CoinDetail::build("btc-bitcoin", None, Some(&state), QueryState::Pending, QueryState::Pending);
        assert_eq!(detail.title, LOADING_TEXT);
        assert_eq!(RouteState::name_for(Some(&RouteState::new("a", "  ")), "a"), None);
    }

    #[test]
    fn test_failure_is_not_loading() {
        let detail = CoinDetail::build(
            "nope",
            None,
            None,
            QueryState::Failed(AppError::NotFound("nope".to_string())),
            QueryState::Pending,
        );
        assert_eq!(detail.title, "nope");
        assert_eq!(
            detail.body,
            DetailBody::Failed { message: AppError::NotFound(String::new()).user_message() }
        );
    }

    #[test]
    fn test_ticker_failure_keeps_fetched_name() {
        let detail = CoinDetail::build(
            "btc-bitcoin",
            None,
            None,
            QueryState::Ready(bitcoin_info()),
            QueryState::Failed(AppError::Network("offline".to_string())),
        );
        assert_eq!(detail.title, "Bitcoin");
        assert!(matches!(detail.body, DetailBody::Failed { .. }));
    }

    #[test]
    fn test_detail_title_priority() {
        assert_eq!(detail_title(Some("A"), true, Some("B"), "id"), "A");
        assert_eq!(detail_title(None, true, Some("B"), "id"), LOADING_TEXT);
        assert_eq!(detail_title(None, false, Some("B"), "id"), "B");
        assert_eq!(detail_title(None, false, None, "id"), "id");
    }
}
