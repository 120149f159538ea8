//! Coin list view model.

use shared::dto::CoinSummary;

use super::detail::RouteState;
use crate::query::QueryState;
use crate::route::Route;

pub const COINS_TITLE: &str = "Coins";
pub const ICON_API_URL: &str = "https://coinicons-api.vercel.app/api/icon";

#[derive(Debug, Clone, PartialEq)]
pub struct CoinRow {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    pub icon_url: String,
    /// App-relative path of the detail page
    pub href: String,
    /// Carried to the detail page so its title is right before anything loads
    pub route_state: RouteState,
}

impl CoinRow {
    pub fn new(coin: CoinSummary) -> Self {
        let href = Route::Coin { coin_id: coin.id.clone(), tab: None }.path();
        Self {
            icon_url: icon_url(&coin.symbol),
            route_state: RouteState::new(coin.id.clone(), coin.name.clone()),
            href,
            id: coin.id,
            name: coin.name,
            symbol: coin.symbol,
            rank: coin.rank,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CoinListBody {
    Loading,
    Failed { message: String },
    Ready(Vec<CoinRow>),
}

/// First `limit` coins of the listing, in upstream (rank) order.
pub fn coin_list(state: QueryState<Vec<CoinSummary>>, limit: usize) -> CoinListBody {
    match state {
        QueryState::Pending => CoinListBody::Loading,
        QueryState::Failed(err) => CoinListBody::Failed { message: err.user_message() },
        QueryState::Ready(coins) => {
            CoinListBody::Ready(coins.into_iter().take(limit).map(CoinRow::new).collect())
        }
    }
}

pub fn icon_url(symbol: &str) -> String {
    format!("{}/{}", ICON_API_URL, symbol.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn summary(id: &str, name: &str, symbol: &str, rank: u32) -> CoinSummary {
        CoinSummary {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            rank,
            is_new: false,
            is_active: true,
            kind: "coin".to_string(),
        }
    }

    #[test]
    fn test_list_is_truncated_to_limit() {
        let coins = (1..=150).map(|r| summary(&format!("c-{}", r), "C", "C", r)).collect();
        match coin_list(QueryState::Ready(coins), 100) {
            CoinListBody::Ready(rows) => {
                assert_eq!(rows.len(), 100);
                assert_eq!(rows[99].rank, 100);
            }
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn test_row_links_and_carries_name() {
        let row = CoinRow::new(summary("btc-bitcoin", "Bitcoin", "BTC", 1));
        assert_eq!(row.href, "/btc-bitcoin");
        assert_eq!(row.icon_url, "https://coinicons-api.vercel.app/api/icon/btc");
        assert_eq!(row.route_state, RouteState::new("btc-bitcoin", "Bitcoin"));
    }

    #[test]
    fn test_loading_and_failure() {
        assert_eq!(coin_list(QueryState::Pending, 100), CoinListBody::Loading);
        assert!(matches!(
            coin_list(QueryState::Failed(AppError::Network("x".to_string())), 100),
            CoinListBody::Failed { .. }
        ));
    }
}
