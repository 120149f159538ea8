//! # Routing
//!
//! Maps a URL path to the view that should render it.
//!
//! ```text
//! /                  -> Route::Coins
//! /:coinId           -> Route::Coin { tab: None }
//! /:coinId/price     -> Route::Coin { tab: Some(CoinTab::Price) }
//! /:coinId/chart     -> Route::Coin { tab: Some(CoinTab::Chart) }
//! ```
//!
//! The detail route is a catch-all on the first segment, so every path maps to
//! exactly one view. Active-tab state is derived from the parsed [`Route`], not
//! stored anywhere.

use std::fmt;

/// Nested panel selected under a coin's detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoinTab {
    Price,
    Chart,
}

impl CoinTab {
    pub const ALL: [CoinTab; 2] = [CoinTab::Price, CoinTab::Chart];

    /// Path segment under `/:coinId`
    pub fn segment(&self) -> &'static str {
        match self {
            CoinTab::Price => "price",
            CoinTab::Chart => "chart",
        }
    }

    /// Link label
    pub fn label(&self) -> &'static str {
        match self {
            CoinTab::Price => "Price",
            CoinTab::Chart => "Chart",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.segment() == segment)
    }

    /// App-relative path of this tab for a coin, e.g. `/btc-bitcoin/price`.
    pub fn path(&self, coin_id: &str) -> String {
        format!("/{}/{}", urlencoding::encode(coin_id), self.segment())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Coin list
    Coins,
    /// Coin detail, optionally with a nested panel
    Coin { coin_id: String, tab: Option<CoinTab> },
}

impl Route {
    /// Parse a location pathname. `base_path` is the prefix the app is served
    /// under (see [`Config::base_path`](crate::config::Config::base_path)).
    pub fn parse(path: &str, base_path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = strip_base(path, base_path);

        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let Some(first) = segments.next() else {
            return Route::Coins;
        };

        let coin_id = urlencoding::decode(first)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| first.to_string());
        let tab = segments.next().and_then(CoinTab::from_segment);

        Route::Coin { coin_id, tab }
    }

    /// App-relative path for this route (without the base path).
    pub fn path(&self) -> String {
        match self {
            Route::Coins => "/".to_string(),
            Route::Coin { coin_id, tab: None } => format!("/{}", urlencoding::encode(coin_id)),
            Route::Coin { coin_id, tab: Some(tab) } => tab.path(coin_id),
        }
    }

    pub fn coin_id(&self) -> Option<&str> {
        match self {
            Route::Coins => None,
            Route::Coin { coin_id, .. } => Some(coin_id),
        }
    }

    pub fn tab(&self) -> Option<CoinTab> {
        match self {
            Route::Coins => None,
            Route::Coin { tab, .. } => *tab,
        }
    }

    /// Whether the link for `tab` should render highlighted.
    pub fn is_tab_active(&self, tab: CoinTab) -> bool {
        self.tab() == Some(tab)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Prefix an app-relative path with the base path for use in an `href`.
pub fn with_base(base_path: &str, path: &str) -> String {
    if base_path.is_empty() {
        path.to_string()
    } else if path == "/" {
        format!("{}/", base_path)
    } else {
        format!("{}{}", base_path, path)
    }
}

fn strip_base<'a>(path: &'a str, base_path: &str) -> &'a str {
    if base_path.is_empty() {
        return path;
    }
    match path.strip_prefix(base_path) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}
