//! # View Models
//!
//! Pure derivations from routes and query states to what each page renders.
//! The web front end only binds these to markup.
//!
//! - [`coins`] - coin list page
//! - [`detail`] - coin detail page, title rules and carried route state
//! - [`price`] - price statistics panel
//! - [`chart`] - historical close-price chart panel

pub mod chart;
pub mod coins;
pub mod detail;
pub mod price;

pub use chart::{ChartBody, ChartSeries, ChartView};
pub use coins::{coin_list, CoinListBody, CoinRow, COINS_TITLE};
pub use detail::{CoinDetail, DetailBody, DetailContent, Panel, RouteState, LOADING_TEXT};
pub use price::{PricePanel, PriceRow, Trend};
