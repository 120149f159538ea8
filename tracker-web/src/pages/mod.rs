//! Page modules

pub mod chart;
pub mod coin;
pub mod coins;
pub mod price;

pub use chart::ChartPanel;
pub use coin::CoinPage;
pub use coins::CoinsPage;
pub use price::PricePanelView;
