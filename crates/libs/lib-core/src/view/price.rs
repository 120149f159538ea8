//! # Price Panel View Model
//!
//! Market statistics for the `/:coinId/price` panel, built from the ticker the
//! detail view already fetched.

use chrono::{DateTime, Utc};
use shared::dto::CoinTicker;
use shared::utils::{format_number, format_percentage, format_price};

/// Direction of a percentage change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn from_change(pct: f64) -> Self {
        if pct.abs() < 0.005 {
            Trend::Flat
        } else if pct > 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Flat => "→",
        }
    }

    /// CSS class used by the stylesheet
    pub fn class(&self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
            Trend::Flat => "trend-flat",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub label: &'static str,
    pub value: String,
    pub trend: Option<Trend>,
}

impl PriceRow {
    fn plain(label: &'static str, value: String) -> Self {
        Self { label, value, trend: None }
    }

    fn change(label: &'static str, pct: f64) -> Self {
        Self { label, value: format_percentage(pct), trend: Some(Trend::from_change(pct)) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricePanel {
    pub coin_id: String,
    pub rows: Vec<PriceRow>,
    pub last_updated: Option<String>,
}

impl PricePanel {
    pub fn new(coin_id: &str, ticker: &CoinTicker) -> Self {
        let usd = &ticker.quotes.usd;

        let mut rows = vec![
            PriceRow::plain("Price", format_price(usd.price)),
            PriceRow::plain("Market Cap", format!("$ {}", format_number(usd.market_cap, 0))),
            PriceRow::plain("24h Volume", format!("$ {}", format_number(usd.volume_24h, 0))),
        ];

        if let Some(ath) = usd.ath_price {
            let when = usd.ath_date.as_deref().and_then(short_date);
            let value = match when {
                Some(date) => format!("{} ({})", format_price(ath), date),
                None => format_price(ath),
            };
            rows.push(PriceRow::plain("All-Time High", value));
        }
        if let Some(pct) = usd.percent_from_price_ath {
            rows.push(PriceRow::change("From ATH", pct));
        }

        rows.extend([
            PriceRow::change("1h", usd.percent_change_1h),
            PriceRow::change("6h", usd.percent_change_6h),
            PriceRow::change("12h", usd.percent_change_12h),
            PriceRow::change("24h", usd.percent_change_24h),
            PriceRow::change("7d", usd.percent_change_7d),
            PriceRow::change("30d", usd.percent_change_30d),
            PriceRow::change("1y", usd.percent_change_1y),
        ]);

        Self {
            coin_id: coin_id.to_string(),
            rows,
            last_updated: ticker.last_updated.as_deref().and_then(short_datetime),
        }
    }

    pub fn row(&self, label: &str) -> Option<&PriceRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.with_timezone(&Utc))
}

fn short_date(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|dt| dt.format("%Y-%m-%d").to_string())
}

fn short_datetime(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
}
