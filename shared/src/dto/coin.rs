use serde::{Deserialize, Serialize};

/// One entry of the `/coins` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSummary {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Static, descriptive metadata from `/coins/{id}`.
///
/// Upstream leaves most of the descriptive fields `null` for smaller coins,
/// so everything past the identity block is optional or defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinInfo {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub open_source: bool,
    #[serde(default)]
    pub hardware_wallet: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub development_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_structure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_data_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_data_at: Option<String>,
}

/// Live market figures from `/tickers/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinTicker {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    #[serde(default)]
    pub circulating_supply: f64,
    #[serde(default)]
    pub total_supply: f64,
    #[serde(default)]
    pub max_supply: f64,
    #[serde(default)]
    pub beta_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_data_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    pub quotes: Quotes,
}

/// Quote currencies keyed the way upstream keys them. Only USD is requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotes {
    #[serde(rename = "USD")]
    pub usd: UsdQuote,
}

/// Price, market cap and change windows quoted in USD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsdQuote {
    pub price: f64,
    pub volume_24h: f64,
    pub volume_24h_change_24h: f64,
    pub market_cap: f64,
    pub market_cap_change_24h: f64,
    pub percent_change_15m: f64,
    pub percent_change_30m: f64,
    pub percent_change_1h: f64,
    pub percent_change_6h: f64,
    pub percent_change_12h: f64,
    pub percent_change_24h: f64,
    pub percent_change_7d: f64,
    pub percent_change_30d: f64,
    pub percent_change_1y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ath_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ath_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_from_price_ath: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_summary_deserialize() {
        let json = r#"{"id":"btc-bitcoin","name":"Bitcoin","symbol":"BTC","rank":1,
            "is_new":false,"is_active":true,"type":"coin"}"#;
        let coin: CoinSummary = serde_json::from_str(json)
            .expect("Valid JSON should deserialize to CoinSummary");

        assert_eq!(coin.id, "btc-bitcoin");
        assert_eq!(coin.kind, "coin");
        assert!(coin.is_active);
    }

    #[test]
    fn test_coin_info_tolerates_nulls() {
        let json = r#"{
            "id":"xyz-xyz","name":"Xyz","symbol":"XYZ","rank":4242,
            "is_new":true,"is_active":true,"type":"token",
            "description":"A token.","message":"",
            "open_source":false,"started_at":null,"development_status":null,
            "hardware_wallet":false,"proof_type":null,"org_structure":null,
            "hash_algorithm":null,"first_data_at":"2021-01-01T00:00:00Z","last_data_at":null
        }"#;
        let info: CoinInfo = serde_json::from_str(json)
            .expect("Nullable fields should deserialize to None");

        assert_eq!(info.rank, 4242);
        assert_eq!(info.started_at, None);
        assert_eq!(info.first_data_at.as_deref(), Some("2021-01-01T00:00:00Z"));
    }

    #[test]
    fn test_coin_info_missing_description() {
        let json = r#"{"id":"a-a","name":"A","symbol":"A","rank":9}"#;
        let info: CoinInfo = serde_json::from_str(json).expect("Minimal info should deserialize");
        assert_eq!(info.description, "");
        assert!(!info.open_source);
    }

    #[test]
    fn test_coin_ticker_deserialize() {
        let json = r#"{
            "id":"btc-bitcoin","name":"Bitcoin","symbol":"BTC","rank":1,
            "circulating_supply":19500000,"total_supply":19500000,"max_supply":21000000,
            "beta_value":1.01,"first_data_at":"2010-07-17T00:00:00Z","last_updated":"2024-03-01T00:00:00Z",
            "quotes":{"USD":{
                "price":63245.6789,"volume_24h":1.5e10,"market_cap":1.2e12,
                "percent_change_24h":-2.5,"percent_change_7d":10.25,
                "ath_price":69000.0,"ath_date":"2021-11-10T16:51:15Z","percent_from_price_ath":-8.34
            }}
        }"#;
        let ticker: CoinTicker = serde_json::from_str(json)
            .expect("Valid JSON should deserialize to CoinTicker");

        assert_eq!(ticker.max_supply, 21_000_000.0);
        assert_eq!(ticker.quotes.usd.price, 63245.6789);
        assert_eq!(ticker.quotes.usd.percent_change_24h, -2.5);
        assert_eq!(ticker.quotes.usd.percent_change_1y, 0.0);
        assert_eq!(ticker.quotes.usd.ath_price, Some(69000.0));
    }
}
