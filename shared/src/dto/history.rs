use serde::{Deserialize, Deserializer, Serialize};

/// One daily OHLCV row from the history endpoint.
///
/// The endpoint has served prices both as JSON numbers and as decimal strings,
/// so the price and volume columns accept either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPrice {
    /// Unix seconds
    pub time_open: i64,
    /// Unix seconds
    pub time_close: i64,
    #[serde(deserialize_with = "number_or_string")]
    pub open: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub high: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub low: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub close: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub volume: f64,
    #[serde(default)]
    pub market_cap: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
