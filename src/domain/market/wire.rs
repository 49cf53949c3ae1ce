//! Wire types for market-data responses.

use crate::shared::serde_util::{empty_decimal_as_none, timestamp_ms_str};
use crate::shared::InstId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A SPOT ticker.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerData {
    #[serde(rename = "instId")]
    pub inst_id: InstId,
    pub last: Decimal,
    #[serde(rename = "askPx", default, with = "empty_decimal_as_none")]
    pub ask_px: Option<Decimal>,
    #[serde(rename = "bidPx", default, with = "empty_decimal_as_none")]
    pub bid_px: Option<Decimal>,
    #[serde(rename = "high24h")]
    pub high_24h: Decimal,
    #[serde(rename = "low24h")]
    pub low_24h: Decimal,
    #[serde(rename = "vol24h")]
    pub vol_24h: Decimal,
    #[serde(with = "timestamp_ms_str")]
    pub ts: DateTime<Utc>,
}

/// Raw order book payload; levels are positional string arrays.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBookData {
    pub asks: Vec<Vec<String>>,
    pub bids: Vec<Vec<String>>,
    #[serde(with = "timestamp_ms_str")]
    pub ts: DateTime<Utc>,
}

/// Server time response.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerTimeData {
    #[serde(with = "timestamp_ms_str")]
    pub ts: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_with_empty_quotes_deserializes() {
        let raw = r#"{
            "instId": "OKB-USDT",
            "last": "3.74",
            "askPx": "",
            "bidPx": "3.73",
            "high24h": "3.80",
            "low24h": "3.60",
            "vol24h": "120000",
            "ts": "1597026383085"
        }"#;
        let ticker: TickerData = serde_json::from_str(raw).unwrap();
        assert_eq!(ticker.ask_px, None);
        assert!(ticker.bid_px.is_some());
        assert_eq!(ticker.inst_id.as_str(), "OKB-USDT");
    }
}
