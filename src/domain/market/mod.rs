//! Market-data domain — tickers, candlesticks, order book, server time.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::error::SdkError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

/// A single candlestick.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    pub ts: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

impl TryFrom<Vec<String>> for Candle {
    type Error = SdkError;

    /// The exchange sends candles as positional string arrays:
    /// `[ts, open, high, low, close, volume, ...]`.
    fn try_from(row: Vec<String>) -> Result<Self, Self::Error> {
        if row.len() < 6 {
            return Err(SdkError::Validation(format!(
                "candle row has {} fields, expected at least 6",
                row.len()
            )));
        }
        let ts_ms: i64 = row[0]
            .parse()
            .map_err(|_| SdkError::Validation(format!("invalid candle timestamp: {}", row[0])))?;
        let ts = DateTime::<Utc>::from_timestamp_millis(ts_ms)
            .ok_or_else(|| SdkError::Validation(format!("candle timestamp out of range: {}", ts_ms)))?;

        let field = |i: usize| -> Result<Decimal, SdkError> {
            Decimal::from_str(&row[i])
                .map_err(|_| SdkError::Validation(format!("invalid candle field {}: {}", i, row[i])))
        };

        Ok(Candle {
            ts,
            open: field(1)?,
            high: field(2)?,
            low: field(3)?,
            close: field(4)?,
            volume: field(5)?,
        })
    }
}

/// One price level of the order book.
#[derive(Debug, Clone, PartialEq)]
pub struct BookLevel {
    pub price: Decimal,
    pub size: Decimal,
}

/// Order book snapshot, best levels first.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBook {
    pub asks: Vec<BookLevel>,
    pub bids: Vec<BookLevel>,
    pub ts: DateTime<Utc>,
}

impl TryFrom<&[String]> for BookLevel {
    type Error = SdkError;

    fn try_from(row: &[String]) -> Result<Self, Self::Error> {
        if row.len() < 2 {
            return Err(SdkError::Validation(
                "book level has fewer than 2 fields".to_string(),
            ));
        }
        let parse = |s: &str| {
            Decimal::from_str(s)
                .map_err(|_| SdkError::Validation(format!("invalid book level field: {}", s)))
        };
        Ok(BookLevel {
            price: parse(&row[0])?,
            size: parse(&row[1])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candle_parses_positional_row() {
        let row: Vec<String> = ["1597026383085", "3.72", "3.75", "3.70", "3.74", "1234.5"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let candle = Candle::try_from(row).unwrap();
        assert_eq!(candle.ts.timestamp_millis(), 1597026383085);
        assert_eq!(candle.close, Decimal::from_str("3.74").unwrap());
    }

    #[test]
    fn short_candle_row_is_rejected() {
        let row: Vec<String> = vec!["1597026383085".to_string(), "3.72".to_string()];
        assert!(Candle::try_from(row).is_err());
    }

    #[test]
    fn book_level_ignores_trailing_fields() {
        let row: Vec<String> = ["3.72", "100", "0", "4"].iter().map(|s| s.to_string()).collect();
        let level = BookLevel::try_from(row.as_slice()).unwrap();
        assert_eq!(level.price, Decimal::from_str("3.72").unwrap());
        assert_eq!(level.size, Decimal::from(100));
    }
}
