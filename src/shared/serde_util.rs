//! Custom serde helpers for exchange wire formats.

/// Deserializes the exchange's string-encoded Unix-millis timestamps
/// (e.g. `"1597026383085"`) into `DateTime<Utc>`.
pub mod timestamp_ms_str {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let millis: i64 = raw
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))?;
        DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {}", raw)))
    }
}

/// Deserializes a decimal field that the exchange may send as an empty
/// string (market orders have no price, untouched balances no amount).
pub mod empty_decimal_as_none {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => Decimal::from_str(s)
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid decimal: {}", s))),
        }
    }
}
