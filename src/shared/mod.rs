//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw strings the exchange sends, so they can be used
//! directly in wire types without conversion overhead.

pub mod fmt;
pub mod serde_util;

pub use fmt::format_amount;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Ccy ─────────────────────────────────────────────────────────────────────

/// Newtype for a currency code (e.g. `"USDT"`, `"OKB"`).
///
/// Can be used as a `HashMap` key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ccy(String);

impl Ccy {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ccy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Ccy {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Ccy {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for Ccy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Ccy(s.to_string()))
    }
}

impl Serialize for Ccy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Ccy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Ccy(s))
    }
}

// ─── InstId ──────────────────────────────────────────────────────────────────

/// Newtype for an instrument identifier (e.g. `"OKB-USDT"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstId(String);

impl InstId {
    /// Create from the exchange's native `BASE-QUOTE` form. A `BASE/QUOTE`
    /// symbol is normalized to the dashed form.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().replace('/', "-"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InstId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for InstId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for InstId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl Serialize for InstId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for InstId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(InstId(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inst_id_normalizes_slash_symbols() {
        assert_eq!(InstId::new("OKB/USDT").as_str(), "OKB-USDT");
        assert_eq!(InstId::new("OKB-USDT").as_str(), "OKB-USDT");
    }

    #[test]
    fn ccy_serializes_as_plain_string() {
        let ccy = Ccy::new("USDT");
        assert_eq!(serde_json::to_string(&ccy).unwrap(), "\"USDT\"");
        let back: Ccy = serde_json::from_str("\"USDT\"").unwrap();
        assert_eq!(back, ccy);
    }
}
