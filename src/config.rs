//! Client configuration surface.

use crate::shared::{Ccy, InstId};
use std::time::Duration;

/// Static configuration for an [`crate::client::OkxClient`].
///
/// The balance cache TTL is deliberately short (observed useful range
/// 0.2s–5s): it exists to absorb bursts of reads inside one strategy tick,
/// not to make balances durable.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Trading instrument, e.g. `OKB-USDT`.
    pub inst_id: InstId,
    /// Base (settlement) currency of the instrument.
    pub base_ccy: Ccy,
    /// Quote currency of the instrument.
    pub quote_ccy: Ccy,
    /// Route requests to the demo-trading environment instead of live.
    pub simulated: bool,
    /// Per-request transport timeout.
    pub timeout: Duration,
    /// Validity window for the per-account balance caches.
    pub cache_ttl: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            inst_id: InstId::new("OKB-USDT"),
            base_ccy: Ccy::new("OKB"),
            quote_ccy: Ccy::new("USDT"),
            simulated: false,
            timeout: Duration::from_secs(30),
            cache_ttl: Duration::from_millis(200),
        }
    }
}

impl ClientConfig {
    /// Decimal places for amounts of `ccy`, per the exchange's precision
    /// rules: 2 for the quote currency, 8 for the base currency, natural
    /// representation for anything else.
    pub fn amount_precision(&self, ccy: &Ccy) -> Option<u32> {
        if *ccy == self.quote_ccy {
            Some(2)
        } else if *ccy == self.base_ccy {
            Some(8)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_follows_currency_role() {
        let config = ClientConfig::default();
        assert_eq!(config.amount_precision(&Ccy::new("USDT")), Some(2));
        assert_eq!(config.amount_precision(&Ccy::new("OKB")), Some(8));
        assert_eq!(config.amount_precision(&Ccy::new("ETH")), None);
    }
}
