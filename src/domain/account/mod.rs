//! Account domain — the trading (spot) account's composite balance.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::Ccy;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Per-asset balance split of the spot account.
///
/// Invariant: `total == free + used`. `used` is capital locked by open
/// orders; only the spot account ever has a non-zero `used`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssetBalance {
    pub free: Decimal,
    pub used: Decimal,
    pub total: Decimal,
}

/// Snapshot of the spot account: one [`AssetBalance`] per currency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpotSnapshot {
    pub balances: HashMap<Ccy, AssetBalance>,
}

impl SpotSnapshot {
    pub fn get(&self, ccy: &Ccy) -> AssetBalance {
        self.balances.get(ccy).copied().unwrap_or_default()
    }

    pub fn free(&self, ccy: &Ccy) -> Decimal {
        self.get(ccy).free
    }

    pub fn total(&self, ccy: &Ccy) -> Decimal {
        self.get(ccy).total
    }
}

impl From<wire::AccountBalanceData> for SpotSnapshot {
    fn from(data: wire::AccountBalanceData) -> Self {
        let mut balances = HashMap::with_capacity(data.details.len());
        for detail in data.details {
            let free = detail.avail_bal.unwrap_or_default();
            let total = detail.eq.unwrap_or_default();
            balances.insert(
                detail.ccy,
                AssetBalance {
                    free,
                    used: total - free,
                    total,
                },
            );
        }
        Self { balances }
    }
}
