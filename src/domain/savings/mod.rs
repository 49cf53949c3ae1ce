//! Savings domain — the interest-bearing "simple earn" product.
//!
//! Capital must be purchased into and redeemed out of the product; it can
//! never be traded directly. Redemptions land in the funding account, not in
//! spot.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::Ccy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Direction of a savings purchase/redemption instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavingsSide {
    #[serde(rename = "purchase")]
    Purchase,
    #[serde(rename = "redempt")]
    Redempt,
}

impl SavingsSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            SavingsSide::Purchase => "purchase",
            SavingsSide::Redempt => "redempt",
        }
    }
}

/// Snapshot of savings balances: total product value (principal + yield) per
/// currency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavingsSnapshot {
    pub balances: HashMap<Ccy, Decimal>,
}

impl SavingsSnapshot {
    /// Total product value for `ccy`, zero when absent.
    pub fn amount(&self, ccy: &Ccy) -> Decimal {
        self.balances.get(ccy).copied().unwrap_or_default()
    }

    /// Ensure zero entries exist for `ccys` (see
    /// [`crate::domain::funding::FundingSnapshot::seed_zero`]).
    pub fn seed_zero(mut self, ccys: &[&Ccy]) -> Self {
        for ccy in ccys {
            self.balances.entry((*ccy).clone()).or_default();
        }
        self
    }
}

impl From<Vec<wire::SavingsBalanceData>> for SavingsSnapshot {
    fn from(data: Vec<wire::SavingsBalanceData>) -> Self {
        let balances = data
            .into_iter()
            .map(|item| (item.ccy, item.amt.unwrap_or_default()))
            .collect();
        Self { balances }
    }
}
