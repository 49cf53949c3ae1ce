//! Funding domain — custody sub-account balances and internal transfers.
//!
//! The funding account is the gateway between the trading account and the
//! savings product: capital moves savings ⇄ funding ⇄ spot, never directly.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::Ccy;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Sub-accounts addressable by an internal transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferAccount {
    /// Custody / funding account.
    Funding,
    /// Trading (spot) account.
    Trading,
}

impl TransferAccount {
    /// The exchange's numeric account code.
    pub fn as_code(&self) -> &'static str {
        match self {
            TransferAccount::Funding => "6",
            TransferAccount::Trading => "18",
        }
    }
}

/// Snapshot of funding-account balances: available amount per currency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FundingSnapshot {
    pub balances: HashMap<Ccy, Decimal>,
}

impl FundingSnapshot {
    /// Available amount for `ccy`, zero when absent.
    pub fn amount(&self, ccy: &Ccy) -> Decimal {
        self.balances.get(ccy).copied().unwrap_or_default()
    }

    /// Ensure zero entries exist for `ccys` so downstream views always carry
    /// the configured currencies, even when the account is empty.
    pub fn seed_zero(mut self, ccys: &[&Ccy]) -> Self {
        for ccy in ccys {
            self.balances.entry((*ccy).clone()).or_default();
        }
        self
    }
}

impl From<Vec<wire::FundingBalanceData>> for FundingSnapshot {
    fn from(data: Vec<wire::FundingBalanceData>) -> Self {
        let balances = data
            .into_iter()
            .map(|item| (item.ccy, item.avail_bal.unwrap_or_default()))
            .collect();
        Self { balances }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_accounts_use_exchange_codes() {
        assert_eq!(TransferAccount::Funding.as_code(), "6");
        assert_eq!(TransferAccount::Trading.as_code(), "18");
    }

    #[test]
    fn seed_zero_preserves_existing_amounts() {
        let usdt = Ccy::new("USDT");
        let okb = Ccy::new("OKB");
        let mut snapshot = FundingSnapshot::default();
        snapshot.balances.insert(usdt.clone(), Decimal::from(5));
        let snapshot = snapshot.seed_zero(&[&usdt, &okb]);
        assert_eq!(snapshot.amount(&usdt), Decimal::from(5));
        assert_eq!(snapshot.amount(&okb), Decimal::ZERO);
    }
}
