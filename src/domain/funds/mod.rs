//! Funds domain — the cross-account balance and transfer layer.
//!
//! Three sub-accounts hold capital: trading (spot), custody (funding) and the
//! interest-bearing savings product. This module owns the per-account balance
//! caches, merges the three snapshots into one unified view, and runs the
//! non-atomic transfer pipeline that moves capital between them.

#[cfg(feature = "http")]
pub mod cache;
#[cfg(feature = "http")]
pub mod client;

use crate::domain::account::{AssetBalance, SpotSnapshot};
use crate::domain::funding::FundingSnapshot;
use crate::domain::savings::wire::PurchaseRedemptData;
use crate::domain::savings::SavingsSnapshot;
use crate::shared::Ccy;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::time::Duration;

/// The three sub-account kinds the balance cache tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    Spot,
    Funding,
    Savings,
}

/// Delay between the two legs of a transfer pipeline, covering ledger
/// propagation into the funding account. An unconditional wait, not a
/// confirmation poll; see the crate docs for the implications.
pub const SETTLEMENT_DELAY: Duration = Duration::from_secs(1);

/// Nominal annualized rate sent with every savings instruction. Required by
/// the endpoint, not economically interpreted.
pub const SAVINGS_RATE: &str = "0.01";

/// Savings-purchase result codes that degrade to a structured failure
/// instead of raising: the product does not support the currency, or the
/// balance is below the product minimum.
pub const RECOVERABLE_PURCHASE_CODES: &[&str] = &["58003", "58350"];

/// Whether a failed savings-purchase code degrades to
/// [`TransferOutcome::Failure`] instead of raising.
pub(crate) fn is_recoverable_purchase(code: &str) -> bool {
    RECOVERABLE_PURCHASE_CODES.contains(&code)
}

/// Minimum operable amount for a savings purchase or redemption: 1.0 for the
/// quote currency, 0.001 for anything else. Below this is dust.
pub fn min_transfer_amount(ccy: &Ccy, quote_ccy: &Ccy) -> Decimal {
    if ccy == quote_ccy {
        Decimal::ONE
    } else {
        // 0.001
        Decimal::new(1, 3)
    }
}

// ─── Unified view ────────────────────────────────────────────────────────────

/// The merged `{free, used, total}` view across spot, funding and savings.
///
/// A derived, disposable value: recomputed from the three snapshots on every
/// read, never cached itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnifiedBalances {
    pub balances: HashMap<Ccy, AssetBalance>,
}

impl UnifiedBalances {
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

/// Merge the three account snapshots.
///
/// The map is seeded from the spot snapshot; funding and savings amounts are
/// added to `free` and `total` only — they are never "in use" by open orders.
/// The two add passes commute.
pub fn merge(
    spot: &SpotSnapshot,
    funding: &FundingSnapshot,
    savings: &SavingsSnapshot,
) -> UnifiedBalances {
    let mut balances = spot.balances.clone();
    let additions = funding
        .balances
        .iter()
        .chain(savings.balances.iter());
    for (ccy, amount) in additions {
        let entry = balances.entry(ccy.clone()).or_default();
        entry.free += *amount;
        entry.total += *amount;
    }
    UnifiedBalances { balances }
}

// ─── Transfer outcome ────────────────────────────────────────────────────────

/// Result of a fund-transfer pipeline.
///
/// The pipeline is safe to invoke speculatively: zero or dust balances come
/// back as [`TransferOutcome::NoOp`], a successful call that performed no
/// network mutation.
#[derive(Debug, Clone)]
pub enum TransferOutcome {
    /// The full pipeline completed; carries the savings instruction payload.
    Success { data: PurchaseRedemptData },
    /// A precondition short-circuit; nothing was submitted.
    NoOp { reason: String },
    /// A recoverable, structured failure (savings purchase only).
    Failure { code: String, message: String },
}

impl TransferOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TransferOutcome::Success { .. })
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, TransferOutcome::NoOp { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TransferOutcome::Failure { .. })
    }
}

// ─── Redemption planning ─────────────────────────────────────────────────────

/// Decision for the redemption leg, taken before any network mutation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RedeemPlan {
    /// Nothing in the product to redeem.
    NoBalance,
    /// Balance exists but is below the minimum redeemable amount.
    BelowMinimum,
    Redeem { amount: Decimal, clamped: bool },
}

/// Plan a redemption of `requested` against an `available` product balance.
///
/// Requests above the available balance are clamped to it rather than
/// rejected, so a strategy can ask for "everything up to N" unconditionally.
pub(crate) fn plan_redemption(
    available: Decimal,
    requested: Decimal,
    min_amount: Decimal,
) -> RedeemPlan {
    if available <= Decimal::ZERO {
        return RedeemPlan::NoBalance;
    }
    if available < min_amount {
        return RedeemPlan::BelowMinimum;
    }
    if requested > available {
        RedeemPlan::Redeem {
            amount: available,
            clamped: true,
        }
    } else {
        RedeemPlan::Redeem {
            amount: requested,
            clamped: false,
        }
    }
}
