//! Wire types for the savings product endpoints.

use crate::shared::serde_util::empty_decimal_as_none;
use crate::shared::Ccy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SavingsSide;

/// `GET /api/v5/finance/savings/balance` data element.
#[derive(Debug, Clone, Deserialize)]
pub struct SavingsBalanceData {
    pub ccy: Ccy,
    /// Total product value: principal plus accrued yield.
    #[serde(default, with = "empty_decimal_as_none")]
    pub amt: Option<Decimal>,
    #[serde(default, with = "empty_decimal_as_none")]
    pub earnings: Option<Decimal>,
}

/// Request body for `POST /api/v5/finance/savings/purchase-redempt`.
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseRedemptRequest {
    pub ccy: Ccy,
    /// Amount, pre-formatted per currency precision.
    pub amt: String,
    pub side: SavingsSide,
    /// Nominal annualized product rate, passed through as-is.
    pub rate: String,
}

/// Acknowledgement of a purchase/redemption instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRedemptData {
    pub ccy: Ccy,
    pub amt: Decimal,
    pub side: SavingsSide,
    #[serde(default)]
    pub rate: String,
}
