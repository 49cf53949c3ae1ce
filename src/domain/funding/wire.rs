//! Wire types for funding balances and internal transfers.

use crate::shared::serde_util::empty_decimal_as_none;
use crate::shared::Ccy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `GET /api/v5/asset/balances` data element.
#[derive(Debug, Clone, Deserialize)]
pub struct FundingBalanceData {
    pub ccy: Ccy,
    #[serde(rename = "availBal", default, with = "empty_decimal_as_none")]
    pub avail_bal: Option<Decimal>,
}

/// Request body for `POST /api/v5/asset/transfer`.
#[derive(Debug, Clone, Serialize)]
pub struct TransferRequest {
    pub ccy: Ccy,
    /// Amount, pre-formatted per currency precision.
    pub amt: String,
    /// Source account code.
    pub from: String,
    /// Destination account code.
    pub to: String,
}

/// Acknowledgement of an internal transfer.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferData {
    #[serde(rename = "transId")]
    pub trans_id: String,
    pub ccy: Ccy,
    pub amt: Decimal,
    pub from: String,
    pub to: String,
}
