//! Wire types for the account balance endpoint.

use crate::shared::serde_util::empty_decimal_as_none;
use crate::shared::Ccy;
use rust_decimal::Decimal;
use serde::Deserialize;

/// `GET /api/v5/account/balance` data element.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountBalanceData {
    #[serde(default)]
    pub details: Vec<BalanceDetail>,
}

/// Per-currency detail of the composite spot balance.
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceDetail {
    pub ccy: Ccy,
    /// Available balance; what open orders have not locked.
    #[serde(rename = "availBal", default, with = "empty_decimal_as_none")]
    pub avail_bal: Option<Decimal>,
    /// Total equity of the currency.
    #[serde(rename = "eq", default, with = "empty_decimal_as_none")]
    pub eq: Option<Decimal>,
}
