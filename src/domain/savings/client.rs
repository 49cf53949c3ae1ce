//! Savings sub-client — product balance, purchase and redemption.

use crate::client::OkxClient;
use crate::domain::market::client::take_first;
use crate::domain::savings::wire::{PurchaseRedemptData, PurchaseRedemptRequest, SavingsBalanceData};
use crate::domain::savings::{SavingsSnapshot, SavingsSide};
use crate::error::SdkError;
use crate::http::RetryPolicy;
use crate::shared::Ccy;

pub struct Savings<'a> {
    pub(crate) client: &'a OkxClient,
}

impl<'a> Savings<'a> {
    /// Fetch savings balances directly from the exchange.
    pub async fn balance(&self) -> Result<SavingsSnapshot, SdkError> {
        let data: Vec<SavingsBalanceData> = self
            .client
            .http
            .get("/api/v5/finance/savings/balance", &[], RetryPolicy::Idempotent)
            .await?;
        Ok(SavingsSnapshot::from(data))
    }

    /// Submit a purchase or redemption instruction.
    ///
    /// `rate` is the nominal annualized product rate (e.g. `"0.01"`); the
    /// exchange requires it but the SDK does not interpret it economically.
    /// Never retried.
    pub async fn purchase_redempt(
        &self,
        ccy: &Ccy,
        amt: &str,
        side: SavingsSide,
        rate: &str,
    ) -> Result<PurchaseRedemptData, SdkError> {
        let request = PurchaseRedemptRequest {
            ccy: ccy.clone(),
            amt: amt.to_string(),
            side,
            rate: rate.to_string(),
        };
        tracing::info!(ccy = %ccy, amt, side = side.as_str(), "savings instruction");
        let mut data: Vec<PurchaseRedemptData> = self
            .client
            .http
            .post(
                "/api/v5/finance/savings/purchase-redempt",
                &request,
                RetryPolicy::None,
            )
            .await?;
        take_first(&mut data, "savings ack")
    }
}
