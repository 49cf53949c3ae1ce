//! Funding sub-client — custody balances and internal transfers.

use crate::client::OkxClient;
use crate::domain::funding::wire::{FundingBalanceData, TransferData, TransferRequest};
use crate::domain::funding::{FundingSnapshot, TransferAccount};
use crate::domain::market::client::take_first;
use crate::error::SdkError;
use crate::http::RetryPolicy;
use crate::shared::Ccy;

pub struct Funding<'a> {
    pub(crate) client: &'a OkxClient,
}

impl<'a> Funding<'a> {
    /// Fetch funding-account balances directly from the exchange.
    pub async fn balances(&self) -> Result<FundingSnapshot, SdkError> {
        let data: Vec<FundingBalanceData> = self
            .client
            .http
            .get("/api/v5/asset/balances", &[], RetryPolicy::Idempotent)
            .await?;
        Ok(FundingSnapshot::from(data))
    }

    /// Move `amt` (pre-formatted) of `ccy` between sub-accounts.
    ///
    /// Never retried: resubmitting a transfer that may already have settled
    /// would double-move funds.
    pub async fn transfer(
        &self,
        ccy: &Ccy,
        amt: &str,
        from: TransferAccount,
        to: TransferAccount,
    ) -> Result<TransferData, SdkError> {
        let request = TransferRequest {
            ccy: ccy.clone(),
            amt: amt.to_string(),
            from: from.as_code().to_string(),
            to: to.as_code().to_string(),
        };
        tracing::info!(
            ccy = %ccy,
            amt,
            from = from.as_code(),
            to = to.as_code(),
            "internal transfer"
        );
        let mut data: Vec<TransferData> = self
            .client
            .http
            .post("/api/v5/asset/transfer", &request, RetryPolicy::None)
            .await?;
        take_first(&mut data, "transfer ack")
    }
}
