//! Account sub-client — spot composite balance.

use crate::client::OkxClient;
use crate::domain::account::wire::AccountBalanceData;
use crate::domain::account::SpotSnapshot;
use crate::domain::market::client::take_first;
use crate::error::SdkError;
use crate::http::RetryPolicy;

pub struct Account<'a> {
    pub(crate) client: &'a OkxClient,
}

impl<'a> Account<'a> {
    /// Fetch the spot account balance directly from the exchange.
    ///
    /// This always hits the network; the cache-backed read used by trading
    /// code lives on [`crate::domain::funds::client::Funds`].
    pub async fn balance(&self) -> Result<SpotSnapshot, SdkError> {
        let mut data: Vec<AccountBalanceData> = self
            .client
            .http
            .get("/api/v5/account/balance", &[], RetryPolicy::Idempotent)
            .await?;
        let snapshot = SpotSnapshot::from(take_first(&mut data, "account balance")?);
        tracing::debug!(currencies = snapshot.balances.len(), "spot balance fetched");
        Ok(snapshot)
    }
}
