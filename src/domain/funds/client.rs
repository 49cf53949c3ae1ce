//! Funds sub-client — cache-backed balance reads, the unified view, and the
//! savings ⇄ funding ⇄ spot transfer pipelines.
//!
//! Both pipelines are non-atomic: each leg is a separate exchange mutation
//! with a settlement delay in between, and a failure partway leaves the
//! earlier leg standing — there is no automatic rollback. Callers are
//! expected to keep at most one fund movement per asset in flight; the SDK
//! does not serialize them.

use futures_timer::Delay;
use rust_decimal::Decimal;

use crate::client::OkxClient;
use crate::domain::account::SpotSnapshot;
use crate::domain::funding::{FundingSnapshot, TransferAccount};
use crate::domain::funds::{
    is_recoverable_purchase, merge, min_transfer_amount, plan_redemption, AccountKind, RedeemPlan,
    TransferOutcome, UnifiedBalances, SAVINGS_RATE, SETTLEMENT_DELAY,
};
use crate::domain::savings::{SavingsSnapshot, SavingsSide};
use crate::error::SdkError;
use crate::shared::{format_amount, Ccy};

pub struct Funds<'a> {
    pub(crate) client: &'a OkxClient,
}

impl<'a> Funds<'a> {
    // ── Cache-backed reads ───────────────────────────────────────────────

    /// Spot balance, served from the cache within its TTL.
    ///
    /// On refetch failure the last cached snapshot is returned stale; with
    /// no previous snapshot the failure propagates — no safe default exists
    /// for the account that backs live orders.
    pub async fn spot_balances(&self) -> Result<SpotSnapshot, SdkError> {
        let cache = &self.client.cache;
        if let Some(snapshot) = cache.spot.get(cache.ttl()).await {
            return Ok(snapshot);
        }
        match self.client.account().balance().await {
            Ok(snapshot) => {
                cache.spot.put(snapshot.clone()).await;
                Ok(snapshot)
            }
            Err(e) => match cache.spot.get_stale().await {
                Some(stale) => {
                    tracing::warn!(error = %e, "spot refetch failed, serving stale snapshot");
                    Ok(stale)
                }
                None => Err(e),
            },
        }
    }

    /// Funding balance, served from the cache within its TTL.
    ///
    /// Degrades on refetch failure: last cached value, or zero-initialized
    /// entries for the configured currencies when nothing was ever cached.
    pub async fn funding_balances(&self) -> Result<FundingSnapshot, SdkError> {
        let cache = &self.client.cache;
        let config = &self.client.config;
        if let Some(snapshot) = cache.funding.get(cache.ttl()).await {
            return Ok(snapshot);
        }
        match self.client.funding().balances().await {
            Ok(snapshot) => {
                let snapshot = snapshot.seed_zero(&[&config.base_ccy, &config.quote_ccy]);
                cache.funding.put(snapshot.clone()).await;
                Ok(snapshot)
            }
            Err(e) => {
                tracing::warn!(error = %e, "funding refetch failed, degrading");
                match cache.funding.get_stale().await {
                    Some(stale) => Ok(stale),
                    None => Ok(FundingSnapshot::default()
                        .seed_zero(&[&config.base_ccy, &config.quote_ccy])),
                }
            }
        }
    }

    /// Savings balance (principal + yield), served from the cache within its
    /// TTL. Degrades like [`Funds::funding_balances`].
    pub async fn savings_balances(&self) -> Result<SavingsSnapshot, SdkError> {
        let cache = &self.client.cache;
        let config = &self.client.config;
        if let Some(snapshot) = cache.savings.get(cache.ttl()).await {
            return Ok(snapshot);
        }
        match self.client.savings().balance().await {
            Ok(snapshot) => {
                let snapshot = snapshot.seed_zero(&[&config.base_ccy, &config.quote_ccy]);
                cache.savings.put(snapshot.clone()).await;
                Ok(snapshot)
            }
            Err(e) => {
                tracing::warn!(error = %e, "savings refetch failed, degrading");
                match cache.savings.get_stale().await {
                    Some(stale) => Ok(stale),
                    None => Ok(SavingsSnapshot::default()
                        .seed_zero(&[&config.base_ccy, &config.quote_ccy])),
                }
            }
        }
    }

    /// The merged `{free, used, total}` view across all three accounts.
    ///
    /// Recomputed on every call; only the underlying per-account snapshots
    /// are cached. Fails only when no spot snapshot can be produced.
    pub async fn balances(&self) -> Result<UnifiedBalances, SdkError> {
        let spot = self.spot_balances().await?;
        let funding = self.funding_balances().await?;
        let savings = self.savings_balances().await?;
        let merged = merge(&spot, &funding, &savings);
        tracing::debug!(currencies = merged.balances.len(), "unified balances computed");
        Ok(merged)
    }

    // ── Transfer pipelines ───────────────────────────────────────────────

    /// Liberate capital for trading: redeem `amount` of `ccy` from savings,
    /// then move it funding → spot.
    ///
    /// Safe to call speculatively: zero or dust savings balances return
    /// [`TransferOutcome::NoOp`] without touching the network. Requests
    /// above the available balance are clamped to it.
    pub async fn transfer_to_spot(
        &self,
        ccy: &Ccy,
        amount: Decimal,
    ) -> Result<TransferOutcome, SdkError> {
        let config = &self.client.config;
        let available = self.savings_balances().await?.amount(ccy);
        let min_amount = min_transfer_amount(ccy, &config.quote_ccy);

        let redeem_amount = match plan_redemption(available, amount, min_amount) {
            RedeemPlan::NoBalance => {
                tracing::info!(ccy = %ccy, "no savings balance to redeem");
                return Ok(TransferOutcome::NoOp {
                    reason: "no balance to redeem".to_string(),
                });
            }
            RedeemPlan::BelowMinimum => {
                tracing::info!(ccy = %ccy, %available, %min_amount, "savings balance below minimum redemption");
                return Ok(TransferOutcome::NoOp {
                    reason: "below minimum redemption".to_string(),
                });
            }
            RedeemPlan::Redeem {
                amount: planned,
                clamped,
            } => {
                if clamped {
                    tracing::warn!(
                        ccy = %ccy,
                        requested = %amount,
                        %available,
                        "redemption clamped to available savings balance"
                    );
                }
                planned
            }
        };

        let formatted = format_amount(redeem_amount, config.amount_precision(ccy));
        tracing::info!(ccy = %ccy, amt = %formatted, "redeeming savings to spot");

        // Leg 1: savings → funding. Fatal on any non-success code.
        let redemption = self
            .client
            .savings()
            .purchase_redempt(ccy, &formatted, SavingsSide::Redempt, SAVINGS_RATE)
            .await?;

        // The redeemed amount becomes visible in the funding account only
        // after ledger propagation.
        Delay::new(SETTLEMENT_DELAY).await;

        // Leg 2: funding → spot. Fatal; leg 1 is not compensated.
        self.client
            .funding()
            .transfer(ccy, &formatted, TransferAccount::Funding, TransferAccount::Trading)
            .await?;

        self.invalidate_after_transfer().await;
        tracing::info!(ccy = %ccy, amt = %formatted, "redemption pipeline complete");
        Ok(TransferOutcome::Success { data: redemption })
    }

    /// Park idle capital for yield: move `amount` of `ccy` spot → funding,
    /// then purchase it into savings.
    ///
    /// A dust amount is detected only after the spot → funding leg; the
    /// transfer is not rolled back and the funds remain in the funding
    /// account (see crate docs).
    pub async fn transfer_to_savings(
        &self,
        ccy: &Ccy,
        amount: Decimal,
    ) -> Result<TransferOutcome, SdkError> {
        let config = &self.client.config;
        let precision = config.amount_precision(ccy);
        let rounded = match precision {
            Some(dp) => amount.round_dp(dp),
            None => amount,
        };
        let formatted = format_amount(rounded, precision);

        tracing::info!(ccy = %ccy, amt = %formatted, "parking spot balance into savings");

        // Leg 1: spot → funding. Fatal; no compensation if a later step fails.
        self.client
            .funding()
            .transfer(ccy, &formatted, TransferAccount::Trading, TransferAccount::Funding)
            .await?;

        Delay::new(SETTLEMENT_DELAY).await;

        let min_amount = min_transfer_amount(ccy, &config.quote_ccy);
        if rounded < min_amount {
            tracing::warn!(
                ccy = %ccy,
                amt = %formatted,
                %min_amount,
                "amount below minimum purchase; funds remain in the funding account"
            );
            return Ok(TransferOutcome::NoOp {
                reason: "below minimum purchase".to_string(),
            });
        }

        // Context for the operator only; the purchase is not gated on it.
        let funding_available = self.funding_balances().await?.amount(ccy);
        tracing::info!(ccy = %ccy, %funding_available, "funding balance before purchase");

        // Leg 2: funding → savings purchase.
        match self
            .client
            .savings()
            .purchase_redempt(ccy, &formatted, SavingsSide::Purchase, SAVINGS_RATE)
            .await
        {
            Ok(purchase) => {
                self.invalidate_after_transfer().await;
                tracing::info!(ccy = %ccy, amt = %formatted, "savings purchase complete");
                Ok(TransferOutcome::Success { data: purchase })
            }
            Err(SdkError::Api(e)) if is_recoverable_purchase(&e.code) => {
                tracing::warn!(
                    ccy = %ccy,
                    code = %e.code,
                    msg = %e.message,
                    "savings purchase declined by product"
                );
                Ok(TransferOutcome::Failure {
                    code: e.code,
                    message: e.message,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Force-expire the slots a successful mutation invalidates, so the next
    /// balance read observes post-transfer state even inside the TTL window.
    async fn invalidate_after_transfer(&self) {
        let cache = &self.client.cache;
        cache.invalidate(AccountKind::Spot).await;
        cache.invalidate(AccountKind::Funding).await;
    }
}
