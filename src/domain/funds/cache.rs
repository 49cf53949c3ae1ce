//! Per-account-kind TTL balance cache.
//!
//! One slot per account kind, exclusively owned by the funds layer. A slot
//! is created empty, replaced on each successful refetch, and cleared after
//! any successful mutating transfer so the next read observes post-transfer
//! state.
//!
//! Reads are not coalesced: two tasks that both observe an expired slot each
//! trigger their own refetch. With TTLs in the sub-second range this is an
//! accepted cost; callers that need stronger guarantees serialize their own
//! reads.

use async_lock::RwLock;
use std::time::{Duration, Instant};

use crate::domain::account::SpotSnapshot;
use crate::domain::funding::FundingSnapshot;
use crate::domain::funds::AccountKind;
use crate::domain::savings::SavingsSnapshot;

#[derive(Debug)]
struct Stamped<T> {
    value: T,
    fetched_at: Instant,
}

/// One cache slot.
#[derive(Debug)]
pub struct Slot<T> {
    inner: RwLock<Option<Stamped<T>>>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }
}

impl<T: Clone> Slot<T> {
    /// The cached value, if present and younger than `ttl`.
    pub async fn get(&self, ttl: Duration) -> Option<T> {
        self.inner
            .read()
            .await
            .as_ref()
            .filter(|stamped| stamped.fetched_at.elapsed() < ttl)
            .map(|stamped| stamped.value.clone())
    }

    /// The last known value regardless of freshness. Used to degrade reads
    /// when a refetch fails.
    pub async fn get_stale(&self) -> Option<T> {
        self.inner
            .read()
            .await
            .as_ref()
            .map(|stamped| stamped.value.clone())
    }

    pub async fn put(&self, value: T) {
        *self.inner.write().await = Some(Stamped {
            value,
            fetched_at: Instant::now(),
        });
    }

    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }
}

/// The three balance cache slots plus their shared TTL.
#[derive(Debug)]
pub struct BalanceCache {
    pub(crate) spot: Slot<SpotSnapshot>,
    pub(crate) funding: Slot<FundingSnapshot>,
    pub(crate) savings: Slot<SavingsSnapshot>,
    ttl: Duration,
}

impl BalanceCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            spot: Slot::default(),
            funding: Slot::default(),
            savings: Slot::default(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Force-expire one slot. Idempotent; clearing an empty slot is harmless.
    pub async fn invalidate(&self, kind: AccountKind) {
        match kind {
            AccountKind::Spot => self.spot.clear().await,
            AccountKind::Funding => self.funding.clear().await,
            AccountKind::Savings => self.savings.clear().await,
        }
    }

    pub async fn invalidate_all(&self) {
        self.spot.clear().await;
        self.funding.clear().await;
        self.savings.clear().await;
    }
}
