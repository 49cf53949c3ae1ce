//! High-level client — `OkxClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder, the shared balance cache, and the accessors.

use std::sync::Arc;
use std::time::Duration;

use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::domain::account::client::Account;
use crate::domain::funding::client::Funding;
use crate::domain::funds::cache::BalanceCache;
use crate::domain::funds::client::Funds;
use crate::domain::market::client::Market;
use crate::domain::savings::client::Savings;
use crate::domain::trade::client::Trade;
use crate::error::SdkError;
use crate::http::OkxHttp;
use crate::notify::Notifier;
use crate::shared::{Ccy, InstId};

/// The primary entry point for the OKX SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.market()`, `client.funds()`, etc. The balance cache is owned
/// here and shared by clones; no other component mutates it.
pub struct OkxClient {
    pub(crate) http: OkxHttp,
    pub(crate) config: ClientConfig,
    pub(crate) cache: Arc<BalanceCache>,
    notifier: Notifier,
}

impl OkxClient {
    pub fn builder() -> OkxClientBuilder {
        OkxClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn market(&self) -> Market<'_> {
        Market { client: self }
    }

    pub fn trade(&self) -> Trade<'_> {
        Trade { client: self }
    }

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }

    pub fn funding(&self) -> Funding<'_> {
        Funding { client: self }
    }

    pub fn savings(&self) -> Savings<'_> {
        Savings { client: self }
    }

    pub fn funds(&self) -> Funds<'_> {
        Funds { client: self }
    }

    /// The best-effort webhook notifier.
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Force-expire all balance cache slots.
    pub async fn clear_balance_cache(&self) {
        self.cache.invalidate_all().await;
    }
}

impl Clone for OkxClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            config: self.config.clone(),
            cache: self.cache.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct OkxClientBuilder {
    base_url: String,
    config: ClientConfig,
    credentials: Option<Credentials>,
    webhook_key: Option<String>,
}

impl Default for OkxClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            config: ClientConfig::default(),
            credentials: None,
            webhook_key: None,
        }
    }
}

impl OkxClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Trading instrument; also derives the base/quote currencies when they
    /// follow the `BASE-QUOTE` convention.
    pub fn inst_id(mut self, inst_id: impl Into<InstId>) -> Self {
        let inst_id = inst_id.into();
        if let Some((base, quote)) = inst_id.as_str().split_once('-') {
            self.config.base_ccy = Ccy::new(base);
            self.config.quote_ccy = Ccy::new(quote);
        }
        self.config.inst_id = inst_id;
        self
    }

    /// Route all requests to the demo-trading environment.
    pub fn simulated(mut self, simulated: bool) -> Self {
        self.config.simulated = simulated;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.config.cache_ttl = ttl;
        self
    }

    /// Pre-set credentials instead of reading them from the environment.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Enable the webhook notifier.
    pub fn webhook_key(mut self, key: impl Into<String>) -> Self {
        self.webhook_key = Some(key.into());
        self
    }

    /// Build the client.
    ///
    /// Credentials not provided explicitly are loaded from the environment;
    /// a missing secret aborts construction here, before any
    /// network-capable component exists.
    pub fn build(self) -> Result<OkxClient, SdkError> {
        let credentials = match self.credentials {
            Some(c) => c,
            None => Credentials::from_env()?,
        };

        let http = OkxHttp::new(
            &self.base_url,
            credentials,
            self.config.timeout,
            self.config.simulated,
        )?;
        let notifier = Notifier::new(self.webhook_key, http.raw_client());
        let cache = Arc::new(BalanceCache::new(self.config.cache_ttl));

        tracing::info!(
            inst_id = %self.config.inst_id,
            simulated = self.config.simulated,
            cache_ttl_ms = self.config.cache_ttl.as_millis() as u64,
            "exchange client initialized"
        );

        Ok(OkxClient {
            http,
            config: self.config,
            cache,
            notifier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inst_id_derives_currency_roles() {
        let client = OkxClient::builder()
            .inst_id("ETH-USDC")
            .credentials(Credentials::new("k", "s", "p"))
            .build()
            .unwrap();
        assert_eq!(client.config().base_ccy, Ccy::new("ETH"));
        assert_eq!(client.config().quote_ccy, Ccy::new("USDC"));
        assert_eq!(client.config().inst_id.as_str(), "ETH-USDC");
    }

    #[test]
    fn explicit_credentials_bypass_the_environment() {
        let client = OkxClient::builder()
            .credentials(Credentials::new("k", "s", "p"))
            .cache_ttl(Duration::from_millis(500))
            .build()
            .unwrap();
        assert_eq!(client.cache.ttl(), Duration::from_millis(500));
    }
}
