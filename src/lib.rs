//! # OKX SDK
//!
//! A Rust SDK for the OKX v5 REST API, built around a cross-account fund and
//! balance orchestration layer: capital lives in three sub-accounts —
//! trading (spot), custody (funding) and an interest-bearing savings
//! product — and this crate keeps a short-TTL cached view of all three,
//! merges them into one consistent balance map, and runs the multi-step
//! transfer pipelines that move capital between them.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, wire types
//! 2. **Auth** — Credential guard + request signing
//! 3. **HTTP API** — `OkxHttp` with per-endpoint retry policies and
//!    envelope decoding (`code == "0"` checked exactly once)
//! 4. **High-Level Client** — `OkxClient` with nested sub-clients and the
//!    balance cache
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use okx_sdk::prelude::*;
//!
//! // Reads OKX_API_KEY / OKX_SECRET_KEY / OKX_PASSPHRASE from the
//! // environment; construction fails fast when one is missing.
//! let client = OkxClient::builder()
//!     .inst_id("OKB-USDT")
//!     .simulated(true)
//!     .build()?;
//!
//! let balances = client.funds().balances().await?;
//! let outcome = client
//!     .funds()
//!     .transfer_to_spot(&Ccy::new("USDT"), dec_amount)
//!     .await?;
//! ```
//!
//! ## Caveats worth knowing
//!
//! - Transfer pipelines are **non-atomic**: two exchange mutations with a
//!   fixed settlement delay between them, no rollback of the first leg if
//!   the second fails, and no cancellation checkpoint during the delay.
//! - The balance cache does not coalesce refetches and the SDK does not
//!   serialize transfers per asset; the calling strategy is expected to
//!   issue at most one fund movement per asset at a time.

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Client configuration surface.
pub mod config;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Credential guard and request signing.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `OkxClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

/// Best-effort webhook notifications.
#[cfg(feature = "http")]
pub mod notify;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{format_amount, Ccy, InstId};

    // Domain types — account, funding, savings
    pub use crate::domain::account::{AssetBalance, SpotSnapshot};
    pub use crate::domain::funding::{FundingSnapshot, TransferAccount};
    pub use crate::domain::savings::{SavingsSide, SavingsSnapshot};

    // Domain types — funds orchestration
    pub use crate::domain::funds::{
        merge, min_transfer_amount, AccountKind, TransferOutcome, UnifiedBalances,
    };

    // Domain types — market & trade
    pub use crate::domain::market::{BookLevel, Candle, OrderBook};
    pub use crate::domain::trade::{OrderSide, OrderState, OrderType};

    // Errors
    pub use crate::error::{ApiError, ConfigError, HttpError, SdkError};

    // Config + auth
    pub use crate::auth::Credentials;
    pub use crate::config::ClientConfig;

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{OkxClient, OkxClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::domain::funds::cache::BalanceCache;
    #[cfg(feature = "http")]
    pub use crate::http::{RetryConfig, RetryPolicy};
    #[cfg(feature = "http")]
    pub use crate::notify::Notifier;
}
