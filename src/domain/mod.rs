//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching exchange responses
//! - `client.rs` — Sub-client with the endpoint methods
//!
//! `funds` is the cross-account layer: it owns the per-account balance
//! caches, the unified balance view, and the transfer orchestrator.

pub mod account;
pub mod funding;
pub mod funds;
pub mod market;
pub mod savings;
pub mod trade;
