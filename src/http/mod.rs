//! HTTP client layer — `OkxHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::OkxHttp;
pub use retry::{with_retry, RetryConfig, RetryPolicy};
