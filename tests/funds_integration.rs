//! Integration tests for the funds orchestration layer.
//!
//! These tests talk to the demo-trading environment and exercise the full
//! cache → fetch → merge → transfer pipeline with real credentials.
//!
//! All tests are `#[ignore]` because they require network access and
//! `OKX_API_KEY` / `OKX_SECRET_KEY` / `OKX_PASSPHRASE` in the environment
//! (a `.env` file is honored).
//!
//! Run with:
//! ```bash
//! cargo test --test funds_integration -- --ignored
//! ```

use std::time::Duration;

use rust_decimal::Decimal;

use okx_sdk::prelude::*;

fn demo_client() -> OkxClient {
    dotenvy::dotenv().ok();
    OkxClient::builder()
        .inst_id("OKB-USDT")
        .simulated(true)
        .cache_ttl(Duration::from_millis(200))
        .build()
        .expect("credentials must be present to run ignored integration tests")
}

#[tokio::test]
#[ignore]
async fn unified_balances_include_configured_currencies() {
    let client = demo_client();
    let balances = client.funds().balances().await.expect("balance read");

    // Seeding guarantees the configured pair is always present, even on a
    // fresh demo account with nothing in funding or savings.
    let usdt = balances.get(&Ccy::new("USDT"));
    assert!(usdt.total >= usdt.free);
    assert_eq!(usdt.total, usdt.free + usdt.used);
}

#[tokio::test]
#[ignore]
async fn second_read_within_ttl_is_served_from_cache() {
    let client = demo_client();
    let first = client.funds().spot_balances().await.expect("first read");
    let second = client.funds().spot_balances().await.expect("second read");
    // Within the TTL window both reads must observe identical data.
    assert_eq!(first, second);
}

#[tokio::test]
#[ignore]
async fn speculative_dust_redemption_is_a_noop() {
    let client = demo_client();
    // Demo savings accounts hold nothing; the pipeline must short-circuit
    // without submitting a redemption.
    let outcome = client
        .funds()
        .transfer_to_spot(&Ccy::new("OKB"), Decimal::from(1))
        .await
        .expect("pipeline must not raise on empty balances");
    assert!(outcome.is_noop(), "expected NoOp, got {:?}", outcome);
}

#[tokio::test]
#[ignore]
async fn ticker_round_trip() {
    let client = demo_client();
    let ticker = client
        .market()
        .ticker(&InstId::new("OKB-USDT"))
        .await
        .expect("ticker fetch");
    assert!(ticker.last > Decimal::ZERO);
}
