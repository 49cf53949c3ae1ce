//! Orchestration-layer tests against a local mock exchange.
//!
//! These run offline: the client is pointed at an `httpmock` server via
//! `base_url`, so the cache/fetch/pipeline behavior is exercised end to end
//! without credentials or network access.

use std::time::Duration;

use httpmock::prelude::*;
use rust_decimal::Decimal;

use okx_sdk::prelude::*;

fn mock_client(server: &MockServer) -> OkxClient {
    OkxClient::builder()
        .base_url(&server.base_url())
        .inst_id("OKB-USDT")
        .credentials(Credentials::new("key", "secret", "phrase"))
        // Long TTL so freshness never expires mid-test; only explicit
        // invalidation can force a refetch.
        .cache_ttl(Duration::from_secs(60))
        .build()
        .expect("client construction with explicit credentials")
}

const SPOT_BALANCE_BODY: &str = r#"{"code":"0","msg":"","data":[
    {"details":[{"ccy":"USDT","availBal":"10","eq":"12"}]}
]}"#;

const FUNDING_BALANCE_BODY: &str = r#"{"code":"0","msg":"","data":[
    {"ccy":"USDT","availBal":"5"}
]}"#;

const SAVINGS_BALANCE_BODY: &str = r#"{"code":"0","msg":"","data":[
    {"ccy":"USDT","amt":"8","earnings":"0.01"}
]}"#;

const TRANSFER_ACK_BODY: &str = r#"{"code":"0","msg":"","data":[
    {"transId":"1","ccy":"USDT","amt":"2","from":"6","to":"18"}
]}"#;

const REDEMPT_ACK_BODY: &str = r#"{"code":"0","msg":"","data":[
    {"ccy":"USDT","amt":"2","side":"redempt","rate":"0.01"}
]}"#;

#[tokio::test]
async fn spot_reads_within_ttl_hit_the_exchange_once() {
    let server = MockServer::start_async().await;
    let balance = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v5/account/balance");
            then.status(200).body(SPOT_BALANCE_BODY);
        })
        .await;
    let client = mock_client(&server);

    let first = client.funds().spot_balances().await.unwrap();
    let second = client.funds().spot_balances().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.free(&Ccy::new("USDT")), Decimal::from(10));
    balance.assert_hits_async(1).await;
}

#[tokio::test]
async fn successful_redemption_invalidates_spot_and_funding_but_not_savings() {
    let server = MockServer::start_async().await;
    let spot = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v5/account/balance");
            then.status(200).body(SPOT_BALANCE_BODY);
        })
        .await;
    let funding = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v5/asset/balances");
            then.status(200).body(FUNDING_BALANCE_BODY);
        })
        .await;
    let savings = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v5/finance/savings/balance");
            then.status(200).body(SAVINGS_BALANCE_BODY);
        })
        .await;
    let redempt = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v5/finance/savings/purchase-redempt");
            then.status(200).body(REDEMPT_ACK_BODY);
        })
        .await;
    let transfer = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v5/asset/transfer");
            then.status(200).body(TRANSFER_ACK_BODY);
        })
        .await;
    let client = mock_client(&server);

    // Prime all three slots.
    client.funds().balances().await.unwrap();
    spot.assert_hits_async(1).await;
    funding.assert_hits_async(1).await;
    savings.assert_hits_async(1).await;

    let outcome = client
        .funds()
        .transfer_to_spot(&Ccy::new("USDT"), Decimal::from(2))
        .await
        .unwrap();
    assert!(outcome.is_success(), "expected Success, got {:?}", outcome);
    redempt.assert_hits_async(1).await;
    transfer.assert_hits_async(1).await;

    // Spot and funding were invalidated by the mutation: the next unified
    // read refetches both even though the TTL has not expired. The savings
    // slot stays cached.
    client.funds().balances().await.unwrap();
    spot.assert_hits_async(2).await;
    funding.assert_hits_async(2).await;
    savings.assert_hits_async(1).await;
}

#[tokio::test]
async fn recoverable_purchase_code_degrades_to_structured_failure() {
    let server = MockServer::start_async().await;
    let transfer = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v5/asset/transfer");
            then.status(200).body(TRANSFER_ACK_BODY);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v5/asset/balances");
            then.status(200).body(FUNDING_BALANCE_BODY);
        })
        .await;
    // The purchase is declined inside an HTTP 200.
    let purchase = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v5/finance/savings/purchase-redempt");
            then.status(200)
                .body(r#"{"code":"58350","msg":"Insufficient balance","data":[]}"#);
        })
        .await;
    let client = mock_client(&server);

    let outcome = client
        .funds()
        .transfer_to_savings(&Ccy::new("USDT"), Decimal::from(2))
        .await
        .unwrap();

    transfer.assert_hits_async(1).await;
    purchase.assert_hits_async(1).await;
    match outcome {
        TransferOutcome::Failure { code, message } => {
            assert_eq!(code, "58350");
            assert_eq!(message, "Insufficient balance");
        }
        other => panic!("expected Failure, got {:?}", other),
    }
}

#[tokio::test]
async fn dust_purchase_short_circuits_after_the_transfer_leg() {
    let server = MockServer::start_async().await;
    let transfer = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v5/asset/transfer");
            then.status(200).body(TRANSFER_ACK_BODY);
        })
        .await;
    let purchase = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v5/finance/savings/purchase-redempt");
            then.status(200).body(REDEMPT_ACK_BODY);
        })
        .await;
    let client = mock_client(&server);

    // 0.5 USDT is below the 1.0 quote-currency minimum: the transfer leg
    // runs, the purchase never does.
    let outcome = client
        .funds()
        .transfer_to_savings(&Ccy::new("USDT"), Decimal::new(5, 1))
        .await
        .unwrap();

    assert!(outcome.is_noop(), "expected NoOp, got {:?}", outcome);
    transfer.assert_hits_async(1).await;
    purchase.assert_hits_async(0).await;
}
