//! Integration tests for the order ingestion endpoint.
//!
//! These tests require the ingest service running
//! (cargo run -p pulsemark-ingest). The orders endpoint does not touch the
//! document store.
//!
//! Run with: cargo test -p pulsemark-integration-tests -- --ignored

#![allow(clippy::unwrap_used)]

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

use pulsemark_integration_tests::ingest_base_url;

/// Test helper: an order payload with a unique external id.
fn unique_order() -> Value {
    json!({
        "id": format!("ord_it_{}", Uuid::new_v4().simple()),
        "customerId": "cust_it_orders",
        "orderDate": "2024-07-21T14:35:00Z",
        "items": [{
            "productId": "prod_ABC",
            "productName": "Awesome T-Shirt",
            "quantity": 2,
            "unitPrice": 25.5,
            "totalPrice": 51.0
        }],
        "totalAmount": 51.0,
        "currency": "USD",
        "status": "processing"
    })
}

#[tokio::test]
#[ignore = "Requires running ingest service"]
async fn valid_order_is_acknowledged() {
    let client = Client::new();
    let payload = unique_order();
    let id = payload["id"].as_str().unwrap().to_owned();

    let resp = client
        .post(format!("{}/ingest/orders", ingest_base_url()))
        .json(&payload)
        .send()
        .await
        .expect("Failed to post order");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["message"], format!("Order data received for order ID {id}."));
    assert_eq!(body["data"], payload);
}

#[tokio::test]
#[ignore = "Requires running ingest service"]
async fn empty_items_is_rejected() {
    let client = Client::new();
    let mut payload = unique_order();
    payload["items"] = json!([]);

    let resp = client
        .post(format!("{}/ingest/orders", ingest_base_url()))
        .json(&payload)
        .send()
        .await
        .expect("Failed to post order");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["errors"][0]["path"], json!(["items"]));
}

#[tokio::test]
#[ignore = "Requires running ingest service"]
async fn wrong_length_currency_is_rejected() {
    let client = Client::new();
    let mut payload = unique_order();
    payload["currency"] = json!("USDX");

    let resp = client
        .post(format!("{}/ingest/orders", ingest_base_url()))
        .json(&payload)
        .send()
        .await
        .expect("Failed to post order");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["errors"][0]["path"], json!(["currency"]));
}

#[tokio::test]
#[ignore = "Requires running ingest service"]
async fn malformed_body_is_rejected() {
    let client = Client::new();
    let resp = client
        .post(format!("{}/ingest/orders", ingest_base_url()))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await
        .expect("Failed to post order");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["message"], "Invalid JSON payload.");
}
