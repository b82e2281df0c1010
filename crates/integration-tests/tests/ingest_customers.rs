//! Integration tests for the customer ingestion endpoint.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//!   (cargo run -p pulsemark-cli -- migrate ingest)
//! - The ingest service running (cargo run -p pulsemark-ingest)
//!
//! Run with: cargo test -p pulsemark-integration-tests -- --ignored

#![allow(clippy::unwrap_used)]

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

use pulsemark_integration_tests::ingest_base_url;

/// Test helper: a customer payload with a unique external id.
fn unique_customer() -> Value {
    json!({
        "id": format!("cust_it_{}", Uuid::new_v4().simple()),
        "name": "Integration Tester",
        "email": "integration@example.com",
        "tags": ["integration"],
        "crm_source": "integration-suite"
    })
}

#[tokio::test]
#[ignore = "Requires running ingest service and document store"]
async fn valid_customer_is_accepted_and_echoed() {
    let client = Client::new();
    let payload = unique_customer();
    let id = payload["id"].as_str().unwrap().to_owned();

    let resp = client
        .post(format!("{}/ingest/customers", ingest_base_url()))
        .json(&payload)
        .send()
        .await
        .expect("Failed to post customer");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(
        body["message"],
        format!("Customer data received and saved for customer ID {id}.")
    );
    assert_eq!(body["data"], payload);
}

#[tokio::test]
#[ignore = "Requires running ingest service and document store"]
async fn re_ingesting_the_same_id_succeeds() {
    let client = Client::new();
    let mut payload = unique_customer();

    for name in ["First", "Second"] {
        payload["name"] = json!(name);
        let resp = client
            .post(format!("{}/ingest/customers", ingest_base_url()))
            .json(&payload)
            .send()
            .await
            .expect("Failed to post customer");
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

#[tokio::test]
#[ignore = "Requires running ingest service and document store"]
async fn missing_email_is_a_field_error() {
    let client = Client::new();
    let resp = client
        .post(format!("{}/ingest/customers", ingest_base_url()))
        .json(&json!({"id": "cust_it_invalid", "name": "No Email"}))
        .send()
        .await
        .expect("Failed to post customer");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["message"], "Invalid request payload.");
    assert_eq!(body["errors"][0]["path"], json!(["email"]));
}

#[tokio::test]
#[ignore = "Requires running ingest service and document store"]
async fn malformed_body_is_rejected_without_field_errors() {
    let client = Client::new();
    let resp = client
        .post(format!("{}/ingest/customers", ingest_base_url()))
        .header("content-type", "application/json")
        .body("{broken")
        .send()
        .await
        .expect("Failed to post customer");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(
        body["message"],
        "Invalid JSON payload. Please ensure the request body is correctly formatted JSON."
    );
    assert!(body.get("errors").is_none());
}
