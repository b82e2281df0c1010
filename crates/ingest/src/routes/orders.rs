//! Order ingestion route handler.

use axum::Json;
use axum::extract::Request;
use tracing::instrument;

use pulsemark_core::OrderRecord;

use crate::error::ApiError;

use super::{IngestAck, parse_json_body};

/// Malformed-body message for this endpoint.
const MALFORMED_BODY: &str = "Invalid JSON payload.";

/// `POST /ingest/orders` - validate an order payload and echo it back.
///
/// Orders run through the full contract but are not yet persisted; the
/// endpoint acknowledges the canonical record and discards it. Interim
/// behavior of the orders pipeline - the response shape will not change
/// when persistence lands.
#[instrument(skip_all)]
pub async fn ingest(req: Request) -> Result<Json<IngestAck<OrderRecord>>, ApiError> {
    let body = parse_json_body(req, MALFORMED_BODY).await?;

    let record = OrderRecord::from_value(body).map_err(|errors| {
        tracing::debug!(violations = errors.len(), "order payload rejected");
        ApiError::Validation(errors)
    })?;
    tracing::info!(order_id = %record.id, customer_id = %record.customer_id, "order payload received");

    Ok(Json(IngestAck {
        message: format!("Order data received for order ID {}.", record.id),
        data: record,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::routes::testing::{app, post_json};
    use crate::store::MemoryStore;

    fn minimal_order() -> Value {
        json!({
            "id": "ord_1",
            "customerId": "cust_1",
            "orderDate": "2024-01-01T00:00:00Z",
            "items": [{
                "productId": "p1",
                "productName": "X",
                "quantity": 1,
                "unitPrice": 10,
                "totalPrice": 10
            }],
            "totalAmount": 10,
            "currency": "USD"
        })
    }

    #[tokio::test]
    async fn valid_order_is_echoed_without_persisting() {
        let store = Arc::new(MemoryStore::new());
        let (status, body) = post_json(
            app(store.clone()),
            "/ingest/orders",
            minimal_order().to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Order data received for order ID ord_1.");
        assert_eq!(body["data"]["id"], "ord_1");
        assert_eq!(body["data"]["customerId"], "cust_1");
        assert_eq!(body["data"]["orderDate"], "2024-01-01T00:00:00Z");
        assert_eq!(body["data"]["items"][0]["quantity"], json!(1));
        assert_eq!(body["data"]["currency"], "USD");

        // No storage side effect is observable.
        assert_eq!(store.count("customers"), 0);
        assert_eq!(store.count("orders"), 0);
    }

    #[tokio::test]
    async fn empty_items_is_rejected_with_a_field_error() {
        let mut payload = minimal_order();
        payload["items"] = json!([]);

        let (status, body) = post_json(
            app(Arc::new(MemoryStore::new())),
            "/ingest/orders",
            payload.to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid request payload.");
        assert_eq!(
            body["errors"],
            json!([{
                "path": ["items"],
                "message": "must contain at least 1 item(s)",
                "code": "too_few_items",
            }])
        );
    }

    #[tokio::test]
    async fn bad_currency_is_rejected() {
        for bad in ["US", "USDX"] {
            let mut payload = minimal_order();
            payload["currency"] = json!(bad);

            let (status, body) = post_json(
                app(Arc::new(MemoryStore::new())),
                "/ingest/orders",
                payload.to_string(),
            )
            .await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "currency {bad}");
            assert_eq!(body["errors"][0]["path"], json!(["currency"]));
            assert_eq!(body["errors"][0]["code"], "invalid_length");
        }
    }

    #[tokio::test]
    async fn item_violations_are_reported_with_indices() {
        let mut payload = minimal_order();
        payload["items"][0]["quantity"] = json!(0);

        let (status, body) = post_json(
            app(Arc::new(MemoryStore::new())),
            "/ingest/orders",
            payload.to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["path"], json!(["items", "0", "quantity"]));
        assert_eq!(body["errors"][0]["code"], "too_small");
    }

    #[tokio::test]
    async fn unknown_status_is_rejected() {
        let mut payload = minimal_order();
        payload["status"] = json!("misplaced");

        let (status, body) = post_json(
            app(Arc::new(MemoryStore::new())),
            "/ingest/orders",
            payload.to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["path"], json!(["status"]));
        assert_eq!(body["errors"][0]["code"], "invalid_enum");
    }

    #[tokio::test]
    async fn malformed_json_gets_the_short_message() {
        let (status, body) = post_json(
            app(Arc::new(MemoryStore::new())),
            "/ingest/orders",
            "not json at all".to_owned(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid JSON payload.");
        assert!(body.get("errors").is_none());
    }

    #[tokio::test]
    async fn passthrough_fields_are_echoed() {
        let mut payload = minimal_order();
        payload["warehouseHint"] = json!("east-2");

        let (status, body) = post_json(
            app(Arc::new(MemoryStore::new())),
            "/ingest/orders",
            payload.to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["warehouseHint"], "east-2");
    }
}
