//! HTTP route handlers for the ingestion service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health            - Liveness check
//! GET  /health/ready      - Readiness check (pings the document store)
//!
//! # Ingestion
//! POST /ingest/customers  - Validate and persist a customer payload
//! POST /ingest/orders     - Validate and echo an order payload
//! ```

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

pub mod customers;
pub mod orders;

/// Request bodies above this size are rejected before parsing.
pub(crate) const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Build the service router.
#[must_use]
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/ingest/customers", post(customers::ingest))
        .route("/ingest/orders", post(orders::ingest))
}

/// Successful ingestion acknowledgement: a confirmation message plus the
/// canonical record as accepted.
#[derive(Debug, Serialize)]
pub struct IngestAck<T> {
    pub message: String,
    pub data: T,
}

/// Buffer the request body and parse it as JSON.
///
/// A body that cannot be read is an unexpected failure (500); a body that
/// reads fine but is not JSON is a malformed payload (400) carrying the
/// endpoint's own client-facing message.
pub(crate) async fn parse_json_body(
    req: Request,
    malformed_message: &'static str,
) -> Result<Value, ApiError> {
    let bytes: Bytes = axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| ApiError::Internal(format!("failed to read request body: {e}")))?;
    serde_json::from_slice(&bytes).map_err(|_| ApiError::MalformedPayload(malformed_message))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies document store connectivity before returning OK.
/// Returns 503 Service Unavailable if the store is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.store().ping().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Shared scaffolding for exercising the router against test stores.
#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod testing {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config;
    use crate::state::AppState;
    use crate::store::DocumentStore;

    pub(crate) fn app(store: Arc<dyn DocumentStore>) -> Router {
        super::routes().with_state(AppState::new(config::test_config(), store))
    }

    pub(crate) async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }
}
