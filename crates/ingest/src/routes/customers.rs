//! Customer ingestion route handler.

use axum::Json;
use axum::extract::{Request, State};
use tracing::instrument;

use pulsemark_core::CustomerRecord;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::CUSTOMERS_COLLECTION;

use super::{IngestAck, parse_json_body};

/// Malformed-body message for this endpoint. Kept verbatim: third-party
/// integrations match on it.
const MALFORMED_BODY: &str =
    "Invalid JSON payload. Please ensure the request body is correctly formatted JSON.";

/// `POST /ingest/customers` - validate a customer payload and persist it.
///
/// The canonical record is written to the `customers` collection under the
/// payload's external id, fully replacing any previous document with that
/// id. Validation failures return the complete violation list; storage
/// failures return a generic message only.
#[instrument(skip_all)]
pub async fn ingest(
    State(state): State<AppState>,
    req: Request,
) -> Result<Json<IngestAck<CustomerRecord>>, ApiError> {
    let body = parse_json_body(req, MALFORMED_BODY).await?;

    let record = CustomerRecord::from_value(body).map_err(|errors| {
        tracing::debug!(violations = errors.len(), "customer payload rejected");
        ApiError::Validation(errors)
    })?;
    tracing::debug!(customer_id = %record.id, "customer payload validated");

    let document = serde_json::to_value(&record)
        .map_err(|e| ApiError::Internal(format!("failed to serialize customer record: {e}")))?;
    state
        .store()
        .put_document(CUSTOMERS_COLLECTION, &record.id, &document)
        .await?;
    tracing::info!(customer_id = %record.id, "customer document saved");

    Ok(Json(IngestAck {
        message: format!(
            "Customer data received and saved for customer ID {}.",
            record.id
        ),
        data: record,
    }))
}
