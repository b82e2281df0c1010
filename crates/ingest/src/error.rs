//! Unified error handling for the ingestion endpoints.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use pulsemark_core::FieldError;

use crate::store::StoreError;

/// Application-level error type for ingestion requests.
///
/// Malformed-input and validation failures are normal outcomes of these
/// endpoints and carry precise client-facing detail. Storage and
/// unexpected failures are reported to clients as generic messages only;
/// their detail goes to operator diagnostics.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body was not parseable JSON. The message is the
    /// endpoint-specific client-facing text.
    #[error("malformed payload")]
    MalformedPayload(&'static str),

    /// One or more schema violations.
    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Document store operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// Anything else that went wrong during request handling.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Client-facing error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Storage and unexpected failures are captured for operators;
        // their detail never reaches the client.
        if matches!(self, Self::Storage(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Ingestion request error"
            );
        }

        let (status, body) = match self {
            Self::MalformedPayload(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: message.to_owned(),
                    errors: None,
                },
            ),
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: "Invalid request payload.".to_owned(),
                    errors: Some(errors),
                },
            ),
            Self::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    message: "Database operation failed. Please check server logs.".to_owned(),
                    errors: None,
                },
            ),
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    message: "Internal server error.".to_owned(),
                    errors: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
