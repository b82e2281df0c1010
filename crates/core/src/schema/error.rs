//! Field-level validation errors.

use serde::{Deserialize, Serialize};

/// Machine-readable identifier for the validation rule a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A required field is missing (or explicitly null).
    Required,
    /// The field is present but has the wrong JSON type.
    InvalidType,
    /// A number or string is below its minimum.
    TooSmall,
    /// A string has the wrong length.
    InvalidLength,
    /// A string is not a valid email address.
    InvalidEmail,
    /// A string is not a valid ISO-8601 date-time.
    InvalidTimestamp,
    /// A value is outside the declared enum set.
    InvalidEnum,
    /// An array has fewer elements than required.
    TooFewItems,
}

/// One schema violation, addressed by field path.
///
/// Violations are collected, not short-circuited: a failed payload yields
/// every applicable violation at once so an integrator can fix it in a
/// single round trip. Array indices appear in the path as decimal strings
/// (`["items", "0", "quantity"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Path to the offending field.
    pub path: Vec<String>,
    /// Human-readable reason.
    pub message: String,
    /// Machine-readable validation-rule identifier.
    pub code: ErrorCode,
}

impl FieldError {
    pub(crate) fn new(path: Vec<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            code,
        }
    }
}
