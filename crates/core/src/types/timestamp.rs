//! ISO-8601 timestamp type.

use core::fmt;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Error returned when a string is not a valid ISO-8601 date-time.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid ISO-8601 date-time: {0}")]
pub struct TimestampError(String);

/// An ISO-8601 date-time, kept as the text the integrator sent.
///
/// Parsing only checks that the text is a valid RFC 3339 date-time; the
/// original representation is retained so canonical records echo and store
/// exactly what arrived (offset notation included).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// Parse a `Timestamp` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not an RFC 3339 date-time.
    pub fn parse(s: &str) -> Result<Self, TimestampError> {
        DateTime::parse_from_rfc3339(s).map_err(|e| TimestampError(e.to_string()))?;
        Ok(Self(s.to_owned()))
    }

    /// Returns the timestamp as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Timestamp` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Timestamp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
