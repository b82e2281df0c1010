//! Currency code type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a currency code has the wrong length.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("currency code must be exactly 3 characters")]
pub struct CurrencyCodeError;

/// An ISO 4217-style currency code: exactly three characters.
///
/// No registry lookup is performed; third-party systems occasionally send
/// codes that are well-formed but not (yet) in the ISO table, and those
/// are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parse a `CurrencyCode` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 3 characters long.
    pub fn parse(s: &str) -> Result<Self, CurrencyCodeError> {
        if s.chars().count() != 3 {
            return Err(CurrencyCodeError);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the currency code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
