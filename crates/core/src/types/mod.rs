//! Core types for Pulsemark.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod currency;
pub mod email;
pub mod status;
pub mod timestamp;

pub use currency::{CurrencyCode, CurrencyCodeError};
pub use email::{Email, EmailError};
pub use status::OrderStatus;
pub use timestamp::{Timestamp, TimestampError};
