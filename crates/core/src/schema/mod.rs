//! Payload contracts for third-party data ingestion.
//!
//! Each contract takes an arbitrary `serde_json::Value` and produces either
//! a canonical record or the complete list of field-level violations.
//! Validation is pure: nothing is logged or persisted here, and a record
//! that fails any check is never constructed.
//!
//! The contracts are open at the top level: keys the contract does not
//! declare ride along into the canonical record unmodified and are stored
//! verbatim. No coercion is performed - a numeric string where a number is
//! expected is a violation, not a conversion.

mod address;
mod customer;
mod error;
mod object;
mod order;

pub use address::Address;
pub use customer::CustomerRecord;
pub use error::{ErrorCode, FieldError};
pub use order::{OrderItem, OrderRecord};
