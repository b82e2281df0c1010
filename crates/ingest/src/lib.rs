//! Pulsemark Ingest library.
//!
//! This crate provides the ingestion service as a library, allowing it to
//! be tested and reused.
//!
//! Two POST endpoints accept third-party data. `/ingest/customers`
//! validates a payload against the customer contract and persists the
//! canonical record into the document store, keyed by the customer's
//! external id (upsert, last write wins). `/ingest/orders` validates
//! against the order contract and acknowledges without persisting - an
//! explicit interim behavior of the orders pipeline, not an oversight.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;
