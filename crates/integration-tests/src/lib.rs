//! Integration tests for Pulsemark.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p pulsemark-cli -- migrate ingest
//!
//! # Start the ingest service
//! cargo run -p pulsemark-ingest
//!
//! # Run integration tests
//! cargo test -p pulsemark-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `ingest_customers` - Customer ingestion endpoint tests
//! - `ingest_orders` - Order ingestion endpoint tests

#![cfg_attr(not(test), forbid(unsafe_code))]

/// Base URL for the ingest service (configurable via environment).
#[must_use]
pub fn ingest_base_url() -> String {
    std::env::var("INGEST_BASE_URL").unwrap_or_else(|_| "http://localhost:3002".to_string())
}
