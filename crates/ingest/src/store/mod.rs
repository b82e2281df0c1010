//! Document store access for ingested records.
//!
//! The backing database is treated as an opaque document store: named
//! collections of JSON documents addressed by a caller-supplied id. Writes
//! are unconditional upserts, and the store serializes individual document
//! writes, so concurrent writers for one id resolve last-write-wins with
//! no locking or versioning here.

mod memory;
mod postgres;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use thiserror::Error;

pub use memory::MemoryStore;
pub use postgres::{PgDocumentStore, create_pool};

/// Collection that holds one document per ingested customer, keyed by the
/// customer's external id.
pub const CUSTOMERS_COLLECTION: &str = "customers";

/// Errors surfaced by document store operations.
///
/// The adapter classifies failures but never retries or interprets them;
/// the caller decides how much of this reaches a client.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("document store unreachable: {0}")]
    Connectivity(String),
    /// The store refused the operation.
    #[error("document store permission denied: {0}")]
    PermissionDenied(String),
    /// Any other backend failure.
    #[error("document store backend error: {0}")]
    Backend(String),
}

/// A document store keyed by collection name and document id.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Write `document` under `collection`/`id`, creating it if absent and
    /// fully replacing it if present.
    async fn put_document(
        &self,
        collection: &str,
        id: &str,
        document: &JsonValue,
    ) -> Result<(), StoreError>;

    /// Cheap connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), StoreError>;
}
