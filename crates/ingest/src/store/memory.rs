//! In-memory document store.
//!
//! Backs the handler tests and local development runs that don't need
//! `PostgreSQL`. Same upsert semantics as the real store: the last write
//! for a given (collection, id) wins.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use super::{DocumentStore, StoreError};

/// Document store held entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<(String, String), JsonValue>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a stored document, if present.
    #[must_use]
    pub fn get(&self, collection: &str, id: &str) -> Option<JsonValue> {
        self.documents
            .lock()
            .ok()?
            .get(&(collection.to_owned(), id.to_owned()))
            .cloned()
    }

    /// Number of documents currently held in a collection.
    #[must_use]
    pub fn count(&self, collection: &str) -> usize {
        self.documents
            .lock()
            .map(|documents| {
                documents
                    .keys()
                    .filter(|(held, _)| held == collection)
                    .count()
            })
            .unwrap_or(0)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn put_document(
        &self,
        collection: &str,
        id: &str,
        document: &JsonValue,
    ) -> Result<(), StoreError> {
        let mut documents = self
            .documents
            .lock()
            .map_err(|_| StoreError::Backend("store mutex poisoned".to_owned()))?;
        documents.insert((collection.to_owned(), id.to_owned()), document.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = MemoryStore::new();
        store
            .put_document("customers", "cust_1", &json!({"id": "cust_1"}))
            .await
            .unwrap();

        assert_eq!(store.get("customers", "cust_1"), Some(json!({"id": "cust_1"})));
        assert_eq!(store.get("customers", "cust_2"), None);
    }

    #[tokio::test]
    async fn repeated_puts_replace_the_document() {
        let store = MemoryStore::new();
        store
            .put_document("customers", "cust_1", &json!({"name": "A"}))
            .await
            .unwrap();
        store
            .put_document("customers", "cust_1", &json!({"name": "B"}))
            .await
            .unwrap();

        assert_eq!(store.count("customers"), 1);
        assert_eq!(store.get("customers", "cust_1"), Some(json!({"name": "B"})));
    }
}
