//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::IngestConfig;
use crate::store::DocumentStore;

/// Application state shared across all handlers.
///
/// Cheap to clone; the inner state is reference-counted. The document
/// store sits behind a trait object so handlers are exercised against the
/// in-memory store in tests and `PostgreSQL` in production.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: IngestConfig,
    store: Arc<dyn DocumentStore>,
}

impl AppState {
    #[must_use]
    pub fn new(config: IngestConfig, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &IngestConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn store(&self) -> &dyn DocumentStore {
        self.inner.store.as_ref()
    }
}
