//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the document store behind a trait object so the same handlers run
//! against Postgres or the in-memory store, plus the name of the collection
//! reservations are written to.

use std::sync::Arc;

use crate::services::documents::DocumentStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub collection: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, collection: &str) -> Self {
        Self { store, collection: Arc::from(collection) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::documents::MemoryDocumentStore;

    /// Create a test `AppState` over a fresh in-memory store.
    ///
    /// The store is returned as well so tests can inspect what was written.
    #[must_use]
    pub fn test_app_state() -> (AppState, Arc<MemoryDocumentStore>) {
        let store = Arc::new(MemoryDocumentStore::new());
        let state = AppState::new(store.clone(), booking::COLLECTION);
        (state, store)
    }
}
