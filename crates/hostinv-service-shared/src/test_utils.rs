//! Test utilities for service handler and pipeline testing.

use std::sync::Arc;

use serde_json::Value;

use hostinv_lib::{DocumentId, DocumentStore, MemoryStore, StoreError};

use crate::state::AppState;

/// A fresh [`AppState`] over an empty in-memory store.
///
/// Each call returns isolated state; tests never share records.
pub fn test_state() -> AppState {
    AppState::new(Arc::new(MemoryStore::new()), "hosts")
}

/// A fresh [`AppState`] whose store plus a handle to the store itself, so
/// tests can assert whether guards let any write through.
pub fn test_state_with_store() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), "hosts");
    (state, store)
}

/// A document store simulating a total backend outage: every operation
/// fails with [`StoreError::Backend`].
#[derive(Debug, Default)]
pub struct FailingStore;

impl FailingStore {
    fn outage() -> StoreError {
        StoreError::Backend("simulated store outage".to_string())
    }
}

impl DocumentStore for FailingStore {
    fn find_all(&self, _collection: &str) -> Result<Vec<Value>, StoreError> {
        Err(Self::outage())
    }

    fn find_by_id(&self, _collection: &str, _id: &DocumentId) -> Result<Value, StoreError> {
        Err(Self::outage())
    }

    fn upsert_by_id(
        &self,
        _collection: &str,
        _id: &DocumentId,
        _doc: Value,
    ) -> Result<(), StoreError> {
        Err(Self::outage())
    }

    fn update_by_id(
        &self,
        _collection: &str,
        _id: &DocumentId,
        _doc: Value,
    ) -> Result<(), StoreError> {
        Err(Self::outage())
    }

    fn remove_by_id(&self, _collection: &str, _id: &DocumentId) -> Result<(), StoreError> {
        Err(Self::outage())
    }
}

/// An [`AppState`] backed by the [`FailingStore`].
pub fn failing_state() -> AppState {
    AppState::new(Arc::new(FailingStore), "hosts")
}
