//! Application state shared across handlers.

use std::sync::Arc;

use hostinv_lib::{DocumentStore, HostRepo};

/// Shared application state: the document-store handle and the collection
/// the hosts resource lives in.
///
/// Cheaply cloneable (`Arc` internally); share it via axum's `State`
/// extractor. The store itself is the only cross-request shared state in the
/// service, and it is reached exclusively through [`AppState::host_repo`].
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl AppState {
    /// Bind a document store and the collection name for host records.
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                collection: collection.into(),
            }),
        }
    }

    /// A repository bound to the hosts collection.
    pub fn host_repo(&self) -> HostRepo {
        HostRepo::new(self.inner.store.clone(), self.inner.collection.clone())
    }

    /// The underlying store handle (used by the readiness probe).
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.inner.store
    }

    /// Name of the collection holding host records.
    pub fn collection(&self) -> &str {
        &self.inner.collection
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("collection", &self.inner.collection)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostinv_lib::{Host, MemoryStore};

    fn state() -> AppState {
        AppState::new(Arc::new(MemoryStore::new()), "hosts")
    }

    #[test]
    fn test_state_clone_shares_store() {
        let state1 = state();
        let state2 = state1.clone();

        let mut host = Host {
            hostname: "shared".to_string(),
            ..Host::default()
        };
        state1.host_repo().create(&mut host).unwrap();

        let listed = state2.host_repo().all().unwrap();
        assert_eq!(listed.data.len(), 1);
    }

    #[test]
    fn test_collection_name() {
        assert_eq!(state().collection(), "hosts");
    }

    #[test]
    fn test_debug_does_not_require_store_debug() {
        let debug = format!("{:?}", state());
        assert!(debug.contains("AppState"));
        assert!(debug.contains("hosts"));
    }
}
