//! Document-store interface.
//!
//! The service treats persistence as an external collaborator: anything that
//! can find, upsert, update, and remove JSON documents by collection name and
//! identifier can back the host inventory. [`crate::MemoryStore`] is the
//! in-process implementation; a networked document database would implement
//! the same trait behind the same seam.

use serde_json::Value;
use thiserror::Error;

use crate::id::DocumentId;

/// Field under which a document's identifier is persisted.
///
/// Mirrors the native primary-key field of document databases; the wire-level
/// `id` field is translated to and from this key by the repository layer.
pub const PRIMARY_KEY_FIELD: &str = "_id";

/// Errors surfaced by document-store operations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The supplied identifier is not a well-formed document id.
    #[error("invalid document id: {0}")]
    InvalidId(String),

    /// No document exists under the given identifier.
    #[error("document not found: {0}")]
    NotFound(String),

    /// The backing store failed to complete the operation.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Abstract document store addressed by collection name and document id.
///
/// Every method is a single synchronous round-trip; implementations add no
/// caching, retries, or batching. Documents are raw [`serde_json::Value`]s
/// with the identifier stored under [`PRIMARY_KEY_FIELD`].
pub trait DocumentStore: Send + Sync {
    /// Return every document in the collection. An unknown collection is an
    /// empty one, never an error.
    fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    /// Return the document stored under `id`, or [`StoreError::NotFound`].
    fn find_by_id(&self, collection: &str, id: &DocumentId) -> Result<Value, StoreError>;

    /// Insert the document under `id`, replacing any existing document.
    fn upsert_by_id(&self, collection: &str, id: &DocumentId, doc: Value)
        -> Result<(), StoreError>;

    /// Replace the document stored under `id`. Fails with
    /// [`StoreError::NotFound`] when no document exists there.
    fn update_by_id(&self, collection: &str, id: &DocumentId, doc: Value)
        -> Result<(), StoreError>;

    /// Remove the document stored under `id`. Fails with
    /// [`StoreError::NotFound`] when no document exists there.
    fn remove_by_id(&self, collection: &str, id: &DocumentId) -> Result<(), StoreError>;
}
