//! Resource repository for hosts.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::id::DocumentId;
use crate::model::{Host, HostCollection, HostResource};
use crate::store::{DocumentStore, StoreError, PRIMARY_KEY_FIELD};

/// CRUD operations for one host collection in a document store.
///
/// The repository owns the translation between the wire-level `id` field and
/// the store's native primary-key field, and it alone assigns identifiers and
/// timestamps. It adds no caching; every operation round-trips to the store,
/// and failures are returned to the caller verbatim.
#[derive(Clone)]
pub struct HostRepo {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl HostRepo {
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// List every host. An empty inventory yields an empty `data` vec.
    pub fn all(&self) -> Result<HostCollection, StoreError> {
        let docs = self.store.find_all(&self.collection)?;
        let data = docs
            .into_iter()
            .map(from_document)
            .collect::<Result<Vec<Host>, StoreError>>()?;
        Ok(HostCollection { data })
    }

    /// Fetch one host by its string identifier.
    pub fn find(&self, id: &str) -> Result<HostResource, StoreError> {
        let id = DocumentId::parse(id)?;
        let doc = self.store.find_by_id(&self.collection, &id)?;
        Ok(HostResource {
            data: from_document(doc)?,
        })
    }

    /// Persist a new host.
    ///
    /// Any caller-supplied identifier or timestamps are discarded: a fresh
    /// identifier is minted and `created`/`modified` are set to the same
    /// instant. On success the identifier is written back into `host`.
    pub fn create(&self, host: &mut Host) -> Result<(), StoreError> {
        let id = DocumentId::generate();
        let now = Utc::now();
        host.id = None;
        host.created = Some(now);
        host.modified = Some(now);

        let mut doc = to_document(host)?;
        if let Value::Object(map) = &mut doc {
            map.insert(PRIMARY_KEY_FIELD.to_string(), Value::String(id.to_string()));
        }
        self.store.upsert_by_id(&self.collection, &id, doc)?;

        host.id = Some(id);
        Ok(())
    }

    /// Replace an existing host.
    ///
    /// Requires `host.id` to be set. The stored creation timestamp is kept
    /// regardless of what the caller sent; `modified` is refreshed.
    pub fn update(&self, host: &mut Host) -> Result<(), StoreError> {
        let id = host
            .id
            .ok_or_else(|| StoreError::InvalidId("missing document id".to_string()))?;

        let existing = from_document(self.store.find_by_id(&self.collection, &id)?)?;
        host.created = existing.created;
        host.modified = Some(Utc::now());

        let doc = to_document(host)?;
        self.store.update_by_id(&self.collection, &id, doc)
    }

    /// Remove a host by its string identifier.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let id = DocumentId::parse(id)?;
        self.store.remove_by_id(&self.collection, &id)
    }
}

/// Serialize a host for storage, moving `id` under the primary-key field.
fn to_document(host: &Host) -> Result<Value, StoreError> {
    let mut doc = serde_json::to_value(host).map_err(|e| StoreError::Backend(e.to_string()))?;
    if let Value::Object(map) = &mut doc {
        if let Some(id) = map.remove("id") {
            map.insert(PRIMARY_KEY_FIELD.to_string(), id);
        }
    }
    Ok(doc)
}

/// Deserialize a stored document, restoring the wire-level `id` field.
fn from_document(mut doc: Value) -> Result<Host, StoreError> {
    if let Value::Object(map) = &mut doc {
        if let Some(id) = map.remove(PRIMARY_KEY_FIELD) {
            map.insert("id".to_string(), id);
        }
    }
    serde_json::from_value(doc).map_err(|e| StoreError::Backend(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn repo() -> HostRepo {
        HostRepo::new(Arc::new(MemoryStore::new()), "hosts")
    }

    fn sample_host() -> Host {
        Host {
            hostname: "h1".to_string(),
            kind: "vm".to_string(),
            ..Host::default()
        }
    }

    #[test]
    fn test_all_empty_inventory() {
        let collection = repo().all().unwrap();
        assert!(collection.data.is_empty());
    }

    #[test]
    fn test_create_assigns_id_and_equal_timestamps() {
        let repo = repo();
        let mut host = sample_host();
        repo.create(&mut host).unwrap();

        let id = host.id.expect("id written back after create");
        assert!(!id.to_string().is_empty());
        assert!(host.created.is_some());
        assert_eq!(host.created, host.modified);
    }

    #[test]
    fn test_create_discards_caller_id_and_timestamps() {
        let repo = repo();
        let bogus = DocumentId::generate();
        let mut host = sample_host();
        host.id = Some(bogus);
        host.created = Some(Utc::now() - chrono::Duration::days(30));

        repo.create(&mut host).unwrap();

        assert_ne!(host.id, Some(bogus));
        assert_eq!(host.created, host.modified);
    }

    #[test]
    fn test_create_then_find_round_trips() {
        let repo = repo();
        let mut host = sample_host();
        repo.create(&mut host).unwrap();

        let found = repo.find(&host.id.unwrap().to_string()).unwrap();
        assert_eq!(found.data.hostname, "h1");
        assert_eq!(found.data.kind, "vm");
        assert_eq!(found.data.id, host.id);
        assert_eq!(found.data.created, host.created);
    }

    #[test]
    fn test_find_invalid_id_fails_before_store() {
        assert!(matches!(
            repo().find("not-an-id"),
            Err(StoreError::InvalidId(_))
        ));
    }

    #[test]
    fn test_find_unknown_id_is_not_found() {
        let id = DocumentId::generate().to_string();
        assert!(matches!(repo().find(&id), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_update_refreshes_modified_keeps_created() {
        let repo = repo();
        let mut host = sample_host();
        repo.create(&mut host).unwrap();
        let created = host.created;

        let mut updated = sample_host();
        updated.hostname = "h1-renamed".to_string();
        updated.id = host.id;
        // Caller tampering with created is overridden by the stored value.
        updated.created = Some(Utc::now() + chrono::Duration::days(1));
        repo.update(&mut updated).unwrap();

        assert_eq!(updated.created, created);
        assert!(updated.modified >= created);

        let found = repo.find(&host.id.unwrap().to_string()).unwrap();
        assert_eq!(found.data.hostname, "h1-renamed");
        assert_eq!(found.data.created, created);
        assert_eq!(found.data.modified, updated.modified);
    }

    #[test]
    fn test_update_without_id_is_invalid() {
        let mut host = sample_host();
        assert!(matches!(
            repo().update(&mut host),
            Err(StoreError::InvalidId(_))
        ));
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut host = sample_host();
        host.id = Some(DocumentId::generate());
        assert!(matches!(
            repo().update(&mut host),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_then_find_fails() {
        let repo = repo();
        let mut host = sample_host();
        repo.create(&mut host).unwrap();
        let id = host.id.unwrap().to_string();

        repo.delete(&id).unwrap();
        assert!(matches!(repo.find(&id), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_delete_unknown_id_surfaces_failure() {
        let id = DocumentId::generate().to_string();
        assert!(matches!(repo().delete(&id), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_delete_invalid_id() {
        assert!(matches!(
            repo().delete("###"),
            Err(StoreError::InvalidId(_))
        ));
    }

    #[test]
    fn test_listing_after_creates() {
        let repo = repo();
        for name in ["a", "b", "c"] {
            let mut host = sample_host();
            host.hostname = name.to_string();
            repo.create(&mut host).unwrap();
        }
        let collection = repo.all().unwrap();
        assert_eq!(collection.data.len(), 3);
        assert!(collection.data.iter().all(|h| h.id.is_some()));
    }
}
