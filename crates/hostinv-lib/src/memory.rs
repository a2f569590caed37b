//! In-process document store.

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;
use serde_json::Value;

use crate::id::DocumentId;
use crate::store::{DocumentStore, StoreError};

/// Process-local [`DocumentStore`] keeping collections in memory.
///
/// Collections are created on first write. Documents are ordered by
/// identifier so listings are deterministic. Writers block only other
/// accesses to the same store, matching the per-request round-trip model of
/// a real document database.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in a collection.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map(BTreeMap::len)
            .unwrap_or(0)
    }

    /// Whether a collection holds no documents.
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

impl DocumentStore for MemoryStore {
    fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.read();
        Ok(collections
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    fn find_by_id(&self, collection: &str, id: &DocumentId) -> Result<Value, StoreError> {
        let collections = self.collections.read();
        collections
            .get(collection)
            .and_then(|docs| docs.get(&id.to_string()))
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn upsert_by_id(
        &self,
        collection: &str,
        id: &DocumentId,
        doc: Value,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write();
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), doc);
        Ok(())
    }

    fn update_by_id(
        &self,
        collection: &str,
        id: &DocumentId,
        doc: Value,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write();
        let slot = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(&id.to_string()))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        *slot = doc;
        Ok(())
    }

    fn remove_by_id(&self, collection: &str, id: &DocumentId) -> Result<(), StoreError> {
        let mut collections = self.collections.write();
        collections
            .get_mut(collection)
            .and_then(|docs| docs.remove(&id.to_string()))
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_collection_lists_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.find_all("hosts").unwrap(), Vec::<Value>::new());
        assert!(store.is_empty("hosts"));
    }

    #[test]
    fn test_upsert_then_find() {
        let store = MemoryStore::new();
        let id = DocumentId::generate();
        store
            .upsert_by_id("hosts", &id, json!({"hostname": "h1"}))
            .unwrap();

        let doc = store.find_by_id("hosts", &id).unwrap();
        assert_eq!(doc["hostname"], "h1");
        assert_eq!(store.len("hosts"), 1);
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let store = MemoryStore::new();
        let id = DocumentId::generate();
        store.upsert_by_id("hosts", &id, json!({"v": 1})).unwrap();
        store.upsert_by_id("hosts", &id, json!({"v": 2})).unwrap();

        assert_eq!(store.len("hosts"), 1);
        assert_eq!(store.find_by_id("hosts", &id).unwrap()["v"], 2);
    }

    #[test]
    fn test_find_missing_is_not_found() {
        let store = MemoryStore::new();
        let id = DocumentId::generate();
        match store.find_by_id("hosts", &id) {
            Err(StoreError::NotFound(s)) => assert_eq!(s, id.to_string()),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let store = MemoryStore::new();
        let id = DocumentId::generate();
        assert!(matches!(
            store.update_by_id("hosts", &id, json!({})),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_remove_is_idempotent_failure() {
        let store = MemoryStore::new();
        let id = DocumentId::generate();
        store.upsert_by_id("hosts", &id, json!({})).unwrap();

        store.remove_by_id("hosts", &id).unwrap();
        // Second removal surfaces as a failure, never a silent success.
        assert!(matches!(
            store.remove_by_id("hosts", &id),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_collections_are_isolated() {
        let store = MemoryStore::new();
        let id = DocumentId::generate();
        store.upsert_by_id("hosts", &id, json!({})).unwrap();

        assert!(store.is_empty("sensors"));
        assert!(store.find_by_id("sensors", &id).is_err());
    }
}
