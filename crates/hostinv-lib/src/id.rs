//! Opaque document identifiers.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::store::StoreError;

/// Store-assigned identifier for a persisted document.
///
/// Rendered on the wire as a 32-character lowercase hex string. Callers never
/// mint these themselves; [`DocumentId::generate`] is invoked by the
/// repository when a document is first persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Generate a fresh, time-sortable identifier.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Parse an identifier from its string form.
    ///
    /// Fails with [`StoreError::InvalidId`] when the input is not a
    /// well-formed identifier.
    pub fn parse(s: &str) -> Result<Self, StoreError> {
        Uuid::try_parse(s)
            .map(Self)
            .map_err(|_| StoreError::InvalidId(s.to_string()))
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_simple())
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique_and_nonempty() {
        let a = DocumentId::generate();
        let b = DocumentId::generate();
        assert_ne!(a, b);
        assert!(!a.to_string().is_empty());
    }

    #[test]
    fn test_display_is_hex() {
        let id = DocumentId::generate();
        let s = id.to_string();
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_parse_round_trip() {
        let id = DocumentId::generate();
        let parsed = DocumentId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "not-an-id", "123", "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz"] {
            match DocumentId::parse(bad) {
                Err(StoreError::InvalidId(s)) => assert_eq!(s, bad),
                other => panic!("expected InvalidId for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let id = DocumentId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let back: DocumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        let result: Result<DocumentId, _> = serde_json::from_str("\"whatever\"");
        assert!(result.is_err());
    }
}
