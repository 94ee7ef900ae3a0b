//! Storage entity traits and types

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

/// Trait for types that can be used as storage keys
pub trait StorageKey: Clone + Debug + Send + Sync + Eq + std::hash::Hash {
    /// Returns the key as a string for storage backends that require string keys
    fn as_str(&self) -> &str;
}

/// Trait for persisted records
pub trait StorageEntity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    /// The key type for this entity
    type Key: StorageKey;

    /// Table the record lives in
    const TABLE: &'static str;

    /// Returns the entity's key
    fn key(&self) -> &Self::Key;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    struct NoteId(String);

    impl StorageKey for NoteId {
        fn as_str(&self) -> &str {
            &self.0
        }
    }

    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    struct Note {
        id: NoteId,
        title: String,
    }

    impl StorageEntity for Note {
        type Key = NoteId;
        const TABLE: &'static str = "note";

        fn key(&self) -> &Self::Key {
            &self.id
        }
    }

    #[test]
    fn test_storage_entity_key_and_table() {
        let note = Note {
            id: NoteId("note:1".to_string()),
            title: "Reading list".to_string(),
        };
        assert_eq!(note.key().as_str(), "note:1");
        assert_eq!(Note::TABLE, "note");
    }
}
