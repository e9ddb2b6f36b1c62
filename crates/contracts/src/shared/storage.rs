//! Persistence abstraction for the client-side stores.
//!
//! A store never talks to `localStorage` directly. It holds a [`Repository`]
//! that loads and saves a typed snapshot, and the repository talks to a
//! [`KeyValueStorage`] backend. The browser backend lives in the frontend
//! crate; [`InMemoryStorage`] is used by tests and non-browser builds.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Version written into every persisted envelope.
pub const SNAPSHOT_VERSION: u32 = 0;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Plain string key-value backend (the shape of `window.localStorage`).
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Loads and saves a single typed snapshot.
pub trait Repository<T> {
    /// Returns `None` when nothing usable is stored.
    fn load(&self) -> Option<T>;

    fn save(&self, snapshot: &T) -> Result<(), StorageError>;
}

/// In-process storage. Clones share the same map, so two stores built on
/// clones of one `InMemoryStorage` behave like two page loads of one browser.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct PersistEnvelope<T> {
    state: T,
    version: u32,
}

/// Stores a snapshot as `{"state": ..., "version": 0}` JSON under one key.
#[derive(Debug, Clone)]
pub struct JsonRepository<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> JsonRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

impl<S, T> Repository<T> for JsonRepository<S>
where
    S: KeyValueStorage,
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Option<T> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("storage '{}' unreadable, using defaults: {}", self.key, e);
                return None;
            }
        };

        match serde_json::from_str::<PersistEnvelope<T>>(&raw) {
            Ok(envelope) if envelope.version == SNAPSHOT_VERSION => Some(envelope.state),
            Ok(envelope) => {
                log::warn!(
                    "storage '{}' has unsupported version {}, using defaults",
                    self.key,
                    envelope.version
                );
                None
            }
            Err(e) => {
                log::warn!("storage '{}' is malformed, using defaults: {}", self.key, e);
                None
            }
        }
    }

    fn save(&self, snapshot: &T) -> Result<(), StorageError> {
        let envelope = PersistEnvelope {
            state: snapshot,
            version: SNAPSHOT_VERSION,
        };
        let raw = serde_json::to_string(&envelope)?;
        self.storage.set_item(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Counter {
        value: u32,
    }

    #[test]
    fn test_save_then_load() {
        let repo = JsonRepository::new(InMemoryStorage::new(), "counter");
        repo.save(&Counter { value: 7 }).unwrap();
        let loaded: Option<Counter> = repo.load();
        assert_eq!(loaded, Some(Counter { value: 7 }));
    }

    #[test]
    fn test_envelope_format() {
        let storage = InMemoryStorage::new();
        let repo = JsonRepository::new(storage.clone(), "counter");
        repo.save(&Counter { value: 1 }).unwrap();

        let raw = storage.get_item("counter").unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["state"]["value"], 1);
        assert_eq!(json["version"], 0);
    }

    #[test]
    fn test_missing_key_is_none() {
        let repo = JsonRepository::new(InMemoryStorage::new(), "nothing");
        let loaded: Option<Counter> = repo.load();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_malformed_value_is_none() {
        let storage = InMemoryStorage::new();
        storage.set_item("counter", "{not json").unwrap();
        let repo = JsonRepository::new(storage, "counter");
        let loaded: Option<Counter> = repo.load();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_wrong_shape_is_none() {
        let storage = InMemoryStorage::new();
        storage
            .set_item("counter", r#"{"state":{"value":"seven"},"version":0}"#)
            .unwrap();
        let repo = JsonRepository::new(storage, "counter");
        let loaded: Option<Counter> = repo.load();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_unknown_version_is_none() {
        let storage = InMemoryStorage::new();
        storage
            .set_item("counter", r#"{"state":{"value":3},"version":5}"#)
            .unwrap();
        let repo = JsonRepository::new(storage, "counter");
        let loaded: Option<Counter> = repo.load();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_clones_share_items() {
        let storage = InMemoryStorage::new();
        let other = storage.clone();
        storage.set_item("k", "v").unwrap();
        assert_eq!(other.get_item("k").unwrap().as_deref(), Some("v"));
        other.remove_item("k").unwrap();
        assert!(storage.is_empty());
    }
}
