use contracts::shared::storage::{JsonRepository, KeyValueStorage, StorageError};
use web_sys::window;

/// `window.localStorage` as a [`KeyValueStorage`] backend
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

pub type BrowserRepository = JsonRepository<BrowserStorage>;

fn get_local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        get_local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        get_local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        get_local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }
}

/// Repository for one store key in `localStorage`
pub fn browser_repository(key: &str) -> BrowserRepository {
    JsonRepository::new(BrowserStorage, key)
}
