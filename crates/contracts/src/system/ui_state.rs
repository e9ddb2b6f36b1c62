use crate::shared::observer::{Listeners, Observable};
use crate::shared::storage::Repository;
use serde::{Deserialize, Serialize};

/// Ширина окна (px), ниже которой сайдбар считается мешающим
pub const NARROW_VIEWPORT_PX: f64 = 768.0;

pub fn is_narrow_viewport(width: f64) -> bool {
    width < NARROW_VIEWPORT_PX
}

/// Начальное состояние сайдбара без сохранённых данных: значение из
/// конфига, но на узком экране сайдбар закрыт. `None` = ширина неизвестна.
pub fn initial_sidebar_open(configured: bool, viewport_width: Option<f64>) -> bool {
    configured && !viewport_width.is_some_and(is_narrow_viewport)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub is_sidebar_open: bool,
}

pub struct UiStore<R> {
    state: UiState,
    repository: R,
    listeners: Listeners,
}

impl<R: Repository<UiState>> UiStore<R> {
    /// `sidebar_open` is used when nothing is persisted yet
    pub fn new(repository: R, sidebar_open: bool) -> Self {
        let state = repository.load().unwrap_or(UiState {
            is_sidebar_open: sidebar_open,
        });
        Self {
            state,
            repository,
            listeners: Listeners::new(),
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.state.is_sidebar_open
    }

    pub fn toggle_sidebar(&mut self) {
        self.state.is_sidebar_open = !self.state.is_sidebar_open;
        self.commit();
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.state.is_sidebar_open = open;
        self.commit();
    }

    fn commit(&mut self) {
        if let Err(e) = self.repository.save(&self.state) {
            log::error!("failed to persist ui state: {}", e);
        }
        self.listeners.notify();
    }
}

impl<R: Repository<UiState>> Observable for UiStore<R> {
    fn listeners_mut(&mut self) -> &mut Listeners {
        &mut self.listeners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::{InMemoryStorage, JsonRepository};

    fn store(storage: &InMemoryStorage, default_open: bool) -> UiStore<JsonRepository<InMemoryStorage>> {
        UiStore::new(JsonRepository::new(storage.clone(), "ui-storage"), default_open)
    }

    #[test]
    fn test_default_applies_only_without_persisted_state() {
        let storage = InMemoryStorage::new();
        assert!(store(&storage, true).is_sidebar_open());
        assert!(!store(&storage, false).is_sidebar_open());

        store(&storage, true).set_sidebar_open(false);
        assert!(!store(&storage, true).is_sidebar_open());
    }

    #[test]
    fn test_initial_sidebar_follows_viewport() {
        assert!(initial_sidebar_open(true, Some(1280.0)));
        assert!(initial_sidebar_open(true, Some(768.0)));
        assert!(!initial_sidebar_open(true, Some(767.0)));
        assert!(initial_sidebar_open(true, None));
        assert!(!initial_sidebar_open(false, Some(1280.0)));

        let storage = InMemoryStorage::new();
        assert!(!store(&storage, initial_sidebar_open(true, Some(375.0))).is_sidebar_open());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let storage = InMemoryStorage::new();
        let mut s = store(&storage, true);
        s.toggle_sidebar();
        assert!(!s.is_sidebar_open());
        s.toggle_sidebar();
        assert!(s.is_sidebar_open());
        assert!(store(&storage, false).is_sidebar_open());
    }
}
