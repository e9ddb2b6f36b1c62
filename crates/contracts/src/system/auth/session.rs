use crate::shared::observer::{Listeners, Observable};
use crate::shared::storage::Repository;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: Option<String>,
    pub is_authenticated: bool,
}

/// Auth store: login/logout flip the whole session at once
pub struct AuthStore<R> {
    session: AuthSession,
    repository: R,
    listeners: Listeners,
}

impl<R: Repository<AuthSession>> AuthStore<R> {
    pub fn new(repository: R) -> Self {
        let session = repository.load().unwrap_or_default();
        Self {
            session,
            repository,
            listeners: Listeners::new(),
        }
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn login(&mut self, token: impl Into<String>) {
        self.session = AuthSession {
            token: Some(token.into()),
            is_authenticated: true,
        };
        log::info!("session started");
        self.commit();
    }

    pub fn logout(&mut self) {
        self.session = AuthSession::default();
        log::info!("session cleared");
        self.commit();
    }

    fn commit(&mut self) {
        if let Err(e) = self.repository.save(&self.session) {
            log::error!("failed to persist auth session: {}", e);
        }
        self.listeners.notify();
    }
}

impl<R: Repository<AuthSession>> Observable for AuthStore<R> {
    fn listeners_mut(&mut self) -> &mut Listeners {
        &mut self.listeners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::{InMemoryStorage, JsonRepository, KeyValueStorage};
    use std::cell::Cell;
    use std::rc::Rc;

    const KEY: &str = "auth-storage";

    fn store(storage: &InMemoryStorage) -> AuthStore<JsonRepository<InMemoryStorage>> {
        AuthStore::new(JsonRepository::new(storage.clone(), KEY))
    }

    #[test]
    fn test_starts_logged_out() {
        let s = store(&InMemoryStorage::new());
        assert!(!s.is_authenticated());
        assert!(s.token().is_none());
    }

    #[test]
    fn test_login_logout_persist() {
        let storage = InMemoryStorage::new();
        let mut s = store(&storage);
        s.login("demo-token");
        assert!(s.is_authenticated());

        let reloaded = store(&storage);
        assert_eq!(reloaded.token(), Some("demo-token"));
        assert!(reloaded.is_authenticated());

        s.logout();
        let reloaded = store(&storage);
        assert_eq!(reloaded.session(), &AuthSession::default());
    }

    #[test]
    fn test_persisted_field_names() {
        let storage = InMemoryStorage::new();
        store(&storage).login("t");
        let raw = storage.get_item(KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["state"]["token"], "t");
        assert_eq!(json["state"]["isAuthenticated"], true);
    }

    #[test]
    fn test_malformed_storage_means_logged_out() {
        let storage = InMemoryStorage::new();
        storage.set_item(KEY, "not json").unwrap();
        assert!(!store(&storage).is_authenticated());
    }

    #[test]
    fn test_notifies_on_change() {
        let hits = Rc::new(Cell::new(0));
        let mut s = store(&InMemoryStorage::new());
        {
            let hits = hits.clone();
            s.subscribe(move || hits.set(hits.get() + 1));
        }
        s.login("t");
        s.logout();
        assert_eq!(hits.get(), 2);
    }
}
