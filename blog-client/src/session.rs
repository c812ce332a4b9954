use crate::error::BlogClientError;
use crate::model::Session;
use std::sync::{Arc, Mutex};

/// Storage key the session record lives under.
pub const SESSION_KEY: &str = "blog_user_info";

/// Persistence for the logged-in session, surviving reloads until logout.
pub trait SessionStorage {
    fn load(&self) -> Result<Option<Session>, BlogClientError>;
    fn save(&self, session: &Session) -> Result<(), BlogClientError>;
    fn clear(&self) -> Result<(), BlogClientError>;
}

/// Keeps the serialized session in memory. Clones share the same slot, so a
/// fresh store built on a clone sees what an earlier one persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts a raw record in place, bypassing serialization.
    pub fn put_raw(&self, raw: impl Into<String>) {
        *self.lock() = Some(raw.into());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Session>, BlogClientError> {
        match self.lock().as_deref() {
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| BlogClientError::Storage(e.to_string())),
            None => Ok(None),
        }
    }

    fn save(&self, session: &Session) -> Result<(), BlogClientError> {
        let raw = serde_json::to_string(session).map_err(|e| BlogClientError::Storage(e.to_string()))?;
        *self.lock() = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), BlogClientError> {
        *self.lock() = None;
        Ok(())
    }
}

/// Who is logged in right now.
///
/// Holds at most one session. Front-ends share a single store (the web app
/// through a context signal) so every reader sees a mutation as soon as it
/// happens. The store never talks to the network: callers run the login
/// exchange and hand over the resulting [`Session`].
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
    current: Option<Session>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Rehydrates from `storage`. An unreadable record counts as logged out.
    pub fn init(storage: S) -> Self {
        let current = match storage.load() {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable session record");
                None
            }
        };

        Self { storage, current }
    }

    /// Replaces any previous session and persists the new one.
    ///
    /// The session is active in memory even if persisting it fails; the error
    /// only means it will not survive a reload.
    pub fn log_in(&mut self, session: Session) -> Result<(), BlogClientError> {
        tracing::info!(user = %session.username, "session started");
        let persisted = self.storage.save(&session);
        self.current = Some(session);
        persisted
    }

    pub fn log_out(&mut self) -> Result<(), BlogClientError> {
        if let Some(session) = self.current.take() {
            tracing::info!(user = %session.username, "session ended");
        }
        self.storage.clear()
    }

    pub fn user_info(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn access_token(&self) -> Option<String> {
        self.current.as_ref().map(|s| s.access_token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session(id: &str, name: &str) -> Session {
        Session {
            id: id.into(),
            username: name.into(),
            access_token: format!("token-{id}"),
        }
    }

    #[test]
    fn starts_empty_without_record() {
        let store = SessionStore::init(MemoryStorage::new());
        assert!(!store.is_authenticated());
        assert!(store.user_info().is_none());
        assert!(store.access_token().is_none());
    }

    #[test]
    fn login_is_visible_to_every_holder_of_the_context() {
        let shared = Rc::new(RefCell::new(SessionStore::init(MemoryStorage::new())));
        let header = Rc::clone(&shared);
        let page = Rc::clone(&shared);

        shared.borrow_mut().log_in(session("u1", "alice")).unwrap();
        assert_eq!(header.borrow().user_info().map(|s| s.username.as_str()), Some("alice"));
        assert_eq!(page.borrow().access_token().as_deref(), Some("token-u1"));

        shared.borrow_mut().log_out().unwrap();
        assert!(!header.borrow().is_authenticated());
        assert!(page.borrow().user_info().is_none());
    }

    #[test]
    fn new_login_replaces_previous_session() {
        let mut store = SessionStore::init(MemoryStorage::new());
        store.log_in(session("u1", "alice")).unwrap();
        store.log_in(session("u2", "bob")).unwrap();

        let current = store.user_info().unwrap();
        assert_eq!(current.id, "u2");
        assert_eq!(current.access_token, "token-u2");
    }

    #[test]
    fn session_survives_reload_until_logout() {
        let storage = MemoryStorage::new();
        let mut first = SessionStore::init(storage.clone());
        first.log_in(session("u1", "alice")).unwrap();

        let reloaded = SessionStore::init(storage.clone());
        assert_eq!(reloaded.user_info(), Some(&session("u1", "alice")));

        first.log_out().unwrap();
        let after_logout = SessionStore::init(storage);
        assert!(!after_logout.is_authenticated());
    }

    #[test]
    fn corrupt_record_is_treated_as_logged_out() {
        let storage = MemoryStorage::new();
        storage.put_raw("{not json");
        let store = SessionStore::init(storage);
        assert!(!store.is_authenticated());
    }
}
