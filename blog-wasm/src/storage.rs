use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use inkwell_client::session::SESSION_KEY;
use inkwell_client::{BlogClientError, Session, SessionStorage};

/// Keeps the session in `window.localStorage` so it survives reloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSession;

impl SessionStorage for LocalStorageSession {
    fn load(&self) -> Result<Option<Session>, BlogClientError> {
        match LocalStorage::get::<Session>(SESSION_KEY) {
            Ok(session) => Ok(Some(session)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(BlogClientError::Storage(err.to_string())),
        }
    }

    fn save(&self, session: &Session) -> Result<(), BlogClientError> {
        LocalStorage::set(SESSION_KEY, session).map_err(|e| BlogClientError::Storage(e.to_string()))
    }

    fn clear(&self) -> Result<(), BlogClientError> {
        LocalStorage::delete(SESSION_KEY);
        Ok(())
    }
}
