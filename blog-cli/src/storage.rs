use inkwell_client::{BlogClientError, Session, SessionStorage};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

/// Session persisted as a JSON file between CLI invocations.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn storage_error(err: impl std::fmt::Display) -> BlogClientError {
    BlogClientError::Storage(err.to_string())
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Result<Option<Session>, BlogClientError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).map(Some).map_err(storage_error),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_error(err)),
        }
    }

    fn save(&self, session: &Session) -> Result<(), BlogClientError> {
        let raw = serde_json::to_string_pretty(session).map_err(storage_error)?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        // Owner-only from the moment the file exists; it holds the access token.
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path).map_err(storage_error)?;
        file.write_all(raw.as_bytes()).map_err(storage_error)
    }

    fn clear(&self) -> Result<(), BlogClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_error(err)),
        }
    }
}
