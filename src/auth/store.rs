//! Durable session storage
//!
//! The session is persisted as a single JSON file. Absence of the file means
//! logged out; the file is written on login and removed on logout. No other
//! component touches the file directly.

use crate::auth::models::Session;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk session store
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted session, if any.
    ///
    /// A missing file is the normal logged-out state. An unreadable or
    /// unparseable file is an error so the caller can decide how to degrade.
    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| Error::SessionStore(format!("{}: {}", self.path.display(), e)))?;
        let session = serde_json::from_str(&content)
            .map_err(|e| Error::SessionStore(format!("{}: {}", self.path.display(), e)))?;
        Ok(Some(session))
    }

    /// Persist a session, creating parent directories as needed
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::SessionStore(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, content)
            .map_err(|e| Error::SessionStore(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }

    /// Remove the persisted session. Removing an already-absent session is a
    /// no-op.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::SessionStore(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::Role;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("session.json"))
    }

    #[test]
    fn test_load_missing_is_logged_out() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let session = Session::new("alice".to_string(), "abc123".to_string(), Role::Worker);

        store.save(&session).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("dir").join("session.json"));
        let session = Session::new("alice".to_string(), "abc123".to_string(), Role::User);

        store.save(&session).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let session = Session::new("alice".to_string(), "abc123".to_string(), Role::Admin);

        store.save(&session).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());

        // Clearing again must not fail
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json").unwrap();

        assert!(store.load().is_err());
    }
}
