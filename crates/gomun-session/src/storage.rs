//! Key/value storage backends for persisted client state.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::SessionError;

/// Synchronous string key/value storage, shaped like browser `localStorage`.
pub trait Storage {
    /// Return the stored value, or `None` when the key is unset.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the value cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove the key. Removing an unset key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if an existing value cannot be removed.
    fn remove_item(&self, key: &str) -> Result<(), SessionError>;
}

// ---------------------------------------------------------------------------
// FileStorage
// ---------------------------------------------------------------------------

/// One file per key under a private directory (`0700`, files `0600` on Unix).
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`. Characters outside `[A-Za-z0-9_-]` map to `_`,
    /// so `gomun:user` lives in `gomun_user.json`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file_name}.json"))
    }

    fn ensure_dir(&self) -> Result<(), SessionError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            SessionError::Storage(format!("mkdir {}: {e}", self.dir.display()))
        })?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.dir.display());
            }
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::Storage(format!(
                "read {}: {e}",
                path.display()
            ))),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.ensure_dir()?;
        let path = self.path_for(key);
        fs::write(&path, value)
            .map_err(|e| SessionError::Storage(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| SessionError::Storage(format!("chmod {}: {e}", path.display())))?;
        }

        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Storage(format!(
                "failed to delete {}: {e}",
                path.display()
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

/// Process-local storage. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_items<T>(
        &self,
        f: impl FnOnce(&mut HashMap<String, String>) -> T,
    ) -> Result<T, SessionError> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| SessionError::Storage("memory storage lock poisoned".into()))?;
        Ok(f(&mut items))
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.with_items(|items| items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.with_items(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        self.with_items(|items| {
            items.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_for_sanitizes_key() {
        let storage = FileStorage::new("/tmp/gomun");
        assert_eq!(
            storage.path_for("gomun:user"),
            PathBuf::from("/tmp/gomun/gomun_user.json")
        );
    }

    #[test]
    fn file_set_get_remove_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let storage = FileStorage::new(tmp.path().join("state"));

        assert_eq!(storage.get_item("k").unwrap(), None);
        storage.set_item("k", "{\"a\":1}").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("{\"a\":1}"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(storage.path_for("k"))
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "state file should be 0600");
        }

        storage.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), None);
        storage.remove_item("k").expect("removing twice is fine");
    }

    #[test]
    fn file_get_ignores_whitespace_only_content() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let storage = FileStorage::new(tmp.path());
        fs::write(storage.path_for("k"), "  \n ").expect("write");
        assert_eq!(storage.get_item("k").unwrap(), None);
    }

    #[test]
    fn memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
        storage.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), None);
    }
}
