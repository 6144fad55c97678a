//! Storage
//!
//! A [`CartStorage`] is a durable key-value surface with string slots. The cart occupies a
//! single slot; implementations only need to read and overwrite whole values.
//!
//! - [`MemoryStorage`] keeps slots in process memory (tests, previews).
//! - [`FileStorage`] keeps one file per slot inside a directory (terminal driver).
//!
//! The browser front-end provides its own implementation backed by `window.localStorage`.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend cannot be reached at all (no window, storage disabled, ...).
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    /// A slot could not be read.
    #[error("failed to read slot {key}")]
    Read {
        /// Slot key
        key: String,

        /// Underlying cause
        #[source]
        source: io::Error,
    },

    /// A slot could not be written.
    #[error("failed to write slot {key}")]
    Write {
        /// Slot key
        key: String,

        /// Underlying cause
        #[source]
        source: io::Error,
    },

    /// The backend refused the write (e.g. quota exceeded).
    #[error("storage rejected write to slot {key}: {reason}")]
    Rejected {
        /// Slot key
        key: String,

        /// Backend-supplied reason
        reason: String,
    },
}

/// Durable key-value surface the cart is persisted to.
pub trait CartStorage {
    /// Read the value stored under `key`, or `None` if the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend fails to read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend fails to write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage. All data is lost when it is dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: FxHashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage with one slot already written.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = FxHashMap::default();
        slots.insert(key.into(), value.into());

        Self { slots }
    }

    /// Peek at a slot without going through the trait.
    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl CartStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());

        Ok(())
    }
}

/// File-backed storage: slot `key` lives at `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CartStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_error = |source| StorageError::Write {
            key: key.to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(write_error)?;
        fs::write(self.slot_path(key), value).map_err(write_error)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn memory_storage_round_trips() -> TestResult {
        let mut storage = MemoryStorage::new();

        assert_eq!(storage.get("cart")?, None);

        storage.set("cart", "[]")?;

        assert_eq!(storage.get("cart")?.as_deref(), Some("[]"));
        assert_eq!(storage.slot("cart"), Some("[]"));

        Ok(())
    }

    #[test]
    fn memory_storage_overwrites() -> TestResult {
        let mut storage = MemoryStorage::with_slot("cart", "old");

        storage.set("cart", "new")?;

        assert_eq!(storage.get("cart")?.as_deref(), Some("new"));

        Ok(())
    }

    #[test]
    fn file_storage_missing_slot_reads_none() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = FileStorage::new(dir.path().join("nested"));

        assert_eq!(storage.get("cart")?, None);

        Ok(())
    }

    #[test]
    fn file_storage_creates_directory_on_write() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut storage = FileStorage::new(dir.path().join("nested"));

        storage.set("cart", r#"[{"name":"Ramen"}]"#)?;

        assert!(storage.slot_path("cart").exists());
        assert_eq!(
            storage.get("cart")?.as_deref(),
            Some(r#"[{"name":"Ramen"}]"#)
        );

        Ok(())
    }

    #[test]
    fn file_storage_read_error_names_the_slot() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = FileStorage::new(dir.path());

        // A directory where the slot file should be cannot be read as a string.
        fs::create_dir_all(storage.slot_path("cart"))?;

        let result = storage.get("cart");

        assert!(
            matches!(result, Err(StorageError::Read { ref key, .. }) if key == "cart"),
            "expected read error, got {result:?}"
        );

        Ok(())
    }
}
