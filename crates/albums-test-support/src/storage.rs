//! Test storage — `DurableStorage` fakes for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use albums_core::storage::{DurableStorage, StorageError};

/// Storage that keeps values in memory and records every write, so tests
/// can assert on how many times (and with what) a caller persisted.
#[derive(Debug, Default)]
pub struct RecordingStorage {
    entries: Mutex<HashMap<String, String>>,
    writes: Mutex<Vec<(String, String)>>,
}

impl RecordingStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-populated with a single entry. The seed does not
    /// count as a write.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        storage
    }

    /// Returns a snapshot of all `set_item` calls, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().unwrap().clone()
    }

    /// Returns the most recent value written under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn last_write(&self, key: &str) -> Option<String> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

impl DurableStorage for RecordingStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        self.writes
            .lock()
            .unwrap()
            .push((key.to_owned(), value.to_owned()));
        Ok(())
    }
}

/// Storage whose every operation fails. Useful for testing that callers
/// recover from or surface backend failures.
#[derive(Debug)]
pub struct FailingStorage;

fn unavailable() -> StorageError {
    StorageError::Unavailable("disk full".into())
}

impl DurableStorage for FailingStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(unavailable())
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(unavailable())
    }
}
