use std::collections::HashMap;
use std::sync::Mutex;

use crate::storage::{validate_key, KeyValueStore, StorageError};

/// In-process store. Used by tests and when no storage directory is wanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_keeps_last_value() {
        let store = MemoryStore::new();
        store.set("resume_marketing", "first").unwrap();
        store.set("resume_marketing", "second").unwrap();
        assert_eq!(
            store.get("resume_marketing").unwrap().as_deref(),
            Some("second")
        );
    }

    #[test]
    fn test_remove_clears_key() {
        let store = MemoryStore::new();
        store.set("resume_profession", "finance").unwrap();
        store.remove("resume_profession").unwrap();
        assert_eq!(store.get("resume_profession").unwrap(), None);
    }
}
