//! Local key-value persistence.
//!
//! Everything the service persists is a text value under a short key:
//! one serialized record per template slot plus the saved style pair.
//! Callers hold an `Arc<dyn KeyValueStore>` so tests can swap in `MemoryStore`.

pub mod file;
pub mod memory;
pub mod preferences;
pub mod records;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage lock poisoned")]
    Poisoned,
}

/// Synchronous text store with read/write/clear semantics.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Keys are limited to `[a-z0-9_-]` so they map safely onto file names.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_slot_names() {
        assert!(validate_key("resume_creative-design").is_ok());
        assert!(validate_key("resume_style").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_paths() {
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("").is_err());
        assert!(validate_key("Resume").is_err());
    }
}
