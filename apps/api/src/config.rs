use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding one JSON file per persistence slot. `None` (an empty
    /// `STORAGE_DIR`) keeps everything in memory for the life of the process.
    pub storage_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            storage_dir: storage_dir(std::env::var("STORAGE_DIR").ok()),
        })
    }
}

fn storage_dir(raw: Option<String>) -> Option<PathBuf> {
    match raw {
        None => Some(PathBuf::from("./data")),
        Some(dir) if dir.trim().is_empty() => None,
        Some(dir) => Some(PathBuf::from(dir)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_dir_defaults_to_data() {
        assert_eq!(storage_dir(None), Some(PathBuf::from("./data")));
    }

    #[test]
    fn test_empty_storage_dir_means_memory() {
        assert_eq!(storage_dir(Some("  ".to_string())), None);
        assert_eq!(
            storage_dir(Some("/var/lib/vitae".to_string())),
            Some(PathBuf::from("/var/lib/vitae"))
        );
    }
}
