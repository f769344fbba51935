//! Local configuration for the CLI.
//!
//! The only persisted value is the Syve API key, stored as JSON at
//! `data/config.json`. Key validity is checked against the service at
//! startup, not here.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "data/config.json";

/// Error reading or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filesystem error
    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),
    /// Malformed JSON
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Persisted application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// The Syve API key.
    pub syve_api_key: String,
}

impl AppConfig {
    /// Create a config holding the given key.
    pub fn new(syve_api_key: impl Into<String>) -> Self {
        Self {
            syve_api_key: syve_api_key.into(),
        }
    }

    /// Load the config from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file is missing, unreadable or not
    /// valid JSON; callers typically fall back to prompting for a key.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write the config to `path` as pretty-printed JSON, creating the
    /// parent directory if needed.
    pub fn store(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("syve-ohlc-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_store_load_roundtrip() {
        let path = temp_path("roundtrip").join("data/config.json");
        let config = AppConfig::new("my-secret-key");
        config.store(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        fs::remove_dir_all(path.parent().unwrap().parent().unwrap()).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            AppConfig::load(temp_path("missing")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_load_malformed_json() {
        let path = temp_path("malformed");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Parse(_))));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_key_field_name() {
        let config: AppConfig =
            serde_json::from_str(r#"{"syve_api_key": "abc123"}"#).unwrap();
        assert_eq!(config.syve_api_key, "abc123");
    }
}
