use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_KEY, DEFAULT_STORAGE_FILE};

use std::path::Path;

use serde::Deserialize;

/// Where the durable client store lives and which key holds the session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Store file, relative to the config dir
    pub file: String,
    pub session_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file: String::from(DEFAULT_STORAGE_FILE),
            session_key: String::from(DEFAULT_SESSION_KEY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.file.trim().is_empty() {
            return Err(ConfigError::storage("storage.file cannot be empty"));
        }

        if Path::new(&self.file).is_absolute() || self.file.contains("..") {
            return Err(ConfigError::storage(
                "storage.file must be relative and cannot contain '..'",
            ));
        }

        if self.session_key.trim().is_empty() {
            return Err(ConfigError::storage("storage.session_key cannot be empty"));
        }

        Ok(())
    }
}
