//! Store configuration for qna
//!
//! Configuration is stored in `.qna/config.toml`. Every key is optional and
//! falls back to its default.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{QnaError, Result};

pub use types::{StoreConfig, DEFAULT_COMPANY_ID, DEFAULT_COMPANY_NAME, STORE_FORMAT_VERSION};

impl StoreConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;

        if config.version > STORE_FORMAT_VERSION {
            return Err(QnaError::InvalidStore {
                reason: format!(
                    "store format version {} is newer than supported version {}",
                    config.version, STORE_FORMAT_VERSION
                ),
            });
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| QnaError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
