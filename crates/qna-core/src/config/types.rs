//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Company name stamped on records when the config does not override it
pub const DEFAULT_COMPANY_NAME: &str = "Test Company Limited";

/// Company identifier stamped on records when the config does not override it
pub const DEFAULT_COMPANY_ID: i64 = 63297;

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Company name written to every created or updated record
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// Company identifier written to every created record
    #[serde(default = "default_company_id")]
    pub company_id: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: STORE_FORMAT_VERSION,
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            company_id: DEFAULT_COMPANY_ID,
        }
    }
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

fn default_company_name() -> String {
    DEFAULT_COMPANY_NAME.to_string()
}

fn default_company_id() -> i64 {
    DEFAULT_COMPANY_ID
}
