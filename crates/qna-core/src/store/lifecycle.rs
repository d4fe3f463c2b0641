//! Store creation

use std::fs;
use std::path::Path;

use super::paths::{CONFIG_FILE, DEFAULT_STORE_DIR};
use super::Store;
use crate::config::StoreConfig;
use crate::db::Database;
use crate::error::{QnaError, Result};

impl Store {
    /// Initialize a new store under the given project root
    pub fn init(project_root: &Path) -> Result<Self> {
        Self::init_at(&project_root.join(DEFAULT_STORE_DIR), StoreConfig::default())
    }

    /// Initialize a store at an explicit store root path
    #[tracing::instrument(skip(store_root, config), fields(path = %store_root.display()))]
    pub fn init_at(store_root: &Path, config: StoreConfig) -> Result<Self> {
        if store_root.join(CONFIG_FILE).exists() {
            return Err(QnaError::already_exists(
                "store",
                store_root.display(),
            ));
        }

        fs::create_dir_all(store_root)?;
        config.save(&store_root.join(CONFIG_FILE))?;
        let db = Database::open(store_root)?;

        tracing::info!("Initialized store");

        Ok(Store {
            root: store_root.to_path_buf(),
            config,
            db,
        })
    }
}
