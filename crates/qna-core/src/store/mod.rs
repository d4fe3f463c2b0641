//! Record store for qna
//!
//! The store is a `.qna/` directory holding `config.toml` and the SQLite
//! record table. [`RecordStore`] is the seam the query engine and the CLI
//! talk to; [`Store`] is the on-disk implementation.

mod lifecycle;
pub mod paths;
mod records;

use std::path::{Path, PathBuf};

use crate::config::StoreConfig;
use crate::db::Database;
use crate::error::{QnaError, Result};
use crate::record::{NewRecord, Record, RecordPatch};
use paths::CONFIG_FILE;

/// Create/read/update/delete access to question records
pub trait RecordStore {
    /// Insert a new record, assign its id and write its self-reference
    fn create(&self, record: NewRecord) -> Result<Record>;

    /// Full snapshot of every record, in insertion order
    fn retrieve_all(&self) -> Result<Vec<Record>>;

    /// Apply a partial update to the record with the given store id
    fn update_by_id(&self, id: &str, patch: &RecordPatch) -> Result<Record>;

    /// Delete the record with the given store id
    fn delete_by_id(&self, id: &str) -> Result<()>;

    /// Find a record by its self-reference field via a full scan
    fn get_by_record_id(&self, id: &str) -> Result<Record> {
        self.retrieve_all()?
            .into_iter()
            .find(|r| r.record_id.as_deref() == Some(id))
            .ok_or_else(|| QnaError::RecordNotFound { id: id.to_string() })
    }
}

/// The qna store
#[derive(Debug)]
pub struct Store {
    /// Root path of the store (the `.qna/` directory)
    root: PathBuf,
    /// Store configuration
    config: StoreConfig,
    /// SQLite database
    db: Database,
}

impl Store {
    /// Discover a store by walking up from the given root directory
    pub fn discover(root: &Path) -> Result<Self> {
        let store_path = paths::discover_store(root)?;
        Self::open(&store_path)
    }

    /// Open an existing store at the given path
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(QnaError::StoreNotFound {
                search_root: path.to_path_buf(),
            });
        }

        let config_path = path.join(CONFIG_FILE);
        if !config_path.is_file() {
            return Err(QnaError::InvalidStore {
                reason: format!("{} has no {}", path.display(), CONFIG_FILE),
            });
        }
        let config = StoreConfig::load(&config_path)?;

        let db = Database::open(path)?;
        tracing::debug!(records = db.get_record_count()?, "opened store");

        Ok(Store {
            root: path.to_path_buf(),
            config,
            db,
        })
    }

    /// Root path of the store
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn db(&self) -> &Database {
        &self.db
    }
}
