//! SQLite database module for qna
//!
//! The `records` table is the tabular store behind [`crate::store::Store`].
//! Row order (`seq`) is insertion order and is the order full scans return.

mod records;
mod schema;

use crate::error::{QnaError, Result};
use crate::map_db_err;
use rusqlite::Connection;
use std::path::Path;

pub use schema::{create_schema, SchemaCreateResult, CURRENT_SCHEMA_VERSION};

/// Database filename inside the store directory
pub const DATABASE_FILE: &str = "qna.db";

/// SQLite database for qna
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database at the given store root
    pub fn open(store_root: &Path) -> Result<Self> {
        let db_path = store_root.join(DATABASE_FILE);

        let conn = Connection::open(&db_path).map_err(|e| {
            QnaError::Other(format!(
                "failed to open database at {}: {}",
                db_path.display(),
                e
            ))
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| map_db_err!("enable WAL mode", e))?;

        match create_schema(&conn) {
            Ok(SchemaCreateResult::Created) => {
                tracing::info!(path = %db_path.display(), "Created record database");
            }
            Ok(SchemaCreateResult::Current) => {}
            Err(reason) => return Err(QnaError::InvalidStore { reason }),
        }

        Ok(Database { conn })
    }

    /// Open a throwaway in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| map_db_err!("open database", e))?;
        create_schema(&conn).map_err(|reason| QnaError::InvalidStore { reason })?;
        Ok(Database { conn })
    }

    pub fn get_record_count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM records", [], |r| r.get(0))
            .map_err(|e| map_db_err!("count records", e))
    }
}
