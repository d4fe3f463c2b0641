//! SQLite database schema for qna

use rusqlite::{Connection, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Result of schema creation
#[derive(Debug, PartialEq, Eq)]
pub enum SchemaCreateResult {
    /// Fresh database, schema created
    Created,
    /// Existing database at the current version
    Current,
}

const SCHEMA_SQL: &str = r#"
-- Question records (one row per question)
CREATE TABLE IF NOT EXISTS records (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    record_id TEXT,
    question TEXT NOT NULL,
    question_description TEXT NOT NULL DEFAULT '',
    answer TEXT NOT NULL DEFAULT '',
    properties TEXT NOT NULL DEFAULT '',
    created_by TEXT NOT NULL,
    updated_by TEXT NOT NULL,
    assigned_to TEXT NOT NULL DEFAULT '',
    company_name TEXT NOT NULL,
    company_id INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_records_record_id ON records(record_id);

-- Store metadata
CREATE TABLE IF NOT EXISTS store_meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

/// Create the schema if missing and check the stored schema version.
///
/// A database written by a newer schema version is rejected.
pub fn create_schema(conn: &Connection) -> std::result::Result<SchemaCreateResult, String> {
    let current_version: Option<i32> = conn
        .query_row(
            "SELECT value FROM store_meta WHERE key = 'schema_version'",
            [],
            |r| r.get::<_, String>(0).map(|s| s.parse().unwrap_or(0)),
        )
        .ok();

    match current_version {
        None => {
            init_schema(conn).map_err(|e| e.to_string())?;
            Ok(SchemaCreateResult::Created)
        }
        Some(v) if v > CURRENT_SCHEMA_VERSION => Err(format!(
            "database schema version {} is newer than supported version {}",
            v, CURRENT_SCHEMA_VERSION
        )),
        Some(_) => Ok(SchemaCreateResult::Current),
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    conn.execute(
        "INSERT OR REPLACE INTO store_meta (key, value) VALUES ('schema_version', ?1)",
        [&CURRENT_SCHEMA_VERSION.to_string()],
    )?;
    Ok(())
}
