use std::time::Instant;

use rusqlite::{params, OptionalExtension, Row};

use crate::error::Result;
use crate::{map_db_err, trace_time};
use crate::record::Record;

const RECORD_COLUMNS: &str = "id, record_id, question, question_description, answer, properties, \
     created_by, updated_by, assigned_to, company_name, company_id, created_at, updated_at";

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<Record> {
    Ok(Record {
        id: row.get(0)?,
        record_id: row.get(1)?,
        question: row.get(2)?,
        question_description: row.get(3)?,
        answer: row.get(4)?,
        properties: row.get(5)?,
        created_by: row.get(6)?,
        updated_by: row.get(7)?,
        assigned_to: row.get(8)?,
        company_name: row.get(9)?,
        company_id: row.get(10)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}

impl super::Database {
    pub fn insert_record(&self, record: &Record) -> Result<()> {
        self.conn
            .execute(
                &format!(
                    "INSERT INTO records ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
                    RECORD_COLUMNS
                ),
                params![
                    record.id,
                    record.record_id,
                    record.question,
                    record.question_description,
                    record.answer,
                    record.properties,
                    record.created_by,
                    record.updated_by,
                    record.assigned_to,
                    record.company_name,
                    record.company_id,
                    record.created_at,
                    record.updated_at,
                ],
            )
            .map_err(|e| map_db_err!(&format!("insert record {}", record.id), e))?;
        Ok(())
    }

    /// Write the self-reference field of a record. Returns false if no row matched.
    pub fn set_record_id(&self, id: &str, record_id: &str) -> Result<bool> {
        let changed = self
            .conn
            .execute(
                "UPDATE records SET record_id = ?2 WHERE id = ?1",
                params![id, record_id],
            )
            .map_err(|e| map_db_err!(&format!("set record id on {}", id), e))?;
        Ok(changed > 0)
    }

    /// Overwrite every mutable column of an existing row
    pub fn update_record(&self, record: &Record) -> Result<bool> {
        let changed = self
            .conn
            .execute(
                "UPDATE records SET question = ?2, question_description = ?3, answer = ?4, \
                 properties = ?5, created_by = ?6, updated_by = ?7, assigned_to = ?8, \
                 company_name = ?9, updated_at = ?10 WHERE id = ?1",
                params![
                    record.id,
                    record.question,
                    record.question_description,
                    record.answer,
                    record.properties,
                    record.created_by,
                    record.updated_by,
                    record.assigned_to,
                    record.company_name,
                    record.updated_at,
                ],
            )
            .map_err(|e| map_db_err!(&format!("update record {}", record.id), e))?;
        Ok(changed > 0)
    }

    /// Delete a row. Returns false if no row matched.
    pub fn delete_record(&self, id: &str) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM records WHERE id = ?1", params![id])
            .map_err(|e| map_db_err!(&format!("delete record {}", id), e))?;
        Ok(changed > 0)
    }

    pub fn get_record(&self, id: &str) -> Result<Option<Record>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM records WHERE id = ?1", RECORD_COLUMNS),
                params![id],
                record_from_row,
            )
            .optional()
            .map_err(|e| map_db_err!(&format!("read record {}", id), e))
    }

    /// Every record in insertion order
    pub fn list_records(&self) -> Result<Vec<Record>> {
        let start = Instant::now();
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM records ORDER BY seq", RECORD_COLUMNS))
            .map_err(|e| map_db_err!("prepare record scan", e))?;

        let rows = stmt
            .query_map([], record_from_row)
            .map_err(|e| map_db_err!("scan records", e))?;

        let records = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read record row", e))?;

        trace_time!(start, "list_records", count = records.len());
        Ok(records)
    }
}
