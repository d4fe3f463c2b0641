//! Record CRUD on the on-disk store

use ulid::Ulid;

use super::{RecordStore, Store};
use crate::error::{QnaError, Result};
use crate::record::validate::validate_new_record;
use crate::record::{timestamp_now, NewRecord, Record, RecordPatch};

/// Prefix of every store-assigned record id
const RECORD_ID_PREFIX: &str = "rec";

fn generate_record_id() -> String {
    format!("{}{}", RECORD_ID_PREFIX, Ulid::new())
}

impl Store {
    /// Build the row for a validated new record
    fn new_row(&self, new: NewRecord) -> Record {
        let now = timestamp_now();
        let updated_by = new
            .updated_by
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| new.created_by.clone());

        Record {
            id: generate_record_id(),
            record_id: None,
            question: new.question,
            question_description: new.question_description.unwrap_or_default(),
            answer: new.answer.unwrap_or_default(),
            properties: new.properties.unwrap_or_default(),
            created_by: new.created_by,
            updated_by,
            assigned_to: new.assigned_to.unwrap_or_default(),
            company_name: self.config.company_name.clone(),
            company_id: self.config.company_id,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    fn get_by_id(&self, id: &str) -> Result<Record> {
        self.db
            .get_record(id)?
            .ok_or_else(|| QnaError::RecordNotFound { id: id.to_string() })
    }
}

impl RecordStore for Store {
    #[tracing::instrument(skip(self, record))]
    fn create(&self, record: NewRecord) -> Result<Record> {
        validate_new_record(&record)?;

        let mut row = self.new_row(record);
        self.db.insert_record(&row)?;

        // Second write: the record carries its own id
        if !self.db.set_record_id(&row.id, &row.id)? {
            return Err(QnaError::RecordNotFound { id: row.id });
        }
        row.record_id = Some(row.id.clone());

        tracing::debug!(id = %row.id, "created record");
        Ok(row)
    }

    fn retrieve_all(&self) -> Result<Vec<Record>> {
        self.db.list_records().map_err(QnaError::retrieval)
    }

    #[tracing::instrument(skip(self, patch))]
    fn update_by_id(&self, id: &str, patch: &RecordPatch) -> Result<Record> {
        let mut record = self.get_by_id(id)?;

        patch.apply(&mut record);
        record.updated_at = timestamp_now();
        record.company_name = self.config.company_name.clone();

        if !self.db.update_record(&record)? {
            return Err(QnaError::RecordNotFound { id: id.to_string() });
        }

        tracing::debug!("updated record");
        Ok(record)
    }

    #[tracing::instrument(skip(self))]
    fn delete_by_id(&self, id: &str) -> Result<()> {
        if self.db.delete_record(id)? {
            tracing::debug!("deleted record");
            Ok(())
        } else {
            Err(QnaError::RecordNotFound { id: id.to_string() })
        }
    }
}
