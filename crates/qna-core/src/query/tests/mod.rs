
use crate::error::{QnaError, Result};
use crate::query::{query, run_query, ListQuery};
use crate::record::{NewRecord, Record, RecordPatch};
use crate::store::RecordStore;

/// Pipeline over a snapshot, records only
pub(super) fn apply_query(records: Vec<Record>, list_query: &ListQuery<'_>) -> Vec<Record> {
    run_query(records, list_query)
        .into_iter()
        .map(|hit| hit.record)
        .collect()
}

/// Store-backed pipeline, records only
pub(super) fn query_records<S: RecordStore>(
    store: &S,
    list_query: &ListQuery<'_>,
) -> Result<Vec<Record>> {
    Ok(query(store, list_query)?
        .into_iter()
        .map(|hit| hit.record)
        .collect())
}

pub(super) fn record(id: &str, question: &str, answer: &str, properties: &str) -> Record {
    Record {
        id: id.to_string(),
        record_id: Some(id.to_string()),
        question: question.to_string(),
        question_description: String::new(),
        answer: answer.to_string(),
        properties: properties.to_string(),
        created_by: "ana@example.com".to_string(),
        updated_by: "ana@example.com".to_string(),
        assigned_to: String::new(),
        company_name: "Test Company Limited".to_string(),
        company_id: 63297,
        created_at: "2024-01-01 10:00".to_string(),
        updated_at: "2024-01-01 10:00".to_string(),
    }
}

pub(super) fn ids(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

/// Read-only store serving a fixed snapshot
pub(super) struct SnapshotStore(pub Vec<Record>);

impl RecordStore for SnapshotStore {
    fn create(&self, _record: NewRecord) -> Result<Record> {
        Err(QnaError::Other("read-only snapshot".to_string()))
    }

    fn retrieve_all(&self) -> Result<Vec<Record>> {
        Ok(self.0.clone())
    }

    fn update_by_id(&self, _id: &str, _patch: &RecordPatch) -> Result<Record> {
        Err(QnaError::Other("read-only snapshot".to_string()))
    }

    fn delete_by_id(&self, _id: &str) -> Result<()> {
        Err(QnaError::Other("read-only snapshot".to_string()))
    }
}

/// Store whose reads always fail
pub(super) struct FailingStore;

impl RecordStore for FailingStore {
    fn create(&self, _record: NewRecord) -> Result<Record> {
        Err(QnaError::Other("unavailable".to_string()))
    }

    fn retrieve_all(&self) -> Result<Vec<Record>> {
        Err(QnaError::Other("connection refused".to_string()))
    }

    fn update_by_id(&self, _id: &str, _patch: &RecordPatch) -> Result<Record> {
        Err(QnaError::Other("unavailable".to_string()))
    }

    fn delete_by_id(&self, _id: &str) -> Result<()> {
        Err(QnaError::Other("unavailable".to_string()))
    }
}
