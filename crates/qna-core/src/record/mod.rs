//! Question/answer records
//!
//! A record is one row of the question table. The store owns canonical
//! record data; everything else works on owned snapshots.

mod types;
pub mod validate;

pub use types::{Assignment, NewRecord, Record, RecordPatch, ASSIGNED_STATUS, TIMESTAMP_FORMAT};

use chrono::{DateTime, Utc};

/// Format a timestamp the way records store it (`YYYY-MM-DD HH:MM`, UTC)
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current time formatted as a record timestamp
pub fn timestamp_now() -> String {
    format_timestamp(Utc::now())
}
