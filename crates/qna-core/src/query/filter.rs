//! Tag filtering for record listings

use crate::record::Record;

/// Required tag set parsed from a comma-separated request.
///
/// Tags are compared verbatim against each record's own tags; a record
/// passes only when it carries every requested tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter<'a> {
    required: Vec<&'a str>,
}

impl<'a> TagFilter<'a> {
    /// Parse a requested tag string. Absent or empty means no filtering.
    pub fn parse(tags: Option<&'a str>) -> Self {
        let required = match tags {
            Some(tags) if !tags.is_empty() => tags.split(',').collect(),
            _ => Vec::new(),
        };
        Self { required }
    }

    pub fn required(&self) -> &[&'a str] {
        &self.required
    }

    /// True when no tags were requested
    pub fn is_noop(&self) -> bool {
        self.required.is_empty()
    }

    /// Check whether a record carries every requested tag
    pub fn matches(&self, record: &Record) -> bool {
        if self.is_noop() {
            return true;
        }

        let own = record.tags();
        self.required.iter().all(|tag| own.contains(tag))
    }

    /// Keep matching records, preserving their order
    pub fn apply(&self, records: Vec<Record>) -> Vec<Record> {
        if self.is_noop() {
            return records;
        }

        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}
