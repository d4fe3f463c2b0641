//! Record query engine
//!
//! Every listing runs the same fixed pipeline over a fresh store snapshot:
//! 1. tag filter (AND over requested tags, order preserving)
//! 2. only when a non-empty text query is present: build a lexical index over
//!    the filtered records, rank them by TF-IDF and drop zero scores
//!
//! Without a text query the snapshot order survives untouched.

pub mod filter;

use std::time::Instant;

use tracing::debug;

use crate::error::{QnaError, Result};
use crate::record::Record;
use crate::search::{rank, LexicalIndex};
use crate::store::RecordStore;
use crate::text::TokenPolicy;

pub use filter::TagFilter;

/// Parameters of a listing request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery<'a> {
    /// Comma-separated tags that every result must carry
    pub tags: Option<&'a str>,
    /// Free-text relevance query
    pub text: Option<&'a str>,
}

impl<'a> ListQuery<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(mut self, tags: Option<&'a str>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_text(mut self, text: Option<&'a str>) -> Self {
        self.text = text;
        self
    }

    /// The text query, if one should trigger ranking
    fn ranking_text(&self) -> Option<&'a str> {
        self.text.filter(|t| !t.is_empty())
    }
}

/// A listed record and, when ranking ran, its relevance score
#[derive(Debug, Clone, PartialEq)]
pub struct QueryHit {
    pub record: Record,
    pub score: Option<f64>,
}

/// Run the pipeline over an already retrieved snapshot
pub fn run_query(records: Vec<Record>, query: &ListQuery<'_>) -> Vec<QueryHit> {
    let start = Instant::now();
    let total = records.len();

    let filter = TagFilter::parse(query.tags);
    let filtered = filter.apply(records);
    debug!(
        total,
        kept = filtered.len(),
        tags = ?filter.required(),
        elapsed = ?start.elapsed(),
        "tag_filter"
    );

    let Some(text) = query.ranking_text() else {
        return filtered
            .into_iter()
            .map(|record| QueryHit {
                record,
                score: None,
            })
            .collect();
    };

    let index = LexicalIndex::build(&filtered, TokenPolicy::new());
    let hits: Vec<QueryHit> = rank(&index, text)
        .into_iter()
        .map(|scored| QueryHit {
            record: scored.record.clone(),
            score: Some(scored.score),
        })
        .collect();
    debug!(
        corpus = index.len(),
        matched = hits.len(),
        elapsed = ?start.elapsed(),
        "rank"
    );

    hits
}

/// Retrieve a snapshot from the store and run the pipeline over it.
///
/// Any store read failure surfaces as [`QnaError::RetrievalFailure`].
pub fn query<S: RecordStore + ?Sized>(store: &S, query: &ListQuery<'_>) -> Result<Vec<QueryHit>> {
    let records = store.retrieve_all().map_err(|e| match e {
        QnaError::RetrievalFailure { .. } => e,
        other => QnaError::retrieval(other),
    })?;

    Ok(run_query(records, query))
}

#[cfg(test)]
mod tests;
