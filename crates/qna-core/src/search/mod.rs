//! Relevance search over a record snapshot
//!
//! A [`LexicalIndex`] is built per request from the records that survived
//! tag filtering, scored against the query with TF-IDF, and dropped when the
//! request completes. Nothing is cached between requests, so relevance is
//! always relative to the current candidate set.

mod index;
mod scoring;

pub use index::{Document, IndexedRecord, LexicalIndex};
pub use scoring::{idf, rank, score_all, ScoredRecord};
