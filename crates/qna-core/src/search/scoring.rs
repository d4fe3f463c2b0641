use std::cmp::Ordering;

use super::index::{Document, LexicalIndex};
use crate::record::Record;

/// A record with its relevance to the current query
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord<'a> {
    pub record: &'a Record,
    pub score: f64,
}

/// Inverse document frequency: `1 + ln(N / (1 + df))`.
///
/// With `df <= N` the result is at least `1 - ln 2`, so any matched term
/// contributes a positive weight.
pub fn idf(total_docs: usize, docs_with_term: usize) -> f64 {
    1.0 + (total_docs as f64 / (1.0 + docs_with_term as f64)).ln()
}

/// TF-IDF of the query terms against one document.
///
/// Repeated query terms are counted once per occurrence.
fn tfidf(index: &LexicalIndex<'_>, terms: &[String], document: &Document) -> f64 {
    let total_docs = index.len();
    terms
        .iter()
        .map(|term| {
            let tf = document.term_frequency(term);
            if tf == 0 {
                return 0.0;
            }
            let weight = idf(total_docs, index.document_frequency(term));
            let weight = if weight.is_finite() { weight } else { 0.0 };
            f64::from(tf) * weight
        })
        .sum()
}

/// Score every document in index order
pub fn score_all<'a>(index: &LexicalIndex<'a>, query: &str) -> Vec<ScoredRecord<'a>> {
    let terms = index.tokenize_query(query);
    index
        .entries()
        .iter()
        .map(|entry| ScoredRecord {
            record: entry.record,
            score: tfidf(index, &terms, &entry.document),
        })
        .collect()
}

/// Score, sort by descending relevance and drop non-positive scores.
///
/// The sort is stable: equal scores keep their index order.
pub fn rank<'a>(index: &LexicalIndex<'a>, query: &str) -> Vec<ScoredRecord<'a>> {
    let mut scored = score_all(index, query);
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.retain(|s| s.score > 0.0);
    scored
}
