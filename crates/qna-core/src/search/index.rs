use std::collections::HashMap;

use crate::record::Record;
use crate::text::TokenPolicy;

/// Tokenized text of one record
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Normalized, single-space separated tokens
    text: String,
    term_counts: HashMap<String, u32>,
    len: usize,
}

impl Document {
    /// Build a document from `question + " " + answer`
    pub fn from_record(record: &Record, policy: &TokenPolicy) -> Self {
        let raw = format!("{} {}", record.question, record.answer);
        Self::from_tokens(policy.tokenize(&raw))
    }

    fn from_tokens(tokens: Vec<String>) -> Self {
        let mut term_counts: HashMap<String, u32> = HashMap::new();
        for token in &tokens {
            *term_counts.entry(token.clone()).or_insert(0) += 1;
        }

        Self {
            text: tokens.join(" "),
            len: tokens.len(),
            term_counts,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of tokens in the document
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw occurrence count of a term
    pub fn term_frequency(&self, term: &str) -> u32 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    fn distinct_terms(&self) -> impl Iterator<Item = &str> {
        self.term_counts.keys().map(String::as_str)
    }
}

/// A record paired with its document
#[derive(Debug, Clone)]
pub struct IndexedRecord<'a> {
    pub record: &'a Record,
    pub document: Document,
}

/// Per-request lexical index over a filtered record sequence.
///
/// Entries keep the order of the input sequence.
#[derive(Debug, Clone, Default)]
pub struct LexicalIndex<'a> {
    entries: Vec<IndexedRecord<'a>>,
    document_frequency: HashMap<String, usize>,
    policy: TokenPolicy,
}

impl<'a> LexicalIndex<'a> {
    /// Build an index over `records` with the given tokenization policy
    pub fn build(records: &'a [Record], policy: TokenPolicy) -> Self {
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        let entries: Vec<IndexedRecord<'a>> = records
            .iter()
            .map(|record| {
                let document = Document::from_record(record, &policy);
                for term in document.distinct_terms() {
                    *document_frequency.entry(term.to_string()).or_insert(0) += 1;
                }
                IndexedRecord { record, document }
            })
            .collect();

        Self {
            entries,
            document_frequency,
            policy,
        }
    }

    pub fn entries(&self) -> &[IndexedRecord<'a>] {
        &self.entries
    }

    /// Number of documents in the corpus
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of documents containing `term`
    pub fn document_frequency(&self, term: &str) -> usize {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    /// Tokenize a query with the same policy the documents were built with
    pub fn tokenize_query(&self, query: &str) -> Vec<String> {
        self.policy.tokenize(query)
    }
}
