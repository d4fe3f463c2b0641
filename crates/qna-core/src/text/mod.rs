//! Text processing utilities for tokenization

use std::collections::HashSet;

/// Tokenization policy applied to both documents and queries.
///
/// The stopword set is empty unless a caller builds one explicitly, so every
/// token (including common words like "the") contributes to scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPolicy {
    stopwords: HashSet<String>,
}

impl TokenPolicy {
    /// Policy with an empty stopword set
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy that drops the given (lowercase) stopwords
    #[cfg(test)]
    pub fn with_stopwords<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stopwords: stopwords.into_iter().map(Into::into).collect(),
        }
    }

    /// Lowercase the text and split it into words on non-alphanumeric characters
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .filter(|token| !self.stopwords.contains(*token))
            .map(str::to_string)
            .collect()
    }
}
