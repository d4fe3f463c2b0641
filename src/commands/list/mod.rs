//! `qna list` - list questions
//!
//! - `--properties` keeps questions carrying every requested tag
//! - `--query` ranks the survivors by TF-IDF relevance and drops zero scores
//! - `--scores` adds the relevance score to each listed question
//!
//! Without a query, questions keep store insertion order.

pub mod format;

use crate::cli::{Cli, OutputFormat};
use qna_core::bail_usage;
use qna_core::error::Result;
use qna_core::query::{query, ListQuery};
use qna_core::store::Store;

use self::format::{output_human, output_json, output_records};

/// Execute the list command
pub fn execute(
    cli: &Cli,
    store: &Store,
    list_query: &ListQuery<'_>,
    show_scores: bool,
) -> Result<()> {
    if show_scores && !list_query.text.is_some_and(|t| !t.is_empty()) {
        bail_usage!("--scores requires --query");
    }

    let hits = query(store, list_query)?;

    match cli.format {
        OutputFormat::Json => output_json(&hits, show_scores)?,
        OutputFormat::Human => output_human(cli, &hits, show_scores),
        OutputFormat::Records => output_records(&hits, show_scores),
    }

    Ok(())
}
