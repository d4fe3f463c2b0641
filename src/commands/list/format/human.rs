//! Human-readable output formatting for list command

use crate::cli::Cli;
use qna_core::query::QueryHit;

/// Output in human format
pub fn output_human(cli: &Cli, hits: &[QueryHit], show_scores: bool) {
    if hits.is_empty() {
        if !cli.quiet {
            println!("No questions found");
        }
        return;
    }

    for hit in hits {
        let record = &hit.record;
        let tags = record.tags();
        let tags_str = if tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", tags.join(", "))
        };
        let score_str = match hit.score {
            Some(score) if show_scores => format!(" ({:.4})", score),
            _ => String::new(),
        };
        let answered = if record.answer.is_empty() { "?" } else { "A" };

        println!(
            "{} {} {}{}{}",
            answered, record.id, record.question, tags_str, score_str
        );
    }
}
