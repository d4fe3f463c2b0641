//! Records output formatting for list command

use qna_core::query::QueryHit;
use qna_core::records::{format_record, header};

/// Output in records format
pub fn output_records(hits: &[QueryHit], show_scores: bool) {
    println!("{}", header("list", hits.len()));

    for hit in hits {
        let score = if show_scores { hit.score } else { None };
        for line in format_record(&hit.record, score) {
            println!("{}", line);
        }
    }
}
