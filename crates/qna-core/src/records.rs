//! Utilities for the records output format
//!
//! Each record is one `R` line; long text fields follow as `Q`/`A`/`D`
//! lines so consumers can grep by prefix.

use crate::record::Record;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Collapse newlines so a field stays on one line
fn single_line(s: &str) -> String {
    s.lines().collect::<Vec<_>>().join(" ")
}

/// Header line for a records listing
pub fn header(mode: &str, count: usize) -> String {
    format!("H qna=1 records=1 mode={} questions={}", mode, count)
}

/// Format one record (and its optional score) as records lines
pub fn format_record(record: &Record, score: Option<f64>) -> Vec<String> {
    let tags_csv = if record.properties.is_empty() {
        "-"
    } else {
        record.properties.as_str()
    };

    let mut head = format!(
        "R {} tags={} created_by={} updated={}",
        record.id,
        tags_csv,
        record.created_by,
        record.updated_at.replace(' ', "T")
    );
    if let Some(assignment) = record.assignment() {
        head.push_str(&format!(" assigned={}", assignment.email));
    }
    if let Some(score) = score {
        head.push_str(&format!(" score={:.4}", score));
    }

    let mut lines = vec![
        head,
        format!(
            "Q {} \"{}\"",
            record.id,
            escape_quotes(&single_line(&record.question))
        ),
    ];

    if !record.question_description.is_empty() {
        lines.push(format!(
            "D {} \"{}\"",
            record.id,
            escape_quotes(&single_line(&record.question_description))
        ));
    }
    if !record.answer.is_empty() {
        lines.push(format!(
            "A {} \"{}\"",
            record.id,
            escape_quotes(&single_line(&record.answer))
        ));
    }

    lines
}
