//! Single-question output shared by create, show and update

use qna_core::error::{QnaError, Result};
use qna_core::record::Record;
use qna_core::records::{format_record, header};

use crate::cli::Cli;
use crate::output_by_format_result;

/// Print one question in the selected format.
///
/// `mode` names the command in the records header.
pub fn print_record(cli: &Cli, record: &Record, mode: &str) -> Result<()> {
    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&record.to_json())?);
            Ok::<(), QnaError>(())
        },
        human => {
            print_human(record);
        },
        records => {
            println!("{}", header(mode, 1));
            for line in format_record(record, None) {
                println!("{}", line);
            }
        }
    )
}

fn print_human(record: &Record) {
    println!("{}  {}", record.id, record.question);

    let tags = record.tags();
    if !tags.is_empty() {
        println!("  Tags: {}", tags.join(", "));
    }
    if !record.question_description.is_empty() {
        println!("  Description: {}", record.question_description);
    }
    if record.answer.is_empty() {
        println!("  Answer: (unanswered)");
    } else {
        println!("  Answer: {}", record.answer);
    }
    if let Some(assignment) = record.assignment() {
        println!("  Assigned: {} ({})", assignment.email, assignment.status);
    }
    println!("  Created: {} by {}", record.created_at, record.created_by);
    println!("  Updated: {} by {}", record.updated_at, record.updated_by);
    println!("  Company: {} ({})", record.company_name, record.company_id);
}
