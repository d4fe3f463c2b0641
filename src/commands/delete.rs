//! `qna delete` - remove a question

use crate::cli::Cli;
use crate::output_by_format_result;
use qna_core::error::{QnaError, Result};
use qna_core::store::{RecordStore, Store};

/// Message printed after a successful delete
pub const DELETED_MESSAGE: &str = "Question deleted successfully";

/// Execute the delete command
pub fn execute(cli: &Cli, store: &Store, id: &str) -> Result<()> {
    store.delete_by_id(id)?;

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "id": id,
                "message": DELETED_MESSAGE,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), QnaError>(())
        },
        human => {
            if !cli.quiet {
                println!("{}", DELETED_MESSAGE);
            }
        },
        records => {
            println!("H qna=1 records=1 mode=delete id={} status=ok", id);
        }
    )
}
