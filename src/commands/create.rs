//! `qna create` - record a new question
//!
//! Validation failures (missing question, malformed `--created-by` email)
//! are reported together and exit with a usage error.

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::commands::output::print_record;
use qna_core::error::Result;
use qna_core::record::NewRecord;
use qna_core::store::{RecordStore, Store};

/// Execute the create command
pub fn execute(cli: &Cli, store: &Store, new: NewRecord) -> Result<()> {
    let start = Instant::now();

    if cli.verbose {
        debug!(created_by = %new.created_by, properties = ?new.properties, "create_params");
    }

    let record = store.create(new)?;

    if cli.verbose {
        debug!(id = %record.id, elapsed = ?start.elapsed(), "create_record");
    }

    match cli.format {
        // Scripts capture the new id from the first line
        OutputFormat::Human => {
            println!("{}", record.id);
            Ok(())
        }
        _ => print_record(cli, &record, "create"),
    }
}
