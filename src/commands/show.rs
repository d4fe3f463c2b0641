//! `qna show` - display one question

use crate::cli::Cli;
use crate::commands::output::print_record;
use qna_core::error::Result;
use qna_core::store::{RecordStore, Store};

/// Execute the show command
pub fn execute(cli: &Cli, store: &Store, id: &str) -> Result<()> {
    let record = store.get_by_record_id(id)?;
    print_record(cli, &record, "show")
}
