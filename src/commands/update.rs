//! `qna update` - partial update of a question
//!
//! Only the supplied fields change. `updated_by` falls back to a supplied
//! `created_by`; the update timestamp and company name are always restamped.

use tracing::debug;

use crate::cli::Cli;
use crate::commands::output::print_record;
use qna_core::bail_invalid;
use qna_core::error::Result;
use qna_core::record::validate::is_email;
use qna_core::record::RecordPatch;
use qna_core::store::{RecordStore, Store};

/// Execute the update command
pub fn execute(cli: &Cli, store: &Store, id: &str, patch: &RecordPatch) -> Result<()> {
    for email in [&patch.created_by, &patch.updated_by].into_iter().flatten() {
        if !email.is_empty() && !is_email(email) {
            bail_invalid!("email", email);
        }
    }

    if patch.is_empty() {
        debug!(id, "update without field changes, restamping only");
    }

    let record = store.update_by_id(id, patch)?;
    print_record(cli, &record, "update")
}
