//! `qna init` - create a new store

use std::path::Path;

use crate::cli::Cli;
use crate::output_by_format_result;
use qna_core::config::StoreConfig;
use qna_core::error::{QnaError, Result};
use qna_core::store::Store;

/// Execute the init command
///
/// With `--store` the store is created at that path; otherwise `.qna/` is
/// created under the root directory.
pub fn execute(cli: &Cli, root: &Path, store_path: Option<&Path>) -> Result<()> {
    let store = match store_path {
        Some(path) => Store::init_at(path, StoreConfig::default())?,
        None => Store::init(root)?,
    };

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "status": "ok",
                "store": store.root().display().to_string(),
                "message": "Store initialized"
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), QnaError>(())
        },
        human => {
            if !cli.quiet {
                println!("Initialized qna store at {}", store.root().display());
            }
        },
        records => {
            println!(
                "H qna=1 records=1 store={} mode=init status=ok",
                store.root().display()
            );
        }
    )
}
