use crate::error::{QnaError, Result};
use std::path::{Path, PathBuf};

/// Default store directory name (hidden)
pub const DEFAULT_STORE_DIR: &str = ".qna";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Walk up from `root` until a directory containing `.qna/` is found
pub fn discover_store(root: &Path) -> Result<PathBuf> {
    let mut current = root.to_path_buf();

    loop {
        let store_path = current.join(DEFAULT_STORE_DIR);
        if store_path.is_dir() {
            return Ok(store_path);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(QnaError::StoreNotFound {
                    search_root: root.to_path_buf(),
                });
            }
        }
    }
}
