//! Path resolution for store discovery

use std::env;
use std::path::PathBuf;

/// Resolve the directory store discovery starts from.
///
/// An explicit `--root` wins; otherwise the current working directory, or
/// "." if that cannot be determined.
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}
