//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::Cli;
use qna_core::error::Result;
use qna_core::store::Store;

/// Resolve `--store` against the root directory
pub fn resolve_store_path(cli: &Cli, root: &Path) -> Option<PathBuf> {
    cli.store.as_ref().map(|path| {
        if path.is_absolute() {
            path.clone()
        } else {
            root.join(path)
        }
    })
}

/// Discover or open a store based on CLI configuration
pub fn discover_or_open_store(cli: &Cli, root: &Path) -> Result<Store> {
    match resolve_store_path(cli, root) {
        Some(path) => Store::open(&path),
        None => Store::discover(root),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn discover_or_open_store(&self) -> Result<Store> {
        discover_or_open_store(self.cli, self.root)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("qna {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Track questions and answers, filter them by tag and search them by relevance.");
        println!();
        println!("Run `qna --help` for usage information.");
        Ok(())
    }
}
