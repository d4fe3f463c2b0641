//! CLI argument parsing for qna
//!
//! Global flags: --root, --store, --format, --quiet, --verbose, plus the
//! logging controls --log-level and --log-json.

pub mod args;
pub mod format;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CreateArgs, ListArgs, UpdateArgs};
pub use qna_core::format::OutputFormat;
use parse::parse_output_format;

/// Qna - question and answer tracking CLI
#[derive(Parser, Debug)]
#[command(name = "qna")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store root path
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new qna store
    Init,

    /// Record a new question
    Create(CreateArgs),

    /// Show a question by id
    Show {
        /// Question id
        id: String,
    },

    /// List questions, optionally filtered by tags and ranked by a text query
    List(ListArgs),

    /// Update fields of an existing question
    Update(UpdateArgs),

    /// Delete a question
    Delete {
        /// Question id
        id: String,
    },
}
