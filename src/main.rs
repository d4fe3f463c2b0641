//! Qna - question and answer tracking CLI
//!
//! Records questions, their answers and tags in a local store, and lists
//! them with tag filtering and TF-IDF relevance search.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use qna_core::error::{ExitCode as QnaExitCode, QnaError};
use qna_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json(env::args().skip(1));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap may fail before `Cli.format` is known; honour a JSON request anyway
            if argv_format_json {
                let qna_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => QnaError::UsageError(err.to_string()),
                };

                eprintln!("{}", qna_error.to_json());
                return ExitCode::from(qna_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::dispatch::run(&cli, start);

    match result {
        Ok(()) => ExitCode::from(QnaExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

/// Detect `--format json` / `--format=json` before clap has parsed anything.
///
/// The format value is matched case-insensitively, as the parser accepts it.
fn argv_requests_json(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v.eq_ignore_ascii_case("json")) {
                return true;
            }
        } else if arg
            .strip_prefix("--format=")
            .is_some_and(|v| v.eq_ignore_ascii_case("json"))
        {
            return true;
        }
    }
    false
}
