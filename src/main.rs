//! Spoor - shortest-path queries over CSV edge lists
//!
//! A command-line tool for loading directed weighted graphs from
//! delimited edge lists and answering single-source and all-pairs
//! shortest-path queries.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use spoor_core::error::ExitCode as SpoorExitCode;
use spoor_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = Cli::parse();

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::dispatch::run(&cli, start);

    match result {
        Ok(()) => ExitCode::from(SpoorExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                let envelope = serde_json::json!({
                    "error": {
                        "code": exit_code as i32,
                        "message": e.to_string(),
                    }
                });
                eprintln!("{}", envelope);
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}
