//! # Fragment Merge CLI
//!
//! This is the binary entry point for the `fragment-merge` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging and terminal output.
//! - Translating failures into a diagnostic and the documented exit code.
//!
//! The core logic lives in the `fragment_merge` library crate, so the binary
//! stays a thin wrapper around it.

mod cli;
mod commands;

use clap::Parser;

use fragment_merge::error::Error;
use fragment_merge::exit_codes;
use fragment_merge::output::Marker;

fn main() {
    // clap exits with 2 on bad usage, which is reserved for missing fragments
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                exit_codes::USAGE
            } else {
                exit_codes::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    cli.init_logging();
    let output = cli.output_config();

    if let Err(err) = cli.execute(&output) {
        eprintln!("{}", output.line(Marker::Failure, &err.to_string()));

        let lib_err = err.downcast_ref::<Error>();
        if matches!(lib_err, Some(Error::Usage { .. } | Error::InvalidTarget { .. })) {
            eprintln!();
            eprintln!("{}", cli::usage());
        }
        std::process::exit(lib_err.map(Error::exit_code).unwrap_or(exit_codes::USAGE));
    }
}
