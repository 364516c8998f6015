//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::commands;
use fragment_merge::defaults;
use fragment_merge::output::OutputConfig;

/// Fragment Merge - Compose a project's instruction file from library fragments
///
/// Each GROUP_TOKEN has the form [directory:]name[,name]... and selects
/// fragments from <library>/<directory>/<name>.md. Tokens without a
/// directory read from the copilot directory. Fragments are merged in the
/// order given, separated by one blank line.
///
/// Environments: copilot writes .github/copilot-instructions.md,
/// claude writes .clauderc.
#[derive(Parser, Debug)]
#[command(name = "fragment-merge")]
#[command(version, about, long_about)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(flatten)]
    merge: commands::merge::MergeArgs,

    /// List the fragments available in the library and exit
    #[arg(long, conflicts_with_all = ["target", "dry_run"])]
    list: bool,

    /// Fragment library root (defaults to `fragments/` next to the executable)
    #[arg(long, global = true, value_name = "DIR")]
    library: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// List every merged fragment
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use emojis in output (always, never, auto)
    #[arg(
        long,
        global = true,
        value_name = "WHEN",
        default_value = "auto",
        value_parser = ["always", "never", "auto"]
    )]
    color: String,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

impl Cli {
    /// Route `log` records to stderr at the requested level.
    pub fn init_logging(&self) {
        env_logger::Builder::new()
            .parse_filters(&self.log_level)
            .format_timestamp(None)
            .format_target(false)
            .init();
    }

    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::from_env_and_flag(&self.color)
            .quiet(self.quiet)
            .verbose(self.verbose)
    }

    /// Execute the CLI command
    pub fn execute(self, output: &OutputConfig) -> Result<()> {
        let library_root = match self.library {
            Some(path) => path,
            None => defaults::default_library_root()?,
        };

        if self.list {
            commands::list::execute(&library_root, output)
        } else {
            commands::merge::execute(self.merge, &library_root, output)
        }
    }
}

/// The usage banner shown alongside usage errors.
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}
