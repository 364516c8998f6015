//! Merge command implementation
//!
//! Validates the invocation, merges every requested fragment and writes the
//! result to the environment's destination. With `--dry-run` the document is
//! printed to stdout instead and nothing on disk is touched.

use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::path::{Path, PathBuf};

use fragment_merge::driver::Driver;
use fragment_merge::error::Error;
use fragment_merge::output::{Marker, OutputConfig};

/// Arguments for merging fragments into a project
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Project directory that receives the merged document
    #[arg(value_name = "TARGET_PROJECT_PATH", required_unless_present = "list")]
    pub target: Option<PathBuf>,

    /// Output convention: copilot or claude
    #[arg(value_name = "ENVIRONMENT", required_unless_present = "list")]
    pub environment: Option<String>,

    /// Fragment groups, each [directory:]name[,name]...
    #[arg(value_name = "GROUP_TOKEN", required_unless_present = "list", num_args = 1..)]
    pub groups: Vec<String>,

    /// Print the merged document instead of writing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Execute the merge
pub fn execute(args: MergeArgs, library_root: &Path, output: &OutputConfig) -> Result<()> {
    let (Some(target), Some(environment)) = (args.target, args.environment) else {
        return Err(Error::Usage {
            message: "A target project path and an environment are required".to_string(),
        }
        .into());
    };

    let driver = Driver::new(library_root, target, environment, args.groups);

    if args.dry_run {
        return dry_run(&driver, output);
    }

    let report = driver.run()?;

    if !output.quiet {
        if output.verbose {
            println!(
                "{}",
                output.line(
                    Marker::Library,
                    &format!("Library: {}", driver.library_root().display())
                )
            );
            for fragment in &report.merged {
                println!("{}", output.line(Marker::Fragment, fragment));
            }
            println!("   {} bytes", report.bytes_written);
        }
        println!(
            "{}",
            output.summary(report.outcome, report.files_merged, &report.destination)
        );
    }

    Ok(())
}

fn dry_run(driver: &Driver, output: &OutputConfig) -> Result<()> {
    let composition = driver.compose()?;

    if !output.quiet {
        eprintln!(
            "{}",
            output.line(
                Marker::DryRun,
                &format!(
                    "Would merge {} fragment(s) into {}",
                    composition.buffer.len(),
                    composition.target.path.display()
                )
            )
        );
        if output.verbose {
            for block in composition.buffer.blocks() {
                eprintln!(
                    "{}",
                    output.line(Marker::Fragment, &block.path.display().to_string())
                );
            }
        }
    }

    let content = composition.buffer.into_bytes();
    let stdout_err = |source| Error::OutputWrite {
        path: PathBuf::from("<stdout>"),
        source,
    };
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&content).map_err(stdout_err)?;
    stdout.flush().map_err(stdout_err)?;

    Ok(())
}
