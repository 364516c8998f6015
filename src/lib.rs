//! # Fragment Merge Library
//!
//! This library assembles a single instruction document for a project by
//! concatenating named markdown fragments drawn from a shared library. It is
//! used by the `fragment-merge` command-line tool but the pieces can be driven
//! directly.
//!
//! ## Quick Example
//!
//! ```
//! use fragment_merge::driver::Driver;
//! use std::fs;
//!
//! let library = tempfile::tempdir().unwrap();
//! let project = tempfile::tempdir().unwrap();
//! fs::create_dir_all(library.path().join("copilot")).unwrap();
//! fs::write(library.path().join("copilot/a.md"), "A").unwrap();
//! fs::write(library.path().join("copilot/b.md"), "B").unwrap();
//!
//! let report = Driver::new(library.path(), project.path(), "copilot", ["a,b"])
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(report.files_merged, 2);
//! assert_eq!(fs::read_to_string(report.destination).unwrap(), "A\n\nB\n\n");
//! ```
//!
//! ## Core Concepts
//!
//! - **Group tokens (`group`)**: `[directory:]name[,name]*` arguments naming
//!   fragments, parsed into [`group::FragmentGroup`]s.
//! - **Locator (`locator`)**: turns a directory and name into the path of an
//!   existing fragment file, adding `.md` when the name has no extension.
//! - **Aggregator (`aggregate`)**: reads fragments in order into an
//!   [`aggregate::AggregateBuffer`], separating them by one blank line.
//! - **Destination (`destination`)**: maps the `copilot` / `claude`
//!   environment to its fixed output path inside the project.
//! - **Write (`write`)**: atomic temp-file-and-rename replacement.
//! - **Driver (`driver`)**: one invocation, tying the steps together.
//!
//! Every failure is fatal and nothing is written until every fragment has
//! been read, so a run either produces the full document or leaves the
//! project untouched.

pub mod aggregate;
pub mod defaults;
pub mod destination;
pub mod driver;
pub mod error;
pub mod exit_codes;
pub mod group;
pub mod library;
pub mod locator;
pub mod output;
pub mod write;

#[cfg(test)]
mod group_proptest;
