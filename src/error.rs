//! # Error Handling
//!
//! This module defines the centralized error type for `fragment-merge`. It
//! uses the `thiserror` library to give every failure mode its own variant,
//! carrying enough context (token, directory, name, path) for a user to fix
//! their input without reading the source.
//!
//! ## Key Components
//!
//! - **`Error`**: one variant per failure the tool can report. Every variant
//!   is fatal for the invocation; there is no local recovery.
//!
//! - **`Result<T>`**: a type alias for `std::result::Result<T, Error>`.
//!
//! Each variant maps onto a process exit code through [`Error::exit_code`],
//! using the constants in [`crate::exit_codes`].

use std::path::PathBuf;

use thiserror::Error;

use crate::exit_codes;

/// Main error type for fragment-merge operations
#[derive(Error, Debug)]
pub enum Error {
    /// The command line was missing arguments or had the wrong shape.
    #[error("{message}")]
    Usage { message: String },

    /// A group token could not be parsed into a directory and name list.
    #[error("Malformed group token '{token}': {reason}")]
    MalformedGroup { token: String, reason: String },

    /// The environment argument is not one of the accepted values.
    #[error("Invalid environment '{value}': expected one of: {}", crate::destination::Environment::ACCEPTED.join(", "))]
    InvalidEnvironment { value: String },

    /// The target project path does not exist or is not a directory.
    #[error("Target project path is not an existing directory: {}", path.display())]
    InvalidTarget { path: PathBuf },

    /// The fragment library root does not exist or is not a directory.
    #[error("Fragment library not found: {}", path.display())]
    LibraryNotFound { path: PathBuf },

    /// A requested fragment does not resolve to a regular file.
    #[error("Fragment not found: {directory}/{name} (looked for {})", attempted_path.display())]
    FragmentNotFound {
        directory: String,
        name: String,
        attempted_path: PathBuf,
    },

    /// A fragment exists but its content could not be read.
    #[error("Failed to read fragment '{}': {source}", path.display())]
    FragmentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating the destination directory or writing the output failed.
    #[error("Failed to write output '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// The process exit code this error should terminate with.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage { .. }
            | Error::MalformedGroup { .. }
            | Error::InvalidEnvironment { .. }
            | Error::InvalidTarget { .. } => exit_codes::USAGE,
            Error::LibraryNotFound { .. }
            | Error::FragmentNotFound { .. }
            | Error::FragmentRead { .. } => exit_codes::FRAGMENT_NOT_FOUND,
            Error::OutputWrite { .. } => exit_codes::OUTPUT_WRITE,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
