//! Process exit codes.
//!
//! - `0`: all fragments merged and written (or listed / printed)
//! - `1`: usage error, including an invalid target, environment or token
//! - `2`: a fragment or the library could not be resolved or read
//! - `3`: the destination could not be created or written

/// Successful run.
pub const SUCCESS: i32 = 0;

/// Invalid command-line usage.
pub const USAGE: i32 = 1;

/// A requested fragment could not be resolved.
pub const FRAGMENT_NOT_FOUND: i32 = 2;

/// The output file could not be written.
pub const OUTPUT_WRITE: i32 = 3;
