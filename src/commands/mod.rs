//! # CLI Command Implementations
//!
//! Each mode of the `fragment-merge` tool lives in its own module with an
//! `execute` function that takes the parsed arguments, calls into the
//! `fragment_merge` library and prints the trace.

pub mod list;
pub mod merge;
