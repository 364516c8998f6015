//! Default values for fragment-merge.
//!
//! This module provides centralized default values used across the library
//! and the CLI, ensuring consistency and avoiding duplication.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Directory used for group tokens that carry no `directory:` prefix.
pub const DEFAULT_DIRECTORY: &str = "copilot";

/// Extension appended to fragment names that have none.
pub const DEFAULT_EXTENSION: &str = "md";

/// Name of the library directory installed next to the executable.
pub const LIBRARY_DIR_NAME: &str = "fragments";

/// Returns the default fragment library root.
///
/// The library lives in a `fragments/` directory beside the running
/// executable, so an installed tool finds its snippets regardless of the
/// current working directory. It can be overridden with `--library`.
pub fn default_library_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| Error::Usage {
        message: format!("Cannot locate the fragment-merge executable: {}", e),
    })?;
    // Resolve symlinks so a linked binary still finds the library it shipped with
    let exe = exe.canonicalize().unwrap_or(exe);
    let install_dir = exe.parent().ok_or_else(|| Error::Usage {
        message: format!("Executable has no parent directory: {}", exe.display()),
    })?;
    Ok(install_dir.join(LIBRARY_DIR_NAME))
}
