//! Writing the merged document to disk
//!
//! The document is written to a temporary file in the destination's own
//! directory and then renamed over the destination. Rename within one
//! directory is atomic on POSIX filesystems, so a reader (or a crash) sees
//! either the previous file or the complete new one, never a truncated file.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// What the write step did with the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The destination did not exist before.
    Created,
    /// The destination existed with different content.
    Updated,
    /// The destination already held exactly this content.
    Unchanged,
}

/// Atomically replace `path` with `content`.
///
/// The parent directory must already exist.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<WriteOutcome> {
    let write_err = |source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let outcome = match fs::read(path) {
        Ok(existing) if existing == content => {
            info!("{} is already up to date", path.display());
            return Ok(WriteOutcome::Unchanged);
        }
        Ok(_) => WriteOutcome::Updated,
        Err(e) if e.kind() == ErrorKind::NotFound => WriteOutcome::Created,
        // Exists but unreadable; the rename still replaces it
        Err(_) => WriteOutcome::Updated,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(write_err)?;
    temp.write_all(content).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;
    preserve_permissions(path, temp.path());
    temp.persist(path).map_err(|e| write_err(e.error))?;

    info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(outcome)
}

/// Keep an existing destination's mode; otherwise use the usual 0644.
#[cfg(unix)]
fn preserve_permissions(destination: &Path, temp: &Path) {
    use std::os::unix::fs::PermissionsExt;

    // NamedTempFile is created 0600
    let mode = fs::metadata(destination)
        .map(|meta| meta.permissions().mode() & 0o777)
        .unwrap_or(0o644);
    if let Err(e) = fs::set_permissions(temp, fs::Permissions::from_mode(mode)) {
        log::warn!("Could not set permissions on {}: {}", temp.display(), e);
    }
}

#[cfg(not(unix))]
fn preserve_permissions(_destination: &Path, _temp: &Path) {}
