//! Fragment path resolution.
//!
//! Maps a `(directory, name)` pair onto `library_root/directory/name`,
//! appending [`DEFAULT_EXTENSION`] when the name has no extension of its own.

use std::path::{Component, Path, PathBuf};

use crate::defaults::DEFAULT_EXTENSION;
use crate::error::{Error, Result};
use crate::group::FragmentRef;

/// Return `name` with the default extension appended if it has none.
///
/// `style` becomes `style.md`; `notes.txt` is returned unchanged.
pub fn with_default_extension(name: &str) -> String {
    if Path::new(name).extension().is_some() {
        name.to_string()
    } else {
        format!("{}.{}", name, DEFAULT_EXTENSION)
    }
}

/// Whether `part` is a plain relative path that cannot leave the library.
pub fn is_confined(part: &str) -> bool {
    Path::new(part)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Only plain relative segments may address a fragment.
fn ensure_relative(token_part: &str, what: &str, directory: &str, name: &str) -> Result<()> {
    if !is_confined(token_part) {
        return Err(Error::MalformedGroup {
            token: format!("{}:{}", directory, name),
            reason: format!("{} '{}' must stay inside the fragment library", what, token_part),
        });
    }
    Ok(())
}

/// Resolve one fragment to the path of an existing regular file.
pub fn resolve(library_root: &Path, directory: &str, name: &str) -> Result<PathBuf> {
    ensure_relative(directory, "directory", directory, name)?;
    ensure_relative(name, "fragment name", directory, name)?;

    let file_name = with_default_extension(name);
    let attempted_path = library_root.join(directory).join(&file_name);

    // metadata() follows symlinks, so a link to a regular file is accepted
    match attempted_path.metadata() {
        Ok(meta) if meta.is_file() => Ok(attempted_path),
        _ => Err(Error::FragmentNotFound {
            directory: directory.to_string(),
            name: file_name,
            attempted_path,
        }),
    }
}

/// Resolve a [`FragmentRef`].
pub fn resolve_ref(library_root: &Path, fragment: &FragmentRef) -> Result<PathBuf> {
    resolve(library_root, &fragment.directory, &fragment.name)
}
