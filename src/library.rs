//! Fragment library inspection
//!
//! Walks the library root and reports every fragment as the group token that
//! would select it, so users can discover what is available.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::defaults::DEFAULT_EXTENSION;
use crate::error::{Error, Result};

/// One fragment found in the library.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Entry {
    /// Directory relative to the library root, `/`-separated.
    pub directory: String,
    /// File name, without the default extension.
    pub name: String,
    pub path: PathBuf,
}

impl Entry {
    /// The `directory:name` token that selects this fragment.
    pub fn token(&self) -> String {
        format!("{}:{}", self.directory, self.name)
    }
}

/// Fail unless `root` is an existing directory.
pub fn ensure_library(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(Error::LibraryNotFound {
            path: root.to_path_buf(),
        })
    }
}

/// List every fragment under `root`, sorted by directory then name.
///
/// Files at the top level of the library are skipped since a token always
/// names a directory. Hidden files and directories are skipped too.
pub fn list(root: &Path) -> Result<Vec<Entry>> {
    ensure_library(root)?;

    let mut entries = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

    for entry in walker {
        let entry = entry.map_err(|e| Error::FragmentRead {
            path: e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf()),
            source: e.into(),
        })?;
        if entry.depth() < 2 || !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let Some(parent) = relative.parent() else {
            continue;
        };
        let directory = parent
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let path = entry.path();
        let file_name = if path.extension().is_some_and(|ext| ext == DEFAULT_EXTENSION) {
            path.file_stem()
        } else {
            path.file_name()
        };
        let name = file_name
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        entries.push(Entry {
            directory,
            name,
            path: path.to_path_buf(),
        });
    }

    entries.sort();
    Ok(entries)
}
