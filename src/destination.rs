//! Output location conventions.
//!
//! Each environment reads its instructions from a fixed path inside the
//! project:
//!
//! | Environment | Destination                              |
//! |-------------|------------------------------------------|
//! | `copilot`   | `<project>/.github/copilot-instructions.md` |
//! | `claude`    | `<project>/.clauderc`                    |

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};

/// The consumer convention that decides where the document is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Copilot,
    Claude,
}

impl Environment {
    /// Accepted spellings, matched case-sensitively.
    pub const ACCEPTED: [&'static str; 2] = ["copilot", "claude"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Copilot => "copilot",
            Environment::Claude => "claude",
        }
    }

    /// Destination path relative to the project root.
    pub fn relative_path(&self) -> PathBuf {
        match self {
            Environment::Copilot => Path::new(".github").join("copilot-instructions.md"),
            Environment::Claude => PathBuf::from(".clauderc"),
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "copilot" => Ok(Environment::Copilot),
            "claude" => Ok(Environment::Claude),
            _ => Err(Error::InvalidEnvironment {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the merged document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub kind: Environment,
    pub path: PathBuf,
}

impl OutputTarget {
    /// Compute the destination without touching the filesystem.
    pub fn new(project_root: &Path, kind: Environment) -> Self {
        Self {
            kind,
            path: project_root.join(kind.relative_path()),
        }
    }

    /// Create every missing parent directory of the destination.
    pub fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::OutputWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }
}

/// Compute the destination for `environment` and create its parent directories.
pub fn resolve_output(project_root: &Path, environment: Environment) -> Result<OutputTarget> {
    let target = OutputTarget::new(project_root, environment);
    target.ensure_parent()?;
    Ok(target)
}
