//! # Invocation Driver
//!
//! A [`Driver`] holds everything one run needs: the library root, the target
//! project, the environment and the group tokens. All state is scoped to the
//! value, so tests build one per case with their own temporary directories.
//!
//! ## Execution Flow
//!
//! 1.  **Validate**: at least one token, target is a directory, environment
//!     is known, library exists.
//! 2.  **Parse**: every token into a [`FragmentGroup`].
//! 3.  **Aggregate**: read every fragment, failing on the first missing one.
//! 4.  **Resolve output**: compute the destination and create its parents.
//! 5.  **Write**: atomically replace the destination.
//!
//! Steps 1-3 never touch the destination, so any failure before step 4 leaves
//! the project exactly as it was.

use std::path::{Path, PathBuf};

use log::debug;

use crate::aggregate::{aggregate, AggregateBuffer};
use crate::defaults::DEFAULT_DIRECTORY;
use crate::destination::{resolve_output, Environment, OutputTarget};
use crate::error::{Error, Result};
use crate::group::{parse_all, FragmentGroup};
use crate::library::ensure_library;
use crate::locator::with_default_extension;
use crate::write::{write_atomic, WriteOutcome};

/// One invocation of the tool.
#[derive(Debug, Clone)]
pub struct Driver {
    library_root: PathBuf,
    project_root: PathBuf,
    environment: String,
    tokens: Vec<String>,
    default_directory: String,
}

/// The merged document and where it would go, computed without side effects.
#[derive(Debug)]
pub struct Composition {
    pub groups: Vec<FragmentGroup>,
    pub buffer: AggregateBuffer,
    pub target: OutputTarget,
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct Report {
    pub files_merged: usize,
    pub destination: PathBuf,
    pub bytes_written: usize,
    pub outcome: WriteOutcome,
    /// `directory/file` of every merged fragment, in merge order.
    pub merged: Vec<String>,
}

impl Driver {
    pub fn new<L, P, E, I, S>(
        library_root: L,
        project_root: P,
        environment: E,
        tokens: I,
    ) -> Self
    where
        L: Into<PathBuf>,
        P: Into<PathBuf>,
        E: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            library_root: library_root.into(),
            project_root: project_root.into(),
            environment: environment.into(),
            tokens: tokens.into_iter().map(Into::into).collect(),
            default_directory: DEFAULT_DIRECTORY.to_string(),
        }
    }

    /// Override the directory used by tokens without a `directory:` prefix.
    pub fn with_default_directory(mut self, directory: impl Into<String>) -> Self {
        self.default_directory = directory.into();
        self
    }

    pub fn library_root(&self) -> &Path {
        &self.library_root
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Check the invocation's shape before any fragment is read.
    pub fn validate(&self) -> Result<Environment> {
        if self.tokens.is_empty() {
            return Err(Error::Usage {
                message: "At least one group token is required".to_string(),
            });
        }
        if !self.project_root.is_dir() {
            return Err(Error::InvalidTarget {
                path: self.project_root.clone(),
            });
        }
        let environment: Environment = self.environment.parse()?;
        ensure_library(&self.library_root)?;
        Ok(environment)
    }

    /// Validate, parse and aggregate. Nothing is created or written.
    pub fn compose(&self) -> Result<Composition> {
        let environment = self.validate()?;
        let groups = parse_all(&self.tokens, &self.default_directory)?;
        debug!(
            "Parsed {} group(s) from {} token(s)",
            groups.len(),
            self.tokens.len()
        );
        let buffer = aggregate(&groups, &self.library_root)?;
        let target = OutputTarget::new(&self.project_root, environment);

        Ok(Composition {
            groups,
            buffer,
            target,
        })
    }

    /// Run the whole pipeline and write the destination.
    pub fn run(&self) -> Result<Report> {
        let Composition { buffer, target, .. } = self.compose()?;

        let merged = buffer
            .blocks()
            .iter()
            .map(|block| {
                format!(
                    "{}/{}",
                    block.fragment.directory,
                    with_default_extension(&block.fragment.name)
                )
            })
            .collect();
        let files_merged = buffer.len();
        let content = buffer.into_bytes();

        let target = resolve_output(&self.project_root, target.kind)?;
        let outcome = write_atomic(&target.path, &content)?;

        Ok(Report {
            files_merged,
            destination: target.path,
            bytes_written: content.len(),
            outcome,
            merged,
        })
    }
}
