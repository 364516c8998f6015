//! Shared test utilities for end-to-end tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_fragment("copilot/a.md", "A");
//!     fixture.command().arg("copilot").arg("a").assert().success();
//! }
//! ```

use assert_cmd::Command;
use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::fragments;
    pub use super::TestFixture;
}

/// Fragment bodies used across tests.
#[allow(dead_code)]
pub mod fragments {
    pub const BASE: &str = "# Base instructions\n\nBe concise.\n";
    pub const RUST: &str = "## Rust\n\nPrefer `?` over `unwrap()`.";
    pub const TESTING: &str = "## Testing\n\nWrite tests first.\n";
}

/// A fragment library plus an empty target project, each in its own
/// temporary directory.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_fragment("copilot/a.md", "A")
///     .with_fragment("rust/style.md", "Style");
///
/// fixture
///     .command()
///     .arg("claude")
///     .arg("a")
///     .assert()
///     .success();
/// ```
pub struct TestFixture {
    library: assert_fs::TempDir,
    project: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a fixture with an empty library and an empty project.
    pub fn new() -> Self {
        Self {
            library: assert_fs::TempDir::new().expect("Failed to create library directory"),
            project: assert_fs::TempDir::new().expect("Failed to create project directory"),
        }
    }

    /// Add a fragment file at `path` relative to the library root.
    pub fn with_fragment(self, path: &str, content: &str) -> Self {
        self.library
            .child(path)
            .write_str(content)
            .expect("Failed to write fragment");
        self
    }

    /// Add a file inside the target project.
    #[allow(dead_code)]
    pub fn with_project_file(self, path: &str, content: &str) -> Self {
        self.project
            .child(path)
            .write_str(content)
            .expect("Failed to write project file");
        self
    }

    pub fn library(&self) -> &Path {
        self.library.path()
    }

    pub fn project(&self) -> &Path {
        self.project.path()
    }

    /// Destination for the copilot environment.
    #[allow(dead_code)]
    pub fn copilot_output(&self) -> PathBuf {
        self.project.path().join(".github/copilot-instructions.md")
    }

    /// Destination for the claude environment.
    #[allow(dead_code)]
    pub fn claude_output(&self) -> PathBuf {
        self.project.path().join(".clauderc")
    }

    /// A command with `--library` and the project path already set, so the
    /// caller only adds the environment and group tokens.
    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("fragment-merge");
        cmd.arg("--library")
            .arg(self.library())
            .arg("--color")
            .arg("never")
            .arg(self.project());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
