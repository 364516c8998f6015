//! List command implementation
//!
//! Prints every fragment in the library as the `directory:name` token that
//! selects it, one per line, sorted. With `--verbose` the file path follows
//! each token.

use anyhow::Result;
use std::path::Path;

use fragment_merge::library;
use fragment_merge::output::{Marker, OutputConfig};

/// Execute the listing
pub fn execute(library_root: &Path, output: &OutputConfig) -> Result<()> {
    let entries = library::list(library_root)?;

    if entries.is_empty() && !output.quiet {
        eprintln!(
            "{}",
            output.line(
                Marker::Library,
                &format!("No fragments found in {}", library_root.display())
            )
        );
    }

    for entry in &entries {
        if output.verbose {
            println!("{}\t{}", entry.token(), entry.path.display());
        } else {
            println!("{}", entry.token());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fragment_merge::error::Error;
    use tempfile::TempDir;

    #[test]
    fn test_execute_empty_library() {
        let temp = TempDir::new().unwrap();
        let output = OutputConfig::from_env_and_flag("never").quiet(true);
        assert!(execute(temp.path(), &output).is_ok());
    }

    #[test]
    fn test_execute_missing_library() {
        let temp = TempDir::new().unwrap();
        let output = OutputConfig::from_env_and_flag("never");
        let err = execute(&temp.path().join("absent"), &output).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::LibraryNotFound { .. })
        ));
    }
}
