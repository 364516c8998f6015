//! # Group Tokens
//!
//! A group token names one library directory and an ordered list of fragments
//! inside it:
//!
//! ```text
//! [directory:]name[,name]*
//! ```
//!
//! The token is split on its first `:`. Without a `:` the whole token is the
//! name list and the directory falls back to the caller's default (normally
//! [`crate::defaults::DEFAULT_DIRECTORY`]).
//!
//! ```
//! use fragment_merge::group::FragmentGroup;
//!
//! let group = FragmentGroup::parse("rust:style, testing", "copilot").unwrap();
//! assert_eq!(group.directory(), "rust");
//! assert_eq!(group.names(), ["style", "testing"]);
//!
//! let group = FragmentGroup::parse("base", "copilot").unwrap();
//! assert_eq!(group.directory(), "copilot");
//! ```

use log::warn;

use crate::error::{Error, Result};
use crate::locator::is_confined;

/// A directory plus the ordered fragment names requested from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentGroup {
    directory: String,
    names: Vec<String>,
}

/// A single fragment request, one per name of a [`FragmentGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentRef {
    pub directory: String,
    pub name: String,
}

impl FragmentGroup {
    /// Parse one group token.
    ///
    /// Names and the directory are trimmed of surrounding whitespace. Empty
    /// entries between commas are dropped. The token is malformed when its
    /// directory is empty, no names remain, or a part would leave the library.
    pub fn parse(token: &str, default_directory: &str) -> Result<Self> {
        let (directory, list) = match token.split_once(':') {
            Some((directory, list)) => (directory.trim(), list),
            None => (default_directory, token),
        };

        if directory.is_empty() {
            return Err(Error::MalformedGroup {
                token: token.to_string(),
                reason: "directory before ':' is empty".to_string(),
            });
        }

        let entries: Vec<&str> = list.split(',').map(str::trim).collect();
        let names: Vec<String> = entries
            .iter()
            .filter(|name| !name.is_empty())
            .map(|name| name.to_string())
            .collect();

        if names.is_empty() {
            return Err(Error::MalformedGroup {
                token: token.to_string(),
                reason: "no fragment names given".to_string(),
            });
        }

        let escaping = std::iter::once(directory)
            .chain(names.iter().map(String::as_str))
            .find(|part| !is_confined(part));
        if let Some(part) = escaping {
            return Err(Error::MalformedGroup {
                token: token.to_string(),
                reason: format!("'{}' must stay inside the fragment library", part),
            });
        }

        if names.len() != entries.len() {
            warn!(
                "Ignoring {} empty name(s) in group token '{}'",
                entries.len() - names.len(),
                token
            );
        }

        Ok(Self {
            directory: directory.to_string(),
            names,
        })
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Expand into one [`FragmentRef`] per name, in listed order.
    pub fn refs(&self) -> impl Iterator<Item = FragmentRef> + '_ {
        self.names.iter().map(move |name| FragmentRef {
            directory: self.directory.clone(),
            name: name.clone(),
        })
    }
}

/// Parse every token with the same default directory, stopping at the first
/// malformed one.
pub fn parse_all<S: AsRef<str>>(tokens: &[S], default_directory: &str) -> Result<Vec<FragmentGroup>> {
    tokens
        .iter()
        .map(|token| FragmentGroup::parse(token.as_ref(), default_directory))
        .collect()
}
