//! # Terminal Output
//!
//! The human-readable trace printed while merging: which library was used,
//! which fragments went in, and where the document was written. Decorations
//! are emojis on capable terminals and bracketed plain-text markers otherwise.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for decoration control
//! - `NO_COLOR` - Disables decorations when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables decorations
//! - `CLICOLOR_FORCE=1` - Forces decorations even in non-TTY
//! - `TERM=dumb` - Disables decorations for dumb terminals

use std::env;
use std::path::Path;

use crate::write::WriteOutcome;

/// Output configuration for the trace.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether emojis should be used.
    pub use_color: bool,
    /// Suppress everything except errors.
    pub quiet: bool,
    /// List every merged fragment.
    pub verbose: bool,
}

/// The markers used in the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Library,
    Fragment,
    Success,
    Unchanged,
    DryRun,
    Failure,
}

impl Marker {
    fn glyphs(self) -> (&'static str, &'static str) {
        match self {
            Marker::Library => ("📚", "[LIB]"),
            Marker::Fragment => ("  +", "  +"),
            Marker::Success => ("✅", "[OK]"),
            Marker::Unchanged => ("💤", "[SAME]"),
            Marker::DryRun => ("🔎", "[DRY RUN]"),
            Marker::Failure => ("❌", "[ERROR]"),
        }
    }
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `--color=always` forces emojis on (overriding `NO_COLOR`),
    /// `--color=never` forces them off, and anything else detects support.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self {
            use_color,
            quiet: false,
            verbose: false,
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn detect_color_support() -> bool {
        // Presence of NO_COLOR, even empty, disables decorations
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// The glyph for `marker` under this configuration.
    pub fn marker(&self, marker: Marker) -> &'static str {
        let (fancy, plain) = marker.glyphs();
        if self.use_color {
            fancy
        } else {
            plain
        }
    }

    /// Format one trace line.
    pub fn line(&self, marker: Marker, message: &str) -> String {
        format!("{} {}", self.marker(marker), message)
    }

    /// Format the final summary of a write.
    pub fn summary(&self, outcome: WriteOutcome, files: usize, destination: &Path) -> String {
        let noun = if files == 1 { "fragment" } else { "fragments" };
        match outcome {
            WriteOutcome::Unchanged => self.line(
                Marker::Unchanged,
                &format!(
                    "{} {} merged, {} already up to date",
                    files,
                    noun,
                    destination.display()
                ),
            ),
            WriteOutcome::Created | WriteOutcome::Updated => self.line(
                Marker::Success,
                &format!("Merged {} {} into {}", files, noun, destination.display()),
            ),
        }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            use_color: false,
            quiet: false,
            verbose: false,
        }
    }

    #[cfg(test)]
    pub fn fancy() -> Self {
        Self {
            use_color: true,
            ..Self::plain()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_always() {
        let config = OutputConfig::from_env_and_flag("always");
        assert!(config.use_color);
    }

    #[test]
    fn test_color_never() {
        let config = OutputConfig::from_env_and_flag("NEVER");
        assert!(!config.use_color);
    }

    #[test]
    fn test_marker_plain_and_fancy() {
        assert_eq!(OutputConfig::plain().marker(Marker::Success), "[OK]");
        assert_eq!(OutputConfig::fancy().marker(Marker::Success), "✅");
        assert_eq!(OutputConfig::plain().marker(Marker::Failure), "[ERROR]");
    }

    #[test]
    fn test_summary_pluralizes() {
        let config = OutputConfig::plain();
        let one = config.summary(WriteOutcome::Created, 1, Path::new("/p/.clauderc"));
        let many = config.summary(WriteOutcome::Updated, 3, Path::new("/p/.clauderc"));
        assert_eq!(one, "[OK] Merged 1 fragment into /p/.clauderc");
        assert_eq!(many, "[OK] Merged 3 fragments into /p/.clauderc");
    }

    #[test]
    fn test_summary_unchanged() {
        let config = OutputConfig::plain();
        let line = config.summary(WriteOutcome::Unchanged, 2, Path::new("/p/.clauderc"));
        assert!(line.starts_with("[SAME]"));
        assert!(line.contains("already up to date"));
    }

    #[test]
    fn test_builder_flags() {
        let config = OutputConfig::plain().quiet(true).verbose(true);
        assert!(config.quiet);
        assert!(config.verbose);
    }
}
