//! Run configuration for the rewriting engine.

use std::fmt;
use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::error::{Error, Result};
use crate::specifier::Notation;

/// Directory traversed when no scan root is given.
pub const DEFAULT_SCAN_ROOT: &str = "app";

/// File extensions rewritten when none are given.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// Symbolic token that roots a specifier at the project root.
pub const DEFAULT_ALIAS_PREFIX: &str = "@";

/// Which notation a pass converts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Relative specifiers (`../x`, `./x`) become alias-rooted (`@/x`).
    ToAlias,
    /// Alias-rooted specifiers (`@/x`) become relative (`../x`, `./x`).
    ToRelative,
}

impl Direction {
    /// Both directions, in a stable order.
    pub const ALL: [Direction; 2] = [Direction::ToAlias, Direction::ToRelative];

    /// Whether this pass acts on a specifier in the given notation.
    ///
    /// Each pass only touches the notation it converts from, so specifiers
    /// already in the target notation are never modified.
    pub fn accepts(self, notation: &Notation<'_>) -> bool {
        match self {
            Direction::ToAlias => notation.is_relative(),
            Direction::ToRelative => notation.is_alias(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::ToAlias => f.write_str("relative -> alias"),
            Direction::ToRelative => f.write_str("alias -> relative"),
        }
    }
}

/// Explicit configuration for one run.
///
/// `scan_root` is the subtree traversed for candidate files; `project_root`
/// anchors alias resolution and may be wider than the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteConfig {
    /// Directory to traverse
    pub scan_root: PathBuf,
    /// File extensions to rewrite, without the leading dot
    pub extensions: Vec<String>,
    /// Alias token, without the trailing `/`
    pub alias_prefix: String,
    /// Anchor directory for alias-rooted specifiers
    pub project_root: PathBuf,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            scan_root: PathBuf::from(DEFAULT_SCAN_ROOT),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            alias_prefix: DEFAULT_ALIAS_PREFIX.to_string(),
            project_root: PathBuf::from("."),
        }
    }
}

impl RewriteConfig {
    /// Create a configuration with the default extensions and alias prefix.
    pub fn new(scan_root: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            scan_root: scan_root.into(),
            project_root: project_root.into(),
            ..Self::default()
        }
    }

    /// Replace the extension set. Leading dots are stripped.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    /// Replace the alias prefix. A trailing `/` is stripped (`@/` and `@` are equivalent).
    pub fn with_alias_prefix(mut self, prefix: impl AsRef<str>) -> Self {
        self.alias_prefix = normalize_alias_prefix(prefix.as_ref());
        self
    }

    /// Resolve both roots against `cwd` and normalize them lexically.
    ///
    /// Translation compares paths component by component, so file paths and
    /// the project root must share a base. Walking an anchored config yields
    /// absolute paths.
    pub fn anchored(mut self, cwd: &Path) -> Self {
        self.scan_root = anchor(&self.scan_root, cwd);
        self.project_root = anchor(&self.project_root, cwd);
        self
    }

    /// Check the configuration for values that cannot produce a valid run.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(Error::NoExtensions);
        }
        validate_alias_prefix(&self.alias_prefix)
    }

    /// Whether `path` carries one of the configured extensions.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

/// Strip a leading dot and surrounding whitespace from an extension.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_string()
}

/// Strip surrounding whitespace and trailing slashes from an alias prefix.
pub fn normalize_alias_prefix(prefix: &str) -> String {
    prefix.trim().trim_end_matches('/').to_string()
}

/// Reject alias prefixes that would collide with relative markers or
/// cannot appear inside a quoted specifier.
pub fn validate_alias_prefix(prefix: &str) -> Result<()> {
    let reason = if prefix.is_empty() {
        Some("must not be empty")
    } else if prefix.starts_with('.') {
        Some("must not start with '.'")
    } else if prefix.contains(&['/', '\\'][..]) {
        Some("must not contain path separators")
    } else if prefix.contains(&['\'', '"', '`'][..]) {
        Some("must not contain quote characters")
    } else if prefix.chars().any(char::is_whitespace) {
        Some("must not contain whitespace")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidAliasPrefix {
            prefix: prefix.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

fn anchor(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.clean()
    } else {
        cwd.join(path).clean()
    }
}
