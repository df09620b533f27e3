//! Error types for the rewriting engine.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while walking and rewriting a source tree.
///
/// Unresolvable specifiers are not errors: they are left untouched and
/// counted as skipped. Everything here aborts the run.
#[derive(Debug, Error)]
pub enum Error {
    /// A source file could not be read (permissions, invalid UTF-8, ...).
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A rewritten source file could not be written back.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// File that failed to write
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Directory traversal failed below the scan root.
    #[error("Failed to walk {}: {source}", root.display())]
    Walk {
        /// Scan root being traversed
        root: PathBuf,
        /// Underlying walkdir error
        source: walkdir::Error,
    },

    /// The working directory needed to anchor relative roots is unavailable.
    #[error("Failed to determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// The scan root is missing or is not a directory.
    #[error("Scan root not found: {}", .0.display())]
    ScanRootNotFound(PathBuf),

    /// The alias prefix cannot be used as a specifier root.
    #[error("Invalid alias prefix '{prefix}': {reason}")]
    InvalidAliasPrefix {
        /// The rejected prefix
        prefix: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// No file extensions were configured, so nothing would be scanned.
    #[error("No file extensions configured")]
    NoExtensions,
}

/// Result alias for the rewriting engine.
pub type Result<T, E = Error> = std::result::Result<T, E>;
