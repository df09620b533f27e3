//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Rewrite(e) => rewrite_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert a rewriting engine error to miette Report, with a hint where one helps
pub fn rewrite_error_to_miette(err: reroot_core::Error) -> Report {
    use reroot_core::Error;

    match err {
        Error::ScanRootNotFound(root) => miette::miette!(
            help = "Pass --scan-root <DIR> or set \"scanRoot\" in reroot.config.json",
            "Scan root not found: {}",
            root.display()
        ),
        Error::InvalidAliasPrefix { prefix, reason } => miette::miette!(
            help = "Use a short token such as '@' or '~' (without the trailing '/')",
            "Invalid alias prefix '{}': {}",
            prefix,
            reason
        ),
        Error::NoExtensions => miette::miette!(
            help = "Pass --ext ts,tsx or set \"extensions\" in reroot.config.json",
            "No file extensions configured"
        ),
        Error::Write { path, source } => miette::miette!(
            help = "Files handled before this one keep their new contents; rerunning is safe",
            "Failed to write {}: {}",
            path.display(),
            source
        ),
        other => miette::miette!("{}", other),
    }
}
