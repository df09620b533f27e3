//! Shared helpers for command implementations.

use crate::cli::ConfigArgs;
use crate::config::{self, RerootConfig};
use crate::error::{Result, ResultExt};
use crate::ui;
use reroot_core::RewriteConfig;
use std::path::{Path, PathBuf};

/// Resolve a path relative to a working directory.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to get current working directory")
}

/// `path` relative to `cwd` when it lies below it, for display.
pub fn display_path<'a>(path: &'a Path, cwd: &Path) -> &'a Path {
    path.strip_prefix(cwd).unwrap_or(path)
}

/// Load, validate and anchor the configuration for a run.
///
/// Fails before any file is touched when a value or a root is invalid.
pub fn prepare(args: &ConfigArgs, cwd: &Path) -> Result<RewriteConfig> {
    let config = RerootConfig::load(args, cwd)?;
    config.validate()?;

    let rewrite_config = config.to_rewrite_config(cwd);
    config::validate_roots(&rewrite_config)?;
    rewrite_config.validate()?;

    if config::scan_root_outside_project(&rewrite_config) {
        ui::warning(&format!(
            "Scan root {} is outside the project root {}; relative specifiers there cannot become alias-rooted",
            display_path(&rewrite_config.scan_root, cwd).display(),
            display_path(&rewrite_config.project_root, cwd).display(),
        ));
    }

    Ok(rewrite_config)
}
