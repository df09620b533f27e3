use reroot_core::config::{DEFAULT_ALIAS_PREFIX, DEFAULT_EXTENSIONS, DEFAULT_SCAN_ROOT};
use std::path::PathBuf;

pub fn default_scan_root() -> PathBuf {
    PathBuf::from(DEFAULT_SCAN_ROOT)
}

pub fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

pub fn default_alias_prefix() -> String {
    DEFAULT_ALIAS_PREFIX.to_string()
}

/// The working directory.
pub fn default_project_root() -> PathBuf {
    PathBuf::from(".")
}
