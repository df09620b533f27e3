use crate::cli::ConfigArgs;
use crate::config::RerootConfig;
use reroot_core::RewriteConfig;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// CLI flags as a figment layer; unset flags leave lower layers alone.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    scan_root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extensions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alias_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_root: Option<PathBuf>,
}

impl From<&ConfigArgs> for CliOverrides {
    fn from(args: &ConfigArgs) -> Self {
        Self {
            scan_root: args.scan_root.clone(),
            extensions: args.extensions.clone(),
            alias_prefix: args.alias.clone(),
            project_root: args.project_root.clone(),
        }
    }
}

impl RerootConfig {
    /// Engine configuration with both roots anchored at `cwd`.
    pub fn to_rewrite_config(&self, cwd: &Path) -> RewriteConfig {
        RewriteConfig::new(&self.scan_root, &self.project_root)
            .with_extensions(&self.extensions)
            .with_alias_prefix(&self.alias_prefix)
            .anchored(cwd)
    }
}
