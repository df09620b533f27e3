//! Configuration with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and the config file.
//! Priority: CLI > Environment > File > Defaults

mod conversions;
mod defaults;
mod loading;
mod validation;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::*;
pub use loading::ENV_PREFIX;
pub use validation::{scan_root_outside_project, validate_roots};

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "reroot.config.json";

/// JSON schema file written by `reroot init --schema`.
pub const SCHEMA_FILE_NAME: &str = "reroot.schema.json";

/// reroot configuration - loaded from reroot.config.json, `REROOT_*` and CLI args.
///
/// Relative roots are resolved against the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RerootConfig {
    /// Editor hint pointing at the JSON schema
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Directory whose files are rewritten
    #[serde(default = "default_scan_root")]
    pub scan_root: PathBuf,

    /// File extensions to rewrite, with or without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Alias token standing for the project root (e.g. "@" for "@/lib/db")
    #[schemars(regex(pattern = r#"^[^./\\'"`\s][^/\\'"`\s]*/?$"#))]
    #[serde(default = "default_alias_prefix")]
    pub alias_prefix: String,

    /// Directory the alias token resolves to
    #[serde(default = "default_project_root")]
    pub project_root: PathBuf,
}

impl Default for RerootConfig {
    fn default() -> Self {
        Self {
            schema: None,
            scan_root: default_scan_root(),
            extensions: default_extensions(),
            alias_prefix: default_alias_prefix(),
            project_root: default_project_root(),
        }
    }
}

impl RerootConfig {
    /// Generate JSON Schema for reroot.config.json.
    pub fn json_schema() -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(schemars::schema_for!(RerootConfig))
    }

    /// Generate starter reroot.config.json content.
    ///
    /// `schema` is written as the `$schema` reference when given.
    pub fn example_config(schema: Option<&str>) -> serde_json::Result<String> {
        let config = Self {
            schema: schema.map(str::to_string),
            ..Self::default()
        };
        let mut content = serde_json::to_string_pretty(&config)?;
        content.push('\n');
        Ok(content)
    }
}
