use crate::cli::ConfigArgs;
use crate::commands::utils::resolve_path;
use crate::config::conversions::CliOverrides;
use crate::config::{CONFIG_FILE_NAME, RerootConfig};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix of the environment variables read as configuration.
pub const ENV_PREFIX: &str = "REROOT_";

/// Environment keys (after the prefix) and the fields they set.
const ENV_FIELDS: &[(&str, &str)] = &[
    ("scan_root", "scanRoot"),
    ("extensions", "extensions"),
    ("alias_prefix", "aliasPrefix"),
    ("project_root", "projectRoot"),
];

impl RerootConfig {
    /// Load configuration from multiple sources.
    ///
    /// Priority: CLI args > `REROOT_*` environment variables > config file >
    /// defaults. The config file is `args.config` when given (it must exist),
    /// otherwise `reroot.config.json` in `cwd` if present.
    pub fn load(args: &ConfigArgs, cwd: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = Self::locate(args.config.as_deref(), cwd)? {
            debug!(config = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        // REROOT_SCAN_ROOT=src, REROOT_EXTENSIONS=[ts,js], ...
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .filter(|key| env_field(key.as_str()).is_some())
                .map(|key| env_field(key.as_str()).unwrap_or_default().into())
                .lowercase(false),
        );

        figment = figment.merge(Serialized::defaults(CliOverrides::from(args)));

        figment
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()).into())
    }

    /// Path of the config file to read, if any.
    fn locate(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            let path = resolve_path(path, cwd);
            if !path.is_file() {
                return Err(ConfigError::NotFound(path).into());
            }
            return Ok(Some(path));
        }

        let default_path = cwd.join(CONFIG_FILE_NAME);
        Ok(default_path.is_file().then_some(default_path))
    }
}

/// Config field set by the environment key `key` (prefix already stripped).
fn env_field(key: &str) -> Option<&'static str> {
    ENV_FIELDS
        .iter()
        .find(|(env_key, _)| env_key.eq_ignore_ascii_case(key))
        .map(|(_, field)| *field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_field() {
        assert_eq!(env_field("scan_root"), Some("scanRoot"));
        assert_eq!(env_field("SCAN_ROOT"), Some("scanRoot"));
        assert_eq!(env_field("alias_prefix"), Some("aliasPrefix"));
        assert_eq!(env_field("unrelated"), None);
    }
}
