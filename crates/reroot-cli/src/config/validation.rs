use crate::cli::parse_extension;
use crate::config::RerootConfig;
use crate::error::{ConfigError, Result};
use reroot_core::RewriteConfig;
use reroot_core::config::{normalize_alias_prefix, validate_alias_prefix};

impl RerootConfig {
    /// Check field values. Paths are checked later by [`validate_roots`].
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(ConfigError::MissingField {
                field: "extensions".to_string(),
                hint: "List at least one extension, e.g. [\"ts\", \"tsx\"], or pass --ext"
                    .to_string(),
            }
            .into());
        }

        for ext in &self.extensions {
            parse_extension(ext).map_err(|reason| ConfigError::InvalidValue {
                field: "extensions".to_string(),
                value: ext.clone(),
                hint: reason,
            })?;
        }

        validate_alias_prefix(&normalize_alias_prefix(&self.alias_prefix)).map_err(|err| {
            ConfigError::InvalidValue {
                field: "aliasPrefix".to_string(),
                value: self.alias_prefix.clone(),
                hint: format!("{err}; use a token such as '@' or '~'"),
            }
        })?;

        Ok(())
    }
}

/// Check that both roots of an anchored config are existing directories.
pub fn validate_roots(config: &RewriteConfig) -> Result<()> {
    if !config.project_root.is_dir() {
        return Err(ConfigError::InvalidValue {
            field: "projectRoot".to_string(),
            value: config.project_root.display().to_string(),
            hint: "The project root must be an existing directory; pass --project-root <DIR>"
                .to_string(),
        }
        .into());
    }

    if !config.scan_root.is_dir() {
        return Err(reroot_core::Error::ScanRootNotFound(config.scan_root.clone()).into());
    }

    Ok(())
}

/// Files outside the project root can never be given an alias specifier.
pub fn scan_root_outside_project(config: &RewriteConfig) -> bool {
    !config.scan_root.starts_with(&config.project_root)
}
