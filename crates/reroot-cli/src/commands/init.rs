//! Init command implementation.
//!
//! Writes a starter reroot.config.json with the default settings.

use crate::cli::InitArgs;
use crate::commands::utils;
use crate::config::{RerootConfig, SCHEMA_FILE_NAME};
use crate::error::{ConfigError, Result, ResultExt};
use crate::ui;
use std::fs;
use std::path::PathBuf;

/// Execute the init command.
///
/// Refuses to overwrite an existing file unless `--force` is given. With
/// `--schema`, also writes reroot.schema.json next to the config and points
/// `$schema` at it.
///
/// Returns the path of the written config file.
pub fn execute(args: InitArgs) -> Result<PathBuf> {
    let cwd = utils::get_cwd()?;
    let path = utils::resolve_path(&args.path, &cwd);

    if path.exists() && !args.force {
        return Err(ConfigError::AlreadyExists(path).into());
    }

    let schema_ref = if args.schema {
        let schema_path = path.with_file_name(SCHEMA_FILE_NAME);
        let schema = serde_json::to_string_pretty(&RerootConfig::json_schema()?)?;
        fs::write(&schema_path, schema + "\n").with_path(&schema_path)?;
        ui::success(&format!(
            "Wrote {}",
            utils::display_path(&schema_path, &cwd).display()
        ));
        Some(format!("./{SCHEMA_FILE_NAME}"))
    } else {
        None
    };

    let content = RerootConfig::example_config(schema_ref.as_deref())?;
    fs::write(&path, content).with_path(&path)?;
    ui::success(&format!(
        "Wrote {}",
        utils::display_path(&path, &cwd).display()
    ));
    ui::info("Run 'reroot check' to preview pending rewrites");

    Ok(path)
}
