//! Check command implementation.
//!
//! Validates configuration and previews both passes without writing.

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;
use reroot_core::{Direction, RunSummary, TreeWalker};

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load and validate the merged configuration
/// 2. Check that the project root and scan root exist
/// 3. Dry-run both directions and report pending rewrites
///
/// Returns the preview summaries in [`Direction::ALL`] order.
pub fn execute(args: CheckArgs) -> Result<Vec<(Direction, RunSummary)>> {
    ui::info("Checking configuration...");

    let cwd = utils::get_cwd()?;
    let config = utils::prepare(&args.config, &cwd)?;
    ui::success("Configuration is valid");
    ui::info(&format!(
        "Scanning {} for .{} files, alias '{}/' -> {}",
        utils::display_path(&config.scan_root, &cwd).display(),
        config.extensions.join(", ."),
        config.alias_prefix,
        utils::display_path(&config.project_root, &cwd).display(),
    ));

    let mut previews = Vec::with_capacity(Direction::ALL.len());
    for direction in Direction::ALL {
        let summary = TreeWalker::new(&config, direction).dry_run(true).run()?;
        ui::info(&format!(
            "{direction}: {} of {} would change ({})",
            ui::plural(summary.changed, "file"),
            summary.scanned,
            ui::plural(summary.rewritten_specifiers, "specifier"),
        ));
        if summary.skipped_specifiers > 0 {
            ui::warning(&format!(
                "{direction}: {} cannot be translated and would be left as is (run with --verbose to list them)",
                ui::plural(summary.skipped_specifiers, "specifier"),
            ));
        }
        previews.push((direction, summary));
    }

    ui::success("All checks passed!");
    Ok(previews)
}
