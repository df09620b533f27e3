//! `to-alias` and `to-relative`.

use crate::cli::RewriteArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;
use reroot_core::{Direction, RunSummary, TreeWalker};
use std::time::Instant;
use tracing::debug;

/// Run one rewrite pass over the scan root.
///
/// Prints one line per changed file as it is handled, then a summary line.
/// On error nothing more is printed; files already handled keep their new
/// contents.
pub fn execute(args: RewriteArgs, direction: Direction) -> Result<RunSummary> {
    let start = Instant::now();
    let cwd = utils::get_cwd()?;
    let config = utils::prepare(&args.config, &cwd)?;
    debug!(?config, "resolved configuration");

    ui::info(&format!(
        "Converting imports ({direction}) in {}",
        utils::display_path(&config.scan_root, &cwd).display()
    ));

    let summary = TreeWalker::new(&config, direction)
        .dry_run(args.dry_run)
        .run_with(|change| {
            ui::print_file_change(
                utils::display_path(change.path, &cwd),
                change.rewritten,
                change.dry_run,
            );
        })?;

    ui::print_run_summary(&summary, args.dry_run, start.elapsed());
    Ok(summary)
}

/// Relative -> alias.
pub fn to_alias(args: RewriteArgs) -> Result<RunSummary> {
    execute(args, Direction::ToAlias)
}

/// Alias -> relative.
pub fn to_relative(args: RewriteArgs) -> Result<RunSummary> {
    execute(args, Direction::ToRelative)
}
