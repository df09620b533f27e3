//! Command-line interface definition.
//!
//! - `reroot to-alias` - rewrite relative specifiers as alias-rooted ones
//! - `reroot to-relative` - rewrite alias-rooted specifiers as relative ones
//! - `reroot check` - validate configuration and preview pending rewrites
//! - `reroot init` - write a starter `reroot.config.json`

mod commands;
mod tests;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, ConfigArgs, InitArgs, RewriteArgs};
pub use validation::{parse_alias_prefix, parse_extension};

/// reroot - convert import specifiers between `@/` and relative notation
#[derive(Parser, Debug)]
#[command(
    name = "reroot",
    version,
    about = "Convert import specifiers between alias-rooted and relative notation",
    long_about = "reroot rewrites the module specifiers of import and export-from statements\n\
                  in place, turning `../../shared/util` into `@/shared/util` or back.\n\
                  Bare package specifiers and dynamic imports are never touched."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Logs every scanned file and every specifier left untouched because it
    /// could not be translated.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress log output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
