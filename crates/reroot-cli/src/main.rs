//! reroot - convert import specifiers between `@/` and relative notation.
//!
//! Parses arguments, sets up logging and colors, and dispatches the command.

use clap::Parser;
use miette::Result;
use reroot_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::ToAlias(rewrite_args) => commands::to_alias_execute(rewrite_args).map(drop),
        cli::Command::ToRelative(rewrite_args) => {
            commands::to_relative_execute(rewrite_args).map(drop)
        }
        cli::Command::Check(check_args) => commands::check_execute(check_args).map(drop),
        cli::Command::Init(init_args) => commands::init_execute(init_args).map(drop),
    };

    result.map_err(error::cli_error_to_miette)
}
