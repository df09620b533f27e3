use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::{parse_alias_prefix, parse_extension};

/// Available reroot subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite relative specifiers as alias-rooted ones
    ///
    /// `from "../../shared/util"` in `app/a/b/file.ts` becomes
    /// `from "@/shared/util"` when the project root is `app`.
    ToAlias(RewriteArgs),

    /// Rewrite alias-rooted specifiers as relative ones
    ///
    /// `from "@/x/helpers"` in `app/x/y.ts` becomes `from "./helpers"` when
    /// the project root is `app`.
    ToRelative(RewriteArgs),

    /// Validate configuration and preview pending rewrites
    ///
    /// Loads reroot.config.json, checks that the scan and project roots
    /// exist, and counts the files each direction would change. Never writes.
    Check(CheckArgs),

    /// Write a starter reroot.config.json
    Init(InitArgs),
}

/// Settings shared by every command that reads the configuration.
///
/// Each flag overrides the matching field from the config file and the
/// `REROOT_*` environment.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to the config file
    ///
    /// Defaults to reroot.config.json in the working directory, if present.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory whose files are rewritten [default: app]
    #[arg(short, long, value_name = "DIR")]
    pub scan_root: Option<PathBuf>,

    /// File extensions to rewrite [default: ts,tsx]
    ///
    /// Repeat the flag or separate values with commas. A leading dot is
    /// accepted and ignored.
    ///
    /// Examples:
    ///   reroot to-alias --ext ts,tsx,js
    ///   reroot to-alias -e ts -e mts
    #[arg(
        short = 'e',
        long = "ext",
        value_name = "EXT",
        value_delimiter = ',',
        value_parser = parse_extension
    )]
    pub extensions: Vec<String>,

    /// Alias token that stands for the project root [default: @]
    #[arg(short, long, value_name = "TOKEN", value_parser = parse_alias_prefix)]
    pub alias: Option<String>,

    /// Directory the alias resolves to [default: .]
    #[arg(short, long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,
}

/// Arguments for `to-alias` and `to-relative`
#[derive(Args, Debug, Clone, Default)]
pub struct RewriteArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for the init command
#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Where to write the config file
    #[arg(long, value_name = "FILE", default_value = crate::config::CONFIG_FILE_NAME)]
    pub path: PathBuf,

    /// Overwrite an existing config file
    #[arg(short, long)]
    pub force: bool,

    /// Also write the JSON schema next to the config and reference it
    #[arg(long)]
    pub schema: bool,
}
