#[cfg(test)]
mod tests {
    use crate::cli::validation::{parse_alias_prefix, parse_extension};
    use crate::cli::{Cli, Command};
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_alias_prefix_valid() {
        assert_eq!(parse_alias_prefix("@"), Ok("@".to_string()));
        assert_eq!(parse_alias_prefix("@/"), Ok("@".to_string()));
        assert_eq!(parse_alias_prefix("~"), Ok("~".to_string()));
        assert_eq!(parse_alias_prefix("#app"), Ok("#app".to_string()));
    }

    #[test]
    fn test_parse_alias_prefix_invalid() {
        assert!(parse_alias_prefix("").is_err());
        assert!(parse_alias_prefix("/").is_err());
        assert!(parse_alias_prefix("./").is_err());
        assert!(parse_alias_prefix("..").is_err());
        assert!(parse_alias_prefix("a/b").is_err());
        assert!(parse_alias_prefix("@ x").is_err());
        assert!(parse_alias_prefix("\"@").is_err());
    }

    #[test]
    fn test_parse_extension() {
        assert_eq!(parse_extension("ts"), Ok("ts".to_string()));
        assert_eq!(parse_extension(".tsx"), Ok("tsx".to_string()));
        assert!(parse_extension("").is_err());
        assert!(parse_extension(".").is_err());
        assert!(parse_extension("a/b").is_err());
        assert_eq!(
            parse_extension(""),
            Err("Extension cannot be empty".to_string())
        );
    }

    #[test]
    fn test_to_alias_defaults() {
        let cli = Cli::parse_from(["reroot", "to-alias"]);
        let Command::ToAlias(args) = cli.command else {
            panic!("expected to-alias");
        };
        assert!(!args.dry_run);
        assert!(args.config.config.is_none());
        assert!(args.config.scan_root.is_none());
        assert!(args.config.extensions.is_empty());
        assert!(args.config.alias.is_none());
        assert!(args.config.project_root.is_none());
    }

    #[test]
    fn test_to_relative_with_all_flags() {
        let cli = Cli::parse_from([
            "reroot",
            "to-relative",
            "--config",
            "custom.json",
            "--scan-root",
            "src",
            "--ext",
            "ts,.tsx",
            "-e",
            "mts",
            "--alias",
            "~/",
            "--project-root",
            "src",
            "--dry-run",
        ]);
        let Command::ToRelative(args) = cli.command else {
            panic!("expected to-relative");
        };
        assert!(args.dry_run);
        assert_eq!(args.config.config, Some(PathBuf::from("custom.json")));
        assert_eq!(args.config.scan_root, Some(PathBuf::from("src")));
        assert_eq!(args.config.extensions, vec!["ts", "tsx", "mts"]);
        assert_eq!(args.config.alias.as_deref(), Some("~"));
        assert_eq!(args.config.project_root, Some(PathBuf::from("src")));
    }

    #[test]
    fn test_invalid_alias_is_rejected_at_parse_time() {
        let result = Cli::try_parse_from(["reroot", "to-alias", "--alias", "./"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["reroot", "check", "--verbose", "--no-color"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(!cli.quiet);
        assert!(matches!(cli.command, Command::Check(_)));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["reroot", "-v", "-q", "check"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_init_defaults() {
        let cli = Cli::parse_from(["reroot", "init"]);
        let Command::Init(args) = cli.command else {
            panic!("expected init");
        };
        assert_eq!(args.path, PathBuf::from("reroot.config.json"));
        assert!(!args.force);
        assert!(!args.schema);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["reroot"]).is_err());
    }
}
