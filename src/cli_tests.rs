use std::path::PathBuf;

use super::*;

#[test]
fn cli_check_default_path() {
    let cli = Cli::parse_from(["doc-guard", "check"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.paths, vec![PathBuf::from(".")]);
            assert_eq!(args.format, OutputFormat::Text);
            assert!(args.diff.is_none());
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_paths_and_diff() {
    let cli = Cli::parse_from(["doc-guard", "check", "src", "libs", "--diff", "origin/main"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.paths, vec![PathBuf::from("src"), PathBuf::from("libs")]);
            assert_eq!(args.diff.as_deref(), Some("origin/main"));
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_format_alias() {
    let cli = Cli::parse_from(["doc-guard", "check", "-f", "md", "-o", "report.md"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.format, OutputFormat::Markdown);
            assert_eq!(args.output, Some(PathBuf::from("report.md")));
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_warn_only_conflicts_with_strict() {
    let result = Cli::try_parse_from(["doc-guard", "check", "--warn-only", "--strict"]);
    assert!(result.is_err());
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from([
        "doc-guard",
        "check",
        "-vv",
        "--color",
        "never",
        "--no-config",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.color, ColorMode::Never);
    assert!(cli.no_config);
    assert!(!cli.quiet);
}

#[test]
fn cli_review_args() {
    let cli = Cli::parse_from([
        "doc-guard",
        "review",
        "--base",
        "origin/main",
        "--repo",
        "acme/shop",
        "--pr",
        "42",
        "--token",
        "t0ken",
        "--max-comments",
        "10",
    ]);
    match cli.command {
        Commands::Review(args) => {
            assert_eq!(args.base, "origin/main");
            assert_eq!(args.repo.as_deref(), Some("acme/shop"));
            assert_eq!(args.pr, Some(42));
            assert_eq!(args.token.as_deref(), Some("t0ken"));
            assert_eq!(args.max_comments, Some(10));
            assert_eq!(args.api_url, DEFAULT_API_URL);
            assert_eq!(args.format, OutputFormat::Markdown);
            assert!(!args.dry_run);
        }
        _ => panic!("Expected Review command"),
    }
}

#[test]
fn cli_review_requires_base() {
    assert!(Cli::try_parse_from(["doc-guard", "review", "--dry-run"]).is_err());
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["doc-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".doc-guard.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}
