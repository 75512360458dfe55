use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::LOCAL_CONFIG_NAME;
use crate::output::{ColorMode, OutputFormat};
use crate::review::DEFAULT_API_URL;

#[derive(Parser, Debug)]
#[command(name = "doc-guard")]
#[command(
    author,
    version,
    about = "Review the changed lines of a pull request for documentation and style violations"
)]
#[command(long_about = "Checks TypeScript declarations for consistent documentation comments, \
    flags debug statements and markers, and suggests utility classes for stylesheet rules. \
    With a git base reference only the changed lines are checked.\n\n\
    Exit codes:\n  \
    0 - No blocking violations\n  \
    1 - Error-severity violations found (any violation with --strict)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Skip loading the configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check files, optionally limited to lines changed since a git reference
    Check(CheckArgs),

    /// Check a pull request's changes and post the findings as review comments
    Review(ReviewArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Paths to check (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only check lines changed since this git reference (branch or commit)
    #[arg(long, value_name = "REF")]
    pub diff: Option<String>,

    /// Output format [possible values: text, json, sarif, markdown]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report violations but always exit 0
    #[arg(long, conflicts_with = "strict")]
    pub warn_only: bool,

    /// Treat warnings as failures (exit code 1)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct ReviewArgs {
    /// Base reference the pull request is compared against
    #[arg(long, value_name = "REF")]
    pub base: String,

    /// Repository as OWNER/NAME
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repo: Option<String>,

    /// Pull request number
    #[arg(long)]
    pub pr: Option<u64>,

    /// API token with permission to comment on pull requests
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Maximum number of inline comments (overrides config)
    #[arg(long)]
    pub max_comments: Option<usize>,

    /// Print the findings instead of posting them
    #[arg(long)]
    pub dry_run: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format for --dry-run [possible values: text, json, sarif, markdown]
    #[arg(short, long, default_value = "markdown")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
