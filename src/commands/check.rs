use std::path::{Path, PathBuf};

use tracing::info;

use crate::checker::{Violation, ViolationSummary};
use crate::cli::{CheckArgs, Cli};
use crate::git::{ChangedLines, DiffSource, GitDiff};
use crate::output::{ErrorOutput, formatter_for};
use crate::scanner::DirectoryScanner;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

use super::changes::{changed_targets, hunk_lines};
use super::context::{CheckContext, ScanTarget, line_count, load_config, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::stderr(cli.color).report(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// # Errors
/// Returns an error if the configuration is invalid, the base reference cannot
/// be resolved, or the report cannot be written.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let ctx = CheckContext::from_config(&config)?;
    run_check_with_context(args, cli, &ctx)
}

/// Check with pre-built dependencies.
pub(crate) fn run_check_with_context(
    args: &CheckArgs,
    cli: &Cli,
    ctx: &CheckContext,
) -> crate::Result<i32> {
    let violations = match args.diff.as_deref() {
        Some(base) => {
            let git = GitDiff::discover(Path::new("."))?;
            check_changed(ctx, &git, git.workdir(), base, &args.paths)?
        }
        None => check_whole_files(ctx, &args.paths)?,
    };

    let summary = ViolationSummary::from_violations(&violations);
    info!(
        total = summary.total,
        errors = summary.errors,
        files = summary.files,
        "Check finished"
    );

    let report = formatter_for(args.format, cli.color).format(&violations)?;
    write_output(args.output.as_deref(), &report, cli.quiet)?;

    Ok(determine_exit_code(&violations, args.warn_only, args.strict))
}

/// Every line of every file under `paths` counts as changed.
pub(crate) fn check_whole_files(
    ctx: &CheckContext,
    paths: &[PathBuf],
) -> crate::Result<Vec<Violation>> {
    let files = DirectoryScanner::new(&ctx.filter).collect(paths)?;
    let targets: Vec<ScanTarget> = files
        .into_iter()
        .map(|path| ScanTarget {
            display: path.strip_prefix("./").map_or_else(|_| path.clone(), Path::to_path_buf),
            source: path,
        })
        .collect();

    Ok(ctx.scan(&targets, |_, content| {
        Some(ChangedLines::whole_file(line_count(content)))
    }))
}

/// Only lines added since `base`, in files under `roots`.
pub(crate) fn check_changed<D: DiffSource + Sync + ?Sized>(
    ctx: &CheckContext,
    source: &D,
    workdir: &Path,
    base: &str,
    roots: &[PathBuf],
) -> crate::Result<Vec<Violation>> {
    let targets = changed_targets(source, workdir, base, roots)?;
    Ok(ctx.scan(&targets, |target, _| hunk_lines(source, base, target)))
}

/// Determine exit code based on violations and mode flags.
///
/// - `warn_only`: Always return success (exit 0)
/// - `strict`: Treat warnings as failures
pub(crate) fn determine_exit_code(violations: &[Violation], warn_only: bool, strict: bool) -> i32 {
    if warn_only {
        return EXIT_SUCCESS;
    }
    let has_errors = violations.iter().any(Violation::is_error);
    if has_errors || (strict && !violations.is_empty()) {
        EXIT_VIOLATIONS_FOUND
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
