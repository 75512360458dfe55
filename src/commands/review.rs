use std::path::Path;

use tracing::info;

use crate::cli::{Cli, ReviewArgs};
use crate::git::GitDiff;
use crate::output::{ErrorOutput, formatter_for};
use crate::review::{GithubReviewer, PublishOutcome, publish};
use crate::{DocGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::check::check_changed;
use super::context::{CheckContext, load_config, write_output};

#[must_use]
pub fn run_review(args: &ReviewArgs, cli: &Cli) -> i32 {
    match run_review_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::stderr(cli.color).report(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Check the pull request's changes and publish them.
///
/// Findings never fail the run; only configuration and transport errors do.
///
/// # Errors
/// Returns an error if the configuration is invalid, the base reference cannot
/// be resolved, or posting fails even in its fallback form.
pub fn run_review_impl(args: &ReviewArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    if let Some(max) = args.max_comments {
        config.review.max_comments = max;
    }
    let ctx = CheckContext::from_config(&config)?;

    let git = GitDiff::discover(Path::new("."))?;
    let violations = check_changed(&ctx, &git, git.workdir(), &args.base, &[])?;
    info!(base = %args.base, violations = violations.len(), "Reviewed changes");

    if args.dry_run {
        let report = formatter_for(args.format, cli.color).format(&violations)?;
        write_output(None, &report, cli.quiet)?;
        return Ok(EXIT_SUCCESS);
    }

    let reviewer = github_reviewer(args)?;
    let outcome = publish(&reviewer, &violations, config.review.max_comments)?;
    if !cli.quiet {
        println!("{}", describe_outcome(outcome));
    }
    Ok(EXIT_SUCCESS)
}

fn github_reviewer(args: &ReviewArgs) -> Result<GithubReviewer> {
    let repo = args.repo.as_deref().ok_or_else(|| {
        DocGuardError::Review("No repository given (--repo or GITHUB_REPOSITORY)".to_string())
    })?;
    let pr = args
        .pr
        .ok_or_else(|| DocGuardError::Review("No pull request number given (--pr)".to_string()))?;
    let token = args.token.as_deref().ok_or_else(|| {
        DocGuardError::Review("No API token given (--token or GITHUB_TOKEN)".to_string())
    })?;
    GithubReviewer::new(&args.api_url, repo, pr, token)
}

fn describe_outcome(outcome: PublishOutcome) -> String {
    match outcome {
        PublishOutcome::Detailed(count) => format!("Posted review with {count} inline comments"),
        PublishOutcome::Summary => "Posted summary comment (inline review failed)".to_string(),
        PublishOutcome::Nothing => "No violations in the changed lines".to_string(),
    }
}

#[cfg(test)]
#[path = "review_tests.rs"]
mod tests;
