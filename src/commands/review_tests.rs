use clap::Parser;

use super::*;
use crate::cli::Commands;

fn review_args(extra: &[&str]) -> ReviewArgs {
    let mut argv = vec!["doc-guard", "review", "--base", "main", "--api-url", "http://localhost"];
    argv.extend_from_slice(extra);
    match Cli::parse_from(argv).command {
        Commands::Review(args) => args,
        _ => panic!("Expected Review command"),
    }
}

#[test]
fn reviewer_requires_repository_pr_and_token() {
    let missing_pr = review_args(&["--repo", "acme/shop", "--token", "t"]);
    let err = github_reviewer(&missing_pr).err().unwrap();
    assert!(err.to_string().contains("--pr"));

    let missing_token = ReviewArgs {
        token: None,
        ..review_args(&["--repo", "acme/shop", "--pr", "3"])
    };
    let err = github_reviewer(&missing_token).err().unwrap();
    assert!(err.to_string().contains("token"));

    let missing_repo = ReviewArgs {
        repo: None,
        ..review_args(&["--pr", "3", "--token", "t"])
    };
    let err = github_reviewer(&missing_repo).err().unwrap();
    assert!(matches!(err, DocGuardError::Review(_)));
}

#[test]
fn reviewer_built_from_complete_args() {
    let args = review_args(&["--repo", "acme/shop", "--pr", "3", "--token", "t"]);
    assert!(github_reviewer(&args).is_ok());
}

#[test]
fn outcome_descriptions() {
    assert_eq!(
        describe_outcome(PublishOutcome::Detailed(4)),
        "Posted review with 4 inline comments"
    );
    assert!(describe_outcome(PublishOutcome::Summary).contains("summary"));
    assert_eq!(
        describe_outcome(PublishOutcome::Nothing),
        "No violations in the changed lines"
    );
}
