//! Publishing violations as pull request review comments.

mod github;

pub use github::{DEFAULT_API_URL, GithubReviewer};

use serde::Serialize;
use tracing::{info, warn};

use crate::checker::{Severity, Violation, ViolationSummary};
use crate::error::Result;
use crate::output::{MarkdownFormatter, OutputFormatter, display_path};

/// One inline comment anchored to a line of the new file version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewComment {
    pub path: String,
    pub line: usize,
    pub body: String,
}

impl From<&Violation> for ReviewComment {
    fn from(violation: &Violation) -> Self {
        let icon = match violation.severity {
            Severity::Error => "❌",
            Severity::Warning => "⚠️",
        };
        Self {
            path: display_path(&violation.path, None),
            line: violation.line,
            body: format!("{icon} **{}**: {}", violation.rule, violation.message),
        }
    }
}

/// Transport for review feedback.
pub trait ReviewPoster {
    /// Post one review carrying inline comments and a summary body.
    ///
    /// # Errors
    /// Returns an error if the review is rejected or cannot be sent.
    fn post_review(&self, comments: &[ReviewComment], summary: &str) -> Result<()>;

    /// Post a plain conversation comment.
    ///
    /// # Errors
    /// Returns an error if the comment cannot be sent.
    fn post_comment(&self, body: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// A review with this many inline comments was posted.
    Detailed(usize),
    /// The review failed and a single summary comment was posted instead.
    Summary,
    /// No violations, nothing posted.
    Nothing,
}

/// Post `violations` as inline comments, at most `max_comments` of them.
///
/// Findings beside the changed lines cannot be anchored in the diff and are
/// listed in the review body instead. A failed review degrades to one
/// markdown summary comment.
///
/// # Errors
/// Returns an error only when the fallback comment fails as well.
pub fn publish(
    poster: &dyn ReviewPoster,
    violations: &[Violation],
    max_comments: usize,
) -> Result<PublishOutcome> {
    if violations.is_empty() {
        info!("No violations, skipping review");
        return Ok(PublishOutcome::Nothing);
    }

    let (inline, beside): (Vec<&Violation>, Vec<&Violation>) =
        violations.iter().partition(|v| v.on_changed_line);
    let anchored = inline.len();
    let comments: Vec<ReviewComment> = inline
        .into_iter()
        .take(max_comments)
        .map(ReviewComment::from)
        .collect();

    let mut summary = review_summary(violations, comments.len(), anchored);
    if !beside.is_empty() {
        let beside: Vec<Violation> = beside.into_iter().cloned().collect();
        summary.push_str(&format!(
            "\n\n{} findings are next to the changed lines rather than on them:\n\n",
            beside.len()
        ));
        summary.push_str(&MarkdownFormatter.format(&beside)?);
    }

    match poster.post_review(&comments, &summary) {
        Ok(()) => {
            info!(comments = comments.len(), "Posted review");
            Ok(PublishOutcome::Detailed(comments.len()))
        }
        Err(e) => {
            warn!(error = %e, "Posting inline review failed, falling back to a summary comment");
            let body = MarkdownFormatter.format(violations)?;
            poster.post_comment(&body)?;
            Ok(PublishOutcome::Summary)
        }
    }
}

fn review_summary(violations: &[Violation], shown: usize, anchored: usize) -> String {
    let summary = ViolationSummary::from_violations(violations);
    let mut text = format!(
        "doc-guard found {} violations in {} files ({} errors, {} warnings).",
        summary.total, summary.files, summary.errors, summary.warnings
    );
    if shown < anchored {
        text.push_str(&format!(" Showing the first {shown} as inline comments."));
    }
    text
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
