use std::fmt::Write;

use crate::checker::{Severity, Violation, ViolationSummary};
use crate::error::Result;

use super::{OutputFormatter, display_path};

/// Markdown table; also the body of the fallback review comment.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    const fn severity_icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "❌",
            Severity::Warning => "⚠️",
        }
    }
}

/// Pipes would end the table cell early.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, violations: &[Violation]) -> Result<String> {
        let summary = ViolationSummary::from_violations(violations);
        let mut output = String::from("## doc-guard report\n\n");

        if summary.is_clean() {
            output.push_str("✅ No violations found in the changed lines.\n");
            return Ok(output);
        }

        let _ = writeln!(
            output,
            "Found **{}** violations in **{}** files: {} errors, {} warnings.\n",
            summary.total, summary.files, summary.errors, summary.warnings
        );
        output.push_str("| | File | Line | Rule | Message |\n");
        output.push_str("|---|------|-----:|------|---------|\n");

        for violation in violations {
            let _ = writeln!(
                output,
                "| {} | `{}` | {} | `{}` | {} |",
                Self::severity_icon(violation.severity),
                display_path(&violation.path, None),
                violation.line,
                violation.rule,
                escape_cell(&violation.message)
            );
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
