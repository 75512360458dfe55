use std::fmt::Write;
use std::path::Path;

use indexmap::IndexMap;

use crate::checker::{Severity, Violation, ViolationSummary};
use crate::error::Result;

use super::{ColorMode, OutputFormatter, ansi, display_path};

/// Human-readable output, grouped by file in the order files were scanned.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.enabled(std::io::IsTerminal::is_terminal(&std::io::stdout())),
        }
    }

    #[cfg(test)]
    pub(crate) const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    const fn icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "✗",
            Severity::Warning => "⚠",
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
        }
    }

    fn format_violation(&self, violation: &Violation, output: &mut String) {
        let color = Self::severity_color(violation.severity);
        let label = self.colorize(
            &format!("{} {}", Self::icon(violation.severity), violation.severity),
            color,
        );
        let rule = self.colorize(violation.rule.id(), ansi::DIM);
        let _ = writeln!(
            output,
            "  {:>4}  {label}  {}  {rule}",
            violation.line, violation.message
        );
    }

    fn format_summary(&self, summary: &ViolationSummary) -> String {
        if summary.is_clean() {
            return self.colorize("✓ No violations found", ansi::GREEN);
        }

        let errors = self.colorize(&summary.errors.to_string(), ansi::RED);
        let warnings = self.colorize(&summary.warnings.to_string(), ansi::YELLOW);
        let files = if summary.files == 1 { "file" } else { "files" };
        format!(
            "Summary: {} violations in {} {files} ({errors} errors, {warnings} warnings)",
            summary.total, summary.files
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, violations: &[Violation]) -> Result<String> {
        let mut by_file: IndexMap<&Path, Vec<&Violation>> = IndexMap::new();
        for violation in violations {
            by_file.entry(violation.path.as_path()).or_default().push(violation);
        }

        let mut output = String::new();
        for (path, file_violations) in &by_file {
            let heading = self.colorize(&display_path(path, None), ansi::BOLD);
            let _ = writeln!(output, "{heading}");
            for violation in file_violations {
                self.format_violation(violation, &mut output);
            }
            output.push('\n');
        }

        let summary = ViolationSummary::from_violations(violations);
        let _ = writeln!(output, "{}", self.format_summary(&summary));
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
