use std::path::Path;

use regex::Regex;
use tracing::trace;

use crate::checker::{Checker, Rule, Severity, Violation, split_lines};
use crate::git::ChangedLines;

use super::table::StyleRuleTable;

/// Flags stylesheet declarations on changed lines that should be utility classes
/// or that hardcode colours and pixel lengths.
pub struct StyleScanner {
    table: StyleRuleTable,
    declaration: Regex,
    literal: Regex,
}

impl Default for StyleScanner {
    fn default() -> Self {
        Self::new(StyleRuleTable::builtin())
    }
}

impl StyleScanner {
    #[must_use]
    pub fn new(table: StyleRuleTable) -> Self {
        Self {
            table,
            // `property: value;` on its own line; selectors such as `a:hover {` never match.
            declaration: Regex::new(r"^\s*([A-Za-z][A-Za-z-]*)\s*:\s*([^;{}]+?)\s*;?\s*$")
                .expect("Invalid regex"),
            literal: Regex::new(
                r"#(?:[0-9A-Fa-f]{8}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{3,4})\b|\b\d+(?:\.\d+)?px\b",
            )
            .expect("Invalid regex"),
        }
    }

    #[must_use]
    pub fn scan(&self, path: &Path, content: &str, changed: &ChangedLines) -> Vec<Violation> {
        if changed.is_empty() {
            return Vec::new();
        }

        let mut violations = Vec::new();
        let mut in_comment = false;

        for (idx, line) in split_lines(content).into_iter().enumerate() {
            let line_number = idx + 1;
            let trimmed = line.trim_start();

            if in_comment {
                in_comment = !line.contains("*/");
                continue;
            }
            if trimmed.starts_with("/*") {
                in_comment = !trimmed.contains("*/");
                continue;
            }
            if trimmed.starts_with("//") || !changed.contains(line_number) {
                continue;
            }

            let Some(caps) = self.declaration.captures(line) else {
                continue;
            };
            let property = &caps[1];
            let value = &caps[2];

            if let Some(rule) = self.table.get(property) {
                trace!(path = %path.display(), line = line_number, property, "Utility equivalent");
                let severity = if rule.strict {
                    Severity::Error
                } else {
                    Severity::Warning
                };
                violations.push(Violation::new(
                    path,
                    line_number,
                    severity,
                    Rule::StyleUtility,
                    format!(
                        "'{property}: {value}' has a {} utility: use `{}`",
                        rule.category,
                        rule.suggest(value)
                    ),
                ));
            } else if let Some(literal) = self.literal.find(value) {
                violations.push(Violation::new(
                    path,
                    line_number,
                    Severity::Warning,
                    Rule::StyleLiteral,
                    format!(
                        "Hardcoded value '{}' in '{property}': use a design token or variable",
                        literal.as_str()
                    ),
                ));
            }
        }

        violations
    }
}

impl Checker for StyleScanner {
    fn check(&self, path: &Path, content: &str, changed: &ChangedLines) -> Vec<Violation> {
        self.scan(path, content, changed)
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
