use regex::Regex;

use crate::config::DetectorsConfig;

use super::violation::{Rule, Severity};

/// A single-line pattern check with a fixed message.
#[derive(Debug, Clone)]
pub struct LiteralDetector {
    pub rule: Rule,
    pub severity: Severity,
    pub message: &'static str,
    pattern: Regex,
}

impl LiteralDetector {
    fn new(rule: Rule, severity: Severity, pattern: &str, message: &'static str) -> Self {
        Self {
            rule,
            severity,
            message,
            pattern: Regex::new(pattern).expect("Invalid regex"),
        }
    }

    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

/// The enabled detectors, in reporting order.
#[must_use]
pub fn literal_detectors(config: &DetectorsConfig) -> Vec<LiteralDetector> {
    let mut detectors = Vec::with_capacity(4);
    if config.debug_statements {
        detectors.push(LiteralDetector::new(
            Rule::DebugStatement,
            Severity::Warning,
            r"\bconsole\.(?:log|debug|info|warn|error|trace|dir|table)\s*\(",
            "Remove console output before merging",
        ));
    }
    if config.breakpoints {
        detectors.push(LiteralDetector::new(
            Rule::Breakpoint,
            Severity::Error,
            r"(?:^|[^\w$.])debugger\s*(?:;|$)",
            "Remove the debugger statement",
        ));
    }
    if config.todo {
        detectors.push(LiteralDetector::new(
            Rule::Todo,
            Severity::Warning,
            r"\bTODO\b",
            "Resolve the TODO or track it in an issue",
        ));
    }
    if config.fixme {
        detectors.push(LiteralDetector::new(
            Rule::Fixme,
            Severity::Warning,
            r"\bFIXME\b",
            "Resolve the FIXME before merging",
        ));
    }
    detectors
}

#[cfg(test)]
#[path = "detectors_tests.rs"]
mod tests;
