use serde::Serialize;

use crate::checker::{Violation, ViolationSummary};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: ViolationSummary,
    violations: &'a [Violation],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, violations: &[Violation]) -> Result<String> {
        let output = JsonOutput {
            summary: ViolationSummary::from_violations(violations),
            violations,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
