use serde::Serialize;

use crate::checker::{Rule, Severity, Violation};
use crate::error::Result;

use super::OutputFormatter;
use super::display_path;

/// SARIF 2.1.0 output for code-scanning upload.
pub struct SarifFormatter;

const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";
const SARIF_VERSION: &str = "2.1.0";
const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize)]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<Run>,
}

#[derive(Serialize)]
struct Run {
    tool: Tool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct Tool {
    driver: ToolDriver,
}

#[derive(Serialize)]
struct ToolDriver {
    name: &'static str,
    version: &'static str,
    rules: Vec<ReportingDescriptor>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportingDescriptor {
    id: &'static str,
    short_description: MultiformatMessageString,
}

#[derive(Serialize)]
struct MultiformatMessageString {
    text: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: &'static str,
    rule_index: usize,
    level: &'static str,
    message: Message,
    locations: Vec<Location>,
}

#[derive(Serialize)]
struct Message {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Location {
    physical_location: PhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhysicalLocation {
    artifact_location: ArtifactLocation,
    region: Region,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactLocation {
    uri: String,
    uri_base_id: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Region {
    start_line: usize,
}

impl SarifFormatter {
    fn build_rules() -> Vec<ReportingDescriptor> {
        Rule::ALL
            .iter()
            .map(|rule| ReportingDescriptor {
                id: rule.id(),
                short_description: MultiformatMessageString {
                    text: rule.description(),
                },
            })
            .collect()
    }

    fn convert(violation: &Violation) -> SarifResult {
        let rule_index = Rule::ALL
            .iter()
            .position(|r| *r == violation.rule)
            .unwrap_or_default();
        let level = match violation.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };

        SarifResult {
            rule_id: violation.rule.id(),
            rule_index,
            level,
            message: Message {
                text: violation.message.clone(),
            },
            locations: vec![Location {
                physical_location: PhysicalLocation {
                    artifact_location: ArtifactLocation {
                        uri: display_path(&violation.path, None),
                        uri_base_id: "%SRCROOT%",
                    },
                    region: Region {
                        start_line: violation.line,
                    },
                },
            }],
        }
    }
}

impl OutputFormatter for SarifFormatter {
    fn format(&self, violations: &[Violation]) -> Result<String> {
        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![Run {
                tool: Tool {
                    driver: ToolDriver {
                        name: TOOL_NAME,
                        version: TOOL_VERSION,
                        rules: Self::build_rules(),
                    },
                },
                results: violations.iter().map(Self::convert).collect(),
            }],
        };

        Ok(serde_json::to_string_pretty(&log)?)
    }
}

#[cfg(test)]
#[path = "sarif_tests.rs"]
mod tests;
