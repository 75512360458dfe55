use serde_json::Value;

use super::*;
use crate::checker::{Rule, Severity};

#[test]
fn json_has_summary_and_violation_records() {
    let violations = vec![
        Violation::new("src/a.ts", 4, Severity::Error, Rule::Breakpoint, "Remove it"),
        Violation::new("src/a.ts", 9, Severity::Warning, Rule::Todo, "Resolve it"),
    ];

    let output = JsonFormatter.format(&violations).unwrap();
    let parsed: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["total"], 2);
    assert_eq!(parsed["summary"]["errors"], 1);
    assert_eq!(parsed["summary"]["warnings"], 1);
    assert_eq!(parsed["summary"]["files"], 1);

    let first = &parsed["violations"][0];
    assert_eq!(first["path"], "src/a.ts");
    assert_eq!(first["line"], 4);
    assert_eq!(first["severity"], "error");
    assert_eq!(first["rule"], "doc-guard/breakpoint");
    assert_eq!(first["message"], "Remove it");
    assert_eq!(parsed["violations"][1]["line"], 9);
}

#[test]
fn empty_list_is_valid_json() {
    let output = JsonFormatter.format(&[]).unwrap();
    let parsed: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["total"], 0);
    assert_eq!(parsed["violations"], Value::Array(Vec::new()));
}
