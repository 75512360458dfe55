use super::*;

#[test]
fn violation_serializes_as_flat_record() {
    let violation = Violation::new(
        "src/app.ts",
        6,
        Severity::Warning,
        Rule::DebugStatement,
        "Remove debug output",
    );

    let json = serde_json::to_value(&violation).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "path": "src/app.ts",
            "line": 6,
            "severity": "warning",
            "rule": "doc-guard/debug-statement",
            "message": "Remove debug output",
        })
    );
}

#[test]
fn error_outranks_warning() {
    assert!(Severity::Error > Severity::Warning);
    assert_eq!(Severity::Error.to_string(), "error");
}

#[test]
fn rule_ids_are_unique_and_prefixed() {
    let ids: IndexSet<&str> = Rule::ALL.iter().map(|r| r.id()).collect();
    assert_eq!(ids.len(), Rule::ALL.len());
    assert!(ids.iter().all(|id| id.starts_with("doc-guard/")));
}

#[test]
fn validation_errors_map_to_rules() {
    assert_eq!(
        Rule::from(&ValidationError::MissingDocumentation),
        Rule::MissingDocumentation
    );
    assert_eq!(
        Rule::from(&ValidationError::ExtraParamTag { name: "a".into() }),
        Rule::ParamTag
    );
    assert_eq!(
        Rule::from(&ValidationError::EmptyDescription),
        Rule::ReactiveDocFormat
    );
}

#[test]
fn summary_counts_severities_and_files() {
    let violations = vec![
        Violation::new("a.ts", 1, Severity::Error, Rule::Breakpoint, "x"),
        Violation::new("b.ts", 2, Severity::Warning, Rule::Todo, "y"),
        Violation::new("a.ts", 3, Severity::Warning, Rule::Fixme, "z"),
    ];

    let summary = ViolationSummary::from_violations(&violations);

    assert_eq!(
        summary,
        ViolationSummary {
            total: 3,
            errors: 1,
            warnings: 2,
            files: 2,
        }
    );
    assert!(!summary.is_clean());
    assert!(ViolationSummary::from_violations(&[]).is_clean());
}
