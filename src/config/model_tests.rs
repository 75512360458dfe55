use super::*;

#[test]
fn defaults_match_documented_values() {
    let config = Config::default();

    assert_eq!(config.scanner.extensions, vec!["ts"]);
    assert_eq!(config.scanner.style_extensions, vec!["css", "scss", "less"]);
    assert!(config.scanner.exclude_suffixes.contains(&".spec.ts".to_string()));
    assert_eq!(config.documentation.near_window, 5);
    assert_eq!(config.documentation.void_return, VoidReturnPolicy::Require);
    assert!(config.documentation.require_access_modifier);
    assert!(config.detectors.debug_statements);
    assert_eq!(config.review.max_comments, 30);
}

#[test]
fn empty_document_is_default_config() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let toml_str = r#"
        [documentation]
        void_return = "exempt"

        [detectors]
        todo = false
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(config.documentation.void_return, VoidReturnPolicy::Exempt);
    assert_eq!(config.documentation.near_window, 5);
    assert!(!config.detectors.todo);
    assert!(config.detectors.fixme);
    assert_eq!(config.scanner, ScannerConfig::default());
}

#[test]
fn scanner_lists_replace_defaults() {
    let toml_str = r#"
        [scanner]
        extensions = ["ts", "tsx"]
        exclude_suffixes = []
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(config.scanner.extensions, vec!["ts", "tsx"]);
    assert!(config.scanner.exclude_suffixes.is_empty());
    assert_eq!(config.scanner.style_extensions, vec!["css", "scss", "less"]);
}

#[test]
fn unknown_keys_are_rejected() {
    let result: Result<Config, _> = toml::from_str("[documentation]\nnear_windw = 3\n");
    assert!(result.is_err());
}

#[test]
fn unknown_void_return_policy_is_rejected() {
    let result: Result<Config, _> = toml::from_str("[documentation]\nvoid_return = \"sometimes\"\n");
    assert!(result.is_err());
}

#[test]
fn serialize_roundtrip() {
    let mut config = Config::default();
    config.documentation.void_return = VoidReturnPolicy::Exempt;
    config.review.max_comments = 10;

    let serialized = toml::to_string(&config).unwrap();
    let deserialized: Config = toml::from_str(&serialized).unwrap();
    assert_eq!(config, deserialized);
}
