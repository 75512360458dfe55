use std::path::Path;

use super::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_filter() -> GlobFilter {
    GlobFilter::from_config(&Config::default()).unwrap()
}

#[test]
fn classify_by_extension() {
    let filter = default_filter();

    assert_eq!(
        filter.classify(Path::new("src/app/cart.component.ts")),
        Some(FileKind::Source)
    );
    assert_eq!(
        filter.classify(Path::new("src/app/cart.component.scss")),
        Some(FileKind::Stylesheet)
    );
    assert_eq!(filter.classify(Path::new("src/main.rs")), None);
    assert_eq!(filter.classify(Path::new("Makefile")), None);
}

#[test]
fn suffix_exclusions() {
    let filter = default_filter();

    assert!(!filter.should_include(Path::new("src/cart.spec.ts")));
    assert!(!filter.should_include(Path::new("src/cart.stories.ts")));
    assert!(!filter.should_include(Path::new("src/types.d.ts")));
    assert!(filter.should_include(Path::new("src/spec.ts")));
}

#[test]
fn glob_exclusions() {
    let filter = default_filter();

    assert!(!filter.should_include(Path::new("node_modules/lib/index.ts")));
    assert!(!filter.should_include(Path::new("./web/dist/main.ts")));
    assert!(filter.should_include(Path::new("src/distance.ts")));
}

#[test]
fn styles_disabled_drops_stylesheets() {
    let mut config = Config::default();
    config.detectors.styles = false;
    let filter = GlobFilter::from_config(&config).unwrap();

    assert_eq!(filter.classify(Path::new("a.css")), None);
    assert_eq!(filter.classify(Path::new("a.ts")), Some(FileKind::Source));
}

#[test]
fn custom_lists() {
    let filter = GlobFilter::new(
        strings(&["tsx", "ts"]),
        vec![],
        &strings(&["**/generated/**"]),
        strings(&[".mock.ts"]),
    )
    .unwrap();

    assert!(filter.should_include(Path::new("ui/button.tsx")));
    assert!(!filter.should_include(Path::new("src/generated/api.ts")));
    assert!(!filter.should_include(Path::new("src/api.mock.ts")));
    assert!(!filter.should_include(Path::new("src/theme.css")));
}

#[test]
fn invalid_pattern_returns_error() {
    let result = GlobFilter::new(vec![], vec![], &strings(&["[invalid"]), vec![]);
    assert!(matches!(
        result,
        Err(DocGuardError::InvalidPattern { pattern, .. }) if pattern == "[invalid"
    ));
}
