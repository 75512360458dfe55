use std::path::PathBuf;

use super::*;

fn render(use_colors: bool, error: &DocGuardError) -> String {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(use_colors).write_report(&mut buf, error);
    String::from_utf8(buf).unwrap()
}

#[test]
fn config_error_with_suggestion() {
    let output = render(
        false,
        &DocGuardError::Config("review.max_comments must be greater than 0".to_string()),
    );

    assert_eq!(
        output,
        "✖ Config: review.max_comments must be greater than 0\n  \
         help: Check the config file format; `doc-guard init` writes a valid template\n"
    );
}

#[test]
fn file_read_error_includes_cause() {
    let error = DocGuardError::FileRead {
        path: PathBuf::from("missing.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
    };

    let output = render(false, &error);

    assert!(output.starts_with("✖ FileRead: missing.toml\n"));
    assert!(output.contains("  × No such file\n"));
    assert!(output.contains("  help: Check that the file path exists\n"));
}

#[test]
fn error_without_suggestion_has_single_line() {
    let error = DocGuardError::Io(std::io::Error::other("disk full"));
    assert_eq!(render(false, &error), "✖ IO: disk full\n");
}

#[test]
fn colored_error_uses_ansi_codes() {
    let output = render(true, &DocGuardError::Git("bad revision".to_string()));

    assert!(output.contains(ansi::RED));
    assert!(output.contains(ansi::CYAN));
    assert!(output.contains("bad revision"));
}

#[test]
fn warning_format() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(false).write_warning(
        &mut buf,
        "No files to scan",
        Some("Check the paths and scanner.extensions"),
    );

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "⚠ Warning: No files to scan\n  help: Check the paths and scanner.extensions\n"
    );
}
