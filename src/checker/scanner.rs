use std::path::Path;

use tracing::trace;

use crate::analyzer::{
    CommentBlock, CommentBlockLocator, ConsistencyValidator, Declaration, DeclarationExtractor,
    PatternExtractor, Visibility,
};
use crate::config::{Config, DEFAULT_NEAR_WINDOW, DetectorsConfig};
use crate::git::ChangedLines;

use super::Checker;
use super::detectors::{LiteralDetector, literal_detectors};
use super::violation::{Rule, Severity, Violation};

/// Documentation and debug-statement checks for one source file.
///
/// Literal detectors only look at changed lines. Declarations are checked
/// on changed lines and up to `near_window` lines after each changed range,
/// since editing a doc block moves its declaration just past the hunk.
pub struct ViolationScanner<E: DeclarationExtractor = PatternExtractor> {
    extractor: E,
    validator: ConsistencyValidator,
    detectors: Vec<LiteralDetector>,
    near_window: usize,
    require_access_modifier: bool,
    require_return_type: bool,
}

impl Default for ViolationScanner<PatternExtractor> {
    fn default() -> Self {
        Self::with_extractor(PatternExtractor::new())
    }
}

impl ViolationScanner<PatternExtractor> {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let docs = &config.documentation;
        Self {
            extractor: PatternExtractor::new(),
            validator: ConsistencyValidator::new(docs.void_return),
            detectors: literal_detectors(&config.detectors),
            near_window: docs.near_window,
            require_access_modifier: docs.require_access_modifier,
            require_return_type: docs.require_return_type,
        }
    }
}

impl<E: DeclarationExtractor> ViolationScanner<E> {
    /// Default settings with a custom declaration extractor.
    #[must_use]
    pub fn with_extractor(extractor: E) -> Self {
        Self {
            extractor,
            validator: ConsistencyValidator::default(),
            detectors: literal_detectors(&DetectorsConfig::default()),
            near_window: DEFAULT_NEAR_WINDOW,
            require_access_modifier: true,
            require_return_type: true,
        }
    }

    /// Scan `content` and return violations in line order, then check order.
    #[must_use]
    pub fn scan(&self, path: &Path, content: &str, changed: &ChangedLines) -> Vec<Violation> {
        if changed.is_empty() {
            return Vec::new();
        }

        let lines = split_lines(content);
        let locator = CommentBlockLocator::new(&lines);
        let mut violations = Vec::new();

        for (idx, line) in lines.iter().enumerate() {
            let line_number = idx + 1;

            if changed.contains(line_number) {
                for detector in self.detectors.iter().filter(|d| d.matches(line)) {
                    violations.push(Violation::new(
                        path,
                        line_number,
                        detector.severity,
                        detector.rule,
                        detector.message,
                    ));
                }
            }

            if changed.is_near(line_number, self.near_window)
                && let Some(declaration) = self.extractor.extract(line, line_number)
            {
                trace!(
                    path = %path.display(),
                    line = line_number,
                    name = %declaration.name,
                    "Checking declaration"
                );
                let block = locator.locate(idx);
                let found = self.check_declaration(path, &declaration, block.as_ref());
                if changed.contains(line_number) {
                    violations.extend(found);
                } else {
                    violations.extend(found.into_iter().map(Violation::beside_change));
                }
            }
        }

        violations
    }

    fn check_declaration(
        &self,
        path: &Path,
        declaration: &Declaration,
        block: Option<&CommentBlock>,
    ) -> Vec<Violation> {
        let mut violations = Vec::new();
        let subject = format!("{} '{}'", declaration.kind.label(), declaration.name);
        let line = declaration.line_number;

        for error in self.validator.validate(declaration, block) {
            let severity = if error.is_critical() {
                Severity::Error
            } else {
                Severity::Warning
            };
            violations.push(Violation::new(
                path,
                line,
                severity,
                Rule::from(&error),
                format!("{subject}: {error}"),
            ));
        }

        if self.require_access_modifier && declaration.visibility == Visibility::None {
            violations.push(Violation::new(
                path,
                line,
                Severity::Warning,
                Rule::MissingAccessModifier,
                format!("{subject} has no access modifier (public, protected or private)"),
            ));
        }

        if self.require_return_type
            && declaration.kind.is_method()
            && !declaration.is_setter()
            && !declaration.has_declared_return_type()
        {
            violations.push(Violation::new(
                path,
                line,
                Severity::Warning,
                Rule::MissingReturnType,
                format!("{subject} has no declared return type"),
            ));
        }

        violations
    }
}

impl<E: DeclarationExtractor + Send + Sync> Checker for ViolationScanner<E> {
    fn check(&self, path: &Path, content: &str, changed: &ChangedLines) -> Vec<Violation> {
        self.scan(path, content, changed)
    }
}

/// Split on `\n`, dropping a trailing `\r` from each line.
pub(crate) fn split_lines(content: &str) -> Vec<&str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
