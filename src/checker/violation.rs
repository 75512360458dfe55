use std::fmt;
use std::path::PathBuf;

use indexmap::IndexSet;
use serde::{Serialize, Serializer};

use crate::analyzer::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identifier of the check that produced a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    DebugStatement,
    Breakpoint,
    Todo,
    Fixme,
    MissingDocumentation,
    VisibilityTag,
    ReturnTag,
    ParamTag,
    ReactiveDocFormat,
    MissingAccessModifier,
    MissingReturnType,
    StyleUtility,
    StyleLiteral,
}

impl Rule {
    pub const ALL: [Self; 13] = [
        Self::DebugStatement,
        Self::Breakpoint,
        Self::Todo,
        Self::Fixme,
        Self::MissingDocumentation,
        Self::VisibilityTag,
        Self::ReturnTag,
        Self::ParamTag,
        Self::ReactiveDocFormat,
        Self::MissingAccessModifier,
        Self::MissingReturnType,
        Self::StyleUtility,
        Self::StyleLiteral,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::DebugStatement => "doc-guard/debug-statement",
            Self::Breakpoint => "doc-guard/breakpoint",
            Self::Todo => "doc-guard/todo",
            Self::Fixme => "doc-guard/fixme",
            Self::MissingDocumentation => "doc-guard/missing-documentation",
            Self::VisibilityTag => "doc-guard/visibility-tag",
            Self::ReturnTag => "doc-guard/return-tag",
            Self::ParamTag => "doc-guard/param-tag",
            Self::ReactiveDocFormat => "doc-guard/reactive-doc-format",
            Self::MissingAccessModifier => "doc-guard/missing-access-modifier",
            Self::MissingReturnType => "doc-guard/missing-return-type",
            Self::StyleUtility => "doc-guard/style-utility",
            Self::StyleLiteral => "doc-guard/style-literal",
        }
    }

    /// One-line description, used for SARIF rule metadata.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::DebugStatement => "Debug output left in changed code",
            Self::Breakpoint => "Breakpoint statement left in changed code",
            Self::Todo => "TODO marker in changed code",
            Self::Fixme => "FIXME marker in changed code",
            Self::MissingDocumentation => "Declaration has no documentation comment",
            Self::VisibilityTag => "Documentation visibility tag does not match the declaration",
            Self::ReturnTag => "Method documentation lacks a return tag",
            Self::ParamTag => "Parameter tags do not match the declared parameters",
            Self::ReactiveDocFormat => "Reactive property documentation is not a one-line comment",
            Self::MissingAccessModifier => "Declaration has no access modifier",
            Self::MissingReturnType => "Method has no declared return type",
            Self::StyleUtility => "Style property has a utility-class equivalent",
            Self::StyleLiteral => "Hardcoded style value",
        }
    }
}

impl From<&ValidationError> for Rule {
    fn from(error: &ValidationError) -> Self {
        match error {
            ValidationError::MissingDocumentation => Self::MissingDocumentation,
            ValidationError::MissingVisibilityTag { .. }
            | ValidationError::MultipleVisibilityTags { .. }
            | ValidationError::VisibilityTagMismatch { .. } => Self::VisibilityTag,
            ValidationError::MissingReturnTag => Self::ReturnTag,
            ValidationError::MissingParamTag { .. }
            | ValidationError::MissingParamType { .. }
            | ValidationError::ExtraParamTag { .. } => Self::ParamTag,
            ValidationError::MultiLineReactiveDoc | ValidationError::EmptyDescription => {
                Self::ReactiveDocFormat
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// One finding on one line of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: PathBuf,
    /// 1-indexed line in the current version of the file.
    pub line: usize,
    pub severity: Severity,
    pub rule: Rule,
    pub message: String,
    /// False for findings reported near, not on, a changed line.
    #[serde(skip)]
    pub on_changed_line: bool,
}

impl Violation {
    #[must_use]
    pub fn new(
        path: impl Into<PathBuf>,
        line: usize,
        severity: Severity,
        rule: Rule,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            line,
            severity,
            rule,
            message: message.into(),
            on_changed_line: true,
        }
    }

    /// Mark the finding as lying next to the changed lines.
    #[must_use]
    pub const fn beside_change(mut self) -> Self {
        self.on_changed_line = false;
        self
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Counts over a violation list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViolationSummary {
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
    pub files: usize,
}

impl ViolationSummary {
    #[must_use]
    pub fn from_violations(violations: &[Violation]) -> Self {
        let errors = violations.iter().filter(|v| v.is_error()).count();
        let files: IndexSet<&PathBuf> = violations.iter().map(|v| &v.path).collect();
        Self {
            total: violations.len(),
            errors,
            warnings: violations.len() - errors,
            files: files.len(),
        }
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
