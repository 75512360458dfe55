use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::declaration::matching_close;
use super::types::{CommentBlock, Declaration, Visibility};

/// Whether methods that return nothing still need a return tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoidReturnPolicy {
    #[default]
    Require,
    /// `void`, `Promise<void>` and `never` methods may omit the tag.
    Exempt,
}

/// A discrepancy between a declaration and its documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingDocumentation,
    MissingVisibilityTag { expected: Visibility },
    MultipleVisibilityTags { found: Vec<Visibility> },
    VisibilityTagMismatch { expected: Visibility, found: Visibility },
    MissingReturnTag,
    MissingParamTag { name: String },
    MissingParamType { name: String },
    ExtraParamTag { name: String },
    MultiLineReactiveDoc,
    EmptyDescription,
}

impl ValidationError {
    /// Critical errors are reported with error severity.
    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(
            self,
            Self::VisibilityTagMismatch { .. } | Self::ExtraParamTag { .. }
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDocumentation => write!(f, "missing documentation comment"),
            Self::MissingVisibilityTag { expected } => write!(
                f,
                "documentation is missing the {} tag",
                expected.tag().unwrap_or("visibility")
            ),
            Self::MultipleVisibilityTags { found } => {
                let tags: Vec<_> = found.iter().filter_map(|v| v.tag()).collect();
                write!(f, "documentation has multiple visibility tags: {}", tags.join(", "))
            }
            Self::VisibilityTagMismatch { expected, found } => write!(
                f,
                "documentation tag {} does not match {expected} visibility",
                found.tag().unwrap_or("@none")
            ),
            Self::MissingReturnTag => write!(f, "documentation is missing a @returns tag"),
            Self::MissingParamTag { name } => {
                write!(f, "documentation is missing @param for '{name}'")
            }
            Self::MissingParamType { name } => {
                write!(f, "@param for '{name}' has no {{type}} annotation")
            }
            Self::ExtraParamTag { name } => {
                write!(f, "@param '{name}' does not match any parameter")
            }
            Self::MultiLineReactiveDoc => write!(
                f,
                "reactive property documentation must be a single-line /** ... */ comment"
            ),
            Self::EmptyDescription => write!(f, "documentation comment has an empty description"),
        }
    }
}

/// A `@param` tag as written in a documentation block.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParamTag {
    name: String,
    has_type: bool,
}

/// Cross-checks declarations against their documentation blocks.
pub struct ConsistencyValidator {
    void_return: VoidReturnPolicy,
    visibility_tag: Regex,
    return_tag: Regex,
    param_tag: Regex,
    param_name: Regex,
}

impl Default for ConsistencyValidator {
    fn default() -> Self {
        Self::new(VoidReturnPolicy::default())
    }
}

impl ConsistencyValidator {
    #[must_use]
    pub fn new(void_return: VoidReturnPolicy) -> Self {
        Self {
            void_return,
            visibility_tag: Regex::new(r"@(public|private|protected)\b").expect("Invalid regex"),
            return_tag: Regex::new(r"@returns?\b").expect("Invalid regex"),
            param_tag: Regex::new(r"@param\b").expect("Invalid regex"),
            param_name: Regex::new(r"^\s*\[?([A-Za-z_$][\w$.]*)").expect("Invalid regex"),
        }
    }

    /// Validate `declaration` against its block; `None` means no block was found.
    ///
    /// Every rule is checked and every failure reported. Without a block only
    /// `MissingDocumentation` is reported.
    #[must_use]
    pub fn validate(
        &self,
        declaration: &Declaration,
        block: Option<&CommentBlock>,
    ) -> Vec<ValidationError> {
        let Some(block) = block else {
            return vec![ValidationError::MissingDocumentation];
        };

        let mut errors = Vec::new();
        self.check_visibility(declaration, block, &mut errors);

        if declaration.kind.is_method() {
            self.check_return(declaration, block, &mut errors);
            self.check_params(declaration, block, &mut errors);
        } else {
            Self::check_single_line(block, &mut errors);
        }

        errors
    }

    fn check_visibility(
        &self,
        declaration: &Declaration,
        block: &CommentBlock,
        errors: &mut Vec<ValidationError>,
    ) {
        let expected = declaration.visibility;
        if expected == Visibility::None {
            return;
        }

        let mut found: Vec<Visibility> = Vec::new();
        for caps in self.visibility_tag.captures_iter(&block.raw_text) {
            let visibility = Visibility::from_keyword(&caps[1]);
            if !found.contains(&visibility) {
                found.push(visibility);
            }
        }

        match found.len() {
            0 => errors.push(ValidationError::MissingVisibilityTag { expected }),
            1 => {
                if found[0] != expected {
                    errors.push(ValidationError::VisibilityTagMismatch {
                        expected,
                        found: found[0],
                    });
                }
            }
            _ => errors.push(ValidationError::MultipleVisibilityTags { found }),
        }
    }

    fn check_return(
        &self,
        declaration: &Declaration,
        block: &CommentBlock,
        errors: &mut Vec<ValidationError>,
    ) {
        if declaration.is_setter() || self.return_tag.is_match(&block.raw_text) {
            return;
        }
        if self.void_return == VoidReturnPolicy::Exempt && declaration.returns_nothing() {
            return;
        }
        errors.push(ValidationError::MissingReturnTag);
    }

    fn check_params(
        &self,
        declaration: &Declaration,
        block: &CommentBlock,
        errors: &mut Vec<ValidationError>,
    ) {
        let declared: Vec<&str> = declaration
            .named_parameters()
            .map(|p| p.name.as_str())
            .collect();
        if declared.is_empty() {
            return;
        }

        let tags = self.param_tags(&block.raw_text);

        for name in &declared {
            match tags.iter().find(|tag| tag.name == *name) {
                None => errors.push(ValidationError::MissingParamTag {
                    name: (*name).to_string(),
                }),
                Some(tag) if !tag.has_type => errors.push(ValidationError::MissingParamType {
                    name: (*name).to_string(),
                }),
                Some(_) => {}
            }
        }

        for tag in &tags {
            if tag.name.contains('.') || declared.contains(&tag.name.as_str()) {
                continue;
            }
            if declaration.has_destructured_parameter()
                && names_destructured(declaration, tag, &tags)
            {
                continue;
            }
            errors.push(ValidationError::ExtraParamTag {
                name: tag.name.clone(),
            });
        }
    }

    fn check_single_line(block: &CommentBlock, errors: &mut Vec<ValidationError>) {
        if !block.is_single_line() {
            errors.push(ValidationError::MultiLineReactiveDoc);
        } else if block.inner_text().is_empty() {
            errors.push(ValidationError::EmptyDescription);
        }
    }

    /// Distinct `@param` tags in order of appearance.
    ///
    /// The `{type}` annotation may nest braces, as in `{{id: number}}`.
    fn param_tags(&self, text: &str) -> Vec<ParamTag> {
        let mut tags: Vec<ParamTag> = Vec::new();
        for tag in self.param_tag.find_iter(text) {
            let rest = text[tag.end()..].trim_start();
            let close = if rest.starts_with('{') {
                matching_close(rest)
            } else {
                None
            };
            let (annotation, rest) = match close {
                Some(close) => (Some(&rest[1..close]), &rest[close + 1..]),
                None => (None, rest),
            };
            let Some(caps) = self.param_name.captures(rest) else {
                continue;
            };

            let name = caps[1].to_string();
            if tags.iter().any(|t| t.name == name) {
                continue;
            }
            let has_type = annotation.is_some_and(|t| !t.trim().is_empty());
            tags.push(ParamTag { name, has_type });
        }
        tags
    }
}

/// Whether an unmatched tag stands for a destructured parameter: its fields
/// are documented as `tag.field`, or it is named after the parameter's type.
fn names_destructured(declaration: &Declaration, tag: &ParamTag, tags: &[ParamTag]) -> bool {
    let prefix = format!("{}.", tag.name);
    tags.iter().any(|t| t.name.starts_with(&prefix))
        || declaration
            .parameters
            .iter()
            .filter(|p| p.is_destructured())
            .any(|p| p.declared_type.eq_ignore_ascii_case(&tag.name))
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
