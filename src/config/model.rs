use serde::{Deserialize, Serialize};

use crate::analyzer::VoidReturnPolicy;

/// Root of `.doc-guard.toml`. Every section and field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub documentation: DocumentationConfig,

    #[serde(default)]
    pub detectors: DetectorsConfig,

    #[serde(default)]
    pub review: ReviewConfig,
}

/// Which files are scanned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Extensions (without the dot) that receive documentation checks.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Stylesheet extensions checked against the style rule table.
    #[serde(default = "default_style_extensions")]
    pub style_extensions: Vec<String>,

    /// Glob patterns of paths to skip entirely.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// File name endings to skip (test, story and declaration files).
    #[serde(default = "default_exclude_suffixes")]
    pub exclude_suffixes: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            style_extensions: default_style_extensions(),
            exclude: default_exclude(),
            exclude_suffixes: default_exclude_suffixes(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DocumentationConfig {
    /// Lines past the end of a changed range in which declarations are still checked.
    #[serde(default = "default_near_window")]
    pub near_window: usize,

    #[serde(default)]
    pub void_return: VoidReturnPolicy,

    #[serde(default = "default_true")]
    pub require_access_modifier: bool,

    #[serde(default = "default_true")]
    pub require_return_type: bool,
}

impl Default for DocumentationConfig {
    fn default() -> Self {
        Self {
            near_window: default_near_window(),
            void_return: VoidReturnPolicy::default(),
            require_access_modifier: true,
            require_return_type: true,
        }
    }
}

/// Toggles for the line detectors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct DetectorsConfig {
    #[serde(default = "default_true")]
    pub debug_statements: bool,

    #[serde(default = "default_true")]
    pub breakpoints: bool,

    #[serde(default = "default_true")]
    pub todo: bool,

    #[serde(default = "default_true")]
    pub fixme: bool,

    #[serde(default = "default_true")]
    pub styles: bool,
}

impl Default for DetectorsConfig {
    fn default() -> Self {
        Self {
            debug_statements: true,
            breakpoints: true,
            todo: true,
            fixme: true,
            styles: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReviewConfig {
    /// Upper bound on inline comments in one posted review.
    #[serde(default = "default_max_comments")]
    pub max_comments: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            max_comments: default_max_comments(),
        }
    }
}

pub const DEFAULT_NEAR_WINDOW: usize = 5;
pub const DEFAULT_MAX_COMMENTS: usize = 30;

const fn default_near_window() -> usize {
    DEFAULT_NEAR_WINDOW
}

const fn default_max_comments() -> usize {
    DEFAULT_MAX_COMMENTS
}

const fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    vec!["ts".to_string()]
}

fn default_style_extensions() -> Vec<String> {
    vec!["css".to_string(), "scss".to_string(), "less".to_string()]
}

fn default_exclude() -> Vec<String> {
    vec!["**/node_modules/**".to_string(), "**/dist/**".to_string()]
}

fn default_exclude_suffixes() -> Vec<String> {
    [".spec.ts", ".test.ts", ".stories.ts", ".d.ts"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
