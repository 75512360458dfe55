use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::Config;
use crate::error::{DocGuardError, Result};

/// Which checker a scanned file goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Source,
    Stylesheet,
}

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

impl<F: FileFilter + ?Sized> FileFilter for &F {
    fn should_include(&self, path: &Path) -> bool {
        (**self).should_include(path)
    }
}

pub struct GlobFilter {
    extensions: Vec<String>,
    style_extensions: Vec<String>,
    exclude_patterns: GlobSet,
    exclude_suffixes: Vec<String>,
}

impl GlobFilter {
    /// Create a filter from extension lists, exclude globs and file name suffixes.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(
        extensions: Vec<String>,
        style_extensions: Vec<String>,
        exclude_patterns: &[String],
        exclude_suffixes: Vec<String>,
    ) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| DocGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| DocGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            extensions,
            style_extensions,
            exclude_patterns,
            exclude_suffixes,
        })
    }

    /// Build from the `[scanner]` section; stylesheets are dropped when the
    /// style detector is disabled.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        let scanner = &config.scanner;
        let style_extensions = if config.detectors.styles {
            scanner.style_extensions.clone()
        } else {
            Vec::new()
        };
        Self::new(
            scanner.extensions.clone(),
            style_extensions,
            &scanner.exclude,
            scanner.exclude_suffixes.clone(),
        )
    }

    /// Kind of an included file, or `None` when the path is filtered out.
    #[must_use]
    pub fn classify(&self, path: &Path) -> Option<FileKind> {
        if self.is_excluded(path) {
            return None;
        }

        let ext = path.extension().and_then(|ext| ext.to_str())?;
        if self.extensions.iter().any(|e| e == ext) {
            Some(FileKind::Source)
        } else if self.style_extensions.iter().any(|e| e == ext) {
            Some(FileKind::Stylesheet)
        } else {
            None
        }
    }

    fn is_excluded(&self, path: &Path) -> bool {
        if self.exclude_patterns.is_match(path) {
            return true;
        }

        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.exclude_suffixes.iter().any(|s| name.ends_with(s)))
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.classify(path).is_some()
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
