use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::checker::{Checker, Violation, ViolationScanner};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;
use crate::git::ChangedLines;
use crate::scanner::{FileKind, GlobFilter};
use crate::style::StyleScanner;

/// Load configuration from `config_path`, the current directory, or defaults.
///
/// # Errors
/// Returns an error if the configuration file cannot be read, parsed or validated.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Reads file contents; swapped out in tests.
pub trait FileReader: Send + Sync {
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &Path) -> std::io::Result<String>;
}

pub struct RealFileReader;

impl FileReader for RealFileReader {
    fn read(&self, path: &Path) -> std::io::Result<String> {
        fs::read_to_string(path)
    }
}

/// A file to check and where to read it from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScanTarget {
    /// Path reported in violations.
    pub display: PathBuf,
    /// Path the content is read from.
    pub source: PathBuf,
}

/// Built dependencies shared by `check` and `review`.
pub struct CheckContext {
    pub filter: GlobFilter,
    pub source_checker: ViolationScanner,
    pub style_checker: StyleScanner,
    pub file_reader: Box<dyn FileReader>,
}

impl CheckContext {
    /// # Errors
    /// Returns an error if an exclude pattern is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            filter: GlobFilter::from_config(config)?,
            source_checker: ViolationScanner::from_config(config),
            style_checker: StyleScanner::default(),
            file_reader: Box::new(RealFileReader),
        })
    }

    fn checker_for(&self, kind: FileKind) -> &dyn Checker {
        match kind {
            FileKind::Source => &self.source_checker,
            FileKind::Stylesheet => &self.style_checker,
        }
    }

    /// Check `targets` in parallel, keeping the input order in the result.
    ///
    /// `changed_lines` selects the lines to check for a file; `None` skips it.
    /// Unreadable files are logged and skipped.
    pub(crate) fn scan<C>(&self, targets: &[ScanTarget], changed_lines: C) -> Vec<Violation>
    where
        C: Fn(&ScanTarget, &str) -> Option<ChangedLines> + Sync,
    {
        let per_file: Vec<Vec<Violation>> = targets
            .par_iter()
            .map(|target| {
                let Some(kind) = self.filter.classify(&target.display) else {
                    return Vec::new();
                };
                let content = match self.file_reader.read(&target.source) {
                    Ok(content) => content,
                    Err(e) => {
                        warn!(path = %target.source.display(), error = %e, "Skipping unreadable file");
                        return Vec::new();
                    }
                };
                let Some(changed) = changed_lines(target, &content) else {
                    return Vec::new();
                };
                let violations =
                    self.checker_for(kind)
                        .check(&target.display, &content, &changed);
                debug!(
                    path = %target.display.display(),
                    violations = violations.len(),
                    "Checked file"
                );
                violations
            })
            .collect();

        per_file.into_iter().flatten().collect()
    }
}

/// Line count as the scanners see it.
pub(crate) fn line_count(content: &str) -> usize {
    crate::checker::split_lines(content).len()
}

/// Write `content` to `output`, or print it to stdout.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub(crate) fn write_output(output: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        if !quiet {
            eprintln!("Output written to: {}", path.display());
        }
    } else {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
