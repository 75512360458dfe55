mod detectors;
mod scanner;
mod violation;

pub use detectors::{LiteralDetector, literal_detectors};
pub use scanner::ViolationScanner;
pub(crate) use scanner::split_lines;
pub use violation::{Rule, Severity, Violation, ViolationSummary};

use std::path::Path;

use crate::git::ChangedLines;

pub trait Checker: Send + Sync {
    /// Check one file's content, restricted to the lines `changed` selects.
    ///
    /// Violations are returned in line order and never re-sorted.
    fn check(&self, path: &Path, content: &str, changed: &ChangedLines) -> Vec<Violation>;
}
