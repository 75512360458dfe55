mod diff;
mod ranges;

pub use diff::{DiffSource, GitDiff};
pub use ranges::{ChangedLines, HunkParser, LineRange, compute_changed_ranges};

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
