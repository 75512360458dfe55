//! Changed-line ranges derived from unified diff hunk headers.

use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// An inclusive, 1-indexed range of lines in the new version of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    #[must_use]
    pub const fn contains(&self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }

    /// Whether `line` lies inside the range or at most `margin` lines past its end.
    #[must_use]
    pub const fn is_near(&self, line: usize, margin: usize) -> bool {
        self.start <= line && line <= self.end + margin
    }
}

/// The set of ranges touched by a diff, in hunk order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedLines {
    ranges: Vec<LineRange>,
}

impl ChangedLines {
    #[must_use]
    pub const fn new(ranges: Vec<LineRange>) -> Self {
        Self { ranges }
    }

    /// Treat every line of a file with `line_count` lines as changed.
    #[must_use]
    pub fn whole_file(line_count: usize) -> Self {
        if line_count == 0 {
            return Self::default();
        }
        Self::new(vec![LineRange {
            start: 1,
            end: line_count,
        }])
    }

    /// Changed-only window.
    #[must_use]
    pub fn contains(&self, line: usize) -> bool {
        self.ranges.iter().any(|r| r.contains(line))
    }

    /// Near-changed window: changed, or within `margin` lines after a range.
    #[must_use]
    pub fn is_near(&self, line: usize, margin: usize) -> bool {
        self.ranges.iter().any(|r| r.is_near(line, margin))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    #[must_use]
    pub fn ranges(&self) -> &[LineRange] {
        &self.ranges
    }
}

/// Parses unified diff text into the ranges added or modified on the new side.
pub struct HunkParser {
    header: Regex,
}

impl Default for HunkParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HunkParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            header: Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@")
                .expect("Invalid regex"),
        }
    }

    /// Compute the new-side ranges of every hunk in `diff`.
    ///
    /// A hunk `@@ -a,b +c,d @@` yields `{c, c + d - 1}`; an omitted `d` means one line.
    /// Hunks with `d == 0` remove lines only and yield nothing.
    #[must_use]
    pub fn compute(&self, diff: &str) -> ChangedLines {
        let mut ranges = Vec::new();
        let mut open: Option<OpenHunk> = None;

        for raw in diff.lines() {
            let line = raw.strip_suffix('\r').unwrap_or(raw);

            if let Some(caps) = self.header.captures(line) {
                if let Some(hunk) = open.take() {
                    hunk.finish();
                }
                let new_start = parse_number(caps.get(3).map(|m| m.as_str())).unwrap_or(0);
                let new_count = parse_number(caps.get(4).map(|m| m.as_str())).unwrap_or(1);

                if new_start > 0 && new_count > 0 {
                    ranges.push(LineRange {
                        start: new_start,
                        end: new_start + new_count - 1,
                    });
                }
                open = Some(OpenHunk {
                    start: new_start,
                    expected: new_count,
                    cursor: new_start,
                });
                continue;
            }

            if let Some(hunk) = open.as_mut()
                && advances_new_side(line)
            {
                hunk.cursor += 1;
            }
        }

        if let Some(hunk) = open {
            hunk.finish();
        }

        ChangedLines::new(ranges)
    }
}

/// Convenience wrapper around [`HunkParser::compute`].
#[must_use]
pub fn compute_changed_ranges(diff: &str) -> ChangedLines {
    HunkParser::new().compute(diff)
}

struct OpenHunk {
    start: usize,
    expected: usize,
    cursor: usize,
}

impl OpenHunk {
    fn finish(self) {
        let seen = self.cursor - self.start;
        if seen != self.expected {
            debug!(
                start = self.start,
                expected = self.expected,
                seen,
                "hunk body length differs from its header"
            );
        }
    }
}

fn parse_number(text: Option<&str>) -> Option<usize> {
    text.and_then(|t| t.parse().ok())
}

/// Context and added lines exist on the new side; deletions, file headers and
/// "no newline" markers do not.
fn advances_new_side(line: &str) -> bool {
    if line.starts_with('\\') || line.starts_with("+++") || line.starts_with("---") {
        return false;
    }
    if line.starts_with("diff --git") || line.starts_with("index ") {
        return false;
    }
    !line.starts_with('-')
}

#[cfg(test)]
#[path = "ranges_tests.rs"]
mod tests;
