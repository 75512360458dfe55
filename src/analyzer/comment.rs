//! Locating the documentation block that belongs to a declaration.
//!
//! The search walks upward from the declaration line. Blank lines and
//! decorators (`@HostListener(...)`, `@Input()`) may sit between a block and
//! its declaration; anything else breaks the association.

use super::types::{BlockKind, CommentBlock};

/// States of the upward scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Skipping blank and decorator lines above the declaration.
    Scanning,
    /// Inside a multi-line block whose closing line is `end`, looking for `/**`.
    InBlock { end: usize },
    Done {
        kind: BlockKind,
        start: usize,
        end: usize,
    },
    /// No documentation block is associated with the declaration.
    Rejected,
}

/// Finds documentation blocks in one file's lines.
///
/// Construction records, for every line, whether it begins inside an open
/// `/* ... */` comment; that is what separates a decorator from a tag line of
/// an unstarred block.
pub struct CommentBlockLocator<'a> {
    lines: &'a [&'a str],
    starts_in_comment: Vec<bool>,
}

impl<'a> CommentBlockLocator<'a> {
    #[must_use]
    pub fn new(lines: &'a [&'a str]) -> Self {
        let mut starts_in_comment = Vec::with_capacity(lines.len());
        let mut in_comment = false;
        for line in lines {
            starts_in_comment.push(in_comment);
            in_comment = track_block_comment(line, in_comment);
        }
        Self {
            lines,
            starts_in_comment,
        }
    }

    /// Locate the block documenting the declaration at 0-based `target`.
    ///
    /// Returns `None` when no block is associated with it.
    #[must_use]
    pub fn locate(&self, target: usize) -> Option<CommentBlock> {
        let target = target.min(self.lines.len());
        let mut state = ScanState::Scanning;
        let mut idx = target;

        loop {
            state = match state {
                ScanState::Scanning => {
                    if idx == 0 {
                        ScanState::Rejected
                    } else {
                        idx -= 1;
                        self.classify(idx, target)
                    }
                }
                ScanState::InBlock { end } => {
                    if idx == 0 {
                        ScanState::Rejected
                    } else {
                        idx -= 1;
                        Self::extend_block(self.trimmed(idx), idx, end)
                    }
                }
                ScanState::Done { kind, start, end } => {
                    return Some(self.block(kind, start, end));
                }
                ScanState::Rejected => return None,
            };
        }
    }

    fn trimmed(&self, idx: usize) -> &'a str {
        self.lines[idx].trim()
    }

    /// First step on a line while still skipping the declaration's prelude.
    fn classify(&self, idx: usize, target: usize) -> ScanState {
        let line = self.trimmed(idx);

        if line.is_empty() || self.is_decorator(idx) {
            return ScanState::Scanning;
        }
        if is_single_line_doc(line) {
            return ScanState::Done {
                kind: BlockKind::SingleLine,
                start: idx,
                end: idx,
            };
        }
        if line.starts_with("/**") {
            return self.close_forward(idx, target);
        }
        if line.starts_with("/*") {
            return ScanState::Rejected;
        }
        if line.ends_with("*/") || line.starts_with('*') {
            return ScanState::InBlock { end: idx };
        }
        ScanState::Rejected
    }

    /// An unclosed opener directly above the prelude: its closer must come
    /// before the declaration.
    fn close_forward(&self, start: usize, target: usize) -> ScanState {
        (start + 1..target)
            .find(|&i| self.lines[i].contains("*/"))
            .map_or(ScanState::Rejected, |end| ScanState::Done {
                kind: BlockKind::MultiLine,
                start,
                end,
            })
    }

    fn extend_block(line: &str, idx: usize, end: usize) -> ScanState {
        if line.contains("*/") || (line.starts_with("/*") && !line.starts_with("/**")) {
            // The tail of an earlier block, or a plain comment.
            ScanState::Rejected
        } else if line.starts_with("/**") {
            ScanState::Done {
                kind: BlockKind::MultiLine,
                start: idx,
                end,
            }
        } else {
            ScanState::InBlock { end }
        }
    }

    fn is_decorator(&self, idx: usize) -> bool {
        !self.starts_in_comment[idx] && is_decorator_syntax(self.trimmed(idx))
    }

    fn block(&self, kind: BlockKind, start: usize, end: usize) -> CommentBlock {
        CommentBlock {
            kind,
            start,
            end,
            raw_text: self.lines[start..=end].join("\n"),
        }
    }
}

/// Convenience wrapper for a single lookup.
#[must_use]
pub fn locate_comment_block(lines: &[&str], target: usize) -> Option<CommentBlock> {
    CommentBlockLocator::new(lines).locate(target)
}

fn is_single_line_doc(line: &str) -> bool {
    line.len() > "/**/".len() && line.starts_with("/**") && line.ends_with("*/")
}

/// `@` + identifier + `(` or `{`.
fn is_decorator_syntax(line: &str) -> bool {
    let Some(rest) = line.strip_prefix('@') else {
        return false;
    };
    let ident_len = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .unwrap_or(rest.len());
    if ident_len == 0 {
        return false;
    }
    let after = rest[ident_len..].trim_start();
    after.starts_with('(') || after.starts_with('{')
}

/// Whether a block comment is still open at the end of `line`.
///
/// String literals on a single line are skipped so that globs like `'src/**'`
/// do not open a comment.
fn track_block_comment(line: &str, mut in_comment: bool) -> bool {
    let bytes = line.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        let next = bytes.get(i + 1).copied();

        if in_comment {
            if c == b'*' && next == Some(b'/') {
                in_comment = false;
                i += 2;
                continue;
            }
        } else if let Some(q) = quote {
            if c == b'\\' {
                i += 2;
                continue;
            }
            if c == q {
                quote = None;
            }
        } else {
            match (c, next) {
                (b'/', Some(b'/')) => break,
                (b'/', Some(b'*')) => {
                    in_comment = true;
                    i += 2;
                    continue;
                }
                (b'\'' | b'"' | b'`', _) => quote = Some(c),
                _ => {}
            }
        }
        i += 1;
    }

    in_comment
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
