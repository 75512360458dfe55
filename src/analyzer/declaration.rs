use regex::{Captures, Regex};

use super::types::{Accessor, Declaration, DeclarationKind, Parameter, Visibility};

/// Recognises declarations on a single line of source.
///
/// Implementations may be swapped (e.g. for a syntax-tree backed one) without
/// affecting validation or scanning.
pub trait DeclarationExtractor {
    /// Extract the declaration on `line`, or `None` if the line has no recognised shape.
    fn extract(&self, line: &str, line_number: usize) -> Option<Declaration>;
}

/// Identifiers that are followed by `(...) {` without being method names.
const NON_METHOD_KEYWORDS: &[&str] = &[
    "if",
    "else",
    "for",
    "while",
    "do",
    "switch",
    "catch",
    "with",
    "return",
    "function",
    "constructor",
    "typeof",
    "new",
    "await",
    "yield",
    "super",
    "this",
];

/// Line-pattern extractor for TypeScript class members.
pub struct PatternExtractor {
    method_head: Regex,
    method_tail: Regex,
    reactive_pattern: Regex,
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            method_head: Regex::new(
                r"^(?:(public|private|protected)\s+)?(?:(?:static|async|override|abstract)\s+)*(?:(get|set)\s+)?([A-Za-z_$][\w$]*)\s*(?:<[^()]*>)?\s*\(",
            )
            .expect("Invalid regex"),
            // Only the opening brace is required; a body or comment may follow.
            method_tail: Regex::new(r"^\s*(?::\s*(.+?))?\s*\{").expect("Invalid regex"),
            reactive_pattern: Regex::new(
                r"^(?:(public|private|protected)\s+)?(?:(?:static|override)\s+)*(?:readonly\s+)?([A-Za-z_$][\w$]*)[?!]?\s*(?::\s*[^=]+?)?\s*=\s*(computed|signal|input\.required|input|output|viewChild\.required|viewChild)\s*[<(]",
            )
            .expect("Invalid regex"),
        }
    }

    fn method(&self, line: &str, line_number: usize) -> Option<Declaration> {
        let head = self.method_head.captures(line)?;
        let name = head.get(3)?.as_str();
        if NON_METHOD_KEYWORDS.contains(&name) {
            return None;
        }

        let open = head.get(0)?.end() - 1;
        let close = open + matching_close(&line[open..])?;
        let tail = self.method_tail.captures(&line[close + 1..])?;

        let return_type = tail
            .get(1)
            .map(|m| m.as_str().trim().to_string())
            .filter(|t| !t.is_empty());
        let accessor = head.get(2).map(|m| match m.as_str() {
            "get" => Accessor::Get,
            _ => Accessor::Set,
        });

        Some(Declaration {
            kind: DeclarationKind::Method,
            visibility: visibility_of(&head),
            name: name.to_string(),
            parameters: parse_parameters(&line[open + 1..close]),
            return_type,
            accessor,
            line_number,
        })
    }

    fn reactive(&self, line: &str, line_number: usize) -> Option<Declaration> {
        let caps = self.reactive_pattern.captures(line)?;
        let kind = match caps.get(3)?.as_str() {
            "computed" => DeclarationKind::ComputedProperty,
            "signal" => DeclarationKind::Signal,
            "input" | "input.required" => DeclarationKind::InputProperty,
            "output" => DeclarationKind::OutputProperty,
            _ => DeclarationKind::ViewChildProperty,
        };

        Some(Declaration {
            kind,
            visibility: visibility_of(&caps),
            name: caps.get(2)?.as_str().to_string(),
            parameters: Vec::new(),
            return_type: None,
            accessor: None,
            line_number,
        })
    }
}

impl DeclarationExtractor for PatternExtractor {
    fn extract(&self, line: &str, line_number: usize) -> Option<Declaration> {
        let line = line.trim();
        self.method(line, line_number)
            .or_else(|| self.reactive(line, line_number))
    }
}

fn visibility_of(caps: &Captures<'_>) -> Visibility {
    caps.get(1)
        .map_or(Visibility::None, |m| Visibility::from_keyword(m.as_str()))
}

/// Parse the text between a method's parentheses.
#[must_use]
pub fn parse_parameters(text: &str) -> Vec<Parameter> {
    split_top_level(text)
        .into_iter()
        .filter_map(parse_parameter)
        .collect()
}

fn parse_parameter(segment: &str) -> Option<Parameter> {
    let segment = segment.trim();
    if segment.is_empty() {
        return None;
    }

    if segment.starts_with('{') || segment.starts_with('[') {
        let after = matching_close(segment).map_or("", |close| &segment[close + 1..]);
        let after = after.trim_start();
        let after = after.strip_prefix('?').unwrap_or(after).trim_start();
        let declared_type = after
            .strip_prefix(':')
            .map(type_before_default)
            .filter(|t| !t.is_empty())
            .unwrap_or(Parameter::UNKNOWN_TYPE);
        return Some(Parameter::new(Parameter::DESTRUCTURED, declared_type));
    }

    let default_at = find_default_assignment(segment);
    let colon_at = segment
        .find(':')
        .filter(|&c| default_at.is_none_or(|d| c < d));

    let (name, declared_type) = match colon_at {
        Some(c) => (&segment[..c], type_before_default(&segment[c + 1..])),
        None => (&segment[..default_at.unwrap_or(segment.len())], ""),
    };

    let name = name
        .trim()
        .trim_start_matches("...")
        .trim_end_matches(['?', '!'])
        .trim();
    let declared_type = if declared_type.is_empty() {
        Parameter::UNKNOWN_TYPE
    } else {
        declared_type
    };

    Some(Parameter::new(name, declared_type))
}

/// Type text up to a default value, trimmed.
fn type_before_default(text: &str) -> &str {
    find_default_assignment(text).map_or(text, |eq| &text[..eq]).trim()
}

/// Split on commas outside `()`, `<>`, `{}` and `[]`, and outside string literals.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut prev = '\0';
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if c == q && prev != '\\' {
                quote = None;
            }
        } else {
            match c {
                '\'' | '"' | '`' => quote = Some(c),
                '(' | '<' | '{' | '[' => depth += 1,
                // `=>` is an arrow, not a closing angle bracket.
                '>' if prev == '=' => {}
                ')' | '>' | '}' | ']' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    parts.push(&text[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }
        prev = c;
    }
    parts.push(&text[start..]);
    parts
}

/// Byte index of the bracket closing the one `text` starts with.
pub(super) fn matching_close(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut prev = '\0';
    for (i, c) in text.char_indices() {
        match c {
            '(' | '<' | '{' | '[' => depth += 1,
            '>' if prev == '=' => {}
            ')' | '>' | '}' | ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        prev = c;
    }
    None
}

/// Byte index of a top-level `=` that starts a default value.
fn find_default_assignment(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut prev = '\0';
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        match c {
            '(' | '<' | '{' | '[' => depth += 1,
            '>' if prev == '=' => {}
            ')' | '>' | '}' | ']' => depth = depth.saturating_sub(1),
            '=' if depth == 0
                && next != Some('>')
                && next != Some('=')
                && !matches!(prev, '=' | '!' | '<' | '>') =>
            {
                return Some(i);
            }
            _ => {}
        }
        prev = c;
    }
    None
}

#[cfg(test)]
#[path = "declaration_tests.rs"]
mod tests;
