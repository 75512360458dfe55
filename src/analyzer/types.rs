use std::fmt;

use serde::Serialize;

/// Access modifier written on a declaration, or on its documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    Protected,
    /// No modifier written.
    None,
}

impl Visibility {
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "public" => Self::Public,
            "private" => Self::Private,
            "protected" => Self::Protected,
            _ => Self::None,
        }
    }

    /// The matching documentation tag (`@public`, ...).
    #[must_use]
    pub const fn tag(self) -> Option<&'static str> {
        match self {
            Self::Public => Some("@public"),
            Self::Private => Some("@private"),
            Self::Protected => Some("@protected"),
            Self::None => None,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::None => "none",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeclarationKind {
    Method,
    ComputedProperty,
    Signal,
    InputProperty,
    OutputProperty,
    ViewChildProperty,
}

impl DeclarationKind {
    #[must_use]
    pub const fn is_method(self) -> bool {
        matches!(self, Self::Method)
    }

    /// Human-readable label used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Method => "method",
            Self::ComputedProperty => "computed property",
            Self::Signal => "signal",
            Self::InputProperty => "input property",
            Self::OutputProperty => "output property",
            Self::ViewChildProperty => "view child property",
        }
    }
}

/// `get` or `set` written before an accessor's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessor {
    Get,
    Set,
}

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub declared_type: String,
}

impl Parameter {
    /// Name given to destructuring parameters, whose fields are not validated.
    pub const DESTRUCTURED: &'static str = "destructured";
    /// Type recorded when no annotation is written.
    pub const UNKNOWN_TYPE: &'static str = "unknown";

    #[must_use]
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }

    #[must_use]
    pub fn is_destructured(&self) -> bool {
        self.name == Self::DESTRUCTURED
    }
}

/// A method or reactive property recognised on a single source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub visibility: Visibility,
    pub name: String,
    /// Empty for reactive properties.
    pub parameters: Vec<Parameter>,
    /// Declared return type of a method, verbatim.
    pub return_type: Option<String>,
    pub accessor: Option<Accessor>,
    /// 1-indexed line of the declaration.
    pub line_number: usize,
}

impl Declaration {
    #[must_use]
    pub const fn has_declared_return_type(&self) -> bool {
        self.return_type.is_some()
    }

    /// Setters cannot declare a return type and return nothing.
    #[must_use]
    pub fn is_setter(&self) -> bool {
        self.accessor == Some(Accessor::Set)
    }

    /// Parameters whose names documentation can refer to.
    pub fn named_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| !p.is_destructured())
    }

    #[must_use]
    pub fn has_destructured_parameter(&self) -> bool {
        self.parameters.iter().any(Parameter::is_destructured)
    }

    /// Whether the declared return type produces no value.
    #[must_use]
    pub fn returns_nothing(&self) -> bool {
        self.return_type.as_deref().is_some_and(|t| {
            let compact: String = t.chars().filter(|c| !c.is_whitespace()).collect();
            matches!(compact.as_str(), "void" | "Promise<void>" | "never")
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    SingleLine,
    MultiLine,
}

/// A `/** ... */` documentation block found above a declaration.
///
/// `start` and `end` are 0-based line indices, inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    pub kind: BlockKind,
    pub start: usize,
    pub end: usize,
    pub raw_text: String,
}

impl CommentBlock {
    #[must_use]
    pub const fn is_single_line(&self) -> bool {
        matches!(self.kind, BlockKind::SingleLine)
    }

    /// Text between the delimiters of a single-line block, trimmed.
    #[must_use]
    pub fn inner_text(&self) -> &str {
        let text = self.raw_text.trim();
        let text = text.strip_prefix("/**").unwrap_or(text);
        let text = text.strip_suffix("*/").unwrap_or(text);
        text.trim()
    }
}
