use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleCategory {
    Layout,
    Spacing,
    Sizing,
    Typography,
    Color,
    Border,
}

impl StyleCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::Spacing => "spacing",
            Self::Sizing => "sizing",
            Self::Typography => "typography",
            Self::Color => "color",
            Self::Border => "border",
        }
    }
}

impl fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stylesheet property with a utility-class equivalent.
///
/// `suggestion` is a class template; `{value}` is replaced by the declared value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRule {
    pub property: &'static str,
    pub suggestion: &'static str,
    pub category: StyleCategory,
    /// Strict rules are reported as errors.
    pub strict: bool,
}

impl StyleRule {
    const fn new(
        property: &'static str,
        suggestion: &'static str,
        category: StyleCategory,
        strict: bool,
    ) -> Self {
        Self {
            property,
            suggestion,
            category,
            strict,
        }
    }

    /// Render the suggested class for `value`.
    ///
    /// Keyword values are used as-is (`justify-content: center` gives
    /// `justify-center`); anything else becomes an arbitrary value (`p-[12px]`).
    #[must_use]
    pub fn suggest(&self, value: &str) -> String {
        let value = value.trim_end_matches("!important").trim();
        let is_keyword = value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '-' || c == ' ');
        let rendered = if is_keyword {
            value.replace(' ', "-")
        } else {
            format!("[{}]", value.replace(' ', "_"))
        };
        self.suggestion.replace("{value}", &rendered)
    }
}

use StyleCategory::{Border, Color, Layout, Sizing, Spacing, Typography};

const BUILTIN_RULES: &[StyleRule] = &[
    StyleRule::new("display", "{value}", Layout, true),
    StyleRule::new("position", "{value}", Layout, true),
    StyleRule::new("flex-direction", "flex-{value}", Layout, true),
    StyleRule::new("flex-wrap", "flex-{value}", Layout, true),
    StyleRule::new("justify-content", "justify-{value}", Layout, true),
    StyleRule::new("align-items", "items-{value}", Layout, true),
    StyleRule::new("overflow", "overflow-{value}", Layout, false),
    StyleRule::new("gap", "gap-{value}", Spacing, true),
    StyleRule::new("margin", "m-{value}", Spacing, true),
    StyleRule::new("margin-top", "mt-{value}", Spacing, true),
    StyleRule::new("margin-right", "mr-{value}", Spacing, true),
    StyleRule::new("margin-bottom", "mb-{value}", Spacing, true),
    StyleRule::new("margin-left", "ml-{value}", Spacing, true),
    StyleRule::new("padding", "p-{value}", Spacing, true),
    StyleRule::new("padding-top", "pt-{value}", Spacing, true),
    StyleRule::new("padding-right", "pr-{value}", Spacing, true),
    StyleRule::new("padding-bottom", "pb-{value}", Spacing, true),
    StyleRule::new("padding-left", "pl-{value}", Spacing, true),
    StyleRule::new("width", "w-{value}", Sizing, false),
    StyleRule::new("height", "h-{value}", Sizing, false),
    StyleRule::new("min-width", "min-w-{value}", Sizing, false),
    StyleRule::new("max-width", "max-w-{value}", Sizing, false),
    StyleRule::new("min-height", "min-h-{value}", Sizing, false),
    StyleRule::new("max-height", "max-h-{value}", Sizing, false),
    StyleRule::new("font-size", "text-{value}", Typography, false),
    StyleRule::new("font-weight", "font-{value}", Typography, true),
    StyleRule::new("text-align", "text-{value}", Typography, true),
    StyleRule::new("line-height", "leading-{value}", Typography, false),
    StyleRule::new("text-transform", "{value}", Typography, true),
    StyleRule::new("color", "text-{value}", Color, false),
    StyleRule::new("background-color", "bg-{value}", Color, false),
    StyleRule::new("border-color", "border-{value}", Color, false),
    StyleRule::new("border-radius", "rounded-{value}", Border, false),
    StyleRule::new("border-width", "border-{value}", Border, false),
    StyleRule::new("border-style", "border-{value}", Border, true),
];

/// Lookup from property name to its utility rule.
#[derive(Debug, Clone, Copy)]
pub struct StyleRuleTable {
    rules: &'static [StyleRule],
}

impl Default for StyleRuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StyleRuleTable {
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            rules: BUILTIN_RULES,
        }
    }

    #[must_use]
    pub const fn new(rules: &'static [StyleRule]) -> Self {
        Self { rules }
    }

    /// Case-insensitive property lookup.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&StyleRule> {
        self.rules
            .iter()
            .find(|rule| rule.property.eq_ignore_ascii_case(property))
    }

    #[must_use]
    pub const fn rules(&self) -> &[StyleRule] {
        self.rules
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
