mod error_output;
mod json;
mod markdown;
mod path;
mod sarif;
mod text;

pub use error_output::ErrorOutput;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use path::display_path;
pub use sarif::SarifFormatter;
pub use text::TextFormatter;

use crate::checker::Violation;
use crate::error::Result;

/// Renders a violation list.
pub trait OutputFormatter {
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, violations: &[Violation]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Sarif,
    #[value(alias = "md")]
    Markdown,
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Colors when the stream is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against a stream's terminal status.
    #[must_use]
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            // Presence of NO_COLOR (any value) disables color.
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && is_terminal,
        }
    }
}

pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Build the formatter for `format`.
#[must_use]
pub fn formatter_for(format: OutputFormat, color: ColorMode) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(color)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Sarif => Box::new(SarifFormatter),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
