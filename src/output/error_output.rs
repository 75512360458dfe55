//! Colored error and warning messages on stderr.
//!
//! Format: `✖ Type: message`, then optional `  × detail` and `  help: suggestion`.

use std::io::{IsTerminal, Write};

use crate::error::DocGuardError;

use super::{ColorMode, ansi};

#[derive(Debug, Clone, Copy)]
enum Level {
    Error,
    Warning,
}

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Formatter for stderr, resolving `mode` against stderr's terminal status.
    #[must_use]
    pub fn stderr(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.enabled(std::io::stderr().is_terminal()),
        }
    }

    #[cfg(test)]
    pub(crate) const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Print `error` with its detail and suggestion.
    pub fn report(&self, error: &DocGuardError) {
        let mut stderr = std::io::stderr().lock();
        self.write_report(&mut stderr, error);
    }

    pub fn warn(&self, message: &str, suggestion: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, suggestion);
    }

    pub fn write_report<W: Write>(&self, w: &mut W, error: &DocGuardError) {
        self.write_message(
            w,
            Level::Error,
            error.error_type(),
            &error.message(),
            error.detail().as_deref(),
            error.suggestion(),
        );
    }

    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str, suggestion: Option<&str>) {
        self.write_message(w, Level::Warning, "Warning", message, None, suggestion);
    }

    // Write failures on stderr are ignored: there is nowhere left to report them.
    fn write_message<W: Write>(
        &self,
        w: &mut W,
        level: Level,
        heading: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let (icon, color) = match level {
            Level::Error => ("✖", ansi::RED),
            Level::Warning => ("⚠", ansi::YELLOW),
        };

        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{color}{icon} {heading}:{} {message}",
                ansi::BOLD,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "{icon} {heading}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
