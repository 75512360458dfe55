pub mod analyzer;
pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod output;
pub mod review;
pub mod scanner;
pub mod style;

pub use error::{DocGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Environment variable holding a `tracing` filter that overrides `-v`/`-q`.
pub const LOG_ENV: &str = "DOC_GUARD_LOG";

/// Log level for the given verbosity flags.
#[must_use]
pub const fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
