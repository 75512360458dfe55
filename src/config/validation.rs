//! Configuration semantic validation.
//!
//! Runs after parsing: checks values serde cannot express as types.

use crate::config::Config;
use crate::{DocGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if extension lists are empty or dotted, `max_comments`
/// is zero, or an exclude glob does not compile.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_scanner_section(config)?;
    validate_glob_patterns(config)?;
    validate_review_section(config)?;
    Ok(())
}

fn validate_scanner_section(config: &Config) -> Result<()> {
    if config.scanner.extensions.is_empty() {
        return Err(DocGuardError::Config(
            "scanner.extensions must list at least one extension".to_string(),
        ));
    }

    let lists = [
        ("scanner.extensions", &config.scanner.extensions),
        ("scanner.style_extensions", &config.scanner.style_extensions),
    ];
    for (field, extensions) in lists {
        for ext in extensions {
            if ext.starts_with('.') {
                return Err(DocGuardError::Config(format!(
                    "{field} entry '{ext}' must not start with a dot (use '{}')",
                    ext.trim_start_matches('.')
                )));
            }
            if ext.is_empty() {
                return Err(DocGuardError::Config(format!(
                    "{field} contains an empty extension"
                )));
            }
        }
    }
    Ok(())
}

fn validate_glob_patterns(config: &Config) -> Result<()> {
    for pattern in &config.scanner.exclude {
        globset::Glob::new(pattern).map_err(|e| DocGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

fn validate_review_section(config: &Config) -> Result<()> {
    if config.review.max_comments == 0 {
        return Err(DocGuardError::Config(
            "review.max_comments must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
