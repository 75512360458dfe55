use std::fs;

use crate::cli::InitArgs;
use crate::output::{ColorMode, ErrorOutput};
use crate::{DocGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs, color: ColorMode) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::stderr(color).report(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(DocGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# doc-guard configuration file
# Every setting is optional; the values below are the defaults.

[scanner]
# Extensions (without the dot) that receive documentation checks
extensions = ["ts"]

# Stylesheets checked for utility-class equivalents and hardcoded values
style_extensions = ["css", "scss", "less"]

# Glob patterns of paths to skip
exclude = ["**/node_modules/**", "**/dist/**"]

# File name endings to skip
exclude_suffixes = [".spec.ts", ".test.ts", ".stories.ts", ".d.ts"]

[documentation]
# Declarations up to this many lines after a changed range are still checked,
# so editing a doc comment re-checks the declaration below it
near_window = 5

# "require": methods returning void need @returns too
# "exempt":  void, Promise<void> and never methods may omit @returns
void_return = "require"

# Flag members without public/protected/private
require_access_modifier = true

# Flag methods without a declared return type
require_return_type = true

[detectors]
debug_statements = true   # console.log and friends
breakpoints = true        # debugger statements
todo = true
fixme = true
styles = true             # stylesheet checks

[review]
# Inline comments per review; the rest are counted in the summary
max_comments = 30
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
