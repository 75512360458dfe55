use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Git error: {0}")]
    Git(String),

    #[error("Not a git repository: {0}")]
    GitRepoNotFound(String),

    #[error("Review posting failed: {0}")]
    Review(String),
}

impl DocGuardError {
    /// Short category label used as the heading of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::InvalidPattern { .. } => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
            Self::Git(_) | Self::GitRepoNotFound(_) => "Git",
            Self::Review(_) => "Review",
        }
    }

    /// The primary message, without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::Git(msg) | Self::GitRepoNotFound(msg) | Self::Review(msg) => {
                msg.clone()
            }
            Self::FileRead { path, .. } => path.display().to_string(),
            Self::InvalidPattern { pattern, .. } => pattern.clone(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, when one is attached.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint for the user, if there is an obvious one.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format; `doc-guard init` writes a valid template")
            }
            Self::FileRead { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                std::io::ErrorKind::PermissionDenied => Some("Check the file permissions"),
                _ => None,
            },
            Self::InvalidPattern { .. } => {
                Some("Use glob syntax, e.g. \"**/generated/**\" or \"src/*.ts\"")
            }
            Self::GitRepoNotFound(_) => Some("Run the command inside a git working tree"),
            Self::Git(_) => Some("Check that the base reference exists (fetch it in CI if needed)"),
            Self::Review(_) => Some("Check the token permissions and the pull request number"),
            Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DocGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
