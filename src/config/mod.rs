mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{
    Config, DEFAULT_MAX_COMMENTS, DEFAULT_NEAR_WINDOW, DetectorsConfig, DocumentationConfig,
    ReviewConfig, ScannerConfig,
};
pub use validation::validate_config_semantics;
