use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;
use crate::analyzer::VoidReturnPolicy;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn with_current_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.current_dir = path.into();
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }
}

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    assert_eq!(loader.load().unwrap(), Config::default());
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/my/project")
        .with_file(
            "/my/project/.doc-guard.toml",
            "[documentation]\nvoid_return = \"exempt\"\nnear_window = 3\n",
        );

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(config.documentation.void_return, VoidReturnPolicy::Exempt);
    assert_eq!(config.documentation.near_window, 3);
}

#[test]
fn config_in_other_directory_is_not_discovered() {
    let fs = MockFileSystem::new()
        .with_current_dir("/project/sub")
        .with_file("/project/.doc-guard.toml", "[review]\nmax_comments = 5\n");

    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.review.max_comments, 30);
}

#[test]
fn load_from_explicit_path() {
    let fs = MockFileSystem::new().with_file("/ci/doc-guard.toml", "[review]\nmax_comments = 5\n");

    let config = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/ci/doc-guard.toml"))
        .unwrap();
    assert_eq!(config.review.max_comments, 5);
}

#[test]
fn missing_explicit_path_is_file_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let result = loader.load_from_path(Path::new("/nope.toml"));
    assert!(matches!(result, Err(DocGuardError::FileRead { ref path, .. }) if path == Path::new("/nope.toml")));
}

#[test]
fn malformed_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.doc-guard.toml", "[scanner\nextensions = 1");

    let result = FileConfigLoader::with_fs(fs).load();
    assert!(matches!(result, Err(DocGuardError::TomlParse(_))));
}

#[test]
fn semantic_errors_surface_from_load() {
    let fs = MockFileSystem::new().with_file("/project/.doc-guard.toml", "[review]\nmax_comments = 0\n");

    let result = FileConfigLoader::with_fs(fs).load();
    assert!(matches!(result, Err(DocGuardError::Config(_))));
}
