//! Path display with forward slashes on every platform.

use std::path::Path;

/// Format `path` for output, relative to `root` when it lies under it.
///
/// Returns `"."` when `path` equals `root`.
#[must_use]
pub fn display_path(path: &Path, root: Option<&Path>) -> String {
    let relative = root
        .and_then(|root| path.strip_prefix(root).ok())
        .unwrap_or(path);

    let result = relative.to_string_lossy().replace('\\', "/");
    if result.is_empty() {
        ".".to_string()
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn relative_to_root() {
        let root = PathBuf::from("/work/app");
        let file = PathBuf::from("/work/app/src/cart.ts");
        assert_eq!(display_path(&file, Some(&root)), "src/cart.ts");
    }

    #[test]
    fn outside_root_is_unchanged() {
        let root = PathBuf::from("/work/app");
        let file = PathBuf::from("/other/cart.ts");
        assert_eq!(display_path(&file, Some(&root)), "/other/cart.ts");
    }

    #[test]
    fn root_itself_is_dot() {
        let root = PathBuf::from("/work/app");
        assert_eq!(display_path(&root, Some(&root)), ".");
    }

    #[test]
    fn backslashes_become_forward_slashes() {
        assert_eq!(display_path(Path::new("src\\app\\cart.ts"), None), "src/app/cart.ts");
    }
}
