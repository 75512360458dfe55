use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::{DocGuardError, Result};

/// Source of change information for a comparison against a base reference.
pub trait DiffSource {
    /// Files changed between `base_ref` and HEAD, relative to the repository root, sorted.
    ///
    /// # Errors
    /// Returns an error if the reference cannot be parsed or the repository cannot be accessed.
    fn changed_files(&self, base_ref: &str) -> Result<Vec<PathBuf>>;

    /// Unified diff of a single file against `base_ref`.
    ///
    /// An unchanged file yields an empty string, not an error.
    ///
    /// # Errors
    /// Returns an error if the diff cannot be produced.
    fn unified_diff(&self, path: &Path, base_ref: &str) -> Result<String>;
}

/// Git-backed [`DiffSource`]: `gix` for tree comparison, the `git` CLI for hunks.
pub struct GitDiff {
    repo_path: PathBuf,
    workdir: PathBuf,
}

type TreeEntries = HashMap<PathBuf, gix::ObjectId>;

impl GitDiff {
    /// Open the repository containing the given path.
    ///
    /// # Errors
    /// Returns an error if no git repository is found.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = gix::discover(path).map_err(|e| {
            DocGuardError::GitRepoNotFound(format!("{}: {e}", path.display()))
        })?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| DocGuardError::Git("Repository has no working directory".into()))?
            .to_path_buf();
        Ok(Self {
            repo_path: repo.path().to_path_buf(),
            workdir,
        })
    }

    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn open_repo(&self) -> Result<gix::Repository> {
        gix::open(&self.repo_path)
            .map_err(|e| DocGuardError::Git(format!("Failed to open git repository: {e}")))
    }

    fn tree_of<'r>(repo: &'r gix::Repository, reference: &str) -> Result<gix::Tree<'r>> {
        repo.rev_parse_single(reference)
            .map_err(|e| DocGuardError::Git(format!("Failed to parse reference '{reference}': {e}")))?
            .object()
            .map_err(|e| DocGuardError::Git(format!("Failed to get object for '{reference}': {e}")))?
            .peel_to_commit()
            .map_err(|e| DocGuardError::Git(format!("Failed to peel to commit '{reference}': {e}")))?
            .tree()
            .map_err(|e| DocGuardError::Git(format!("Failed to get tree for '{reference}': {e}")))
    }

    fn collect_blobs(tree: &gix::Tree<'_>, prefix: &Path, entries: &mut TreeEntries) -> Result<()> {
        for entry in tree.iter() {
            let entry =
                entry.map_err(|e| DocGuardError::Git(format!("Failed to read tree entry: {e}")))?;
            let name = std::str::from_utf8(entry.filename())
                .map_err(|e| DocGuardError::Git(format!("Invalid filename encoding: {e}")))?;
            let path = prefix.join(name);

            match entry.mode().kind() {
                gix::object::tree::EntryKind::Blob
                | gix::object::tree::EntryKind::BlobExecutable => {
                    entries.insert(path, entry.oid().into());
                }
                gix::object::tree::EntryKind::Tree => {
                    let subtree = entry
                        .object()
                        .map_err(|e| DocGuardError::Git(format!("Failed to get subtree: {e}")))?
                        .into_tree();
                    Self::collect_blobs(&subtree, &path, entries)?;
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl DiffSource for GitDiff {
    fn changed_files(&self, base_ref: &str) -> Result<Vec<PathBuf>> {
        let repo = self.open_repo()?;

        let mut base = TreeEntries::new();
        Self::collect_blobs(&Self::tree_of(&repo, base_ref)?, Path::new(""), &mut base)?;
        let mut head = TreeEntries::new();
        Self::collect_blobs(&Self::tree_of(&repo, "HEAD")?, Path::new(""), &mut head)?;

        // Deleted files have nothing left to review.
        let mut changed: Vec<PathBuf> = head
            .into_iter()
            .filter(|(path, oid)| base.get(path) != Some(oid))
            .map(|(path, _)| path)
            .collect();
        changed.sort();

        debug!(base_ref, count = changed.len(), "collected changed files");
        Ok(changed)
    }

    fn unified_diff(&self, path: &Path, base_ref: &str) -> Result<String> {
        let output = Command::new("git")
            .args(["diff", "--no-color", "--no-ext-diff", "--unified=0", base_ref, "--"])
            .arg(path)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| DocGuardError::Git(format!("Failed to run git diff: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DocGuardError::Git(format!(
                "git diff failed for {}: {}",
                path.display(),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
