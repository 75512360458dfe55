use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::git::{ChangedLines, DiffSource, compute_changed_ranges};

use super::context::ScanTarget;

/// Files changed since `base` that lie under one of `roots`.
///
/// Targets are reported relative to the repository root, in the order the
/// diff source lists them. An empty `roots` keeps every changed file.
///
/// # Errors
/// Returns an error if the changed files cannot be listed.
pub(crate) fn changed_targets<D: DiffSource + ?Sized>(
    source: &D,
    workdir: &Path,
    base: &str,
    roots: &[PathBuf],
) -> Result<Vec<ScanTarget>> {
    let workdir = workdir.canonicalize().unwrap_or_else(|_| workdir.to_path_buf());
    let roots: Vec<PathBuf> = roots
        .iter()
        .filter_map(|root| root.canonicalize().ok())
        .collect();

    let targets: Vec<ScanTarget> = source
        .changed_files(base)?
        .into_iter()
        .map(|relative| ScanTarget {
            source: workdir.join(&relative),
            display: relative,
        })
        .filter(|target| roots.is_empty() || roots.iter().any(|r| target.source.starts_with(r)))
        .collect();

    debug!(base, count = targets.len(), "Changed files in scope");
    Ok(targets)
}

/// Changed ranges of one target, or `None` when its diff is unavailable or empty.
pub(crate) fn hunk_lines<D: DiffSource + ?Sized>(
    source: &D,
    base: &str,
    target: &ScanTarget,
) -> Option<ChangedLines> {
    let diff = match source.unified_diff(&target.display, base) {
        Ok(diff) => diff,
        Err(e) => {
            warn!(path = %target.display.display(), error = %e, "Skipping file without a diff");
            return None;
        }
    };

    let changed = compute_changed_ranges(&diff);
    if changed.is_empty() {
        debug!(path = %target.display.display(), "No added lines");
        return None;
    }
    Some(changed)
}

#[cfg(test)]
#[path = "changes_tests.rs"]
mod tests;
