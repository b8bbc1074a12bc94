//! # Tree Traversal
//!
//! Enumerates every path under a repository root as a flat, ordered
//! sequence: depth-first pre-order, with a directory's own path emitted
//! once, immediately before its contents. Siblings are visited in
//! byte-wise file-name order so that repeated runs over an unchanged
//! tree produce byte-identical output.
//!
//! ## Symlink Cycles
//!
//! The walk follows symlinks (a symlinked directory is entered like any
//! other), but keeps a visited set keyed by canonicalized path. A
//! directory whose real path has already been listed is emitted but not
//! re-entered, so cyclic symlinks terminate.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WalkError;

/// Walk the tree rooted at `root`, returning every contained path in
/// depth-first pre-order. The (canonicalized) root itself is the first
/// element of the result.
///
/// # Errors
///
/// Returns [`WalkError`] when the root does not exist, a path cannot be
/// stat'ed (e.g. a broken symlink or permission failure), or a
/// directory cannot be listed. There is no partial-result recovery: the
/// first filesystem error aborts the walk.
pub fn walk(root: impl AsRef<Path>) -> Result<Vec<PathBuf>, WalkError> {
    let root = root.as_ref();
    let root = fs::canonicalize(root).map_err(|source| WalkError::Access {
        path: root.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    // Real paths of directories whose contents have been listed.
    let mut visited: HashSet<PathBuf> = HashSet::new();
    // Explicit work list; children are pushed in reverse name order so
    // the stack pops them in name order.
    let mut stack: Vec<PathBuf> = vec![root];

    while let Some(path) = stack.pop() {
        let metadata = fs::metadata(&path).map_err(|source| WalkError::Access {
            path: path.clone(),
            source,
        })?;

        paths.push(path.clone());
        if !metadata.is_dir() {
            continue;
        }

        let real = fs::canonicalize(&path).map_err(|source| WalkError::Access {
            path: path.clone(),
            source,
        })?;
        if !visited.insert(real) {
            // Already listed through another link; don't re-enter.
            tracing::trace!(path = %path.display(), "skipping already-visited directory");
            continue;
        }

        let mut children = Vec::new();
        let entries = fs::read_dir(&path).map_err(|source| WalkError::ReadDir {
            path: path.clone(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| WalkError::ReadDir {
                path: path.clone(),
                source,
            })?;
            children.push(entry.path());
        }
        children.sort();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }

    Ok(paths)
}
