//! # Repository Check Pipeline
//!
//! The single validation pass: walk the repository tree, require at
//! least one ERC-20 token-list file, then validate every discovered
//! file in traversal order. The first failing file halts the run; later
//! files are never read.
//!
//! Process exit is the caller's concern — this module only returns
//! `Result`, so the whole pipeline is testable in-process.

use std::path::Path;

use thiserror::Error;
use toklint_core::error::{StructureError, WalkError};
use toklint_core::{token_list_files, walk};

use crate::validate::{validate_file, TokenSchemaError};

/// Any failure of a repository check. Every variant is fatal to the
/// run; nothing is retried.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The tree could not be traversed.
    #[error(transparent)]
    Walk(#[from] WalkError),

    /// No token-list file exists anywhere under the root.
    #[error(transparent)]
    Structure(#[from] StructureError),

    /// A token-list file failed to load or to validate.
    #[error(transparent)]
    Schema(#[from] TokenSchemaError),
}

/// Run the full ERC-20 check over the repository rooted at `root`.
///
/// # Errors
///
/// Returns the first [`CheckError`] encountered: a traversal failure, a
/// structural failure (no token-list file at all), or the first file's
/// load/validation failure.
pub fn run_check(root: impl AsRef<Path>) -> Result<(), CheckError> {
    let paths = walk(root)?;

    let files = token_list_files(&paths);
    if files.is_empty() {
        return Err(StructureError.into());
    }

    for file in files {
        tracing::info!(path = %file.display(), "running schema check");
        validate_file(file)?;
    }

    Ok(())
}
