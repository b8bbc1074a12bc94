//! # Error Types — Traversal and Structure Errors
//!
//! Errors owned by the core crate. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Traversal errors carry the path that could not be accessed.
//! - Every error is fatal to a validation run; nothing here is retried
//!   or recovered.

use std::path::PathBuf;
use thiserror::Error;

/// Error raised while traversing the repository tree.
#[derive(Error, Debug)]
pub enum WalkError {
    /// A path could not be stat'ed or resolved (missing root, broken
    /// symlink, permission denied).
    #[error("cannot access '{}': {source}", path.display())]
    Access {
        /// The path that failed.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// A directory's entries could not be listed.
    #[error("cannot list directory '{}': {source}", path.display())]
    ReadDir {
        /// The directory that failed.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
}

/// The repository contains no ERC-20 token-list file at all.
///
/// Raised when the full traversal produced no path that matches the
/// discovery rules in [`crate::discover`].
#[derive(Error, Debug)]
#[error("invalid folder structure: no 'erc20' path containing an 'index.json' file was found")]
pub struct StructureError;
