//! # toklint-core — Foundational Types for toklint
//!
//! This crate is the leaf of the toklint workspace. It owns the two
//! repository-facing primitives every other crate builds on:
//!
//! 1. **Tree traversal** ([`walk`]). An iterative, deterministic,
//!    pre-order walk of a repository tree. Cyclic symlinks are detected
//!    via a visited set keyed by canonicalized path and terminate the
//!    walk branch instead of recursing forever.
//!
//! 2. **Token-list discovery** ([`discover`]). The rules for deciding
//!    which traversed paths are ERC-20 token-list files. Matching is
//!    deliberately lenient (substring containment) to stay compatible
//!    with existing data repositories.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `toklint-*` crates.
//! - Read-only: nothing in this crate mutates the repository.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod discover;
pub mod error;
pub mod walk;

pub use discover::{is_token_list_path, token_list_files};
pub use error::{StructureError, WalkError};
pub use walk::walk;
