//! # toklint-schema — Token Entry Schema and Check Pipeline
//!
//! Validates ERC-20 token lists against a statically defined schema.
//! The schema is a record type with explicit per-field validators, not
//! a runtime schema interpreter: the set of fields, their types, and
//! their format checks are fixed at compile time.
//!
//! ## Schema Contract
//!
//! A token-list document is a JSON array. Every element must be a
//! strict object (unknown keys rejected) with exactly these fields:
//!
//! - `name`, `symbol` — non-empty strings
//! - `address` — Ethereum address (40 hex chars, optional `0x`,
//!   uniform case or EIP-55 checksum)
//! - `logoURI` — non-empty well-formed URL, or non-empty base64
//! - `decimals` — integer in `0..=256`
//! - `chainId` — integer
//!
//! Validation failures are reported as structured [`Violation`] lists
//! carrying the JSON-Pointer path of each offending field, so CI output
//! names exactly what is wrong and where.
//!
//! ## Crate Policy
//!
//! - Validation returns `Result`; process exit is the caller's concern.
//! - The first failing file halts a repository check; violations within
//!   one file are aggregated before reporting.

pub mod address;
pub mod check;
pub mod logo;
pub mod token;
pub mod validate;

pub use check::{run_check, CheckError};
pub use token::{TokenEntry, TokenList};
pub use validate::{
    validate_file, validate_token_list, TokenSchemaError, Violation, Violations,
};
