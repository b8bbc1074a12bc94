//! # Token-List Discovery
//!
//! Decides which traversed paths are ERC-20 token-list files. A path
//! qualifies when it contains the token-standard marker `erc20`
//! (case-insensitive) anywhere, AND the literal substring `index.json`.
//!
//! Matching is substring containment, not exact segment matching, for
//! compatibility with existing data repositories and their CI runs.
//! `myerc2000/index.json.bak` qualifies, as it always has.

use std::path::{Path, PathBuf};

/// Folder-name marker for the ERC-20 token standard. Not otherwise
/// interpreted.
pub const ERC20_MARKER: &str = "erc20";

/// File name carrying a token list.
pub const TOKEN_LIST_FILE: &str = "index.json";

/// Returns true when `path` names an ERC-20 token-list file per the
/// lenient containment rules above. Paths that are not valid UTF-8
/// never qualify.
pub fn is_token_list_path(path: &Path) -> bool {
    let Some(s) = path.to_str() else {
        return false;
    };
    s.to_lowercase().contains(ERC20_MARKER) && s.contains(TOKEN_LIST_FILE)
}

/// Filter a traversal sequence down to its token-list files, preserving
/// traversal order.
pub fn token_list_files(paths: &[PathBuf]) -> Vec<&Path> {
    paths
        .iter()
        .map(PathBuf::as_path)
        .filter(|p| is_token_list_path(p))
        .collect()
}
