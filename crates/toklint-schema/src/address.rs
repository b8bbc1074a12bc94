//! # Ethereum Address Validation
//!
//! An address is 40 hexadecimal characters with an optional `0x`
//! prefix. A uniformly lower- or upper-cased address is accepted as-is;
//! a mixed-case address must carry a valid EIP-55 checksum, where the
//! case of each letter is dictated by the Keccak-256 hash of the
//! lowercased bare address.

use sha3::{Digest, Keccak256};

/// Returns true when `s` is a well-formed Ethereum address.
pub fn is_address(s: &str) -> bool {
    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }

    let has_upper = hex.bytes().any(|b| b.is_ascii_uppercase());
    let has_lower = hex.bytes().any(|b| b.is_ascii_lowercase());
    if !(has_upper && has_lower) {
        return true;
    }
    checksum_holds(hex)
}

/// EIP-55: a hex letter is uppercase iff the corresponding nibble of
/// `keccak256(lowercase(address))` is >= 8.
fn checksum_holds(hex: &str) -> bool {
    let digest = Keccak256::digest(hex.to_ascii_lowercase().as_bytes());
    hex.bytes().enumerate().all(|(i, b)| {
        if !b.is_ascii_alphabetic() {
            return true;
        }
        let nibble = if i % 2 == 0 {
            digest[i / 2] >> 4
        } else {
            digest[i / 2] & 0x0f
        };
        if nibble >= 8 {
            b.is_ascii_uppercase()
        } else {
            b.is_ascii_lowercase()
        }
    })
}
