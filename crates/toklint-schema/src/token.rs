//! # Token Entry Record
//!
//! The typed shape of one token-list element. Deserialization is
//! strict: unknown keys are rejected at the serde layer, matching the
//! validator in [`crate::validate`].
//!
//! The record intentionally stores `address` and `logo_uri` as plain
//! strings: format checks live in [`crate::address`] and
//! [`crate::logo`], and a `TokenEntry` obtained from an already
//! validated document is known to satisfy them.

use serde::{Deserialize, Serialize};

/// One token's metadata, as carried by an `index.json` token list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenEntry {
    /// Human-readable token name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Contract address, `0x`-prefixed or bare.
    pub address: String,
    /// Logo reference: a URL or inline base64 payload.
    #[serde(rename = "logoURI")]
    pub logo_uri: String,
    /// Decimal precision, `0..=256`.
    pub decimals: u16,
    /// Blockchain network identifier.
    #[serde(rename = "chainId")]
    pub chain_id: i64,
}

/// The ordered contents of one `index.json` file.
pub type TokenList = Vec<TokenEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_well_formed_entry() {
        let entry: TokenEntry = serde_json::from_str(
            r#"{
                "name": "Token",
                "symbol": "TKN",
                "address": "0x000000000000000000000000000000000000dEaD",
                "logoURI": "https://example.com/a.png",
                "decimals": 18,
                "chainId": 1
            }"#,
        )
        .unwrap();
        assert_eq!(entry.symbol, "TKN");
        assert_eq!(entry.chain_id, 1);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<TokenEntry, _> = serde_json::from_str(
            r#"{
                "name": "Token",
                "symbol": "TKN",
                "address": "0x000000000000000000000000000000000000dEaD",
                "logoURI": "https://example.com/a.png",
                "decimals": 18,
                "chainId": 1,
                "foo": "bar"
            }"#,
        );
        assert!(result.is_err());
    }
}
