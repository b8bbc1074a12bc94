//! # Logo Reference Validation
//!
//! `logoURI` is a union: either a non-empty well-formed URL, or a
//! non-empty base64 payload (standard alphabet, canonical padding). An
//! entry whose logo reference is neither fails validation.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use url::Url;

/// Returns true when `s` is an acceptable logo reference.
pub fn is_logo_uri(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    Url::parse(s).is_ok() || STANDARD.decode(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_url() {
        assert!(is_logo_uri("https://example.com/a.png"));
    }

    #[test]
    fn accepts_other_schemes() {
        assert!(is_logo_uri("ipfs://QmHash/logo.png"));
    }

    #[test]
    fn accepts_base64_payload() {
        assert!(is_logo_uri("aGVsbG8gd29ybGQ="));
        assert!(is_logo_uri("iVBORw0KGgo="));
    }

    #[test]
    fn rejects_empty() {
        assert!(!is_logo_uri(""));
    }

    #[test]
    fn rejects_plain_text() {
        // Not a URL; '!' and spaces are outside the base64 alphabet.
        assert!(!is_logo_uri("just some text!"));
    }

    #[test]
    fn rejects_bad_padding() {
        assert!(!is_logo_uri("aGVsbG8gd29ybGQ"));
    }
}
