//! # Token-List Validation
//!
//! Validates a parsed token-list document against the Token Entry
//! schema. The schema is static: a fixed field table with one explicit
//! validator per field, plus strict unknown-key rejection.
//!
//! Violations within one document are aggregated — CI output should
//! name every broken field of a file in one run — but the document as a
//! whole is pass/fail.

use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::address::is_address;
use crate::logo::is_logo_uri;

/// The complete set of permitted Token Entry keys. Anything else is an
/// unexpected field.
const FIELDS: [&str; 6] = [
    "name", "symbol", "address", "logoURI", "decimals", "chainId",
];

/// Upper bound for `decimals` (2^8).
const MAX_DECIMALS: i64 = 256;

/// Error during token-list validation.
#[derive(Error, Debug)]
pub enum TokenSchemaError {
    /// The document did not conform to the Token Entry schema.
    #[error("validation error in '{path}':\n{violations}")]
    ValidationFailed {
        /// Path of the file that was validated.
        path: String,
        /// Structured list of individual violations.
        violations: Violations,
    },

    /// The document could not be read or parsed as JSON.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path of the file that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },
}

/// A single field-level violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer path to the violating value in the document.
    pub instance_path: String,
    /// Human-readable description: what was expected, what was found.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of violations found in one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Validate a parsed token-list document: a JSON array in which every
/// element satisfies the full Token Entry schema.
///
/// # Errors
///
/// Returns the aggregated [`Violations`] when the document is invalid.
pub fn validate_token_list(doc: &Value) -> Result<(), Violations> {
    let mut violations = Vec::new();

    match doc.as_array() {
        Some(entries) => {
            for (index, entry) in entries.iter().enumerate() {
                validate_entry(index, entry, &mut violations);
            }
        }
        None => violations.push(Violation {
            instance_path: String::new(),
            message: format!(
                "expected an array of token entries, got {}",
                json_type(doc)
            ),
        }),
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(Violations { violations })
    }
}

/// Read and parse `path`, then validate its contents as a token list.
///
/// # Errors
///
/// Returns [`TokenSchemaError::DocumentLoad`] when the file cannot be
/// read or is not syntactically valid JSON, and
/// [`TokenSchemaError::ValidationFailed`] when it parses but does not
/// conform to the schema.
pub fn validate_file(path: &Path) -> Result<(), TokenSchemaError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| TokenSchemaError::DocumentLoad {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        })?;
    let doc: Value =
        serde_json::from_str(&content).map_err(|e| TokenSchemaError::DocumentLoad {
            path: path.display().to_string(),
            reason: format!("invalid JSON: {e}"),
        })?;

    validate_token_list(&doc).map_err(|violations| TokenSchemaError::ValidationFailed {
        path: path.display().to_string(),
        violations,
    })
}

fn validate_entry(index: usize, entry: &Value, out: &mut Vec<Violation>) {
    let Some(object) = entry.as_object() else {
        out.push(Violation {
            instance_path: format!("/{index}"),
            message: format!("expected a token entry object, got {}", json_type(entry)),
        });
        return;
    };

    check_unknown_keys(index, object, out);
    check_non_empty_string(index, object, "name", out);
    check_non_empty_string(index, object, "symbol", out);
    check_address(index, object, out);
    check_logo_uri(index, object, out);
    check_decimals(index, object, out);
    check_chain_id(index, object, out);
}

fn check_unknown_keys(index: usize, object: &Map<String, Value>, out: &mut Vec<Violation>) {
    for key in object.keys() {
        if !FIELDS.contains(&key.as_str()) {
            out.push(Violation {
                instance_path: format!("/{index}/{key}"),
                message: format!("unexpected field '{key}'"),
            });
        }
    }
}

fn check_non_empty_string(
    index: usize,
    object: &Map<String, Value>,
    field: &str,
    out: &mut Vec<Violation>,
) {
    match object.get(field) {
        None => out.push(missing(index, field)),
        Some(Value::String(s)) if !s.is_empty() => {}
        Some(Value::String(_)) => out.push(Violation {
            instance_path: format!("/{index}/{field}"),
            message: format!("expected a non-empty string for '{field}'"),
        }),
        Some(other) => out.push(wrong_type(index, field, "a string", other)),
    }
}

fn check_address(index: usize, object: &Map<String, Value>, out: &mut Vec<Violation>) {
    match object.get("address") {
        None => out.push(missing(index, "address")),
        Some(Value::String(s)) if is_address(s) => {}
        Some(Value::String(s)) => out.push(Violation {
            instance_path: format!("/{index}/address"),
            message: format!("expected an Ethereum address, got \"{s}\""),
        }),
        Some(other) => out.push(wrong_type(index, "address", "a string", other)),
    }
}

fn check_logo_uri(index: usize, object: &Map<String, Value>, out: &mut Vec<Violation>) {
    match object.get("logoURI") {
        None => out.push(missing(index, "logoURI")),
        Some(Value::String(s)) if is_logo_uri(s) => {}
        Some(Value::String(s)) => out.push(Violation {
            instance_path: format!("/{index}/logoURI"),
            message: format!("expected a URL or base64 payload, got \"{s}\""),
        }),
        Some(other) => out.push(wrong_type(index, "logoURI", "a string", other)),
    }
}

fn check_decimals(index: usize, object: &Map<String, Value>, out: &mut Vec<Violation>) {
    match object.get("decimals") {
        None => out.push(missing(index, "decimals")),
        Some(value) => match value.as_i64() {
            Some(n) if (0..=MAX_DECIMALS).contains(&n) => {}
            Some(n) => out.push(Violation {
                instance_path: format!("/{index}/decimals"),
                message: format!("expected an integer in 0..={MAX_DECIMALS}, got {n}"),
            }),
            None => out.push(wrong_type(index, "decimals", "an integer", value)),
        },
    }
}

fn check_chain_id(index: usize, object: &Map<String, Value>, out: &mut Vec<Violation>) {
    match object.get("chainId") {
        None => out.push(missing(index, "chainId")),
        Some(value) => {
            if value.as_i64().is_none() {
                out.push(wrong_type(index, "chainId", "an integer", value));
            }
        }
    }
}

fn missing(index: usize, field: &str) -> Violation {
    Violation {
        instance_path: format!("/{index}/{field}"),
        message: format!("missing required field '{field}'"),
    }
}

fn wrong_type(index: usize, field: &str, expected: &str, actual: &Value) -> Violation {
    Violation {
        instance_path: format!("/{index}/{field}"),
        message: format!("expected {expected} for '{field}', got {}", json_type(actual)),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_entry() -> Value {
        json!({
            "name": "Token",
            "symbol": "TKN",
            "address": "0x000000000000000000000000000000000000dEaD",
            "logoURI": "https://example.com/a.png",
            "decimals": 18,
            "chainId": 1
        })
    }

    #[test]
    fn valid_list_passes() {
        let doc = json!([valid_entry()]);
        assert!(validate_token_list(&doc).is_ok());
    }

    #[test]
    fn empty_list_passes() {
        assert!(validate_token_list(&json!([])).is_ok());
    }

    #[test]
    fn non_array_document_is_rejected() {
        let err = validate_token_list(&json!({"name": "Token"})).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.violations()[0].instance_path, "");
    }

    #[test]
    fn invalid_address_names_the_field() {
        let mut entry = valid_entry();
        entry["address"] = json!("not-an-address");
        let err = validate_token_list(&json!([entry])).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.violations()[0].instance_path, "/0/address");
    }

    #[test]
    fn decimals_out_of_range() {
        let mut entry = valid_entry();
        entry["decimals"] = json!(300);
        let err = validate_token_list(&json!([entry])).unwrap_err();
        assert_eq!(err.violations()[0].instance_path, "/0/decimals");
    }

    #[test]
    fn negative_decimals_rejected() {
        let mut entry = valid_entry();
        entry["decimals"] = json!(-1);
        assert!(validate_token_list(&json!([entry])).is_err());
    }

    #[test]
    fn fractional_decimals_rejected() {
        let mut entry = valid_entry();
        entry["decimals"] = json!(1.5);
        let err = validate_token_list(&json!([entry])).unwrap_err();
        assert!(err.violations()[0].message.contains("expected an integer"));
    }

    #[test]
    fn extra_field_rejected() {
        let mut entry = valid_entry();
        entry["foo"] = json!("bar");
        let err = validate_token_list(&json!([entry])).unwrap_err();
        assert_eq!(err.violations()[0].instance_path, "/0/foo");
        assert!(err.violations()[0].message.contains("unexpected field"));
    }

    #[test]
    fn missing_field_reported() {
        let mut entry = valid_entry();
        entry.as_object_mut().unwrap().remove("symbol");
        let err = validate_token_list(&json!([entry])).unwrap_err();
        assert_eq!(err.violations()[0].instance_path, "/0/symbol");
        assert!(err.violations()[0].message.contains("missing"));
    }

    #[test]
    fn empty_name_rejected() {
        let mut entry = valid_entry();
        entry["name"] = json!("");
        assert!(validate_token_list(&json!([entry])).is_err());
    }

    #[test]
    fn logo_uri_union_accepts_base64_rejects_plain_text() {
        let mut base64_entry = valid_entry();
        base64_entry["logoURI"] = json!("aGVsbG8gd29ybGQ=");
        assert!(validate_token_list(&json!([base64_entry])).is_ok());

        let mut plain_entry = valid_entry();
        plain_entry["logoURI"] = json!("definitely not a logo!");
        let err = validate_token_list(&json!([plain_entry])).unwrap_err();
        assert_eq!(err.violations()[0].instance_path, "/0/logoURI");
    }

    #[test]
    fn chain_id_must_be_integer() {
        let mut entry = valid_entry();
        entry["chainId"] = json!("1");
        let err = validate_token_list(&json!([entry])).unwrap_err();
        assert_eq!(err.violations()[0].instance_path, "/0/chainId");
    }

    #[test]
    fn non_object_entry_rejected() {
        let err = validate_token_list(&json!([42])).unwrap_err();
        assert_eq!(err.violations()[0].instance_path, "/0");
    }

    #[test]
    fn all_violations_of_one_entry_are_aggregated() {
        let doc = json!([{
            "name": "",
            "symbol": "TKN",
            "address": "bogus",
            "logoURI": "https://example.com/a.png",
            "decimals": 999,
            "chainId": 1,
            "foo": "bar"
        }]);
        let err = validate_token_list(&doc).unwrap_err();
        assert_eq!(err.len(), 4);
    }

    #[test]
    fn each_entry_is_validated_independently() {
        let mut bad = valid_entry();
        bad["address"] = json!("nope");
        let doc = json!([valid_entry(), bad]);
        let err = validate_token_list(&doc).unwrap_err();
        assert_eq!(err.violations()[0].instance_path, "/1/address");
    }

    #[test]
    fn validate_file_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = validate_file(&path).unwrap_err();
        assert!(matches!(err, TokenSchemaError::DocumentLoad { .. }));
    }

    #[test]
    fn validate_file_accepts_valid_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        std::fs::write(&path, json!([valid_entry()]).to_string()).unwrap();
        assert!(validate_file(&path).is_ok());
    }
}
