//! JSON utilities
//!
//! Body formatting is best-effort: anything that parses as JSON is
//! re-serialized with two-space indentation, everything else passes
//! through untouched. Object key order follows the input text (serde_json
//! is built with `preserve_order`).

use serde_json::Value as JsonValue;

/// Pretty-print a request body when it is valid JSON.
///
/// Idempotent: formatting already-formatted JSON yields the same text.
/// Parse failures are silently absorbed and the input is returned as-is.
pub fn format_body(raw: &str) -> String {
    match serde_json::from_str::<JsonValue>(raw) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

/// Validate a JSON string; empty input counts as valid.
pub fn validate_json(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        return Ok(());
    }
    serde_json::from_str::<serde::de::IgnoredAny>(input)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_body_pretty_prints_json() {
        assert_eq!(format_body(r#"{"x":1}"#), "{\n  \"x\": 1\n}");
    }

    #[test]
    fn test_format_body_preserves_key_order() {
        assert_eq!(
            format_body(r#"{"z":1,"a":2}"#),
            "{\n  \"z\": 1,\n  \"a\": 2\n}"
        );
    }

    #[test]
    fn test_format_body_idempotent() {
        for input in [r#"{"x":1}"#, "not json", "", "[1,2]", "  "] {
            let once = format_body(input);
            assert_eq!(format_body(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_format_body_invalid_json_unchanged() {
        assert_eq!(format_body("{broken"), "{broken");
        assert_eq!(format_body(""), "");
        assert_eq!(format_body("a=1&b=2"), "a=1&b=2");
    }

    #[test]
    fn test_validate_json() {
        assert!(validate_json("").is_ok());
        assert!(validate_json("   ").is_ok());
        assert!(validate_json(r#"{"a": [1, 2]}"#).is_ok());
        assert!(validate_json("{nope").is_err());
    }
}
