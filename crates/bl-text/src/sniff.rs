//! Content sniffing: Base64 and JSON detection.
//!
//! These heuristics are deliberately simple. Some short English words are
//! technically legal Base64 and decode to garbage, which is why
//! [`from_base64`] insists on the result being UTF-8 text before anybody
//! treats it as decoded content.

use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;

// Padded, standard-alphabet Base64 only.
static BASE64_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9+/]{4})*([A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{2}==)?$").unwrap()
});

/// Returns true if the candidate looks like standard Base64.
///
/// The empty string is not considered Base64 even though it is technically
/// a valid encoding of zero bytes.
pub fn is_base64(candidate: &str) -> bool {
    !candidate.is_empty() && BASE64_PATTERN.is_match(candidate)
}

/// Decode a Base64 string into UTF-8 text.
pub fn from_base64(candidate: &str) -> Result<String> {
    let bytes = STANDARD.decode(candidate)?;
    Ok(String::from_utf8(bytes)?)
}

/// Pretty-print a JSON object or array.
///
/// Returns `None` when the candidate is not a JSON object or array. Bare
/// scalars are left alone since re-indenting them changes nothing.
pub fn pretty_json(candidate: &str) -> Option<String> {
    let trimmed = candidate.trim_start();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return None;
    }

    let value: serde_json::Value = serde_json::from_str(candidate).ok()?;
    serde_json::to_string_pretty(&value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_base64_accepts_padded_forms() {
        assert!(is_base64("aGVsbG8="));
        assert!(is_base64("aGk="));
        assert!(is_base64("YWJj"));
        assert!(is_base64("YQ=="));
    }

    #[test]
    fn test_is_base64_rejects_non_base64() {
        assert!(!is_base64(""));
        assert!(!is_base64("hello world"));
        assert!(!is_base64("abc"));
        assert!(!is_base64("a==="));
    }

    #[test]
    fn test_from_base64_decodes_text() {
        assert_eq!(from_base64("aGVsbG8=").unwrap(), "hello");
    }

    #[test]
    fn test_from_base64_rejects_binary() {
        // 0xff 0xfe is not UTF-8
        let err = from_base64("//4=").unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_from_base64_rejects_garbage() {
        assert!(from_base64("not base64!").is_err());
    }

    #[test]
    fn test_pretty_json_object() {
        let pretty = pretty_json(r#"{"a":1,"b":[true,null]}"#).unwrap();
        assert!(pretty.contains("\n"));
        assert!(pretty.contains("\"a\": 1"));
    }

    #[test]
    fn test_pretty_json_leaves_scalars_and_text() {
        assert!(pretty_json("42").is_none());
        assert!(pretty_json("plain words").is_none());
        assert!(pretty_json("{not json").is_none());
    }
}
