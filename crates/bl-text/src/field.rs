//! Field processing callbacks.
//!
//! When rendering HTTP messages the field name handed to a processor is the
//! header name, or `HTTP_MESSAGE_BODY` for the payload. A processor returns
//! the field unchanged when no rewrite is needed.

use crate::sniff::{from_base64, is_base64, pretty_json};

/// Capability: rewrite a named field's value before it is displayed.
pub type FieldProcessor = dyn Fn(&str, &str) -> String + Send + Sync;

/// Run a field through an optional processor.
///
/// Without a processor the value is returned verbatim. No escaping is done
/// here; callers decide whether the value is markup or text.
pub fn process_string(
    field_name: &str,
    field_value: &str,
    processor: Option<&FieldProcessor>,
) -> String {
    match processor {
        Some(rewrite) => rewrite(field_name, field_value),
        None => field_value.to_string(),
    }
}

/// A processor that decodes Base64 text and pretty-prints JSON.
///
/// A value is Base64-decoded only when it matches the Base64 shape and the
/// decoded bytes are UTF-8. The (possibly decoded) value is then
/// pretty-printed if it is a JSON object or array. The field name is ignored.
pub fn sniffing_processor() -> impl Fn(&str, &str) -> String + Send + Sync + 'static {
    |_field_name: &str, field_value: &str| {
        let decoded = if is_base64(field_value) {
            from_base64(field_value).ok()
        } else {
            None
        };
        let text = decoded.as_deref().unwrap_or(field_value);
        pretty_json(text).unwrap_or_else(|| text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_string_without_processor_is_verbatim() {
        assert_eq!(process_string("f", "<b>x</b>", None), "<b>x</b>");
    }

    #[test]
    fn test_process_string_passes_field_name() {
        let upper_auth = |name: &str, value: &str| {
            if name == "Authorization" {
                value.to_uppercase()
            } else {
                value.to_string()
            }
        };
        assert_eq!(
            process_string("Authorization", "bearer", Some(&upper_auth)),
            "BEARER"
        );
        assert_eq!(process_string("Accept", "text", Some(&upper_auth)), "text");
    }

    #[test]
    fn test_sniffing_processor_decodes_then_pretty_prints() {
        let processor = sniffing_processor();
        // {"id":7}
        let out = process_string("X-Data", "eyJpZCI6N30=", Some(&processor));
        assert!(out.contains("\"id\": 7"), "got {out}");
    }

    #[test]
    fn test_sniffing_processor_pretty_prints_plain_json() {
        let processor = sniffing_processor();
        let out = processor("body", "[1,2]");
        assert_eq!(out, "[\n  1,\n  2\n]");
    }

    #[test]
    fn test_sniffing_processor_leaves_binary_base64_alone() {
        let processor = sniffing_processor();
        assert_eq!(processor("x", "//4="), "//4=");
    }

    #[test]
    fn test_sniffing_processor_leaves_text_alone() {
        let processor = sniffing_processor();
        assert_eq!(processor("x", "no change here"), "no change here");
    }
}
