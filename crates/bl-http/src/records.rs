//! Plain records of HTTP messages.
//!
//! These carry only what gets rendered. They are not tied to any HTTP
//! client; a [`Transport`](crate::Transport) converts between its own
//! types and these.

use serde::{Deserialize, Serialize};

use crate::error::{HttpError, Result};

/// One header name with all of its values, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub name: String,
    pub values: Vec<String>,
}

fn push_header(headers: &mut Vec<HeaderEntry>, name: &str, value: &str) {
    match headers
        .iter_mut()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
    {
        Some(entry) => entry.values.push(value.to_string()),
        None => headers.push(HeaderEntry {
            name: name.to_string(),
            values: vec![value.to_string()],
        }),
    }
}

/// An outgoing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequestRecord {
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub headers: Vec<HeaderEntry>,
    #[serde(default)]
    pub body: Option<String>,
}

impl HttpRequestRecord {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new("POST", url)
    }

    /// Add a header value. Repeating a name (any case) adds another value.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        push_header(&mut self.headers, name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `payload` as the body and set `Content-Type: application/json`.
    pub fn with_json_body<T: Serialize + ?Sized>(self, payload: &T) -> Result<Self> {
        let body = serde_json::to_string(payload)?;
        Ok(self
            .with_header("Content-Type", "application/json")
            .with_body(body))
    }

    pub fn parsed_url(&self) -> Result<ParsedUrl> {
        ParsedUrl::parse(&self.url)
    }
}

/// A received response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponseRecord {
    pub status: u16,
    #[serde(default)]
    pub headers: Vec<HeaderEntry>,
    #[serde(default)]
    pub body: Option<String>,
}

impl HttpResponseRecord {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        push_header(&mut self.headers, name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// All values of a header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&[String]> {
        self.headers
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| entry.values.as_slice())
    }

    pub fn is_successful(&self) -> bool {
        crate::status::is_successful_status(self.status)
    }
}

/// The pieces of an absolute URL that get displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: String,
    pub host: String,
    pub port: Option<u16>,
    pub path: String,
    pub query: Option<String>,
}

impl ParsedUrl {
    /// Split `scheme://[user@]host[:port][/path][?query][#fragment]`.
    pub fn parse(url: &str) -> Result<Self> {
        let invalid = || HttpError::InvalidUrl(url.to_string());

        let (scheme, rest) = url.split_once("://").ok_or_else(invalid)?;
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c)) {
            return Err(invalid());
        }

        let rest = rest.split('#').next().unwrap_or_default();
        let authority_end = rest.find(['/', '?']).unwrap_or(rest.len());
        let (authority, tail) = rest.split_at(authority_end);

        let host_port = authority.rsplit('@').next().unwrap_or_default();
        let (host, port) = split_port(host_port).ok_or_else(invalid)?;
        if host.is_empty() {
            return Err(invalid());
        }

        let (path, query) = match tail.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (tail, None),
        };
        let path = if path.is_empty() { "/" } else { path };

        Ok(Self {
            scheme: scheme.to_lowercase(),
            host: host.to_string(),
            port,
            path: path.to_string(),
            query,
        })
    }

    /// Query parameters in order, percent-decoded; a parameter without `=`
    /// has no value.
    pub fn query_pairs(&self) -> Vec<(String, Option<String>)> {
        self.query
            .as_deref()
            .unwrap_or_default()
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| match part.split_once('=') {
                Some((name, value)) => (percent_decode(name), Some(percent_decode(value))),
                None => (percent_decode(part), None),
            })
            .collect()
    }
}

/// Decode `%XX` escapes and `+` as a space. Malformed escapes pass through
/// unchanged; invalid UTF-8 becomes U+FFFD.
fn percent_decode(component: &str) -> String {
    let bytes = component.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => decoded.push(b' '),
            b'%' => {
                let escaped = bytes
                    .get(i + 1..i + 3)
                    .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                match escaped {
                    Some(byte) => {
                        decoded.push(byte);
                        i += 2;
                    }
                    None => decoded.push(b'%'),
                }
            }
            other => decoded.push(other),
        }
        i += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

fn split_port(host_port: &str) -> Option<(&str, Option<u16>)> {
    // Bracketed IPv6 literals carry colons of their own.
    if let Some(stripped) = host_port.strip_prefix('[') {
        let (host, after) = stripped.split_once(']')?;
        return match after.strip_prefix(':') {
            Some(port) => Some((host, Some(port.parse().ok()?))),
            None if after.is_empty() => Some((host, None)),
            None => None,
        };
    }
    match host_port.rsplit_once(':') {
        Some((host, port)) => Some((host, Some(port.parse().ok()?))),
        None => Some((host_port, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_url() {
        let url = ParsedUrl::parse("HTTPS://user@api.example.com:8443/v1/items?q=rust&page=2#top").unwrap();
        assert_eq!(url.scheme, "https");
        assert_eq!(url.host, "api.example.com");
        assert_eq!(url.port, Some(8443));
        assert_eq!(url.path, "/v1/items");
        assert_eq!(url.query.as_deref(), Some("q=rust&page=2"));
    }

    #[test]
    fn test_parse_defaults_path() {
        let url = ParsedUrl::parse("http://localhost?debug").unwrap();
        assert_eq!(url.path, "/");
        assert_eq!(url.query_pairs(), vec![("debug".to_string(), None)]);
    }

    #[test]
    fn test_parse_ipv6() {
        let url = ParsedUrl::parse("http://[::1]:8080/health").unwrap();
        assert_eq!(url.host, "::1");
        assert_eq!(url.port, Some(8080));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ParsedUrl::parse("not a url").is_err());
        assert!(ParsedUrl::parse("http:///path").is_err());
        assert!(ParsedUrl::parse("http://host:port/").is_err());
    }

    #[test]
    fn test_query_pairs() {
        let url = ParsedUrl::parse("http://h/p?a=1&&b=&c").unwrap();
        assert_eq!(
            url.query_pairs(),
            vec![
                ("a".to_string(), Some("1".to_string())),
                ("b".to_string(), Some(String::new())),
                ("c".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_query_pairs_are_percent_decoded() {
        let url = ParsedUrl::parse("http://h/p?q=hello%20world&tag%5B%5D=a+b&city=K%C3%B6ln").unwrap();
        assert_eq!(
            url.query_pairs(),
            vec![
                ("q".to_string(), Some("hello world".to_string())),
                ("tag[]".to_string(), Some("a b".to_string())),
                ("city".to_string(), Some("K\u{f6}ln".to_string())),
            ]
        );
    }

    #[test]
    fn test_percent_decode_keeps_malformed_escapes() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz%4"), "%zz%4");
        assert_eq!(percent_decode("%+1"), "% 1");
        assert_eq!(percent_decode("%ff"), "\u{fffd}");
    }

    #[test]
    fn test_repeated_headers_merge() {
        let request = HttpRequestRecord::get("http://h/")
            .with_header("Accept", "text/html")
            .with_header("accept", "application/json");
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.headers[0].values.len(), 2);
    }

    #[test]
    fn test_json_body() {
        let request = HttpRequestRecord::post("http://h/items")
            .with_json_body(&serde_json::json!({"id": 7}))
            .unwrap();
        assert_eq!(request.body.as_deref(), Some("{\"id\":7}"));
        assert_eq!(request.headers[0].name, "Content-Type");
    }

    #[test]
    fn test_unserializable_json_body_is_a_json_error() {
        let mut payload = std::collections::HashMap::new();
        payload.insert((1, 2), "tuple keys are not JSON object keys");
        let err = HttpRequestRecord::post("http://h/items")
            .with_json_body(&payload)
            .unwrap_err();
        assert!(matches!(err, HttpError::Json(_)));
        assert!(err.to_string().starts_with("request body is not serializable"));
    }

    #[test]
    fn test_response_header_lookup() {
        let response = HttpResponseRecord::new(204).with_header("ETag", "abc");
        assert_eq!(response.header("etag"), Some(&["abc".to_string()][..]));
        assert!(response.is_successful());
    }
}
