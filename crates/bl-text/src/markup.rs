//! Small HTML markup helpers.

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Wrap a value so the browser shows it as a literal code sample.
///
/// The value is escaped, so any markup inside it is displayed rather than
/// rendered.
pub fn treat_as_code(value: &str) -> String {
    format!("<pre><code>{}</code></pre>", html_escape(value))
}
