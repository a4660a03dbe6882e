//! String-literal escaping for generated source text.
//!
//! Text content is embedded verbatim inside double-quoted literals, so
//! backslashes, quotes, and control characters must be escaped for the
//! output to stay syntactically valid.

/// Escape a string for embedding inside a double-quoted literal.
///
/// Handles backslash, double quote, newline, tab, and carriage return.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a string and wrap it in double quotes.
pub fn quote(s: &str) -> String {
    format!("\"{}\"", escape_string(s))
}
