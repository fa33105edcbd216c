//! String escaping and quote-delimiter selection.
//!
//! Nested string values are quoted with the first delimiter the string
//! itself does not contain, trying single quote, double quote, then
//! backtick. When all three appear in the string, single quotes win and
//! the internal single quotes are backslash-escaped. Independently of the
//! delimiter, a fixed set of characters is always rewritten to two-byte
//! escape forms: backslash, forward slash, backspace, form feed, newline,
//! carriage return, and tab.
//!
//! Top-level string arguments never pass through here; they are written
//! verbatim by the format entry point.

/// Rewrites the always-escaped characters to their two-byte forms.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '/' => out.push_str("\\/"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Quotes a string for use as a nested value.
///
/// Delimiter selection looks at the original string, so escaping the
/// control characters never influences which quote is chosen.
pub(crate) fn quote(s: &str) -> String {
    let escaped = escape(s);
    if !s.contains('\'') {
        format!("'{}'", escaped)
    } else if !s.contains('"') {
        format!("\"{}\"", escaped)
    } else if !s.contains('`') {
        format!("`{}`", escaped)
    } else {
        format!("'{}'", escaped.replace('\'', "\\'"))
    }
}
