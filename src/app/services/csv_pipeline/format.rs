//! Markup-safe text formatting
//!
//! Free text from a feed is untrusted; the break markup the formatter emits
//! is not. `format_content` therefore escapes the text around each break
//! marker and never the marker itself, so a marker can neither be forged by
//! feed text nor destroyed by escaping.

use crate::constants::{LINE_BREAK_MARKUP, NEWLINE_ESCAPE};

/// Escape the characters a text node cannot carry verbatim: `&`, `<`, `>`
///
/// Quotes are left alone; this is text-node escaping, not attribute
/// escaping. Text already free of the three characters passes through
/// unchanged.
pub fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Expand `\n` escape tokens to break markup, escaping everything else
pub fn format_content(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    raw.split(NEWLINE_ESCAPE)
        .map(escape_text)
        .collect::<Vec<_>>()
        .join(LINE_BREAK_MARKUP)
}
