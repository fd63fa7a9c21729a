//! Tests for HTML escaping and soft line-break expansion

use crate::app::services::csv_pipeline::format::{escape_text, format_content};

#[test]
fn test_escape_ampersand_and_angle_brackets() {
    assert_eq!(escape_text("a & b"), "a &amp; b");
    assert_eq!(escape_text("<tag>"), "&lt;tag&gt;");
    assert_eq!(escape_text("1 < 2 > 0 & done"), "1 &lt; 2 &gt; 0 &amp; done");
}

#[test]
fn test_escape_leaves_quotes_alone() {
    assert_eq!(escape_text("\"hi\" and 'bye'"), "\"hi\" and 'bye'");
}

#[test]
fn test_escape_safe_text_is_noop() {
    let safe = "plain text, nothing special";
    assert_eq!(escape_text(safe), safe);
}

#[test]
fn test_escape_empty_string() {
    assert_eq!(escape_text(""), "");
}

#[test]
fn test_format_empty_content() {
    assert_eq!(format_content(""), "");
}

#[test]
fn test_format_expands_newline_escape() {
    assert_eq!(format_content("a\\nb"), "a<br>b");
}

#[test]
fn test_format_consecutive_escapes() {
    assert_eq!(format_content("a\\n\\nb"), "a<br><br>b");
}

#[test]
fn test_format_escapes_around_marker_but_not_marker() {
    assert_eq!(format_content("<x>\\n<y>"), "&lt;x&gt;<br>&lt;y&gt;");
}

#[test]
fn test_format_marker_cannot_be_forged_by_text() {
    // Angle brackets written in the feed are escaped; only the expanded
    // escape token produces real markup
    assert_eq!(format_content("<br>"), "&lt;br&gt;");
}

#[test]
fn test_format_without_escapes_is_plain_escape() {
    assert_eq!(format_content("fish & chips"), "fish &amp; chips");
}

#[test]
fn test_format_leading_and_trailing_escapes() {
    assert_eq!(format_content("\\nmiddle\\n"), "<br>middle<br>");
}
