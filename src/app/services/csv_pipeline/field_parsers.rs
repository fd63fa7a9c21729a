//! Field parsing utilities for positional feed rows
//!
//! Helpers for pulling values out of ragged rows: positional access that
//! tolerates short rows, and integer parsing with the permissive prefix
//! semantics human-authored spreadsheets need.

use crate::constants::DEFAULT_DATE_PART;

/// Parse the leading integer of a field
///
/// Skips surrounding whitespace, accepts one leading `+` or `-`, reads the
/// longest digit prefix and ignores any trailing garbage (`"1969AD"` parses
/// to `1969`). Returns `None` when no digits are present or the value does
/// not fit an `i32`.
pub fn parse_int_prefix(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = unsigned
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude: i64 = digits.parse().ok()?;
    i32::try_from(sign * magnitude).ok()
}

/// The field at `index`, trimmed, or `""` when the row is too short
pub fn trimmed_field(row: &[String], index: usize) -> &str {
    row.get(index).map(|field| field.trim()).unwrap_or("")
}

/// Parse a month or day field, falling back to the default part value
///
/// Absent or non-numeric fields become the default; clamping into the valid
/// range happens in the date constructor, never here.
pub fn parse_date_part(row: &[String], index: usize) -> i32 {
    parse_int_prefix(trimmed_field(row, index)).unwrap_or(DEFAULT_DATE_PART)
}
