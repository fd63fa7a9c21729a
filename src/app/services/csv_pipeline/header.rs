//! Header-row detection for positional feeds
//!
//! The first row of a hand-authored feed may or may not be a header. These
//! predicates sniff the tokenized first row for domain keywords and derive
//! how many leading rows to skip. A data row that happens to contain a
//! keyword (say a headline mentioning "date") is misdetected as a header;
//! known limitation of keyword sniffing.

use crate::constants::{slide_fields, timeline_fields};

/// True when the row reads like a timeline header (`year` or `date` appears)
pub fn looks_like_timeline_header(row: &[String]) -> bool {
    timeline_fields::HEADER_KEYWORDS
        .iter()
        .any(|keyword| row_contains_keyword(row, keyword))
}

/// True when the row reads like a slide header (`title` and `content` appear)
pub fn looks_like_slide_header(row: &[String]) -> bool {
    slide_fields::HEADER_KEYWORDS
        .iter()
        .all(|keyword| row_contains_keyword(row, keyword))
}

/// Number of leading rows to skip before timeline data begins
pub fn timeline_header_offset(first_row: &[String]) -> usize {
    if looks_like_timeline_header(first_row) {
        1
    } else {
        0
    }
}

/// Number of leading rows to skip before slide data begins
pub fn slide_header_offset(first_row: &[String]) -> usize {
    if looks_like_slide_header(first_row) {
        1
    } else {
        0
    }
}

/// Case-insensitive substring scan across every field of a row
fn row_contains_keyword(row: &[String], keyword: &str) -> bool {
    row.iter()
        .any(|field| field.to_lowercase().contains(keyword))
}
