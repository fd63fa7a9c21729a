//! Tests for header-row detection predicates

use crate::app::services::csv_pipeline::header::{
    looks_like_slide_header, looks_like_timeline_header, slide_header_offset,
    timeline_header_offset,
};

fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

#[test]
fn test_timeline_header_by_year_keyword() {
    assert!(looks_like_timeline_header(&row(&[
        "year", "month", "day", "text", "headline"
    ])));
}

#[test]
fn test_timeline_header_by_date_keyword() {
    assert!(looks_like_timeline_header(&row(&["Date", "Event"])));
}

#[test]
fn test_timeline_header_is_case_insensitive() {
    assert!(looks_like_timeline_header(&row(&["YEAR", "HEADLINE"])));
}

#[test]
fn test_timeline_data_row_is_not_header() {
    assert!(!looks_like_timeline_header(&row(&[
        "1969",
        "7",
        "20",
        "Apollo 11 lands",
        "Moon Landing"
    ])));
}

#[test]
fn test_timeline_keyword_inside_value_misfires() {
    // Known limitation of keyword sniffing: a data row mentioning a keyword
    // is taken for a header
    assert!(looks_like_timeline_header(&row(&[
        "1969",
        "7",
        "20",
        "An update on the launch",
        "Launch date confirmed"
    ])));
}

#[test]
fn test_slide_header_requires_both_keywords() {
    assert!(looks_like_slide_header(&row(&["title", "content"])));
    assert!(!looks_like_slide_header(&row(&["title", "body"])));
    assert!(!looks_like_slide_header(&row(&["name", "content"])));
}

#[test]
fn test_slide_header_is_case_insensitive() {
    assert!(looks_like_slide_header(&row(&["Title", "Content"])));
}

#[test]
fn test_slide_header_keywords_may_span_fields() {
    assert!(looks_like_slide_header(&row(&[
        "slide title",
        "slide content"
    ])));
}

#[test]
fn test_header_offsets() {
    assert_eq!(timeline_header_offset(&row(&["year", "month"])), 1);
    assert_eq!(timeline_header_offset(&row(&["1969", "7"])), 0);
    assert_eq!(slide_header_offset(&row(&["title", "content"])), 1);
    assert_eq!(slide_header_offset(&row(&["Intro", "Hello"])), 0);
}
