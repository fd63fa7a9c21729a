//! Test fixtures and helpers for the CSV pipeline
//!
//! This module provides shared feed fixtures used across the per-component
//! test modules.

mod format_tests;
mod header_tests;
mod row_mapper_tests;

/// A realistic timeline feed: header, plain rows, quoting, a media row,
/// a ragged row and a row with a missing headline
pub fn timeline_feed_csv() -> String {
    [
        "year,month,day,text,headline,media_url,media_caption",
        "1969,7,20,Apollo 11 lands,Moon Landing",
        "1903,12,17,\"First powered, controlled flight\",Kitty Hawk",
        "1989,11,9,The wall comes down,Berlin Wall,https://example.com/wall.jpg,Brandenburg Gate",
        "1955",
        "2001,1,1,No headline on this row,",
    ]
    .join("\n")
}

/// A realistic slide feed: header, quoted content with commas and soft
/// line breaks, and a too-short row
pub fn slide_feed_csv() -> String {
    [
        "title,content",
        "Intro,Welcome to the talk",
        "\"Agenda\",\"First, the problem\\nThen, the fix\"",
        "Closing thoughts",
        "Questions,",
    ]
    .join("\n")
}
