//! Positional record builders for timeline and slide feeds
//!
//! A builder consumes raw feed text end to end: tokenize each line with the
//! toggle dialect, decide the header offset from the first row, then map
//! every surviving row into a validated record. Individual bad rows are
//! dropped and counted, never reported as errors; only an empty feed or a
//! feed where nothing survives fails the attempt.

use tracing::debug;

use super::field_parsers::{parse_date_part, parse_int_prefix, trimmed_field};
use super::format::{escape_text, format_content};
use super::header::{slide_header_offset, timeline_header_offset};
use super::stats::{ParseResult, ParseStats};
use super::tokenizer::{RawRow, SimpleToggleTokenizer, Tokenizer};
use crate::app::models::{EventDate, EventMedia, EventText, Slide, TimelineEvent};
use crate::constants::{slide_fields, timeline_fields};
use crate::{Error, Result};

/// Builds timeline events from positional feed rows
///
/// Expected row layout: `year,month,day,text,headline,media_url,media_caption`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineEventBuilder {
    tokenizer: SimpleToggleTokenizer,
}

impl TimelineEventBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw feed text into timeline events
    pub fn build(&self, text: &str) -> Result<ParseResult<TimelineEvent>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::empty_input("timeline"));
        }

        let rows: Vec<RawRow> = trimmed
            .lines()
            .map(|line| self.tokenizer.split_line(line))
            .collect();
        let offset = timeline_header_offset(&rows[0]);

        self.build_rows(&rows, offset)
    }

    /// Build events from tokenized rows, skipping `header_offset` leading rows
    pub fn build_rows(
        &self,
        rows: &[RawRow],
        header_offset: usize,
    ) -> Result<ParseResult<TimelineEvent>> {
        let mut stats = ParseStats::new();
        stats.header_detected = header_offset > 0;
        let mut records = Vec::new();

        for (index, row) in rows.iter().enumerate().skip(header_offset) {
            stats.rows_total += 1;

            if row.len() < timeline_fields::MIN_FIELDS {
                stats.rows_skipped += 1;
                debug!(
                    "row {}: skipped with {} of {} minimum fields",
                    index + 1,
                    row.len(),
                    timeline_fields::MIN_FIELDS
                );
                continue;
            }

            match event_from_fields(row) {
                Some(event) => {
                    records.push(event);
                    stats.records_built += 1;
                }
                None => {
                    stats.rows_skipped += 1;
                    debug!("row {}: skipped, missing year or headline", index + 1);
                }
            }
        }

        if records.is_empty() {
            return Err(Error::no_valid_records("timeline"));
        }

        Ok(ParseResult { records, stats })
    }
}

/// Map one positional row to an event, or `None` when required fields fail
fn event_from_fields(row: &[String]) -> Option<TimelineEvent> {
    let year = parse_int_prefix(trimmed_field(row, timeline_fields::YEAR))?;
    let month = parse_date_part(row, timeline_fields::MONTH);
    let day = parse_date_part(row, timeline_fields::DAY);

    let headline = trimmed_field(row, timeline_fields::HEADLINE);
    if headline.is_empty() {
        return None;
    }
    let text = trimmed_field(row, timeline_fields::TEXT);

    let media_url = trimmed_field(row, timeline_fields::MEDIA_URL);
    let media = if media_url.is_empty() {
        None
    } else {
        Some(EventMedia {
            url: media_url.to_string(),
            caption: escape_text(trimmed_field(row, timeline_fields::MEDIA_CAPTION)),
        })
    };

    Some(TimelineEvent {
        date: EventDate::clamped(year, month, day),
        text: EventText {
            headline: escape_text(headline),
            text: format_content(text),
        },
        media,
    })
}

/// Builds slides from positional feed rows
///
/// Expected row layout: `title,content`. Empty titles and contents are
/// allowed; only rows with fewer than two fields are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlideBuilder {
    tokenizer: SimpleToggleTokenizer,
}

impl SlideBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw feed text into slides
    pub fn build(&self, text: &str) -> Result<ParseResult<Slide>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::empty_input("slide"));
        }

        let rows: Vec<RawRow> = trimmed
            .lines()
            .map(|line| self.tokenizer.split_line(line))
            .collect();
        let offset = slide_header_offset(&rows[0]);

        self.build_rows(&rows, offset)
    }

    /// Build slides from tokenized rows, skipping `header_offset` leading rows
    pub fn build_rows(&self, rows: &[RawRow], header_offset: usize) -> Result<ParseResult<Slide>> {
        let mut stats = ParseStats::new();
        stats.header_detected = header_offset > 0;
        let mut records = Vec::new();

        for (index, row) in rows.iter().enumerate().skip(header_offset) {
            stats.rows_total += 1;

            if row.len() < slide_fields::MIN_FIELDS {
                stats.rows_skipped += 1;
                debug!(
                    "row {}: skipped with {} of {} minimum fields",
                    index + 1,
                    row.len(),
                    slide_fields::MIN_FIELDS
                );
                continue;
            }

            records.push(Slide {
                title: trimmed_field(row, slide_fields::TITLE).to_string(),
                content: trimmed_field(row, slide_fields::CONTENT).to_string(),
            });
            stats.records_built += 1;
        }

        if records.is_empty() {
            return Err(Error::no_valid_records("slide"));
        }

        Ok(ParseResult { records, stats })
    }
}
