//! CSV ingestion pipeline for storyboard feeds
//!
//! This module turns raw, human-authored CSV text into validated domain
//! records. The input is permissive (quoted fields, escaped quotes, ragged
//! rows, optional headers) and the pipeline favors best-effort ingestion:
//! malformed rows are dropped quietly, and only an empty feed or a feed with
//! zero usable rows is an error.
//!
//! ## Architecture
//!
//! The pipeline is organized into logical components:
//! - [`tokenizer`] - Line tokenizers for the two quoting dialects
//! - [`header`] - Header-row detection by domain keyword sniffing
//! - [`row_mapper`] - Generic header-led mapping into name-keyed rows
//! - [`record_parser`] - Positional builders for timeline events and slides
//! - [`field_parsers`] - Utility functions for field parsing and defaulting
//! - [`format`] - HTML-escaping and soft line-break expansion
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use storyboard_processor::app::services::csv_pipeline::TimelineEventBuilder;
//!
//! # fn example() -> storyboard_processor::Result<()> {
//! let csv = "year,month,day,text,headline\n1969,7,20,Apollo 11 lands,Moon Landing";
//! let result = TimelineEventBuilder::new().build(csv)?;
//!
//! println!(
//!     "built {} events from {} rows",
//!     result.stats.records_built, result.stats.rows_total
//! );
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod format;
pub mod header;
pub mod record_parser;
pub mod row_mapper;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use record_parser::{SlideBuilder, TimelineEventBuilder};
pub use row_mapper::{MappingStrategy, NamedRow, RowMapper};
pub use stats::{ParseResult, ParseStats};
pub use tokenizer::{RawRow, SimpleToggleTokenizer, StrictTokenizer, Tokenizer};
