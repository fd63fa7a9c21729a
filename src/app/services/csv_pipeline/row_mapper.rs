//! Named-row mapping for header-led feeds
//!
//! Generic consumers want rows keyed by header name rather than position.
//! The mapper always treats the first row as the header and zips every later
//! row against it: short rows fill missing trailing values with the empty
//! string, long rows drop the extras, and row order is preserved. Validation
//! belongs to the consumer; no data row is rejected here.
//!
//! Two parsing strategies back the mapper, chosen at construction: the
//! robust `csv`-crate reader, and an in-house fallback built on the strict
//! tokenizer. Both produce the same mapping shape.

use std::collections::HashMap;

use tracing::warn;

use super::tokenizer::{StrictTokenizer, Tokenizer};

/// A row keyed by trimmed header name
///
/// Duplicate header names silently overwrite: the mapping's keys are exactly
/// the header's distinct names, last occurrence winning.
pub type NamedRow = HashMap<String, String>;

/// Parsing strategy backing the row mapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingStrategy {
    /// Robust parsing via the `csv` crate
    CsvCrate,
    /// In-house fallback built on the strict tokenizer
    Builtin,
}

/// Maps header-led CSV text into named rows
#[derive(Debug, Clone, Copy)]
pub struct RowMapper {
    strategy: MappingStrategy,
}

impl Default for RowMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl RowMapper {
    /// Create a mapper with the robust library-backed strategy
    pub fn new() -> Self {
        Self {
            strategy: MappingStrategy::CsvCrate,
        }
    }

    /// Create a mapper with an explicit strategy
    pub fn with_strategy(strategy: MappingStrategy) -> Self {
        Self { strategy }
    }

    /// The strategy this mapper was constructed with
    pub fn strategy(&self) -> MappingStrategy {
        self.strategy
    }

    /// Parse CSV text into named rows
    ///
    /// Empty or blank input yields an empty vec. Records the backing parser
    /// cannot read are skipped with a warning rather than failing the batch.
    pub fn map_text(&self, text: &str) -> Vec<NamedRow> {
        match self.strategy {
            MappingStrategy::CsvCrate => map_with_csv_crate(text),
            MappingStrategy::Builtin => map_with_builtin(text),
        }
    }
}

/// Drop whitespace-only lines before parsing
fn drop_blank_lines(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

fn map_with_csv_crate(text: &str) -> Vec<NamedRow> {
    let lines = drop_blank_lines(text);
    if lines.is_empty() {
        return Vec::new();
    }
    let joined = lines.join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(joined.as_bytes());

    let headers: Vec<String> = match reader.headers() {
        Ok(headers) => headers.iter().map(|name| name.trim().to_string()).collect(),
        Err(e) => {
            warn!("failed to read CSV header row: {}", e);
            return Vec::new();
        }
    };

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        match record {
            Ok(record) => rows.push(zip_row(&headers, |i| record.get(i).map(str::to_string))),
            Err(e) => warn!("skipping unreadable record {}: {}", index + 1, e),
        }
    }
    rows
}

fn map_with_builtin(text: &str) -> Vec<NamedRow> {
    let tokenizer = StrictTokenizer;
    let mut lines = drop_blank_lines(text).into_iter();

    let headers: Vec<String> = match lines.next() {
        Some(line) => tokenizer
            .split_line(line)
            .iter()
            .map(|name| name.trim().to_string())
            .collect(),
        None => return Vec::new(),
    };

    lines
        .map(|line| {
            let fields = tokenizer.split_line(line);
            zip_row(&headers, |i| fields.get(i).cloned())
        })
        .collect()
}

/// Zip a row's fields against header names positionally
fn zip_row(headers: &[String], field_at: impl Fn(usize) -> Option<String>) -> NamedRow {
    let mut row = NamedRow::with_capacity(headers.len());
    for (index, name) in headers.iter().enumerate() {
        row.insert(name.clone(), field_at(index).unwrap_or_default());
    }
    row
}
