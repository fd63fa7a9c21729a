//! Parsing statistics and result structures for feed building
//!
//! Skipped rows are part of normal operation for messy human-authored
//! feeds; the stats keep them observable without turning them into errors.

/// Records built from one parse attempt, with statistics
#[derive(Debug, Clone)]
pub struct ParseResult<T> {
    /// Successfully built records, in source row order
    pub records: Vec<T>,

    /// Row-level accounting for the attempt
    pub stats: ParseStats,
}

/// Row-level accounting for one parse attempt
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Data rows considered (header row excluded)
    pub rows_total: usize,

    /// Rows that became records
    pub records_built: usize,

    /// Rows dropped by minimum-field or required-field checks
    pub rows_skipped: usize,

    /// Whether the first row was consumed as a header
    pub header_detected: bool,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of considered rows that produced records, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.rows_total == 0 {
            0.0
        } else {
            (self.records_built as f64 / self.rows_total as f64) * 100.0
        }
    }
}
