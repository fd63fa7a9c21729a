//! Application constants for the storyboard processor
//!
//! Positional field layouts, validation ranges, header keywords and markup
//! tokens shared by the CSV pipeline and the record builders.

// =============================================================================
// Markup Tokens
// =============================================================================

/// Literal two-character escape a feed author writes for a soft line break
pub const NEWLINE_ESCAPE: &str = "\\n";

/// Markup emitted in place of the newline escape
pub const LINE_BREAK_MARKUP: &str = "<br>";

/// Timeline scale advertised to the renderer
pub const TIMELINE_SCALE: &str = "gregorian";

// =============================================================================
// Positional Field Layouts
// =============================================================================

/// Field positions of a timeline feed row
///
/// `year,month,day,text,headline,media_url,media_caption`; everything after
/// `year` is optional, later fields implied absent when the row is shorter.
pub mod timeline_fields {
    pub const YEAR: usize = 0;
    pub const MONTH: usize = 1;
    pub const DAY: usize = 2;
    pub const TEXT: usize = 3;
    pub const HEADLINE: usize = 4;
    pub const MEDIA_URL: usize = 5;
    pub const MEDIA_CAPTION: usize = 6;

    /// Rows shorter than this are never attempted
    pub const MIN_FIELDS: usize = 3;

    /// First-row keywords that mark a header row (any one suffices)
    pub const HEADER_KEYWORDS: &[&str] = &["year", "date"];
}

/// Field positions of a slide feed row (`title,content`)
pub mod slide_fields {
    pub const TITLE: usize = 0;
    pub const CONTENT: usize = 1;

    /// Rows shorter than this are never attempted
    pub const MIN_FIELDS: usize = 2;

    /// First-row keywords that mark a header row (all must appear)
    pub const HEADER_KEYWORDS: &[&str] = &["title", "content"];
}

// =============================================================================
// Date Validation
// =============================================================================

/// Valid month numbers, inclusive
pub const MONTH_RANGE: (i32, i32) = (1, 12);

/// Valid day-of-month numbers, inclusive
pub const DAY_RANGE: (i32, i32) = (1, 31);

/// Month and day value used when a field is absent or non-numeric
pub const DEFAULT_DATE_PART: i32 = 1;

// =============================================================================
// Fetch Boundary Defaults
// =============================================================================

/// Default timeout for fetching a remote CSV body, in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent header for remote fetches
pub const DEFAULT_USER_AGENT: &str =
    concat!("storyboard-processor/", env!("CARGO_PKG_VERSION"));
