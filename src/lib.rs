//! Storyboard Processor Library
//!
//! A Rust library for converting loosely-structured, spreadsheet-exported
//! CSV feeds into strongly-shaped records for presentation renderers:
//! an interactive timeline and a slide deck.
//!
//! This library provides tools for:
//! - Tokenizing permissive CSV with two distinct quoting dialects
//! - Detecting optional header rows by domain keyword sniffing
//! - Mapping header-led rows into name-keyed values
//! - Building validated timeline events and slides with field defaulting,
//!   numeric clamping and HTML-escaping of free text
//! - Serializing renderer-ready JSON documents

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_pipeline;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Slide, TimelineEvent};
pub use app::services::csv_pipeline::{RowMapper, SlideBuilder, TimelineEventBuilder};
pub use config::Config;

/// Result type alias for the storyboard processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for feed ingestion and delivery
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Raw feed text was empty or whitespace-only
    #[error("{domain} feed is empty")]
    EmptyInput { domain: String },

    /// Tokenization succeeded but no row survived validation
    #[error("no valid {domain} records found in feed")]
    NoValidRecords { domain: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Fetching a remote CSV body failed
    #[error("fetch error for '{url}': {message}")]
    Fetch {
        url: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Serializing an output document failed
    #[error("serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an empty-input error for a feed domain
    pub fn empty_input(domain: impl Into<String>) -> Self {
        Self::EmptyInput {
            domain: domain.into(),
        }
    }

    /// Create a no-valid-records error for a feed domain
    pub fn no_valid_records(domain: impl Into<String>) -> Self {
        Self::NoValidRecords {
            domain: domain.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a fetch error with context
    pub fn fetch(
        url: impl Into<String>,
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
