//! Command-line argument definitions for the storyboard processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::constants::DEFAULT_FETCH_TIMEOUT_SECS;
use crate::{Error, Result};

/// CLI arguments for the storyboard feed processor
///
/// Converts spreadsheet-exported CSV feeds into the JSON documents the
/// timeline and slide-deck renderers consume.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "storyboard-processor",
    version,
    about = "Convert spreadsheet-exported CSV into timeline and slideshow data feeds",
    long_about = "Loads a CSV feed from a file or URL, runs it through the storyboard \
                  ingestion pipeline (tokenizing, header detection, validation, escaping) \
                  and emits the JSON document a timeline or slide-deck renderer consumes."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the storyboard processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Build a timeline document from a positional CSV feed
    Timeline(FeedArgs),
    /// Build a slide-deck document from a positional CSV feed
    Slides(FeedArgs),
    /// Map a header-led CSV feed into named rows
    Rows(FeedArgs),
}

/// Arguments shared by every feed subcommand
#[derive(Debug, Clone, Parser)]
pub struct FeedArgs {
    /// CSV source to load
    ///
    /// Either a filesystem path or an http(s) URL; URL bodies are fetched
    /// once before the pipeline runs.
    #[arg(value_name = "SOURCE", help = "CSV file path or http(s) URL")]
    pub source: String,

    /// Output file for the JSON document
    ///
    /// If not specified, the document is written to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for the JSON document (defaults to stdout)"
    )]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON document
    #[arg(long = "pretty", help = "Pretty-print the JSON output")]
    pub pretty: bool,

    /// Fetch timeout in seconds for URL sources
    #[arg(
        long = "fetch-timeout",
        value_name = "SECS",
        default_value_t = DEFAULT_FETCH_TIMEOUT_SECS,
        help = "Timeout in seconds when fetching a URL source"
    )]
    pub fetch_timeout_secs: u64,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl FeedArgs {
    /// Validate the feed arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.source.trim().is_empty() {
            return Err(Error::configuration("Source must not be empty"));
        }

        if self.fetch_timeout_secs == 0 {
            return Err(Error::configuration(
                "Fetch timeout must be greater than 0 seconds",
            ));
        }

        // Validate output directory exists if an output file was given
        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the fetch-boundary configuration these arguments describe
    pub fn to_config(&self) -> Config {
        Config {
            fetch_timeout_secs: self.fetch_timeout_secs,
            ..Config::default()
        }
    }
}
