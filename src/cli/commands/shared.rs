//! Shared components for CLI commands
//!
//! Common plumbing used by every subcommand: logging setup, source loading
//! (local file or remote URL), JSON document delivery and summary reporting.

use std::path::Path;
use std::time::Duration;

use colored::Colorize;
use tracing::{debug, info};

use crate::cli::args::FeedArgs;
use crate::config::Config;
use crate::{Error, Result};

/// Feed statistics reported after a command finishes
#[derive(Debug, Clone, Default)]
pub struct FeedStats {
    /// Data rows considered
    pub rows_total: usize,
    /// Records that reached the output document
    pub records_built: usize,
    /// Rows dropped during validation
    pub rows_skipped: usize,
    /// Size of the serialized document in bytes
    pub output_bytes: usize,
}

impl FeedStats {
    /// Print a one-line human summary to stderr
    pub fn print_summary(&self, label: &str, quiet: bool) {
        if quiet {
            return;
        }
        eprintln!(
            "{} {}: {} records built, {} rows skipped, {} bytes written",
            "done".green().bold(),
            label,
            self.records_built,
            self.rows_skipped,
            self.output_bytes
        );
    }
}

/// Set up structured logging for a feed command
pub fn setup_logging(args: &FeedArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("storyboard_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// True when the source names a remote resource rather than a file
pub fn is_remote_source(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Load the raw CSV body from a file path or an http(s) URL
pub async fn load_source_text(source: &str, config: &Config) -> Result<String> {
    if is_remote_source(source) {
        fetch_remote_text(source, config).await
    } else {
        info!("Reading CSV from file: {}", source);
        std::fs::read_to_string(source)
            .map_err(|e| Error::io(format!("Failed to read file '{}'", source), e))
    }
}

/// Fetch the CSV body from a remote URL
async fn fetch_remote_text(url: &str, config: &Config) -> Result<String> {
    info!("Fetching CSV from URL: {}", url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| Error::fetch(url, "Failed to build HTTP client", Some(e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::fetch(url, "Request failed", Some(e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::fetch(url, format!("Server returned {}", status), None));
    }

    response
        .text()
        .await
        .map_err(|e| Error::fetch(url, "Failed to read response body", Some(e)))
}

/// Serialize a document and deliver it to the chosen destination
///
/// Returns the number of bytes written.
pub fn write_document<T: serde::Serialize>(
    document: &T,
    output: Option<&Path>,
    pretty: bool,
) -> Result<usize> {
    let json = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    }
    .map_err(|e| Error::serialization("Failed to serialize output document", e))?;

    match output {
        Some(path) => {
            std::fs::write(path, &json).map_err(|e| {
                Error::io(
                    format!("Failed to write output file '{}'", path.display()),
                    e,
                )
            })?;
            debug!("Wrote {} bytes to {}", json.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(json.len())
}
