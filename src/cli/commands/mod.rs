//! Command implementations for the storyboard processor CLI
//!
//! This module contains the command execution logic and shared plumbing for
//! the CLI interface. Each subcommand is implemented in its own module:
//! - `timeline`: timeline document generation
//! - `slides`: slide-deck document generation
//! - `rows`: generic named-row mapping

pub mod rows;
pub mod shared;
pub mod slides;
pub mod timeline;

// Re-export the main types for easy access
pub use shared::FeedStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the storyboard processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub async fn run(args: Args) -> Result<FeedStats> {
    match args.get_command() {
        Commands::Timeline(feed_args) => timeline::run_timeline(feed_args).await,
        Commands::Slides(feed_args) => slides::run_slides(feed_args).await,
        Commands::Rows(feed_args) => rows::run_rows(feed_args).await,
    }
}
