//! Slide-deck feed command
//!
//! Loads a positional CSV feed, builds slides and emits the deck JSON
//! document with escaped, break-expanded content.

use tracing::info;

use super::shared::{self, FeedStats};
use crate::Result;
use crate::app::models::SlideDocument;
use crate::app::services::csv_pipeline::SlideBuilder;
use crate::cli::args::FeedArgs;

/// Run the slides command
pub async fn run_slides(args: FeedArgs) -> Result<FeedStats> {
    args.validate()?;
    shared::setup_logging(&args)?;

    let config = args.to_config();
    config.validate()?;

    let text = shared::load_source_text(&args.source, &config).await?;
    let result = SlideBuilder::new().build(&text)?;
    info!(
        "Built {} slides from {} rows ({:.0}% usable)",
        result.stats.records_built,
        result.stats.rows_total,
        result.stats.success_rate()
    );

    let document = SlideDocument::new(&result.records);
    let output_bytes = shared::write_document(&document, args.output.as_deref(), args.pretty)?;

    let stats = FeedStats {
        rows_total: result.stats.rows_total,
        records_built: result.stats.records_built,
        rows_skipped: result.stats.rows_skipped,
        output_bytes,
    };
    stats.print_summary("slides", args.quiet);

    Ok(stats)
}
