//! Generic named-row command
//!
//! Loads a header-led CSV feed and emits its rows as a JSON array of
//! name-keyed objects. Unlike the record builders this path never fails on
//! content: an empty feed is an empty array.

use tracing::info;

use super::shared::{self, FeedStats};
use crate::Result;
use crate::app::services::csv_pipeline::RowMapper;
use crate::cli::args::FeedArgs;

/// Run the rows command
pub async fn run_rows(args: FeedArgs) -> Result<FeedStats> {
    args.validate()?;
    shared::setup_logging(&args)?;

    let config = args.to_config();
    config.validate()?;

    let text = shared::load_source_text(&args.source, &config).await?;
    let rows = RowMapper::new().map_text(&text);
    info!("Mapped {} named rows", rows.len());

    let output_bytes = shared::write_document(&rows, args.output.as_deref(), args.pretty)?;

    let stats = FeedStats {
        rows_total: rows.len(),
        records_built: rows.len(),
        rows_skipped: 0,
        output_bytes,
    };
    stats.print_summary("rows", args.quiet);

    Ok(stats)
}
