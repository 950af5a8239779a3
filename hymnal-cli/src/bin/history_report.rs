//! History Frequency Report
//!
//! Counts how often each hymn appears in the history and renders a bar chart.
//!
//! **Usage:**
//! ```bash
//! hymnal-report [--data-dir <DIR>] [--output <FILE>] [--width <PX>] [--height <PX>]
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use hymnal_cli::logging::init_tracing;
use hymnal_cli::report::render_svg;
use hymnal_common::analytics::HistoryReport;
use hymnal_common::config::{resolve_data_dir, DataPaths, TomlConfig};
use hymnal_common::document::JsonDocument;
use hymnal_common::{Catalog, HistoryStore};
use std::path::PathBuf;
use tracing::info;

/// Sing-frequency chart generator
#[derive(Parser, Debug)]
#[command(name = "hymnal-report")]
#[command(about = "Render a bar chart of how often each hymn was sung")]
struct Args {
    /// Folder holding hymns.csv and history.json
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Configuration file (default: platform config dir)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output SVG file (default from config: history.svg)
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = TomlConfig::load_or_default(args.config.as_deref());
    init_tracing(
        config
            .as_ref()
            .map(|c| c.logging.level.as_str())
            .unwrap_or("info"),
    );
    let config = config.context("Failed to load configuration")?;

    info!(
        "Starting hymnal-report v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let data_dir = resolve_data_dir(args.data_dir.as_deref(), &config);
    let paths = DataPaths::in_dir(&data_dir, &config);

    let catalog = Catalog::load(&paths.catalog)
        .with_context(|| format!("Failed to load catalog {}", paths.catalog.display()))?;
    let history = HistoryStore::load(JsonDocument::new(&paths.history))
        .with_context(|| format!("Failed to load history {}", paths.history.display()))?;

    let report = HistoryReport::build(history.entries(), &catalog);
    for row in report.rows.iter().take(10) {
        info!("{:>4}x  {}  {}", row.count, row.number, row.title);
    }

    let output = args.output.unwrap_or(config.report.output);
    let width = args.width.unwrap_or(config.report.width);
    let height = args.height.unwrap_or(config.report.height);
    render_svg(&report, &output, width, height)?;

    println!("Wrote {}", output.display());
    Ok(())
}
