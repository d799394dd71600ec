use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use dialog_extract::batch::{self, ExtractionConfig};
use dialog_extract::book_processor::BookProcessor;
use dialog_extract::dash_config::{self, DEFAULT_DASH_FILE};
use dialog_extract::logging::{self, DEFAULT_LOG_DIR};

#[derive(Parser, Debug)]
#[command(name = "dialog-extract")]
#[command(about = "Extracts dash-quoted dialog from plain-text books and reports per-book statistics")]
#[command(version)]
struct Args {
    /// Directory of book files; every entry is processed
    source_dir: PathBuf,

    /// Directory for the extracted dialog files (created if missing)
    destination_dir: PathBuf,

    /// File whose first line lists the dash characters that open a dialog line
    #[arg(long, default_value = DEFAULT_DASH_FILE, aliases = ["dashFile", "dash_file"])]
    dash_file: PathBuf,

    /// Stats output file path
    #[arg(long, default_value = batch::DEFAULT_STATS_FILE)]
    stats_out: PathBuf,

    /// Directory for the run log
    #[arg(long, default_value = DEFAULT_LOG_DIR)]
    log_dir: PathBuf,

    /// Skip books that fail instead of aborting the run
    #[arg(long)]
    keep_going: bool,

    /// Suppress console progress bar
    #[arg(long)]
    no_progress: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let run_log = logging::init_run_log(&args.log_dir).context("Failed to set up run log")?;

    info!("Starting dialog-extract");
    info!(?args, "Parsed CLI arguments");

    let resolved = dash_config::load_dash_set(&args.dash_file).await;
    let processor = BookProcessor::new(resolved.dashes)?;

    let config = ExtractionConfig {
        source_dir: args.source_dir,
        destination_dir: args.destination_dir,
        stats_path: args.stats_out,
        fail_fast: !args.keep_going,
        show_progress: !args.no_progress,
    };

    let summary = batch::run_extraction(&config, &processor)
        .await
        .with_context(|| format!("Dialog extraction failed for {}", config.source_dir.display()))?;

    println!("dialog-extract v{} - extraction complete", env!("CARGO_PKG_VERSION"));
    println!("  Books processed: {}", summary.rows.len());
    println!("  Dialog lines extracted: {}", summary.total_replics());
    if !summary.failed.is_empty() {
        println!("  Books skipped: {}", summary.failed.len());
        for failed in &summary.failed {
            println!("    {}: {}", failed.name, failed.error);
        }
    }
    println!("  Stats written to: {}", config.stats_path.display());
    println!("  Log written to: {}", run_log.path().display());

    Ok(())
}
