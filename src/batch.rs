// WHY: the batch driver owns the only run-wide state (the stats writer) and
// processes books strictly one after another so rows come out in listing order

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

use crate::book_processor::{mean_of, BookProcessor};
use crate::error::{ExtractError, Result};

/// Default stats file name, resolved against the working directory
pub const DEFAULT_STATS_FILE: &str = "stats.csv";

/// Header row of the stats file
pub const STATS_HEADER: [&str; 3] = ["name_of_book", "number_of_replics", "mean_of_replics"];

/// Settings for one extraction run
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub stats_path: PathBuf,
    /// Abort the run on the first failing book
    pub fail_fast: bool,
    pub show_progress: bool,
}

impl ExtractionConfig {
    pub fn new(source_dir: impl Into<PathBuf>, destination_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            destination_dir: destination_dir.into(),
            stats_path: PathBuf::from(DEFAULT_STATS_FILE),
            fail_fast: true,
            show_progress: false,
        }
    }
}

/// One line of the stats file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsRow {
    pub name_of_book: String,
    pub number_of_replics: usize,
    #[serde(serialize_with = "serialize_mean")]
    pub mean_of_replics: Option<f64>,
}

impl StatsRow {
    pub fn from_lengths(name_of_book: impl Into<String>, lengths: &[usize]) -> Self {
        Self {
            name_of_book: name_of_book.into(),
            number_of_replics: lengths.len(),
            mean_of_replics: mean_of(lengths),
        }
    }

    /// Mean as written to the stats file
    pub fn mean_display(&self) -> String {
        format_mean(self.mean_of_replics)
    }
}

/// Shortest round-trip float with a decimal point (`8.0`, `7.5`), or `0` for
/// a book without dialog
pub fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(value) => format!("{value:?}"),
        None => "0".to_string(),
    }
}

fn serialize_mean<S>(mean: &Option<f64>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format_mean(*mean))
}

/// A book that failed while per-book isolation was enabled
#[derive(Debug, Clone)]
pub struct FailedBook {
    pub name: String,
    pub error: String,
}

/// What a run produced
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub rows: Vec<StatsRow>,
    pub failed: Vec<FailedBook>,
}

impl RunSummary {
    pub fn total_replics(&self) -> usize {
        self.rows.iter().map(|r| r.number_of_replics).sum()
    }
}

/// Every entry of `source_dir`, sorted by name. Nothing is filtered out.
pub async fn list_books(source_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(source_dir)
        .await
        .map_err(|e| ExtractError::read(source_dir, e))?;

    let mut books = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| ExtractError::read(source_dir, e))?
    {
        books.push(entry.path());
    }

    books.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(books)
}

/// Create `dir` (without parents) unless it already is a directory
pub async fn ensure_destination(dir: &Path) -> Result<()> {
    if fs::metadata(dir).await.is_ok_and(|m| m.is_dir()) {
        return Ok(());
    }
    fs::create_dir(dir)
        .await
        .map_err(|e| ExtractError::directory(dir, e))?;
    info!("Created destination directory: {}", dir.display());
    Ok(())
}

/// Open the stats file and write its header
fn create_stats_writer(path: &Path) -> Result<csv::Writer<File>> {
    let file = File::create(path).map_err(|e| ExtractError::write(path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);
    writer
        .write_record(STATS_HEADER)
        .map_err(|e| stats_error(path, e))?;
    writer.flush().map_err(|e| ExtractError::write(path, e))?;
    Ok(writer)
}

fn stats_error(path: &Path, source: csv::Error) -> ExtractError {
    ExtractError::Stats {
        path: path.to_path_buf(),
        source,
    }
}

fn progress_bar(total: usize, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}") {
        bar.set_style(style);
    }
    bar
}

/// Extract dialog from every book in `config.source_dir`.
///
/// Writes one dialog file per book into `config.destination_dir` and one row
/// per book to `config.stats_path`, in sorted order.
pub async fn run_extraction(config: &ExtractionConfig, processor: &BookProcessor) -> Result<RunSummary> {
    let books = list_books(&config.source_dir).await?;
    ensure_destination(&config.destination_dir).await?;
    let mut writer = create_stats_writer(&config.stats_path)?;

    info!(
        source_dir = %config.source_dir.display(),
        destination_dir = %config.destination_dir.display(),
        books = books.len(),
        "Starting dialog extraction"
    );

    let progress = progress_bar(books.len(), config.show_progress);
    let mut summary = RunSummary::default();

    for book in &books {
        // the destination keeps the raw file name; the lossy form is only for stats and logs
        let file_name = book.file_name().unwrap_or_default();
        let name = file_name.to_string_lossy().into_owned();
        progress.set_message(name.clone());

        let destination = config.destination_dir.join(file_name);
        let lengths = match processor.process_book(book, &destination).await {
            Ok(lengths) => lengths,
            Err(e) if !config.fail_fast => {
                warn!(book = %name, error = %e, "Skipping book");
                summary.failed.push(FailedBook {
                    name,
                    error: e.to_string(),
                });
                progress.inc(1);
                continue;
            }
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        };

        let row = StatsRow::from_lengths(name, &lengths);
        writer
            .serialize(&row)
            .map_err(|e| stats_error(&config.stats_path, e))?;
        writer
            .flush()
            .map_err(|e| ExtractError::write(&config.stats_path, e))?;
        summary.rows.push(row);
        progress.inc(1);
    }

    progress.finish_and_clear();
    info!(
        books = summary.rows.len(),
        failed = summary.failed.len(),
        replics = summary.total_replics(),
        stats = %config.stats_path.display(),
        "Dialog extraction completed"
    );

    Ok(summary)
}
