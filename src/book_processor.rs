use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader, BufWriter};
use tracing::{debug, info};

use crate::dash_config::DashSet;
use crate::dialog_detector::{is_dialog, SpeechExtractor};
use crate::error::{ExtractError, Result};

/// Buffer size for reading books and writing dialog files
const IO_BUFFER_SIZE: usize = 8192;

/// Dialog spans extracted from one book, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookRecord {
    spans: Vec<String>,
}

impl BookRecord {
    pub fn push(&mut self, span: &str) {
        self.spans.push(span.to_string());
    }

    pub fn spans(&self) -> &[String] {
        &self.spans
    }

    pub fn count(&self) -> usize {
        self.spans.len()
    }

    /// Length of every span in characters (not bytes)
    pub fn lengths(&self) -> Vec<usize> {
        self.spans.iter().map(|s| s.chars().count()).collect()
    }

    /// Mean span length, `None` for a book without dialog
    pub fn mean_length(&self) -> Option<f64> {
        mean_of(&self.lengths())
    }

    /// Spans joined by `\n`, without a trailing newline
    pub fn to_output(&self) -> String {
        self.spans.join("\n")
    }
}

/// Mean of a list of lengths, `None` when the list is empty
pub fn mean_of(lengths: &[usize]) -> Option<f64> {
    if lengths.is_empty() {
        None
    } else {
        Some(lengths.iter().sum::<usize>() as f64 / lengths.len() as f64)
    }
}

/// Classifies and extracts dialog for one book at a time
pub struct BookProcessor {
    dashes: DashSet,
    extractor: SpeechExtractor,
}

impl BookProcessor {
    pub fn new(dashes: DashSet) -> Result<Self> {
        Ok(Self {
            dashes,
            extractor: SpeechExtractor::new()?,
        })
    }

    /// Run classification and extraction over raw lines without touching disk
    pub fn extract_record<I, S>(&self, lines: I) -> BookRecord
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut record = BookRecord::default();
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            if is_dialog(line, &self.dashes) {
                record.push(self.extractor.extract_speech(line));
            }
        }
        record
    }

    /// Read `source`, write its dialog spans to `destination`, and return the
    /// span lengths in extraction order.
    ///
    /// The destination is created or truncated; its directory must exist.
    pub async fn process_book(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> Result<Vec<usize>> {
        let source = source.as_ref();
        let destination = destination.as_ref();

        let lines = read_lines(source).await?;
        let record = self.extract_record(&lines);
        write_dialogs(destination, &record).await?;

        info!(
            source = %source.display(),
            destination = %destination.display(),
            dialogs = record.count(),
            "Book processed"
        );

        Ok(record.lengths())
    }
}

/// Read a whole book as UTF-8 lines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A `\r\n` pair leaves an
/// empty piece between the two characters, which callers skip as blank.
pub async fn read_lines(path: &Path) -> Result<Vec<String>> {
    debug!("Reading book: {}", path.display());

    let file = File::open(path)
        .await
        .map_err(|e| ExtractError::read(path, e))?;
    let mut content = String::new();
    // WHY: read_to_string surfaces both I/O errors and invalid UTF-8 as io::Error
    BufReader::with_capacity(IO_BUFFER_SIZE, file)
        .read_to_string(&mut content)
        .await
        .map_err(|e| ExtractError::read(path, e))?;

    let result: Vec<String> = content
        .split(|c: char| c == '\r' || c == '\n')
        .map(str::to_string)
        .collect();

    debug!("Read {} lines from {}", result.len(), path.display());
    Ok(result)
}

/// Write the newline-joined spans of `record` to `path`
pub async fn write_dialogs(path: &Path, record: &BookRecord) -> Result<()> {
    let file = File::create(path)
        .await
        .map_err(|e| ExtractError::write(path, e))?;
    let mut writer = BufWriter::with_capacity(IO_BUFFER_SIZE, file);

    writer
        .write_all(record.to_output().as_bytes())
        .await
        .map_err(|e| ExtractError::write(path, e))?;
    writer
        .flush()
        .await
        .map_err(|e| ExtractError::write(path, e))?;
    Ok(())
}
