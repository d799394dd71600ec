use chrono::{DateTime, Local};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{ExtractError, Result};

/// Default directory for run logs, relative to the working directory
pub const DEFAULT_LOG_DIR: &str = "log";

/// Handle to the log file of the current run
#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Log file name for a run started at `started`
pub fn log_file_name(started: DateTime<Local>) -> String {
    format!("{}.log", started.format("%Y-%m-%d %H:%M:%S"))
}

/// Open a log file for appending; runs started in the same second share it
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ExtractError::write(path, e))
}

/// Create `log_dir` if needed and route all `tracing` events of this process to
/// a JSON log file named after the current local time.
///
/// Call once, before any book is processed.
pub fn init_run_log(log_dir: &Path) -> Result<RunLog> {
    fs::create_dir_all(log_dir).map_err(|e| ExtractError::directory(log_dir, e))?;

    let path = log_dir.join(log_file_name(Local::now()));
    let file = open_log_file(&path)?;

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(Mutex::new(file))
        .json()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ExtractError::Logging(e.to_string()))?;

    Ok(RunLog { path })
}
