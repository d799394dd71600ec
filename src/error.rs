use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a book (and, in fail-fast mode, the whole run)
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Source directory listing, source file open, or UTF-8 decoding failed
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Destination file or stats file could not be created or written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write stats to {}: {source}", .path.display())]
    Stats {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to create directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to compile speech pattern: {0}")]
    Pattern(#[from] regex_automata::meta::BuildError),

    #[error("failed to install run logger: {0}")]
    Logging(String),
}

impl ExtractError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read { path: path.into(), source }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write { path: path.into(), source }
    }

    pub(crate) fn directory(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Directory { path: path.into(), source }
    }
}

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;
