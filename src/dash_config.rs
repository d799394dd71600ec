// WHY: the dash set is the only configuration a run reads from disk; resolving it
// returns a value in every case so the caller never handles a config error

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// Dashes recognised when no dash file is available:
/// hyphen-minus, en dash, box-drawing horizontal, em dash
pub const DEFAULT_DASHES: [char; 4] = ['-', '\u{2013}', '\u{2500}', '\u{2014}'];

/// Default location of the dash file, relative to the working directory
pub const DEFAULT_DASH_FILE: &str = "dash.txt";

/// Ordered set of characters that open a dialog line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashSet {
    chars: Vec<char>,
}

impl DashSet {
    /// Build a set from every character of `line`, keeping first-seen order
    pub fn from_line(line: &str) -> Self {
        let mut chars: Vec<char> = Vec::with_capacity(line.len());
        for c in line.chars() {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        Self { chars }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Code point / glyph pairs, used when logging the resolved set
    pub fn codepoints(&self) -> Vec<(u32, char)> {
        self.chars.iter().map(|&c| (c as u32, c)).collect()
    }
}

impl Default for DashSet {
    fn default() -> Self {
        Self { chars: DEFAULT_DASHES.to_vec() }
    }
}

/// Where the active dash set came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashSource {
    File(PathBuf),
    Default { reason: String },
}

/// Dash set resolved for a run
#[derive(Debug, Clone)]
pub struct ResolvedDashes {
    pub dashes: DashSet,
    pub source: DashSource,
}

impl ResolvedDashes {
    pub fn used_default(&self) -> bool {
        matches!(self.source, DashSource::Default { .. })
    }
}

/// Load the dash set from the first line of `path`.
///
/// A missing or unreadable file (including one that is not valid UTF-8) falls
/// back to [`DEFAULT_DASHES`]. An existing empty file yields an empty set.
/// Exactly one `info` event records the outcome.
pub async fn load_dash_set(path: impl AsRef<Path>) -> ResolvedDashes {
    let path = path.as_ref();

    let resolved = match fs::read_to_string(path).await {
        Ok(content) => {
            let first_line = content.lines().next().unwrap_or("");
            ResolvedDashes {
                dashes: DashSet::from_line(first_line),
                source: DashSource::File(path.to_path_buf()),
            }
        }
        Err(e) => ResolvedDashes {
            dashes: DashSet::default(),
            source: DashSource::Default {
                reason: format!("{}: {}", path.display(), e),
            },
        },
    };

    match &resolved.source {
        DashSource::File(file) => info!(
            dash_file = %file.display(),
            codepoints = ?resolved.dashes.codepoints(),
            "Loaded dash set from file"
        ),
        DashSource::Default { reason } => info!(
            reason = %reason,
            codepoints = ?resolved.dashes.codepoints(),
            "Using default dash set"
        ),
    }

    resolved
}
