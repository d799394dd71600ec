// WHY: dialog detection is split in two: a cheap first-character check decides
// whether a line is dialog at all, then a compiled pattern isolates the quoted span

use regex_automata::meta::Regex;
use tracing::debug;

use crate::dash_config::DashSet;
use crate::error::Result;

/// Delimiter glyphs the extractor pairs up, in priority order:
/// hyphen-minus, em dash, en dash
pub const SPEECH_DELIMITERS: [char; 3] = ['-', '\u{2014}', '\u{2013}'];

/// True when the first character of `line` is one of `dashes`.
/// Callers skip blank lines; an empty line is never dialog.
pub fn is_dialog(line: &str, dashes: &DashSet) -> bool {
    line.chars().next().is_some_and(|c| dashes.contains(c))
}

/// Build the alternation used by [`SpeechExtractor`].
///
/// For each delimiter `d` two alternatives are emitted, spaced form first:
/// `d[ ].+d|d.+d`.
pub fn speech_pattern() -> String {
    SPEECH_DELIMITERS
        .iter()
        .map(|d| format!("{d}[ ].+{d}|{d}.+{d}"))
        .collect::<Vec<_>>()
        .join("|")
}

/// Finds the directly-quoted span inside a dialog line
#[derive(Debug)]
pub struct SpeechExtractor {
    regex: Regex,
}

impl SpeechExtractor {
    /// Compile the delimiter alternation once for the whole run
    pub fn new() -> Result<Self> {
        let pattern = speech_pattern();
        debug!("Compiling speech pattern: {}", pattern);
        // meta::Regex defaults to leftmost-first: earliest start wins, and at the
        // same start the earlier alternative wins
        let regex = Regex::new(&pattern)?;
        Ok(Self { regex })
    }

    /// Return the first delimited span (delimiters included), or the whole
    /// line when no delimiter pair is present
    pub fn extract_speech<'a>(&self, line: &'a str) -> &'a str {
        match self.regex.find(line) {
            Some(m) => &line[m.range()],
            None => line,
        }
    }
}
