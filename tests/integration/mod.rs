// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture holding a source directory, a destination path and a stats path
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub stats_path: PathBuf,
}

impl TestFixture {
    /// Create a new fixture; the destination directory is not created
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();
        let source_dir = root_path.join("books");
        fs::create_dir(&source_dir).expect("Failed to create source directory");

        Self {
            destination_dir: root_path.join("dialogs"),
            stats_path: root_path.join("stats.csv"),
            temp_dir,
            root_path,
            source_dir,
        }
    }

    /// Create a book file in the source directory
    pub fn create_book<P: AsRef<Path>>(&self, name: P, content: &str) -> PathBuf {
        let file_path = self.source_dir.join(name);
        fs::write(&file_path, content).expect("Failed to write book file");
        file_path
    }

    /// Create a file with raw bytes in the source directory
    pub fn create_raw_book<P: AsRef<Path>>(&self, name: P, bytes: &[u8]) -> PathBuf {
        let file_path = self.source_dir.join(name);
        fs::write(&file_path, bytes).expect("Failed to write raw book file");
        file_path
    }

    /// Dialog file path for a book name
    pub fn dialog_path<P: AsRef<Path>>(&self, name: P) -> PathBuf {
        self.destination_dir.join(name)
    }

    /// Read the dialog file written for a book
    pub fn read_dialogs<P: AsRef<Path>>(&self, name: P) -> Result<String, std::io::Error> {
        fs::read_to_string(self.dialog_path(name))
    }

    /// Read the stats file
    pub fn read_stats(&self) -> Result<String, std::io::Error> {
        fs::read_to_string(&self.stats_path)
    }
}

/// Compare two strings line by line, providing detailed diff on mismatch
pub fn assert_golden_file(actual: &str, expected: &str, context: &str) {
    let actual_lines: Vec<&str> = actual.lines().collect();
    let expected_lines: Vec<&str> = expected.lines().collect();

    if actual_lines.len() != expected_lines.len() {
        panic!(
            "{}: Line count mismatch. Expected {} lines, got {} lines",
            context, expected_lines.len(), actual_lines.len()
        );
    }

    for (i, (actual_line, expected_line)) in actual_lines.iter().zip(expected_lines.iter()).enumerate() {
        if actual_line != expected_line {
            panic!(
                "{}: Line {} mismatch\nExpected: {}\nActual:   {}",
                context, i + 1, expected_line, actual_line
            );
        }
    }
}
