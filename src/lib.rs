pub mod batch;
pub mod book_processor;
pub mod dash_config;
pub mod dialog_detector;
pub mod error;
pub mod logging;

// Re-export main types for convenient access
pub use dash_config::{load_dash_set, DashSet, DashSource, ResolvedDashes, DEFAULT_DASHES};
pub use dialog_detector::{is_dialog, SpeechExtractor};
pub use error::ExtractError;

// Re-export the per-book and batch entry points
pub use batch::{run_extraction, ExtractionConfig, RunSummary, StatsRow};
pub use book_processor::{BookProcessor, BookRecord};
