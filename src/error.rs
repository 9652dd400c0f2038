/// Error types for the diagnostic scanner
///
/// Per-file problems never show up here: the checkers turn them into issue
/// lines. These errors cover configuration and report output only.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DiagnosticError {
    /// Configuration file could not be read
    #[error("Failed to read configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file is not valid JSON for a `Config`
    #[error("Invalid JSON in configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Dependency {0} is listed more than once in the expectation table")]
    DuplicateExpectation(String),

    #[error("Invalid file name pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Report (text or JSON) could not be written
    #[error("Failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize scan results: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DiagnosticError>;
