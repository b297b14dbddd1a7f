// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Classified terminal failure of a single ingestion run.
#[derive(Error, Debug)]
pub enum RunFailure {
    #[error("Log file not found: {}", not_found_target(.path))]
    NotFound { path: Option<PathBuf> },

    #[error("Failed to read log file: {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error parsing log file lines: line {line_number} is malformed: {line:?}")]
    ParseFailure { line_number: usize, line: String },
}

pub const EMPTY_PATH_REASON: &str = "Path is null or empty.";

fn not_found_target(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => EMPTY_PATH_REASON.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    ReadFailure,
    ParseFailure,
}

impl RunFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            RunFailure::NotFound { .. } => FailureKind::NotFound,
            RunFailure::ReadFailure { .. } => FailureKind::ReadFailure,
            RunFailure::ParseFailure { .. } => FailureKind::ParseFailure,
        }
    }
}
