//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, parsing or summarizing a trace
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Trace file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read trace file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON format: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid trace format: {0}")]
    Format(String),

    #[error("Trace contains no events")]
    EmptyDataset,
}

impl TraceError {
    /// True for content that is not parseable or lacks the expected structure
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Json(_) | Self::Format(_))
    }
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Chart has no points to render")]
    EmptyChart,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
