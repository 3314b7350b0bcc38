//! Output writers for reports and timelines.
//!
//! This module handles writing data to disk in various formats:
//! - JSON reports (summary plus chart spec)
//! - SVG timelines

pub mod json;
pub mod report;
pub mod svg;

// Re-export main functions
pub use json::{read_report, write_report};
pub use report::{build_report, TraceReport};
pub use svg::write_svg;

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
