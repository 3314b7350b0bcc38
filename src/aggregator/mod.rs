//! Aggregation of trace records into summary statistics.
//!
//! This module computes:
//! - Total event count
//! - Per event type and per module breakdowns
//! - Time span between the first and last record

pub mod summary;

// Re-export main types and functions
pub use summary::{summarize, SummaryStats, TimeSpan};
