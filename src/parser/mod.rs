//! Trace parsing and schema definitions.
//!
//! This module handles:
//! - Loading trace JSON from disk
//! - Validating the document shape
//! - Converting events into uniform records

pub mod event_type;
pub mod schema;
pub mod trace_file;

// Re-export main types
pub use event_type::{ops, EventType};
pub use schema::{TraceFile, TraceRecord};
pub use trace_file::{
    find_chronology_break, load_records, load_trace, parse_trace_str, to_records,
    validate_trace_format,
};
