//! Trace file loader.
//!
//! Reads the JSON trace document from disk, checks its top-level shape
//! and converts raw event entries into [`TraceRecord`]s in file order.

use super::schema::{TraceFile, TraceRecord};
use crate::utils::error::TraceError;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load a trace document from disk
///
/// **Public** - main entry point for reading traces
///
/// # Errors
/// * `TraceError::NotFound` - path does not exist
/// * `TraceError::Io` - path exists but cannot be read
/// * `TraceError::Json` / `TraceError::Format` - content is not a trace document
pub fn load_trace(path: impl AsRef<Path>) -> Result<TraceFile, TraceError> {
    let path = path.as_ref();

    debug!("Loading trace from: {}", path.display());

    if !path.exists() {
        return Err(TraceError::NotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| TraceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // Encoding problems surface as JSON errors, not I/O errors
    let raw: Value = serde_json::from_slice(&bytes)?;
    parse_trace_value(raw)
}

/// Parse a trace document from its JSON text
///
/// **Public** - used for the bundled demo trace and in tests
pub fn parse_trace_str(content: &str) -> Result<TraceFile, TraceError> {
    let raw: Value = serde_json::from_str(content)?;
    parse_trace_value(raw)
}

fn parse_trace_value(raw: Value) -> Result<TraceFile, TraceError> {
    validate_trace_format(&raw)?;

    let trace: TraceFile = serde_json::from_value(raw)?;
    debug!(
        "Trace document holds {} events (declared: {:?})",
        trace.events.len(),
        trace.declared_total_events()
    );

    Ok(trace)
}

/// Check the top-level shape of a trace document
///
/// **Public** - the document must be an object carrying an `events` array
pub fn validate_trace_format(raw: &Value) -> Result<(), TraceError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| TraceError::Format("Trace must be a JSON object".to_string()))?;

    match obj.get("events") {
        Some(Value::Array(_)) => {}
        Some(other) => {
            return Err(TraceError::Format(format!(
                "`events` must be an array, found {}",
                json_kind(other)
            )))
        }
        None => return Err(TraceError::Format("Missing `events` key".to_string())),
    }

    match obj.get("trace_info") {
        Some(Value::Object(_)) => {}
        Some(other) => warn!(
            "Trace `trace_info` is {}, not an object; ignoring it",
            json_kind(other)
        ),
        None => warn!("Trace has no `trace_info` section"),
    }

    Ok(())
}

/// Convert raw event entries into records, preserving file order
///
/// **Public** - second stage of loading
///
/// Any malformed entry fails the whole conversion; nothing is skipped.
/// A mismatch against `trace_info.total_events` is logged and accepted.
pub fn to_records(trace: &TraceFile) -> Result<Vec<TraceRecord>, TraceError> {
    let mut records = Vec::with_capacity(trace.events.len());

    for (index, raw_event) in trace.events.iter().enumerate() {
        let record = TraceRecord::deserialize(raw_event)
            .map_err(|e| TraceError::Format(format!("Event {}: {}", index, e)))?;
        if !record.kind().is_known() {
            debug!("Event {}: unknown event type '{}'", index, record.event_type);
        }
        records.push(record);
    }

    if let Some(declared) = trace.declared_total_events() {
        if declared != records.len() as u64 {
            warn!(
                "trace_info.total_events declares {} events but {} were parsed",
                declared,
                records.len()
            );
        }
    }

    if let Some(index) = find_chronology_break(&records) {
        warn!(
            "Timestamps decrease at event {} ({} < {}); keeping file order",
            index,
            records[index].timestamp,
            records[index - 1].timestamp
        );
    }

    debug!("Parsed {} trace records", records.len());

    Ok(records)
}

/// Load a trace file and convert it to records in one step
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<TraceRecord>, TraceError> {
    let trace = load_trace(path)?;
    to_records(&trace)
}

/// Index of the first record whose timestamp is lower than its predecessor's
pub fn find_chronology_break(records: &[TraceRecord]) -> Option<usize> {
    records
        .windows(2)
        .position(|pair| pair[1].timestamp < pair[0].timestamp)
        .map(|i| i + 1)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejects_non_object_document() {
        let err = validate_trace_format(&json!([1, 2, 3])).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_rejects_events_of_wrong_kind() {
        let err = validate_trace_format(&json!({"events": {"a": 1}})).unwrap_err();
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_malformed_event_fails_whole_load() {
        let trace = parse_trace_str(
            r#"{"events": [
                {"timestamp": 0.0, "formatted_time": "t0", "module_name": "A", "event_type": "IRQ_EVENT"},
                {"timestamp": 1.0, "formatted_time": "t1", "event_type": "IRQ_EVENT"}
            ]}"#,
        )
        .unwrap();

        let err = to_records(&trace).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("Event 1"));
    }

    #[test]
    fn test_find_chronology_break() {
        let trace = parse_trace_str(
            r#"{"events": [
                {"timestamp": 0.0, "formatted_time": "a", "module_name": "A", "event_type": "X"},
                {"timestamp": 2.0, "formatted_time": "b", "module_name": "A", "event_type": "X"},
                {"timestamp": 1.0, "formatted_time": "c", "module_name": "A", "event_type": "X"}
            ]}"#,
        )
        .unwrap();
        let records = to_records(&trace).unwrap();

        assert_eq!(find_chronology_break(&records), Some(2));
        assert_eq!(find_chronology_break(&records[..2]), None);
    }
}
