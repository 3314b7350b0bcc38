//! Trace document and record definitions.
//!
//! This module defines the structure of the trace files we read from disk
//! and the uniform record every event is converted into.

use crate::utils::config::DATA_FIELD_PREFIX;
use super::event_type::EventType;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Top-level trace document as loaded from disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceFile {
    /// Free-form trace metadata (capture tool, MCU name, declared counts)
    ///
    /// Anything other than an object (including `null`) reads as empty.
    #[serde(default, deserialize_with = "lenient_trace_info")]
    pub trace_info: Map<String, Value>,

    /// Raw event entries in file order
    pub events: Vec<Value>,
}

fn lenient_trace_info<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

impl TraceFile {
    /// Event count asserted by `trace_info.total_events`, if present and numeric
    ///
    /// Never used to validate the parsed records.
    pub fn declared_total_events(&self) -> Option<u64> {
        self.trace_info.get("total_events").and_then(Value::as_u64)
    }
}

/// One trace event with its variable payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Seconds since trace start
    pub timestamp: f64,

    /// Display form of the timestamp
    pub formatted_time: String,

    /// Originating module (e.g. "UART0", "SystemBus")
    pub module_name: String,

    /// Event category, open-ended (see [`EventType`])
    pub event_type: String,

    /// Payload, shape varies by event type and operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_data: Option<Map<String, Value>>,
}

impl TraceRecord {
    /// Typed view of `event_type`
    pub fn kind(&self) -> EventType {
        EventType::from(self.event_type.as_str())
    }

    /// Look up a derived field by its prefixed name (e.g. `data_operation`)
    ///
    /// Returns `None` for names without the `data_` prefix, for records
    /// without a payload, and for keys the payload does not carry.
    pub fn derived_field(&self, name: &str) -> Option<&Value> {
        let key = name.strip_prefix(DATA_FIELD_PREFIX)?;
        self.event_data.as_ref()?.get(key)
    }

    /// Iterate derived fields in payload order as `(prefixed_name, value)`
    pub fn derived_fields(&self) -> impl Iterator<Item = (String, &Value)> + '_ {
        self.event_data
            .iter()
            .flat_map(|data| data.iter())
            .map(|(key, value)| (format!("{}{}", DATA_FIELD_PREFIX, key), value))
    }

    /// Operation name used for color lookup, if the payload carries a string one
    pub fn operation(&self) -> Option<&str> {
        self.derived_field("data_operation").and_then(Value::as_str)
    }
}

impl AsRef<TraceRecord> for TraceRecord {
    fn as_ref(&self) -> &TraceRecord {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(event_data: Option<Value>) -> TraceRecord {
        TraceRecord {
            timestamp: 0.5,
            formatted_time: "00:00:00.500000".to_string(),
            module_name: "UART0".to_string(),
            event_type: "DEVICE_EVENT".to_string(),
            event_data: event_data.and_then(|v| v.as_object().cloned()),
        }
    }

    #[test]
    fn test_derived_field_lookup() {
        let rec = record(Some(json!({"operation": "READ", "size": 4})));

        assert_eq!(rec.derived_field("data_operation"), Some(&json!("READ")));
        assert_eq!(rec.derived_field("data_size"), Some(&json!(4)));
        assert_eq!(rec.derived_field("operation"), None);
        assert_eq!(rec.derived_field("data_missing"), None);
    }

    #[test]
    fn test_derived_fields_keep_payload_order() {
        let rec = record(Some(json!({"operation": "WRITE", "address": "0x10", "value": 7})));
        let names: Vec<String> = rec.derived_fields().map(|(name, _)| name).collect();

        assert_eq!(names, vec!["data_operation", "data_address", "data_value"]);
    }

    #[test]
    fn test_missing_payload_has_no_derived_fields() {
        let rec = record(None);

        assert_eq!(rec.derived_fields().count(), 0);
        assert_eq!(rec.operation(), None);
    }

    #[test]
    fn test_non_string_operation_is_absent() {
        let rec = record(Some(json!({"operation": 3})));
        assert_eq!(rec.operation(), None);
    }

    #[test]
    fn test_declared_total_events() {
        let file: TraceFile = serde_json::from_value(json!({
            "trace_info": {"total_events": 42},
            "events": []
        }))
        .unwrap();
        assert_eq!(file.declared_total_events(), Some(42));

        let file: TraceFile = serde_json::from_value(json!({"events": []})).unwrap();
        assert_eq!(file.declared_total_events(), None);
    }

    #[test]
    fn test_non_object_trace_info_reads_as_empty() {
        for info in [json!(null), json!("v1"), json!([1, 2])] {
            let file: TraceFile =
                serde_json::from_value(json!({"trace_info": info, "events": []})).unwrap();
            assert!(file.trace_info.is_empty());
            assert_eq!(file.declared_total_events(), None);
        }
    }
}
