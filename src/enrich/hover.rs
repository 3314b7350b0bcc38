//! Hover text for timeline points.
//!
//! Three fixed header lines followed by one line per non-null payload
//! field, joined with the rich-text line break the chart understands.

use crate::parser::TraceRecord;
use crate::utils::config::{DATA_FIELD_PREFIX, HOVER_LINE_BREAK};
use serde_json::Value;

/// Build the hover text for one record
pub fn build_hover_text(record: &TraceRecord) -> String {
    let mut lines = vec![
        hover_line("Time", &record.formatted_time),
        hover_line("Module", &record.module_name),
        hover_line("Event Type", &record.event_type),
    ];

    lines.extend(record.derived_fields().filter_map(|(name, value)| {
        display_value(value).map(|text| hover_line(&field_label(&name), &text))
    }));

    lines.join(HOVER_LINE_BREAK)
}

/// Human-readable label for a derived field name
///
/// `data_target_device` becomes `Target Device`.
pub fn field_label(name: &str) -> String {
    let key = name.strip_prefix(DATA_FIELD_PREFIX).unwrap_or(name);
    title_case(&key.replace('_', " "))
}

/// Display string for a payload value, `None` for null
///
/// Strings are shown without quotes, booleans capitalized (`True`),
/// nested values as compact JSON.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        other => Some(other.to_string()),
    }
}

fn hover_line(label: &str, value: &str) -> String {
    format!("<b>{}:</b> {}", label, value)
}

// Upper-case a letter after any non-letter, lower-case the rest
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}
