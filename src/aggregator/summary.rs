//! Summary statistics over a record set.
//!
//! Counts are kept in discovery order so breakdowns list event types
//! and modules in the order the trace introduces them.

use crate::parser::TraceRecord;
use crate::utils::error::TraceError;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// Totals, breakdowns and time span of a trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of records
    pub total_events: usize,

    /// Records per event type, discovery order
    pub event_type_counts: IndexMap<String, usize>,

    /// Records per module, discovery order
    pub module_counts: IndexMap<String, usize>,

    /// First and last record in load order
    pub time_span: TimeSpan,
}

/// Span between the first and last record in load order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSpan {
    /// Formatted time of the first record
    pub start: String,

    /// Formatted time of the last record
    pub end: String,

    /// Last timestamp minus first timestamp, in seconds
    ///
    /// Not validated: zero for a single record, negative when the
    /// trace is out of order.
    pub duration: f64,
}

/// Summarize a record set
///
/// **Public** - main entry point for aggregation
///
/// Works on plain or enriched records.
///
/// # Errors
/// * `TraceError::EmptyDataset` - no records to summarize
pub fn summarize<R: AsRef<TraceRecord>>(records: &[R]) -> Result<SummaryStats, TraceError> {
    let (Some(first), Some(last)) = (records.first(), records.last()) else {
        return Err(TraceError::EmptyDataset);
    };
    let (first, last): (&TraceRecord, &TraceRecord) = (first.as_ref(), last.as_ref());

    let mut event_type_counts: IndexMap<String, usize> = IndexMap::new();
    let mut module_counts: IndexMap<String, usize> = IndexMap::new();

    for record in records {
        let record: &TraceRecord = record.as_ref();
        *event_type_counts.entry(record.event_type.clone()).or_insert(0) += 1;
        *module_counts.entry(record.module_name.clone()).or_insert(0) += 1;
    }

    let stats = SummaryStats {
        total_events: records.len(),
        event_type_counts,
        module_counts,
        time_span: TimeSpan {
            start: first.formatted_time.clone(),
            end: last.formatted_time.clone(),
            duration: last.timestamp - first.timestamp,
        },
    };

    debug!("Summary: {}", stats.summary());

    Ok(stats)
}

impl SummaryStats {
    /// Get human-readable one-line summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Events: {} | Types: {} | Modules: {} | Span: {} -> {} ({:.6}s)",
            self.total_events,
            self.event_type_counts.len(),
            self.module_counts.len(),
            self.time_span.start,
            self.time_span.end,
            self.time_span.duration
        )
    }

    /// Module with the most records, earliest discovered on ties
    pub fn busiest_module(&self) -> Option<(&str, usize)> {
        self.module_counts
            .iter()
            .fold(None, |best: Option<(&str, usize)>, (module, count)| match best {
                Some((_, best_count)) if best_count >= *count => best,
                _ => Some((module.as_str(), *count)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: f64, module: &str, event_type: &str) -> TraceRecord {
        TraceRecord {
            timestamp,
            formatted_time: format!("t={}", timestamp),
            module_name: module.to_string(),
            event_type: event_type.to_string(),
            event_data: None,
        }
    }

    #[test]
    fn test_summarize_counts_in_discovery_order() {
        let records = vec![
            record(0.0, "UART0", "DEVICE_EVENT"),
            record(0.5, "SystemBus", "BUS_TRANSACTION"),
            record(1.0, "UART0", "DEVICE_EVENT"),
        ];

        let stats = summarize(&records).unwrap();

        assert_eq!(stats.total_events, 3);
        let types: Vec<(&String, &usize)> = stats.event_type_counts.iter().collect();
        assert_eq!(types[0], (&"DEVICE_EVENT".to_string(), &2));
        assert_eq!(types[1], (&"BUS_TRANSACTION".to_string(), &1));
        assert_eq!(stats.module_counts["UART0"], 2);
        assert_eq!(stats.time_span.start, "t=0");
        assert_eq!(stats.time_span.end, "t=1");
        assert_eq!(stats.time_span.duration, 1.0);
    }

    #[test]
    fn test_summarize_empty_fails() {
        let records: Vec<TraceRecord> = vec![];
        assert!(matches!(summarize(&records), Err(TraceError::EmptyDataset)));
    }

    #[test]
    fn test_single_record_has_zero_duration() {
        let stats = summarize(&[record(3.25, "GPIO", "IRQ_EVENT")]).unwrap();
        assert_eq!(stats.time_span.duration, 0.0);
        assert_eq!(stats.time_span.start, stats.time_span.end);
    }

    #[test]
    fn test_busiest_module() {
        let records = vec![
            record(0.0, "A", "X"),
            record(0.1, "B", "X"),
            record(0.2, "B", "X"),
            record(0.3, "A", "X"),
        ];
        let stats = summarize(&records).unwrap();
        assert_eq!(stats.busiest_module(), Some(("A", 2)));
    }
}
