use mcu_trace_studio::aggregator::summarize;
use mcu_trace_studio::enrich::{enrich, EnrichedRecord};
use mcu_trace_studio::parser::{load_records, TraceRecord};
use mcu_trace_studio::utils::error::TraceError;
use pretty_assertions::assert_eq;

const DEMO_TRACE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/unified_trace_demo.json");

fn record(timestamp: f64, formatted_time: &str, module: &str) -> TraceRecord {
    TraceRecord {
        timestamp,
        formatted_time: formatted_time.to_string(),
        module_name: module.to_string(),
        event_type: "DEVICE_EVENT".to_string(),
        event_data: None,
    }
}

#[test]
fn test_demo_summary() {
    let trace = enrich(load_records(DEMO_TRACE).unwrap());
    let stats = summarize(&trace.records).unwrap();

    assert_eq!(stats.total_events, 13);
    assert_eq!(stats.event_type_counts.values().sum::<usize>(), 13);
    assert_eq!(stats.event_type_counts["DEVICE_EVENT"], 10);
    assert_eq!(stats.event_type_counts["BUS_TRANSACTION"], 3);
    assert_eq!(stats.module_counts["DemoDevice"], 5);
    assert_eq!(stats.module_counts["UART0"], 4);
    assert_eq!(stats.time_span.start, "00:00:00.000000");
    assert_eq!(stats.time_span.end, "00:00:00.006000");
    assert_eq!(stats.time_span.duration, 0.006);
}

#[test]
fn test_negative_duration_passes_through() {
    let records = vec![
        record(4.0, "late", "A"),
        record(1.0, "middle", "B"),
        record(2.5, "early", "A"),
    ];

    let stats = summarize(&records).unwrap();

    assert_eq!(stats.time_span.start, "late");
    assert_eq!(stats.time_span.end, "early");
    assert_eq!(stats.time_span.duration, -1.5);
}

#[test]
fn test_empty_dataset_fails() {
    let records: Vec<EnrichedRecord> = Vec::new();
    assert!(matches!(summarize(&records), Err(TraceError::EmptyDataset)));
}

#[test]
fn test_plain_and_enriched_records_agree() {
    let records = load_records(DEMO_TRACE).unwrap();
    let plain = summarize(&records).unwrap();
    let enriched = summarize(&enrich(records).records).unwrap();

    assert_eq!(plain, enriched);
}
