use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Trace: {}", report.trace_file);
    println!("  Total Events: {}", report.summary.total_events);
    println!("  Lanes: {}", report.lanes.len());
    println!("  Series: {}", report.chart.series.len());
    println!("  Duration: {:.6}s", report.summary.time_span.duration);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("MCU Trace Studio Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string                - Schema version (e.g., '1.0.0')");
        println!("  trace_file: string             - Trace the report was built from");
        println!("  declared_total_events: number? - Count claimed by trace_info");
        println!("  summary: object                - Summary statistics");
        println!("    total_events: number         - Parsed event count");
        println!("    event_type_counts: object    - Events per type, discovery order");
        println!("    module_counts: object        - Events per module, discovery order");
        println!("    time_span: object            - start, end, duration (seconds)");
        println!("  lanes: object                  - Module name to lane index");
        println!("  chart: object                  - Timeline chart spec");
        println!("    series: array                - One per event type: name, points");
        println!("      points: array              - x (timestamp), y (lane), color, label");
        println!("    lane_axis: object            - tick_values, tick_text (module names)");
        println!("  generated_at: string           - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("MCU Trace Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Timeline visualization and summary statistics for MCU execution traces.");
}
