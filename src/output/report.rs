//! Report document written after a render.
//!
//! Bundles the summary and the chart spec of one trace. Schema is
//! versioned to allow future evolution.

use crate::aggregator::SummaryStats;
use crate::enrich::ModuleLaneTable;
use crate::render::ChartSpec;
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Trace file the report was built from
    pub trace_file: String,

    /// Event count claimed by the trace header, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_total_events: Option<u64>,

    /// Summary statistics
    pub summary: SummaryStats,

    /// Module name to lane index
    pub lanes: ModuleLaneTable,

    /// Chart specification for the timeline
    pub chart: ChartSpec,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Assemble a report stamped with the current time
pub fn build_report(
    trace_file: impl Into<String>,
    declared_total_events: Option<u64>,
    summary: SummaryStats,
    lanes: ModuleLaneTable,
    chart: ChartSpec,
) -> TraceReport {
    use chrono::Utc;

    TraceReport {
        version: SCHEMA_VERSION.to_string(),
        trace_file: trace_file.into(),
        declared_total_events,
        summary,
        lanes,
        chart,
        generated_at: Utc::now().to_rfc3339(),
    }
}

impl TraceReport {
    /// True when the header's declared count disagrees with the parsed count
    pub fn has_count_mismatch(&self) -> bool {
        self.declared_total_events
            .is_some_and(|declared| declared != self.summary.total_events as u64)
    }
}
