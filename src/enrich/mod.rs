//! Enrichment of parsed records with display-only fields.
//!
//! Each step is a pure function over the record sequence:
//! - Lane assignment (one lane per module, first-seen order)
//! - Color resolution (event type and operation)
//! - Hover text

pub mod colors;
pub mod hover;
pub mod lanes;

pub use colors::{legend_entries, record_color, resolve_color, LegendEntry};
pub use hover::{build_hover_text, display_value, field_label};
pub use lanes::{assign_lanes, ModuleLaneTable};

use crate::parser::TraceRecord;
use log::debug;
use serde::{Deserialize, Serialize};

/// A record plus its lane, color and hover text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: TraceRecord,
    pub lane_index: usize,
    pub color: String,
    pub hover_text: String,
}

impl AsRef<TraceRecord> for EnrichedRecord {
    fn as_ref(&self) -> &TraceRecord {
        &self.record
    }
}

/// Enriched records of one dataset together with its lane table
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTrace {
    pub records: Vec<EnrichedRecord>,
    pub lanes: ModuleLaneTable,
}

impl EnrichedTrace {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Enrich records in file order
///
/// **Public** - main entry point for enrichment
pub fn enrich(records: Vec<TraceRecord>) -> EnrichedTrace {
    let (lanes, lane_indices) = assign_lanes(&records);

    let records: Vec<EnrichedRecord> = records
        .into_iter()
        .zip(lane_indices)
        .map(|(record, lane_index)| EnrichedRecord {
            color: record_color(&record).to_string(),
            hover_text: build_hover_text(&record),
            lane_index,
            record,
        })
        .collect();

    debug!("Enriched {} records across {} lanes", records.len(), lanes.len());

    EnrichedTrace { records, lanes }
}
