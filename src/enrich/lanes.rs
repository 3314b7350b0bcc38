//! Lane assignment: one timeline row per module.
//!
//! Lanes are numbered from 0 in order of first appearance, never
//! alphabetically. The order decides vertical stacking in the chart.

use crate::parser::TraceRecord;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// Module name to lane index, in lane order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleLaneTable {
    lanes: IndexMap<String, usize>,
}

impl ModuleLaneTable {
    /// Build the table with a single scan over the records
    pub fn build<R: AsRef<TraceRecord>>(records: &[R]) -> Self {
        assign_lanes(records).0
    }

    /// Lane of a module, if it occurs in the dataset
    pub fn lane_of(&self, module_name: &str) -> Option<usize> {
        self.lanes.get(module_name).copied()
    }

    /// Module names in lane order
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.lanes.keys().map(String::as_str)
    }

    /// `(module, lane)` pairs in lane order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.lanes.iter().map(|(module, lane)| (module.as_str(), *lane))
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    fn lane_for(&mut self, module_name: &str) -> usize {
        if let Some(lane) = self.lanes.get(module_name) {
            return *lane;
        }
        let lane = self.lanes.len();
        self.lanes.insert(module_name.to_string(), lane);
        lane
    }
}

/// Assign lanes and return the table plus each record's lane, index-aligned
///
/// **Public** - the enrichment step uses the per-record lanes directly
pub fn assign_lanes<R: AsRef<TraceRecord>>(records: &[R]) -> (ModuleLaneTable, Vec<usize>) {
    let mut table = ModuleLaneTable::default();
    let lanes = records
        .iter()
        .map(|record| {
            let record: &TraceRecord = record.as_ref();
            table.lane_for(&record.module_name)
        })
        .collect();

    debug!("Assigned {} lanes for {} records", table.len(), records.len());

    (table, lanes)
}
