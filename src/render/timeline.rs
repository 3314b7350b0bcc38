//! Chart specification for the timeline.
//!
//! The chart spec is the only interface between the pipeline and a
//! charting layer: one point series per event type, plus lane-axis ticks.

use crate::enrich::EnrichedTrace;
use crate::utils::config::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_TITLE, DEFAULT_CHART_WIDTH, MARKER_SIZE,
};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// Timeline configuration
#[derive(Debug, Clone)]
pub struct TimelineConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub marker_size: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_CHART_TITLE.to_string(),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            marker_size: MARKER_SIZE,
        }
    }
}

impl TimelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Complete chart description handed to a rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub marker_size: usize,

    /// One series per event type, first-seen order
    pub series: Vec<ChartSeries>,

    pub time_axis: TimeAxis,
    pub lane_axis: LaneAxis,
}

/// Points of one event type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Event type, used as the legend entry
    pub name: String,
    pub points: Vec<ChartPoint>,
}

/// A single plotted record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Timestamp in seconds
    pub x: f64,
    /// Lane index
    pub y: usize,
    pub color: String,
    /// Hover text
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeAxis {
    pub title: String,
}

/// Categorical lane axis: tick `i` is labelled with module `tick_text[i]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneAxis {
    pub title: String,
    pub tick_values: Vec<usize>,
    pub tick_text: Vec<String>,
}

/// Build the chart spec from enriched records
///
/// **Public** - main entry point for rendering
///
/// One point per record, no aggregation or downsampling. Pure: the same
/// input always produces an identical spec.
pub fn render_timeline(trace: &EnrichedTrace, config: Option<&TimelineConfig>) -> ChartSpec {
    let config = config.cloned().unwrap_or_default();

    let mut by_type: IndexMap<&str, Vec<ChartPoint>> = IndexMap::new();
    for enriched in &trace.records {
        by_type
            .entry(enriched.record.event_type.as_str())
            .or_default()
            .push(ChartPoint {
                x: enriched.record.timestamp,
                y: enriched.lane_index,
                color: enriched.color.clone(),
                label: enriched.hover_text.clone(),
            });
    }

    let series: Vec<ChartSeries> = by_type
        .into_iter()
        .map(|(name, points)| ChartSeries {
            name: name.to_string(),
            points,
        })
        .collect();

    let (tick_values, tick_text): (Vec<usize>, Vec<String>) = trace
        .lanes
        .iter()
        .map(|(module, lane)| (lane, module.to_string()))
        .unzip();

    debug!(
        "Chart has {} series over {} lanes",
        series.len(),
        trace.lanes.len()
    );

    ChartSpec {
        title: config.title,
        width: config.width,
        height: config.height,
        marker_size: config.marker_size,
        series,
        time_axis: TimeAxis {
            title: "Timeline".to_string(),
        },
        lane_axis: LaneAxis {
            title: "Module".to_string(),
            tick_values,
            tick_text,
        },
    }
}

impl ChartSpec {
    /// Total number of plotted points
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// Smallest and largest timestamp across all series
    pub fn time_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.x))
            .fold(None, |range, x| match range {
                None => Some((x, x)),
                Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
            })
    }

    /// Number of lanes on the categorical axis
    pub fn lane_count(&self) -> usize {
        self.lane_axis.tick_values.len()
    }
}
