//! Timeline rendering.
//!
//! This module turns enriched records into:
//! - A chart spec (point series plus lane axis) for any charting layer
//! - A standalone SVG timeline
//! - A terminal text summary

pub mod svg;
pub mod text;
pub mod timeline;

// Re-export main types
pub use svg::generate_timeline_svg;
pub use text::generate_text_summary;
pub use timeline::{
    render_timeline, ChartPoint, ChartSeries, ChartSpec, LaneAxis, TimeAxis, TimelineConfig,
};
