//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Name reported for the bundled demo trace when no path is given
pub const DEFAULT_TRACE_FILE: &str = "unified_trace_demo.json";

/// Demo trace shipped inside the binary
pub const BUNDLED_DEMO_TRACE: &str = include_str!("../../demos/unified_trace_demo.json");

/// Color used when an event type has no entry in the color table
pub const DEFAULT_COLOR: &str = "#7f7f7f";

// Hover text is consumed by rich-text tooltips, not terminals
pub const HOVER_LINE_BREAK: &str = "<br>";

/// Prefix under which `event_data` keys are exposed as derived fields
pub const DATA_FIELD_PREFIX: &str = "data_";

// Chart defaults
pub const DEFAULT_CHART_TITLE: &str = "MCU Trace Log Timeline Visualization";
pub const DEFAULT_CHART_WIDTH: usize = 1200;
pub const DEFAULT_CHART_HEIGHT: usize = 600;
pub const MARKER_SIZE: usize = 10;
