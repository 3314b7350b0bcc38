use crate::render::TimelineConfig;
use std::path::PathBuf;

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Trace file to load (None = bundled demo trace)
    pub trace_path: Option<PathBuf>,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Output path for the SVG timeline (optional)
    pub output_svg: Option<PathBuf>,

    /// Chart title and dimensions
    pub timeline_config: TimelineConfig,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            trace_path: None,
            output_json: PathBuf::from("artifacts/trace_report.json"),
            output_svg: None,
            timeline_config: TimelineConfig::default(),
            print_summary: false,
        }
    }
}
