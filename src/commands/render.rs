//! Render command implementation.
//!
//! The render command:
//! 1. Loads the trace (file or bundled demo)
//! 2. Converts events into records
//! 3. Enriches records with lanes, colors and hover text
//! 4. Summarizes and builds the chart spec
//! 5. Writes output files

use super::models::RenderArgs;
use crate::aggregator::summarize;
use crate::enrich::enrich;
use crate::output::{build_report, write_report, write_svg, TraceReport};
use crate::parser::{load_trace, parse_trace_str, to_records, TraceFile};
use crate::render::{generate_text_summary, generate_timeline_svg, render_timeline};
use crate::utils::config::{BUNDLED_DEMO_TRACE, DEFAULT_TRACE_FILE};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

const MIN_CHART_WIDTH: usize = 300;
const MIN_CHART_HEIGHT: usize = 240;
const MAX_CHART_SIZE: usize = 100_000;

/// Execute the render command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was written
///
/// # Errors
/// * Trace file missing, unreadable or malformed
/// * Trace with no events
/// * File write errors
pub fn execute_render(args: RenderArgs) -> Result<TraceReport> {
    let start_time = Instant::now();

    // Step 1: Load trace
    info!("Step 1/5: Loading trace...");
    let (trace_name, trace) = load_source(&args)?;
    info!("Loaded trace: {}", trace_name);

    // Step 2: Convert events
    info!("Step 2/5: Parsing {} events...", trace.events.len());
    let records = to_records(&trace).context("Failed to parse trace events")?;

    // Step 3: Enrich
    info!("Step 3/5: Assigning lanes, colors and hover text...");
    let enriched = enrich(records);
    debug!("Lane order: {:?}", enriched.lanes.modules().collect::<Vec<_>>());

    // Step 4: Summarize and build chart
    info!("Step 4/5: Summarizing and building chart...");
    let summary = summarize(&enriched.records).context("Failed to summarize trace")?;
    info!("Summary: {}", summary.summary());
    let chart = render_timeline(&enriched, Some(&args.timeline_config));

    // Step 5: Write outputs
    info!("Step 5/5: Writing output files...");
    let report = build_report(
        trace_name,
        trace.declared_total_events(),
        summary,
        enriched.lanes.clone(),
        chart,
    );

    write_report(&report, &args.output_json).context("Failed to write report JSON")?;
    info!("✓ Report written to: {}", args.output_json.display());

    if let Some(svg_path) = &args.output_svg {
        let svg = generate_timeline_svg(&report.chart).context("Failed to generate timeline SVG")?;
        write_svg(&svg, svg_path).context("Failed to write timeline SVG")?;
        info!("✓ Timeline written to: {}", svg_path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("Trace File: {}", report.trace_file);
        if report.has_count_mismatch() {
            println!(
                "Declared Events: {} (header disagrees with parsed count)",
                report.declared_total_events.unwrap_or_default()
            );
        }
        println!("Lanes: {}", report.lanes.len());
        println!("\n{}", generate_text_summary(&report.summary));
        println!("{}", "=".repeat(60));
    }

    let elapsed = start_time.elapsed();
    info!("Render completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Load the requested trace, or the bundled demo when none is given
///
/// **Private** - internal helper for execute_render
fn load_source(args: &RenderArgs) -> Result<(String, TraceFile)> {
    match &args.trace_path {
        Some(path) => {
            let trace = load_trace(path)
                .with_context(|| format!("Failed to load trace {}", path.display()))?;
            Ok((path.display().to_string(), trace))
        }
        None => {
            debug!("No trace path given, using bundled demo trace");
            let trace =
                parse_trace_str(BUNDLED_DEMO_TRACE).context("Failed to parse bundled demo trace")?;
            Ok((DEFAULT_TRACE_FILE.to_string(), trace))
        }
    }
}

/// Validate render arguments
///
/// **Public** - can be called before execute_render for early validation
pub fn validate_args(args: &RenderArgs) -> Result<()> {
    if let Some(path) = &args.trace_path {
        if !path.exists() {
            anyhow::bail!("Trace file not found: {}", path.display());
        }
        if path.is_dir() {
            anyhow::bail!("Trace path is a directory: {}", path.display());
        }
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.output_svg.as_ref() == Some(&args.output_json) {
        anyhow::bail!("Report and SVG outputs must be different files");
    }

    let config = &args.timeline_config;
    if config.width < MIN_CHART_WIDTH {
        anyhow::bail!("Chart width must be at least {} pixels", MIN_CHART_WIDTH);
    }
    if config.height < MIN_CHART_HEIGHT {
        anyhow::bail!("Chart height must be at least {} pixels", MIN_CHART_HEIGHT);
    }
    if config.width > MAX_CHART_SIZE || config.height > MAX_CHART_SIZE {
        anyhow::bail!("Chart dimensions must not exceed {} pixels", MAX_CHART_SIZE);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TimelineConfig;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_default_is_valid() {
        assert!(validate_args(&RenderArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_same_outputs() {
        let args = RenderArgs {
            output_json: PathBuf::from("out/timeline"),
            output_svg: Some(PathBuf::from("out/timeline")),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_chart_too_small() {
        let args = RenderArgs {
            timeline_config: TimelineConfig::new().with_size(100, 600),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_chart_too_large() {
        let args = RenderArgs {
            timeline_config: TimelineConfig::new().with_size(1200, usize::MAX),
            ..Default::default()
        };

        let err = validate_args(&args).unwrap_err();
        assert!(err.to_string().contains("must not exceed"));
    }
}
