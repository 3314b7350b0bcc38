//! MCU Trace Studio CLI
//!
//! Renders MCU execution traces as a lane-per-module timeline
//! plus summary statistics.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use mcu_trace_studio::commands::{
    display_schema, display_version, execute_render, validate_args, validate_report_file,
    RenderArgs,
};
use mcu_trace_studio::render::TimelineConfig;
use mcu_trace_studio::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};

const USAGE: &str = "mcu-trace render [TRACE_FILE]";

/// MCU Trace Studio - Timeline visualization for MCU traces
#[derive(Parser, Debug)]
#[command(name = "mcu-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a trace into a report and optional SVG timeline
    Render {
        /// Trace JSON file (defaults to the bundled demo trace)
        trace: Option<PathBuf>,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "artifacts/trace_report.json")]
        output: PathBuf,

        /// Output path for the SVG timeline
        #[arg(long, default_missing_value = "artifacts/timeline.svg", num_args = 0..=1)]
        svg: Option<PathBuf>,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Chart width in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
        width: usize,

        /// Chart height in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
        height: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display report schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {:#}", e);
        eprintln!("Usage: {}", USAGE);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Render {
            trace,
            output,
            svg,
            title,
            width,
            height,
            summary,
        } => {
            let mut config = TimelineConfig::new().with_size(width, height);
            if let Some(title) = title {
                config = config.with_title(title);
            }

            let args = RenderArgs {
                trace_path: trace,
                output_json: output,
                output_svg: svg,
                timeline_config: config,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_render(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
