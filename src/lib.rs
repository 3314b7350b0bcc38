//! MCU Trace Studio
//!
//! Timeline visualization and summary statistics for MCU execution
//! traces (bus transactions, device events, interrupts).
//!
//! The pipeline is a chain of pure steps:
//!
//! ```text
//! load_trace -> to_records -> enrich -> summarize / render_timeline
//! ```
//!
//! This crate provides the core implementation for the
//! `mcu-trace` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! mcu-trace render traces/boot.json --svg timeline.svg --summary
//! mcu-trace --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod enrich;
pub mod output;
pub mod parser;
pub mod render;
pub mod utils;
