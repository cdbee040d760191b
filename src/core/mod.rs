//! Core utilities for the NHL stats CLI
//!
//! - `output`: JSON serialization and writing of the output artifact

pub mod output;

pub use output::{to_pretty_json, write_output, DEFAULT_OUTPUT_FILE};
