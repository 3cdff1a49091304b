//! Output module for persisting datasets and reporting run results
//!
//! This module handles:
//! - Writing the final dataset as a CSV file
//! - Formatting human-readable run reports

mod csv_writer;
mod report;
mod traits;

pub use csv_writer::CsvDatasetWriter;
pub use report::{format_report, print_report};
pub use traits::{DatasetWriter, OutputError, OutputResult};
