//! Dataset writer trait and output errors

use crate::records::Dataset;
use thiserror::Error;

/// Errors that can occur while persisting the dataset
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Persists a completed dataset
///
/// Writers receive the final flat record list after the run; they never see
/// descriptors or intermediate per-target results.
pub trait DatasetWriter {
    /// Writes the full dataset, replacing any previous output
    fn write_dataset(&self, dataset: &Dataset) -> OutputResult<()>;
}
