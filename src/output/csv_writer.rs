//! CSV dataset writer
//!
//! Writes the dataset as a delimited text file with a header row and one data
//! row per observation. Field order is `Country, Monetary Unit, Date, Rate`;
//! there is no index column, and descriptor links are never persisted.

use crate::output::traits::{DatasetWriter, OutputResult};
use crate::records::Dataset;
use std::path::{Path, PathBuf};

/// Column headers, in persisted order
const HEADERS: [&str; 4] = ["Country", "Monetary Unit", "Date", "Rate"];

/// Writes datasets to a CSV file
#[derive(Debug, Clone)]
pub struct CsvDatasetWriter {
    path: PathBuf,
}

impl CsvDatasetWriter {
    /// Creates a writer targeting the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvDatasetWriter { path: path.into() }
    }

    /// The output path this writer targets
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetWriter for CsvDatasetWriter {
    fn write_dataset(&self, dataset: &Dataset) -> OutputResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(HEADERS)?;

        for observation in dataset {
            writer.write_record([
                observation.country.as_str(),
                observation.unit_label.as_str(),
                observation.date.as_str(),
                observation.rate.as_str(),
            ])?;
        }

        writer.flush()?;
        tracing::info!(
            "Wrote {} observations to {}",
            dataset.len(),
            self.path.display()
        );
        Ok(())
    }
}
