//! Pipeline orchestration
//!
//! Sequences the index pass and the per-target detail passes, owning the
//! navigator for the whole run. A failed target is logged and recorded but
//! never aborts the run; only an index-pass failure propagates, since there
//! is nothing to iterate over without it.

use crate::config::Config;
use crate::extract::{DetailExtractor, IndexExtractor};
use crate::navigator::Navigator;
use crate::records::Dataset;
use crate::HarvestError;
use chrono::{DateTime, Utc};
use std::time::Duration;
use url::Url;

/// One target that contributed nothing to the dataset, with its cause
#[derive(Debug)]
pub struct TargetFailure {
    /// Name of the failed target, from its descriptor
    pub name: String,

    /// The error that disqualified it
    pub error: HarvestError,
}

/// Everything a completed run produced
#[derive(Debug)]
pub struct RunOutcome {
    /// The aggregated observations, in target order then row order
    pub dataset: Dataset,

    /// Number of descriptors the index pass produced
    pub targets_found: usize,

    /// Targets whose detail pass failed entirely
    pub target_failures: Vec<TargetFailure>,

    /// Malformed rows skipped during the index pass
    pub index_rows_skipped: usize,

    /// Malformed rows skipped across all detail passes
    pub detail_rows_skipped: usize,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunOutcome {
    /// Run duration in seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}

/// Sequences the two extraction passes over a navigator
pub struct Orchestrator {
    index_url: Url,
    index: IndexExtractor,
    detail: DetailExtractor,
    page_pause: Duration,
}

impl Orchestrator {
    /// Builds an orchestrator from the configuration
    ///
    /// The selector descriptors are injected into the extractors here, so
    /// parsing logic stays decoupled from any one page family's markup.
    pub fn new(config: &Config) -> Result<Self, HarvestError> {
        let index_url = config.index_url()?;
        Ok(Orchestrator {
            index_url,
            index: IndexExtractor::new(
                config.selectors.index_table.clone(),
                config.limits.clone(),
            ),
            detail: DetailExtractor::new(
                config.selectors.detail_table.clone(),
                config.limits.clone(),
            ),
            page_pause: Duration::from_millis(config.limits.page_pause_ms),
        })
    }

    /// Runs the full pipeline: index pass, then one detail pass per target
    ///
    /// Returns an outcome whenever the index pass succeeded, even if every
    /// detail pass failed; the dataset is then simply empty. Each run starts
    /// clean, with no state carried over from previous runs.
    pub async fn run<N: Navigator>(&self, navigator: &mut N) -> Result<RunOutcome, HarvestError> {
        let started_at = Utc::now();
        tracing::info!("Starting harvest from {}", self.index_url);

        // Index failure is fatal: report it with the URL for diagnosis
        let index = self
            .index
            .extract_targets(navigator, &self.index_url)
            .await
            .map_err(|e| {
                tracing::error!("Index pass failed for {}: {}", self.index_url, e);
                e
            })?;

        let mut dataset = Dataset::new();
        let mut target_failures = Vec::new();
        let mut detail_rows_skipped = 0;

        for target in &index.targets {
            if !self.page_pause.is_zero() {
                tokio::time::sleep(self.page_pause).await;
            }

            match self.detail.extract_observations(navigator, target).await {
                Ok(extraction) => {
                    detail_rows_skipped += extraction.skipped.len();
                    dataset.extend(extraction.observations);
                }
                Err(error) => {
                    tracing::warn!("Skipping target '{}': {}", target.name, error);
                    target_failures.push(TargetFailure {
                        name: target.name.clone(),
                        error,
                    });
                }
            }
        }

        let finished_at = Utc::now();
        tracing::info!(
            "Harvest finished: {} observations from {} targets ({} targets failed)",
            dataset.len(),
            index.targets.len() - target_failures.len(),
            target_failures.len()
        );

        Ok(RunOutcome {
            dataset,
            targets_found: index.targets.len(),
            target_failures,
            index_rows_skipped: index.skipped.len(),
            detail_rows_skipped,
            started_at,
            finished_at,
        })
    }
}
