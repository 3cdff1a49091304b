//! Detail-page extraction
//!
//! Visits one target's history page and parses its rate table into dated
//! observations. Dates come from each row's header cell and rates from its
//! first data cell, both as opaque trimmed display strings. The originating
//! descriptor's name and unit label are carried forward unchanged.

use crate::config::LimitConfig;
use crate::extract::row::{fold_rows, RowOutcome, RowParseError, RowSkip};
use crate::navigator::{ElementHandle, Navigator, SelectorSpec};
use crate::records::{RateObservation, TargetDescriptor};
use crate::HarvestError;
use std::time::Duration;

/// Result of one detail pass: observations plus row-skip diagnostics
#[derive(Debug, Clone)]
pub struct DetailExtraction {
    pub observations: Vec<RateObservation>,
    pub skipped: Vec<RowSkip>,
}

/// Extracts rate observations from one target's detail page
#[derive(Debug, Clone)]
pub struct DetailExtractor {
    table: SelectorSpec,
    limits: LimitConfig,
}

impl DetailExtractor {
    /// Creates an extractor for the given table selector and limits
    pub fn new(table: SelectorSpec, limits: LimitConfig) -> Self {
        DetailExtractor { table, limits }
    }

    /// Navigates to the descriptor's link and parses its rate table
    ///
    /// At most `max_detail_rows` rows are considered. Failures here are
    /// scoped to this one descriptor; the orchestrator decides whether to
    /// continue with the next target.
    pub async fn extract_observations<N: Navigator>(
        &self,
        navigator: &mut N,
        descriptor: &TargetDescriptor,
    ) -> Result<DetailExtraction, HarvestError> {
        navigator.navigate(&descriptor.link).await?;
        navigator
            .wait_until_present(
                &self.table,
                Duration::from_millis(self.limits.readiness_timeout_ms),
                Duration::from_millis(self.limits.readiness_poll_ms),
            )
            .await?;

        let table = navigator.find_single(&self.table)?;

        let rows = table.find_all(&SelectorSpec::tag("tr"));
        let outcomes = rows
            .into_iter()
            .take(self.limits.max_detail_rows)
            .enumerate()
            .map(|(index, row)| match parse_detail_row(row, descriptor) {
                Ok(observation) => RowOutcome::Parsed(observation),
                Err(error) => RowOutcome::Skipped { index, error },
            });

        let (observations, skipped) = fold_rows(outcomes);
        for skip in &skipped {
            tracing::warn!(
                "Skipping detail row {} for '{}': {}",
                skip.index,
                descriptor.name,
                skip.error
            );
        }

        tracing::debug!(
            "Detail pass for '{}' yielded {} observations ({} rows skipped)",
            descriptor.name,
            observations.len(),
            skipped.len()
        );

        Ok(DetailExtraction {
            observations,
            skipped,
        })
    }
}

/// Parses one detail table row into an observation
fn parse_detail_row(
    row: &ElementHandle,
    descriptor: &TargetDescriptor,
) -> Result<RateObservation, RowParseError> {
    let date = row
        .find(&SelectorSpec::tag("th"))
        .ok_or(RowParseError::MissingCell("th"))?;

    let rate = row
        .find(&SelectorSpec::tag("td"))
        .ok_or(RowParseError::MissingCell("td"))?;

    Ok(RateObservation {
        country: descriptor.name.clone(),
        unit_label: descriptor.unit_label.clone(),
        date: date.text_trimmed(),
        rate: rate.text_trimmed(),
    })
}
