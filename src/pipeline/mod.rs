//! Pipeline module: index pass, detail passes, aggregation
//!
//! The orchestrator owns the run from first navigation to the final dataset.
//! `harvest` is the convenience entry point the CLI uses.

mod orchestrator;

pub use orchestrator::{Orchestrator, RunOutcome, TargetFailure};

use crate::config::Config;
use crate::navigator::Navigator;
use crate::HarvestError;

/// Runs a complete harvest with the given configuration and navigator
///
/// # Arguments
///
/// * `config` - The harvester configuration
/// * `navigator` - The navigator to drive; owned by this run until it ends
///
/// # Returns
///
/// * `Ok(RunOutcome)` - The aggregated dataset and run diagnostics
/// * `Err(HarvestError)` - The index pass failed; nothing was harvested
pub async fn harvest<N: Navigator>(
    config: &Config,
    navigator: &mut N,
) -> Result<RunOutcome, HarvestError> {
    let orchestrator = Orchestrator::new(config)?;
    orchestrator.run(navigator).await
}
