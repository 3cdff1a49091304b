//! Human-readable run reports

use crate::pipeline::RunOutcome;

/// Formats a run outcome as a plain-text report
pub fn format_report(outcome: &RunOutcome) -> String {
    let mut report = String::new();

    report.push_str("=== Harvest Report ===\n\n");
    report.push_str(&format!("Started:  {}\n", outcome.started_at.to_rfc3339()));
    report.push_str(&format!("Finished: {}\n", outcome.finished_at.to_rfc3339()));
    report.push_str(&format!(
        "Duration: {} seconds\n\n",
        outcome.duration_seconds()
    ));

    report.push_str(&format!("Targets found:      {}\n", outcome.targets_found));
    report.push_str(&format!(
        "Targets harvested:  {}\n",
        outcome.targets_found - outcome.target_failures.len()
    ));
    report.push_str(&format!(
        "Observations:       {}\n",
        outcome.dataset.len()
    ));
    report.push_str(&format!(
        "Index rows skipped: {}\n",
        outcome.index_rows_skipped
    ));
    report.push_str(&format!(
        "Detail rows skipped: {}\n",
        outcome.detail_rows_skipped
    ));

    if !outcome.target_failures.is_empty() {
        report.push_str("\nFailed targets:\n");
        for failure in &outcome.target_failures {
            report.push_str(&format!("  - {}: {}\n", failure.name, failure.error));
        }
    }

    report
}

/// Prints a run outcome report to stdout
pub fn print_report(outcome: &RunOutcome) {
    print!("{}", format_report(outcome));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::TargetFailure;
    use crate::records::Dataset;
    use crate::{HarvestError, NavigationError};
    use chrono::Utc;

    fn outcome_with_failure() -> RunOutcome {
        let now = Utc::now();
        RunOutcome {
            dataset: Dataset::new(),
            targets_found: 2,
            target_failures: vec![TargetFailure {
                name: "Canada".to_string(),
                error: HarvestError::Navigation(NavigationError::BadStatus {
                    url: "https://example.com/hist/canada.htm".to_string(),
                    status: 404,
                }),
            }],
            index_rows_skipped: 1,
            detail_rows_skipped: 0,
            started_at: now,
            finished_at: now,
        }
    }

    #[test]
    fn test_report_names_failed_targets() {
        let report = format_report(&outcome_with_failure());
        assert!(report.contains("Failed targets:"));
        assert!(report.contains("Canada"));
        assert!(report.contains("404"));
    }

    #[test]
    fn test_report_counts() {
        let report = format_report(&outcome_with_failure());
        assert!(report.contains("Targets found:      2"));
        assert!(report.contains("Targets harvested:  1"));
        assert!(report.contains("Index rows skipped: 1"));
    }

    #[test]
    fn test_report_omits_failure_section_when_clean() {
        let mut outcome = outcome_with_failure();
        outcome.target_failures.clear();
        let report = format_report(&outcome);
        assert!(!report.contains("Failed targets:"));
    }
}
