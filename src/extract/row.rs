//! Per-row parse outcomes
//!
//! A malformed table row is never an error that escalates past its extractor.
//! Row parsing returns an explicit outcome instead, and the caller folds the
//! outcome sequence into kept values plus skip diagnostics, making the
//! skip-and-continue policy a plain data transformation.

use thiserror::Error;

/// Reasons a table row yields no record
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RowParseError {
    #[error("row has no link element")]
    MissingLink,

    #[error("row link has no navigation target")]
    EmptyLink,

    #[error("row link target could not be resolved: {0}")]
    BadLink(String),

    #[error("row has no <{0}> cell")]
    MissingCell(&'static str),
}

/// Outcome of parsing a single table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome<T> {
    /// The row produced a record
    Parsed(T),

    /// The row was malformed and contributes nothing
    Skipped {
        /// Zero-based position of the row in its table
        index: usize,
        error: RowParseError,
    },
}

/// Diagnostic record of one skipped row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSkip {
    /// Zero-based position of the row in its table
    pub index: usize,

    /// Why the row was skipped
    pub error: RowParseError,
}

/// Folds a sequence of row outcomes into kept values and skip diagnostics
///
/// Order of the kept values matches the order of the parsed outcomes; a
/// skipped row never affects its siblings.
pub fn fold_rows<T>(outcomes: impl IntoIterator<Item = RowOutcome<T>>) -> (Vec<T>, Vec<RowSkip>) {
    let mut kept = Vec::new();
    let mut skipped = Vec::new();

    for outcome in outcomes {
        match outcome {
            RowOutcome::Parsed(value) => kept.push(value),
            RowOutcome::Skipped { index, error } => skipped.push(RowSkip { index, error }),
        }
    }

    (kept, skipped)
}
