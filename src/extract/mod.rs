//! Extraction module: the two-stage parsing pipeline
//!
//! The index pass turns the index page's table into target descriptors; the
//! detail pass turns each target's history table into rate observations.
//! Both passes share the same row-level policy: a malformed row is skipped
//! with a diagnostic and never aborts the pass.

mod detail;
mod index;
mod row;

pub use detail::{DetailExtraction, DetailExtractor};
pub use index::{IndexExtraction, IndexExtractor};
pub use row::{fold_rows, RowOutcome, RowParseError, RowSkip};
