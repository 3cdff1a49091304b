//! Core data model: target descriptors, rate observations, and the dataset
//!
//! All three types live for a single pipeline run. Descriptors are produced by
//! the index pass and consumed by the detail pass; observations accumulate
//! into the dataset, which is handed to a writer and discarded.

use url::Url;

/// One navigable target parsed from a row of the index table
///
/// A descriptor is only constructed from a row that yielded a parseable link
/// and a unit cell; rows missing either are skipped, never padded with
/// defaults. The link is used for navigation only and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDescriptor {
    /// Visible text of the row's first link element (the country name)
    pub name: String,

    /// Absolute navigation target of that link
    pub link: Url,

    /// Text of the row's first data cell (the monetary unit)
    pub unit_label: String,
}

/// One dated rate record parsed from a row of a detail table
///
/// `date` and `rate` are opaque display strings trimmed of surrounding
/// whitespace; no numeric or date parsing is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateObservation {
    /// Country name carried forward from the originating descriptor
    pub country: String,

    /// Monetary unit carried forward from the originating descriptor
    pub unit_label: String,

    /// Observation date as displayed on the page
    pub date: String,

    /// Exchange rate as displayed on the page
    pub rate: String,
}

/// Ordered collection of rate observations
///
/// Insertion order is (target order from the index) then (row order within
/// each detail page). Duplicates are retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<RateObservation>,
}

impl Dataset {
    /// Creates an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single observation
    pub fn push(&mut self, observation: RateObservation) {
        self.records.push(observation);
    }

    /// Appends a sequence of observations, preserving their order
    pub fn extend(&mut self, observations: impl IntoIterator<Item = RateObservation>) {
        self.records.extend(observations);
    }

    /// Returns the number of observations
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset holds no observations
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the observations in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, RateObservation> {
        self.records.iter()
    }

    /// Returns the observations as a slice
    pub fn records(&self) -> &[RateObservation] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a RateObservation;
    type IntoIter = std::slice::Iter<'a, RateObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
