//! FeatureTable - ordered, immutable collection of dissolved features

use crate::shared::models::{Envelope, Feature};

/// Dense, 0-based, read-only table of grouped features.
///
/// Invariant: `features[k].index == k` for every row, and identifiers are
/// unique. Built once by `FeatureTableBuilder`; there is no mutating API.
#[derive(Debug, Clone)]
pub struct FeatureTable<G> {
    features: Vec<Feature<G>>,
    raw_count: usize,
    unknown_count: usize,
}

impl<G> FeatureTable<G> {
    pub(crate) fn from_rows(
        features: Vec<Feature<G>>,
        raw_count: usize,
        unknown_count: usize,
    ) -> Self {
        debug_assert!(features.iter().enumerate().all(|(k, f)| f.index == k));
        Self {
            features,
            raw_count,
            unknown_count,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Feature<G>> {
        self.features.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature<G>> {
        self.features.iter()
    }

    pub fn features(&self) -> &[Feature<G>] {
        &self.features
    }

    /// Identifier of row `index`. Panics if out of range.
    pub fn identifier(&self, index: usize) -> &str {
        &self.features[index].identifier
    }

    pub fn geometry(&self, index: usize) -> &G {
        &self.features[index].geometry
    }

    pub fn envelope(&self, index: usize) -> Envelope {
        self.features[index].envelope
    }

    /// Row index of an identifier (binary search; rows are identifier-sorted)
    pub fn position(&self, identifier: &str) -> Option<usize> {
        self.features
            .binary_search_by(|f| f.identifier.as_str().cmp(identifier))
            .ok()
    }

    /// Number of raw features that went into the table
    pub fn raw_count(&self) -> usize {
        self.raw_count
    }

    /// Number of synthetic "Unknown k" identifiers issued
    pub fn unknown_count(&self) -> usize {
        self.unknown_count
    }

    /// Attribute column names across all rows, sorted
    pub fn attribute_columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = self
            .features
            .iter()
            .flat_map(|f| f.attributes.keys().map(String::as_str))
            .collect();
        columns.sort_unstable();
        columns.dedup();
        columns
    }
}

impl<'a, G> IntoIterator for &'a FeatureTable<G> {
    type Item = &'a Feature<G>;
    type IntoIter = std::slice::Iter<'a, Feature<G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
