//! Adjacency domain types

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::ports::GeometryError;

/// Canonical adjacency pair: `i < j`, both FeatureTable indices.
///
/// Ordering is lexicographic on `(i, j)`, which is the merged output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AdjacencyPair {
    pub i: usize,
    pub j: usize,
}

impl AdjacencyPair {
    /// Canonicalize an unordered pair. `None` for a self pair.
    pub fn new(a: usize, b: usize) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { i: a, j: b }),
            std::cmp::Ordering::Greater => Some(Self { i: b, j: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn as_tuple(&self) -> (usize, usize) {
        (self.i, self.j)
    }
}

impl fmt::Display for AdjacencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

impl From<AdjacencyPair> for (usize, usize) {
    fn from(pair: AdjacencyPair) -> Self {
        (pair.i, pair.j)
    }
}

/// Failure of the detection phase. Any one of these aborts the whole phase.
#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("geometry error at feature {index}: {source}")]
    Geometry {
        index: usize,
        #[source]
        source: GeometryError,
    },

    #[error("worker {worker} terminated abnormally: {reason}")]
    WorkerPanicked { worker: usize, reason: String },

    #[error("failed to start worker pool: {0}")]
    Pool(String),
}

impl DetectionError {
    pub fn geometry(index: usize, source: GeometryError) -> Self {
        DetectionError::Geometry { index, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_canonical() {
        assert_eq!(AdjacencyPair::new(5, 2), Some(AdjacencyPair { i: 2, j: 5 }));
        assert_eq!(AdjacencyPair::new(2, 5), Some(AdjacencyPair { i: 2, j: 5 }));
        assert_eq!(AdjacencyPair::new(3, 3), None);
    }

    #[test]
    fn test_pair_ordering_is_lexicographic() {
        let mut pairs = vec![
            AdjacencyPair { i: 1, j: 3 },
            AdjacencyPair { i: 0, j: 4 },
            AdjacencyPair { i: 1, j: 2 },
        ];
        pairs.sort();
        let tuples: Vec<(usize, usize)> = pairs.into_iter().map(Into::into).collect();
        assert_eq!(tuples, vec![(0, 4), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_error_display() {
        let err = DetectionError::geometry(7, GeometryError::invalid("bad ring"));
        assert!(err.to_string().contains("feature 7"));

        let err = DetectionError::WorkerPanicked {
            worker: 2,
            reason: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "worker 2 terminated abnormally: boom");
    }
}
