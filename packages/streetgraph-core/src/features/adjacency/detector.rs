//! Exact adjacency evaluation over index candidates
//!
//! For feature `i`, candidates come from the spatial index; only `j > i`
//! is evaluated, so every unordered relation is produced exactly once, by
//! its smaller index, whichever partition that index lives in.

use std::ops::Range;

use tracing::trace;

use super::domain::{AdjacencyPair, DetectionError};
use crate::config::AdjacencyMode;
use crate::features::feature_table::FeatureTable;
use crate::features::spatial_index::SpatialIndex;
use crate::shared::models::Envelope;
use crate::shared::ports::GeometryEngine;

/// Detects adjacency pairs against a shared, read-only table and index
pub struct AdjacencyDetector<'a, E: GeometryEngine> {
    engine: &'a E,
    table: &'a FeatureTable<E::Geometry>,
    index: &'a SpatialIndex,
    mode: AdjacencyMode,
}

impl<'a, E: GeometryEngine> AdjacencyDetector<'a, E> {
    pub fn new(
        engine: &'a E,
        table: &'a FeatureTable<E::Geometry>,
        index: &'a SpatialIndex,
        mode: AdjacencyMode,
    ) -> Self {
        Self {
            engine,
            table,
            index,
            mode,
        }
    }

    pub fn mode(&self) -> AdjacencyMode {
        self.mode
    }

    /// Number of features the detector runs over
    pub fn feature_count(&self) -> usize {
        self.table.len()
    }

    /// Pairs whose smaller index lies in `range`, in `(i, j)` order.
    ///
    /// The first geometry failure aborts the range.
    pub fn detect_range(&self, range: Range<usize>) -> Result<Vec<AdjacencyPair>, DetectionError> {
        let end = range.end.min(self.table.len());
        let mut pairs = Vec::new();
        for i in range.start..end {
            self.detect_feature(i, &mut pairs)?;
        }
        Ok(pairs)
    }

    /// Every pair in the table, single-threaded
    pub fn detect_all(&self) -> Result<Vec<AdjacencyPair>, DetectionError> {
        self.detect_range(0..self.table.len())
    }

    fn detect_feature(
        &self,
        i: usize,
        out: &mut Vec<AdjacencyPair>,
    ) -> Result<(), DetectionError> {
        let own = self.table.geometry(i);

        match self.mode {
            AdjacencyMode::Direct => {
                let envelope = self.table.envelope(i);
                self.evaluate(i, own, envelope, out)
            }
            AdjacencyMode::Buffered { distance } => {
                let buffered = self
                    .engine
                    .buffer(own, distance)
                    .map_err(|e| DetectionError::geometry(i, e))?;
                let envelope = self
                    .engine
                    .envelope(&buffered)
                    .map_err(|e| DetectionError::geometry(i, e))?;
                self.evaluate(i, &buffered, envelope, out)
            }
        }
    }

    fn evaluate(
        &self,
        i: usize,
        query: &E::Geometry,
        envelope: Envelope,
        out: &mut Vec<AdjacencyPair>,
    ) -> Result<(), DetectionError> {
        let candidates = self.index.query(&envelope);
        trace!(feature = i, candidates = candidates.len(), "evaluating candidates");

        // Candidates come back ascending, so pairs for `i` are emitted in `j` order
        for j in candidates.into_iter().filter(|&j| j > i) {
            let hit = self
                .engine
                .intersects(query, self.table.geometry(j))
                .map_err(|e| DetectionError::geometry(j, e))?;
            if hit {
                out.push(AdjacencyPair { i, j });
            }
        }
        Ok(())
    }
}
