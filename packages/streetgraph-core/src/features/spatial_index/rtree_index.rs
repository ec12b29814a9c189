//! Spatial indexing for candidate pruning.
//!
//! Uses an R-tree (bulk loaded, so balanced) over FeatureTable envelopes.
//! Queries return a conservative superset; exact predicates run downstream.

use rstar::{RTree, RTreeObject, AABB};
use tracing::debug;

use crate::features::feature_table::FeatureTable;
use crate::shared::models::Envelope;

/// An indexed envelope for R-tree storage.
#[derive(Clone, Debug)]
pub struct IndexedEnvelope {
    pub envelope: Envelope,
    /// FeatureTable index of the owning feature
    pub index: usize,
}

impl RTreeObject for IndexedEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope.to_aabb()
    }
}

/// Read-only bounding-box index over feature envelopes.
///
/// Contains no interior mutability, so a shared reference can be handed to
/// any number of concurrent readers.
#[derive(Clone)]
pub struct SpatialIndex {
    tree: RTree<IndexedEnvelope>,
}

impl SpatialIndex {
    /// Bulk load from envelopes; position `k` gets index `k`
    pub fn new(envelopes: &[Envelope]) -> Self {
        let indexed: Vec<IndexedEnvelope> = envelopes
            .iter()
            .enumerate()
            .map(|(index, envelope)| IndexedEnvelope {
                envelope: *envelope,
                index,
            })
            .collect();

        Self {
            tree: RTree::bulk_load(indexed),
        }
    }

    /// Index every row of a FeatureTable
    pub fn from_table<G>(table: &FeatureTable<G>) -> Self {
        let envelopes: Vec<Envelope> = table.iter().map(|f| f.envelope).collect();
        let index = Self::new(&envelopes);
        debug!(size = index.len(), "spatial index built");
        index
    }

    /// Number of envelopes in the index.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// All indices whose envelope overlaps `envelope` (boundaries inclusive),
    /// in ascending order.
    pub fn query(&self, envelope: &Envelope) -> Vec<usize> {
        let mut hits: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&envelope.to_aabb())
            .map(|indexed| indexed.index)
            .collect();
        hits.sort_unstable();
        hits
    }
}

impl std::fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("size", &self.tree.size())
            .finish()
    }
}
