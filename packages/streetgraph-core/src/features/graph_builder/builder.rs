//! Feature graph construction from merged adjacency pairs

use tracing::{info, warn};

use super::domain::{FeatureGraph, NodeLabel};
use crate::config::{Representation, ValidatedConfig};
use crate::features::adjacency::AdjacencyPair;
use crate::features::feature_table::FeatureTable;

/// Builds a [`FeatureGraph`] in `name` or `id` representation
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    representation: Representation,
}

impl GraphBuilder {
    pub fn new(representation: Representation) -> Self {
        Self { representation }
    }

    pub fn from_config(config: &ValidatedConfig) -> Self {
        Self::new(config.representation())
    }

    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// Every table row becomes a node (isolated features included), then
    /// every pair becomes an edge.
    pub fn build<G>(&self, table: &FeatureTable<G>, pairs: &[AdjacencyPair]) -> FeatureGraph {
        let mut graph = FeatureGraph::with_capacity(table.len(), pairs.len());
        for feature in table {
            graph.add_node(self.label(table, feature.index));
        }

        let mut skipped = 0usize;
        for pair in pairs {
            if pair.j >= table.len() {
                skipped += 1;
                continue;
            }
            graph.add_edge(self.label(table, pair.i), self.label(table, pair.j));
        }
        if skipped > 0 {
            warn!(skipped, "pairs referencing rows outside the table were ignored");
        }

        info!(
            representation = %self.representation,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        graph
    }

    fn label<G>(&self, table: &FeatureTable<G>, index: usize) -> NodeLabel {
        match self.representation {
            Representation::Name => NodeLabel::Name(table.identifier(index).to_string()),
            Representation::Id => NodeLabel::Index(index),
        }
    }
}
