//! Pipeline result types

use std::time::Duration;

use serde::Serialize;

use crate::features::adjacency::AdjacencyPair;
use crate::features::export::ExportGraph;
use crate::features::feature_table::FeatureTable;
use crate::features::graph_builder::{FeatureGraph, LineGraph};

/// Graph produced by a run
#[derive(Debug, Clone)]
pub enum GraphOutput {
    /// Streets as nodes
    Nodes(FeatureGraph),
    /// Streets as edges (line graph of the feature graph)
    Lines(LineGraph),
}

impl GraphOutput {
    pub fn node_count(&self) -> usize {
        match self {
            GraphOutput::Nodes(g) => g.node_count(),
            GraphOutput::Lines(g) => g.node_count(),
        }
    }

    pub fn edge_count(&self) -> usize {
        match self {
            GraphOutput::Nodes(g) => g.edge_count(),
            GraphOutput::Lines(g) => g.edge_count(),
        }
    }

    pub fn is_line_graph(&self) -> bool {
        matches!(self, GraphOutput::Lines(_))
    }

    pub fn as_feature_graph(&self) -> Option<&FeatureGraph> {
        match self {
            GraphOutput::Nodes(g) => Some(g),
            GraphOutput::Lines(_) => None,
        }
    }

    pub fn as_line_graph(&self) -> Option<&LineGraph> {
        match self {
            GraphOutput::Lines(g) => Some(g),
            GraphOutput::Nodes(_) => None,
        }
    }

    pub fn as_export(&self) -> ExportGraph<'_> {
        match self {
            GraphOutput::Nodes(g) => ExportGraph::Nodes(g),
            GraphOutput::Lines(g) => ExportGraph::Lines(g),
        }
    }
}

/// Wall-clock time spent per stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StageDurations {
    pub read: Duration,
    pub table: Duration,
    pub index: Duration,
    pub detection: Duration,
    pub graph: Duration,
}

impl StageDurations {
    pub fn total(&self) -> Duration {
        self.read + self.table + self.index + self.detection + self.graph
    }
}

/// Counters collected during a run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineStats {
    pub raw_features: usize,
    pub features: usize,
    pub unknown_labels: usize,
    pub pairs: usize,
    pub nodes: usize,
    pub edges: usize,
    pub workers: usize,
    pub durations: StageDurations,
}

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct PipelineOutput<G> {
    pub table: FeatureTable<G>,
    /// Merged canonical pairs, strictly increasing
    pub pairs: Vec<AdjacencyPair>,
    pub graph: GraphOutput,
    pub stats: PipelineStats,
}
