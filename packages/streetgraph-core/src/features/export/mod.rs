//! Graph export
//!
//! Sinks:
//! - `adjlist`: `edges.csv` / `nodes.csv`
//! - `graphml`: `graph.graphml`
//! - `pajek`: `graph.pajek`
//!
//! `atomic` stages every enabled sink and publishes the directory in one rename.

pub mod adjlist;
pub mod atomic;
pub mod domain;
pub mod graphml;
pub mod pajek;

pub use adjlist::AdjacencyListSink;
pub use atomic::{export_atomically, ExportReport};
pub use domain::{ExportContext, ExportError, ExportGraph, GraphSink, TableRow};
pub use graphml::GraphMlSink;
pub use pajek::PajekSink;

use crate::config::OutputConfig;

/// Sinks enabled by `outputs`, in a fixed order
pub fn sinks_for(outputs: OutputConfig) -> Vec<Box<dyn GraphSink>> {
    let mut sinks: Vec<Box<dyn GraphSink>> = Vec::new();
    if outputs.adjacency_list {
        sinks.push(Box::new(AdjacencyListSink));
    }
    if outputs.graphml {
        sinks.push(Box::new(GraphMlSink));
    }
    if outputs.pajek {
        sinks.push(Box::new(PajekSink));
    }
    sinks
}
