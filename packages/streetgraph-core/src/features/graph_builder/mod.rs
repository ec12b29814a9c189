//! Graph construction
//!
//! - `domain`: labels, edge keys, `SimpleGraph` over petgraph
//! - `builder`: feature graph from a FeatureTable and merged pairs
//! - `line_graph`: dual-graph transform

pub mod builder;
pub mod domain;
pub mod line_graph;

pub use builder::GraphBuilder;
pub use domain::{EdgeKey, FeatureGraph, LineGraph, NodeLabel, SimpleGraph};
pub use line_graph::line_graph;
