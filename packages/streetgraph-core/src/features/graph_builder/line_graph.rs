//! Line-graph (dual graph) transform
//!
//! Nodes of the result are the edges of the source graph. Two of them are
//! joined iff their endpoint pairs share exactly one label. Purely
//! structural; runs after the source graph is complete.

use std::hash::Hash;

use tracing::info;

use super::domain::{EdgeKey, SimpleGraph};

/// Line graph of `graph`.
///
/// Every source edge appears as a node, including edges whose endpoints
/// have no other incident edge.
pub fn line_graph<L: Clone + Eq + Hash + Ord>(graph: &SimpleGraph<L>) -> SimpleGraph<EdgeKey<L>> {
    let source_edges = graph.edges();
    let mut result = SimpleGraph::with_capacity(source_edges.len(), source_edges.len());

    for (a, b) in &source_edges {
        result.add_node(EdgeKey::new((*a).clone(), (*b).clone()));
    }

    // Edges incident to the same vertex are pairwise adjacent. In a simple
    // graph two distinct edges share at most one endpoint.
    for vertex in graph.nodes() {
        let incident: Vec<EdgeKey<L>> = graph
            .neighbors(vertex)
            .into_iter()
            .map(|n| EdgeKey::new(vertex.clone(), n.clone()))
            .collect();

        for (k, first) in incident.iter().enumerate() {
            for second in &incident[k + 1..] {
                debug_assert_eq!(first.shared_endpoints(second), 1);
                result.add_edge(first.clone(), second.clone());
            }
        }
    }

    info!(
        nodes = result.node_count(),
        edges = result.edge_count(),
        "line graph built"
    );
    result
}
