//! Graph domain: node labels, edge keys and the simple undirected graph

use std::fmt;
use std::hash::Hash;

use ahash::AHashMap;
use petgraph::graph::{NodeIndex, UnGraph};

/// Node label of a feature graph
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeLabel {
    /// FeatureTable index (`id` representation)
    Index(usize),
    /// Feature identifier (`name` representation)
    Name(String),
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeLabel::Index(i) => write!(f, "{}", i),
            NodeLabel::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for NodeLabel {
    fn from(index: usize) -> Self {
        NodeLabel::Index(index)
    }
}

impl From<&str> for NodeLabel {
    fn from(name: &str) -> Self {
        NodeLabel::Name(name.to_string())
    }
}

/// Unordered endpoint pair, stored as `(min, max)`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey<L> {
    low: L,
    high: L,
}

impl<L: Ord> EdgeKey<L> {
    pub fn new(a: L, b: L) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> &L {
        &self.low
    }

    pub fn high(&self) -> &L {
        &self.high
    }

    /// Number of endpoint labels shared with `other` (0, 1 or 2)
    pub fn shared_endpoints(&self, other: &Self) -> usize {
        let mut shared = 0;
        if self.low == other.low || self.low == other.high {
            shared += 1;
        }
        if self.high != self.low && (self.high == other.low || self.high == other.high) {
            shared += 1;
        }
        shared
    }
}

impl<L: fmt::Display> fmt::Display for EdgeKey<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SimpleGraph
// ═══════════════════════════════════════════════════════════════════════════

/// Undirected simple graph keyed by label.
///
/// No self-loops, no parallel edges: re-inserting an existing edge is a
/// no-op. Query results are sorted so that iteration order never depends on
/// insertion order.
#[derive(Clone)]
pub struct SimpleGraph<L> {
    graph: UnGraph<L, ()>,
    label_to_node: AHashMap<L, NodeIndex>,
}

/// Feature graph (nodes are features)
pub type FeatureGraph = SimpleGraph<NodeLabel>;

/// Line graph of a feature graph (nodes are feature-graph edges)
pub type LineGraph = SimpleGraph<EdgeKey<NodeLabel>>;

impl<L: Clone + Eq + Hash + Ord> SimpleGraph<L> {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
            label_to_node: AHashMap::new(),
        }
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(nodes, edges),
            label_to_node: AHashMap::with_capacity(nodes),
        }
    }

    /// Insert `label` if absent; returns its node index either way
    pub fn add_node(&mut self, label: L) -> NodeIndex {
        if let Some(&idx) = self.label_to_node.get(&label) {
            return idx;
        }
        let idx = self.graph.add_node(label.clone());
        self.label_to_node.insert(label, idx);
        idx
    }

    /// Insert an undirected edge, adding missing endpoints.
    ///
    /// Returns `false` when nothing changed (self-loop or existing edge).
    pub fn add_edge(&mut self, a: L, b: L) -> bool {
        if a == b {
            return false;
        }
        let ia = self.add_node(a);
        let ib = self.add_node(b);
        if self.graph.find_edge(ia, ib).is_some() {
            return false;
        }
        self.graph.add_edge(ia, ib, ());
        true
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains_node(&self, label: &L) -> bool {
        self.label_to_node.contains_key(label)
    }

    /// Order-insensitive edge lookup
    pub fn contains_edge(&self, a: &L, b: &L) -> bool {
        match (self.label_to_node.get(a), self.label_to_node.get(b)) {
            (Some(&ia), Some(&ib)) => self.graph.find_edge(ia, ib).is_some(),
            _ => false,
        }
    }

    /// Sorted neighbors of `label` (empty if absent)
    pub fn neighbors(&self, label: &L) -> Vec<&L> {
        let Some(&idx) = self.label_to_node.get(label) else {
            return Vec::new();
        };
        let mut neighbors: Vec<&L> = self.graph.neighbors(idx).map(|n| &self.graph[n]).collect();
        neighbors.sort();
        neighbors
    }

    pub fn degree(&self, label: &L) -> usize {
        self.label_to_node
            .get(label)
            .map(|&idx| self.graph.neighbors(idx).count())
            .unwrap_or(0)
    }

    /// All node labels, sorted
    pub fn nodes(&self) -> Vec<&L> {
        let mut nodes: Vec<&L> = self.graph.node_indices().map(|n| &self.graph[n]).collect();
        nodes.sort();
        nodes
    }

    /// All edges as `(min, max)`, sorted
    pub fn edges(&self) -> Vec<(&L, &L)> {
        let mut edges: Vec<(&L, &L)> = self
            .graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(a, b)| {
                let (la, lb) = (&self.graph[a], &self.graph[b]);
                if la <= lb {
                    (la, lb)
                } else {
                    (lb, la)
                }
            })
            .collect();
        edges.sort();
        edges
    }

    /// Underlying petgraph graph
    pub fn inner(&self) -> &UnGraph<L, ()> {
        &self.graph
    }
}

impl<L: Clone + Eq + Hash + Ord> Default for SimpleGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> fmt::Debug for SimpleGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleGraph")
            .field("nodes", &self.graph.node_count())
            .field("edges", &self.graph.edge_count())
            .finish()
    }
}
