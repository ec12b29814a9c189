//! Oracles and assertions

use streetgraph_core::config::AdjacencyMode;
use streetgraph_core::{AdjacencyPair, FeatureTable, GeometryEngine, PlanarEngine, PlanarGeometry};

/// O(n²) reference pair set
pub fn brute_force_pairs(
    table: &FeatureTable<PlanarGeometry>,
    mode: AdjacencyMode,
) -> Vec<(usize, usize)> {
    let engine = PlanarEngine::new();
    let mut pairs = Vec::new();
    for i in 0..table.len() {
        let query = match mode {
            AdjacencyMode::Direct => table.geometry(i).clone(),
            AdjacencyMode::Buffered { distance } => {
                engine.buffer(table.geometry(i), distance).expect("buffer")
            }
        };
        for j in (i + 1)..table.len() {
            if engine.intersects(&query, table.geometry(j)).expect("intersects") {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

pub fn as_tuples(pairs: &[AdjacencyPair]) -> Vec<(usize, usize)> {
    pairs.iter().map(|p| p.as_tuple()).collect()
}

/// `i < j` everywhere, strictly increasing (so no repeats)
pub fn assert_canonical(pairs: &[AdjacencyPair]) {
    for pair in pairs {
        assert!(pair.i < pair.j, "non-canonical pair {}", pair);
    }
    for window in pairs.windows(2) {
        assert!(window[0] < window[1], "{} not before {}", window[0], window[1]);
    }
}
