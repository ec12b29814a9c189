//! Adjacency detection against brute-force oracles
//!
//! - Direct and buffered modes match an O(n²) scan
//! - Worker count never changes the merged result
//! - Partition boundaries neither lose nor duplicate pairs
//! - A failure in any one partition fails the whole detection phase

mod common;

use common::*;
use pretty_assertions::assert_eq;
use streetgraph_core::config::AdjacencyMode;
use streetgraph_core::features::adjacency::{
    AdjacencyDetector, DetectionError, PartitionPlan, Partitioner,
};
use streetgraph_core::features::spatial_index::SpatialIndex;
use streetgraph_core::{AdjacencyPair, FeatureTable, PlanarEngine, PlanarGeometry};

fn detect(
    table: &FeatureTable<PlanarGeometry>,
    mode: AdjacencyMode,
    workers: usize,
) -> Vec<AdjacencyPair> {
    let engine = PlanarEngine::new();
    let index = SpatialIndex::from_table(table);
    let detector = AdjacencyDetector::new(&engine, table, &index, mode);
    Partitioner::new(workers).run(&detector).unwrap()
}

// ============================================================================
// Ground truth
// ============================================================================

#[test]
fn test_direct_mode_matches_brute_force() {
    let table = build_table(numbered_segments(&seven_segments()));
    let pairs = detect(&table, AdjacencyMode::Direct, 1);

    assert_canonical(&pairs);
    assert_eq!(as_tuples(&pairs), brute_force_pairs(&table, AdjacencyMode::Direct));
    assert_eq!(
        as_tuples(&pairs),
        vec![(0, 1), (0, 2), (0, 5), (2, 3), (3, 6)]
    );
}

#[test]
fn test_buffered_mode_matches_brute_force() {
    let table = build_table(numbered_segments(&seven_segments()));
    for distance in [0.25, 1.0, 3.0, 15.0] {
        let mode = AdjacencyMode::Buffered { distance };
        let pairs = detect(&table, mode, 1);

        assert_canonical(&pairs);
        assert_eq!(
            as_tuples(&pairs),
            brute_force_pairs(&table, mode),
            "distance {}",
            distance
        );
    }
}

#[test]
fn test_buffer_grows_pair_set() {
    let table = build_table(numbered_segments(&seven_segments()));
    let direct = as_tuples(&detect(&table, AdjacencyMode::Direct, 1));
    let buffered = as_tuples(&detect(&table, AdjacencyMode::Buffered { distance: 1.0 }, 1));

    assert!(direct.iter().all(|p| buffered.contains(p)));
    // Segment 1 (x = 1) and segment 5 (x = 0.5) are parallel, 0.5 apart
    assert!(!direct.contains(&(1, 5)));
    assert!(buffered.contains(&(1, 5)));
}

#[test]
fn test_grid_adjacency() {
    // 3 horizontal x 4 vertical streets: every horizontal crosses every vertical
    let table = build_table(numbered_segments(&grid_segments(3, 4)));
    let pairs = detect(&table, AdjacencyMode::Direct, 1);

    assert_eq!(pairs.len(), 12);
    assert!(pairs.iter().all(|p| p.i < 3 && p.j >= 3));
}

// ============================================================================
// Partitioning
// ============================================================================

#[test]
fn test_partition_invariance() {
    let table = build_table(numbered_segments(&grid_segments(6, 5)));
    for mode in [AdjacencyMode::Direct, AdjacencyMode::Buffered { distance: 0.5 }] {
        let single = detect(&table, mode, 1);
        assert_eq!(detect(&table, mode, 2), single);
        assert_eq!(detect(&table, mode, 4), single);
    }
}

#[test]
fn test_seven_features_three_workers() {
    let table = build_table(numbered_segments(&seven_segments()));
    assert_eq!(table.len(), 7);

    let plan = PartitionPlan::balanced(7, 3);
    for index in 0..7 {
        let owners = plan.ranges().iter().filter(|r| r.contains(&index)).count();
        assert_eq!(owners, 1, "index {} owned {} times", index, owners);
    }

    // Union of per-partition lists equals the brute-force set exactly
    let engine = PlanarEngine::new();
    let index = SpatialIndex::from_table(&table);
    let detector = AdjacencyDetector::new(&engine, &table, &index, AdjacencyMode::Direct);
    let mut union: Vec<(usize, usize)> = plan
        .ranges()
        .iter()
        .flat_map(|r| as_tuples(&detector.detect_range(r.clone()).unwrap()))
        .collect();
    union.sort();

    assert_eq!(union, brute_force_pairs(&table, AdjacencyMode::Direct));
    assert_eq!(as_tuples(&detect(&table, AdjacencyMode::Direct, 3)), union);
}

#[test]
fn test_more_workers_than_features() {
    let table = build_table(numbered_segments(&plus_segments()));
    let pairs = detect(&table, AdjacencyMode::Direct, 16);
    assert_eq!(pairs.len(), 6);
}

// ============================================================================
// Worker failures
// ============================================================================

/// Feature 6 of `seven_segments` is the only one with a vertex at x = 11
const FEATURE_SIX_X: f64 = 11.0;

fn detect_with(
    engine: &FaultyEngine,
    mode: AdjacencyMode,
    workers: usize,
) -> Result<Vec<AdjacencyPair>, DetectionError> {
    let table = build_table(numbered_segments(&seven_segments()));
    let index = SpatialIndex::from_table(&table);
    let detector = AdjacencyDetector::new(engine, &table, &index, mode);
    Partitioner::new(workers).run(&detector)
}

#[test]
fn test_geometry_error_fails_every_worker_count() {
    let engine = FaultyEngine::new(FEATURE_SIX_X, Fault::Error);
    for mode in [AdjacencyMode::Direct, AdjacencyMode::Buffered { distance: 1.0 }] {
        for workers in 1..=4 {
            match detect_with(&engine, mode, workers) {
                Err(DetectionError::Geometry { index, .. }) => assert_eq!(index, 6),
                other => panic!("{:?} with {} workers: expected failure, got {:?}", mode, workers, other),
            }
        }
    }
}

#[test]
fn test_worker_panic_fails_phase() {
    let engine = FaultyEngine::new(FEATURE_SIX_X, Fault::Panic);
    for workers in 1..=4 {
        let err = detect_with(&engine, AdjacencyMode::Direct, workers).unwrap_err();
        match err {
            DetectionError::WorkerPanicked { reason, .. } => {
                assert!(reason.contains("corrupt vertex"), "{}", reason)
            }
            other => panic!("expected a panicked worker, got {:?}", other),
        }
    }

    // 7 features over 3 workers: pair (3, 6) belongs to the 3..5 partition
    let err = detect_with(&engine, AdjacencyMode::Direct, 3).unwrap_err();
    assert!(matches!(err, DetectionError::WorkerPanicked { worker: 1, .. }));
}

#[test]
fn test_fault_away_from_every_feature_is_harmless() {
    // No feature has a vertex at x = 100, so detection is unaffected
    let engine = FaultyEngine::new(100.0, Fault::Error);
    let pairs = detect_with(&engine, AdjacencyMode::Direct, 3).unwrap();
    assert_eq!(
        as_tuples(&pairs),
        vec![(0, 1), (0, 2), (0, 5), (2, 3), (3, 6)]
    );
}
