//! Partitioned (fork-join) adjacency detection
//!
//! `[0, n)` is split into contiguous ranges, one per worker. Workers share
//! the table and index read-only and own their local pair lists. After the
//! join, local lists are concatenated and sorted into one canonical order.

use std::any::Any;
use std::ops::Range;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, info};

use super::detector::AdjacencyDetector;
use super::domain::{AdjacencyPair, DetectionError};
use crate::shared::ports::GeometryEngine;

// ═══════════════════════════════════════════════════════════════════════════
// Partition plan
// ═══════════════════════════════════════════════════════════════════════════

/// Contiguous, disjoint ranges covering `[0, n)`.
///
/// Sizes differ by at most one; the remainder goes to the leading ranges.
/// With more workers than features the trailing ranges are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPlan {
    ranges: Vec<Range<usize>>,
}

impl PartitionPlan {
    pub fn balanced(n: usize, workers: usize) -> Self {
        let workers = workers.max(1);
        let base = n / workers;
        let remainder = n % workers;

        let mut ranges = Vec::with_capacity(workers);
        let mut start = 0;
        for w in 0..workers {
            let size = base + usize::from(w < remainder);
            ranges.push(start..start + size);
            start += size;
        }
        debug_assert_eq!(start, n);

        Self { ranges }
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Number of partitions (equals the worker count)
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.ranges.iter().map(|r| r.len()).collect()
    }

    /// Partition owning `index`, if any
    pub fn owner(&self, index: usize) -> Option<usize> {
        self.ranges.iter().position(|r| r.contains(&index))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Partitioner
// ═══════════════════════════════════════════════════════════════════════════

/// Runs an [`AdjacencyDetector`] over a [`PartitionPlan`] and merges the result
#[derive(Debug, Clone, Copy)]
pub struct Partitioner {
    workers: usize,
}

impl Partitioner {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn plan(&self, n: usize) -> PartitionPlan {
        PartitionPlan::balanced(n, self.workers)
    }

    /// Detect every pair, fail the whole phase on the first worker failure
    pub fn run<E: GeometryEngine>(
        &self,
        detector: &AdjacencyDetector<'_, E>,
    ) -> Result<Vec<AdjacencyPair>, DetectionError> {
        let start = Instant::now();
        let plan = self.plan(detector.feature_count());
        info!(
            workers = self.workers,
            sizes = ?plan.sizes(),
            "dispatching adjacency partitions"
        );

        let locals = if self.workers == 1 {
            vec![run_partition(detector, 0, &plan.ranges()[0])?]
        } else {
            let pool = ThreadPoolBuilder::new()
                .num_threads(self.workers)
                .thread_name(|i| format!("streetgraph-worker-{}", i))
                .build()
                .map_err(|e| DetectionError::Pool(e.to_string()))?;

            pool.install(|| {
                plan.ranges()
                    .par_iter()
                    .enumerate()
                    .map(|(worker, range)| run_partition(detector, worker, range))
                    .collect::<Result<Vec<_>, _>>()
            })?
        };

        let pairs = merge(locals);
        info!(
            pairs = pairs.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "adjacency detection complete"
        );
        Ok(pairs)
    }
}

fn run_partition<E: GeometryEngine>(
    detector: &AdjacencyDetector<'_, E>,
    worker: usize,
    range: &Range<usize>,
) -> Result<Vec<AdjacencyPair>, DetectionError> {
    let outcome = catch_unwind(AssertUnwindSafe(|| detector.detect_range(range.clone())));
    match outcome {
        Ok(result) => {
            let pairs = result?;
            debug!(worker, range = ?range, pairs = pairs.len(), "partition done");
            Ok(pairs)
        }
        Err(payload) => Err(DetectionError::WorkerPanicked {
            worker,
            reason: panic_reason(payload.as_ref()),
        }),
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Concatenate local pair lists into one sorted list
pub fn merge(locals: Vec<Vec<AdjacencyPair>>) -> Vec<AdjacencyPair> {
    let mut pairs: Vec<AdjacencyPair> = locals.into_iter().flatten().collect();
    pairs.sort_unstable();
    debug_assert!(pairs.windows(2).all(|w| w[0] < w[1]));
    pairs
}
