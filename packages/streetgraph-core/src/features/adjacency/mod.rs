//! Adjacency detection
//!
//! - `domain`: canonical pairs and the detection error
//! - `detector`: index-pruned exact evaluation (direct or buffered)
//! - `partition`: partition plan, worker pool and merge

pub mod detector;
pub mod domain;
pub mod partition;

pub use detector::AdjacencyDetector;
pub use domain::{AdjacencyPair, DetectionError};
pub use partition::{merge, PartitionPlan, Partitioner};
