//! Spatial index over FeatureTable envelopes (R-tree)

pub mod rtree_index;

pub use rtree_index::{IndexedEnvelope, SpatialIndex};
