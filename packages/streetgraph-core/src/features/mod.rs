//! Feature modules
//!
//! Pipeline order: feature_table → spatial_index → adjacency → graph_builder → export

pub mod adjacency;
pub mod export;
pub mod feature_table;
pub mod graph_builder;
pub mod spatial_index;
