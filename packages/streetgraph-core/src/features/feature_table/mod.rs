//! FeatureTable - grouping raw features into a dense, identifier-sorted table
//!
//! - Domain: `FeatureTable` (read-only after construction)
//! - Dissolve: `FeatureTableBuilder` (identifier labelling, grouping, geometry union)

pub mod dissolve;
pub mod domain;

pub use dissolve::FeatureTableBuilder;
pub use domain::FeatureTable;
