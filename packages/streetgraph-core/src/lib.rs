/*
 * Streetgraph Core - Street Adjacency Graph Engine
 *
 * Feature-First Architecture:
 * - shared/      : Common models (Envelope, Feature) and ports (GeometryEngine, FeatureSource)
 * - features/    : Vertical slices (feature_table → spatial_index → adjacency → graph_builder → export)
 * - pipeline/    : Orchestration
 * - adapters/    : Concrete collaborators (planar geo engine, JSON/WKT source)
 * - config/      : YAML configuration, validated once and passed by reference
 *
 * Performance:
 * - R-tree candidate pruning before exact predicates
 * - Rayon fork-join over disjoint index partitions
 */

/// Shared models and ports
pub mod shared;

/// Feature modules (dissolve → index → adjacency → graph → export)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Concrete collaborators behind the ports
pub mod adapters;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use adapters::{JsonFeatureSource, PlanarEngine, PlanarGeometry};
pub use config::{AdjacencyMode, GraphConfig, IdentifierSpec, Representation, ValidatedConfig};
pub use errors::{Result, StreetGraphError};
pub use features::adjacency::AdjacencyPair;
pub use features::feature_table::FeatureTable;
pub use features::graph_builder::{FeatureGraph, LineGraph, NodeLabel, SimpleGraph};
pub use pipeline::{GraphOutput, PipelineOutput, StreetGraphPipeline};
pub use shared::models::{Envelope, RawFeature};
pub use shared::ports::{FeatureSource, GeometryEngine, VecFeatureSource};
