//! Adapters - concrete collaborators behind the shared ports
//!
//! - `geo_engine`: planar `GeometryEngine` over `geo`
//! - `json_source`: `FeatureSource` reading JSON documents with WKT geometries

pub mod geo_engine;
pub mod json_source;

pub use geo_engine::{PlanarEngine, PlanarGeometry};
pub use json_source::{parse_wkt, JsonFeatureSource};
