//! Ports - capability contracts consumed by the core
//!
//! The core never names a concrete geometry type or file format; it talks
//! to these traits. Concrete implementations live in `crate::adapters`.

mod feature_source;
mod geometry_engine;

pub use feature_source::{FeatureSource, InputError, VecFeatureSource};
pub use geometry_engine::{GeometryEngine, GeometryError, GeometryResult};
