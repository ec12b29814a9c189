//! Geometry engine capability contract

use std::fmt;

use thiserror::Error;

use crate::shared::models::Envelope;

/// Errors reported by a geometry engine
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeometryError {
    /// Geometry is malformed (e.g. non-finite coordinates)
    #[error("invalid geometry: {0}")]
    Invalid(String),

    /// Geometry has no extent the operation can work with (e.g. empty)
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    /// Operation not supported for this geometry/argument combination
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

impl GeometryError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        GeometryError::Invalid(msg.into())
    }

    pub fn degenerate(msg: impl Into<String>) -> Self {
        GeometryError::Degenerate(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        GeometryError::Unsupported(msg.into())
    }
}

pub type GeometryResult<T> = std::result::Result<T, GeometryError>;

/// Geometric primitives the adjacency engine depends on.
///
/// Implementations must be deterministic and free of side effects: the same
/// engine value is shared by reference across every detection worker.
pub trait GeometryEngine: Send + Sync {
    /// Opaque geometry handle
    type Geometry: Clone + fmt::Debug + Send + Sync;

    /// Exact intersection test
    fn intersects(&self, a: &Self::Geometry, b: &Self::Geometry) -> GeometryResult<bool>;

    /// Region within `distance` of `geometry`
    fn buffer(&self, geometry: &Self::Geometry, distance: f64) -> GeometryResult<Self::Geometry>;

    /// Merge several geometries into one
    fn union(&self, geometries: &[Self::Geometry]) -> GeometryResult<Self::Geometry>;

    /// Bounding box of a geometry
    fn envelope(&self, geometry: &Self::Geometry) -> GeometryResult<Envelope>;

    /// Text rendering used by the FeatureTable dump
    fn to_wkt(&self, geometry: &Self::Geometry) -> String;
}
