//! Feature source contract

use thiserror::Error;

use crate::shared::models::RawFeature;

/// Input-side failures. Always fatal, raised before any adjacency work.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read feature source '{path}': {reason}")]
    Unreadable { path: String, reason: String },

    #[error("malformed feature source: {0}")]
    Malformed(String),

    #[error("feature source '{0}' contains no features")]
    Empty(String),

    #[error("identifier field '{0}' is not present on any feature")]
    MissingField(String),
}

/// Ordered sequence of `(attributes, geometry)` records.
///
/// Coordinate system and file format belong entirely to the implementation.
pub trait FeatureSource {
    type Geometry;

    /// Short name used for logging and default output directory naming
    fn name(&self) -> &str;

    /// Read every feature, preserving source order
    fn read(&mut self) -> Result<Vec<RawFeature<Self::Geometry>>, InputError>;
}

/// In-memory feature source
#[derive(Debug, Clone)]
pub struct VecFeatureSource<G> {
    name: String,
    features: Vec<RawFeature<G>>,
}

impl<G> VecFeatureSource<G> {
    pub fn new(name: impl Into<String>, features: Vec<RawFeature<G>>) -> Self {
        Self {
            name: name.into(),
            features,
        }
    }
}

impl<G: Clone> FeatureSource for VecFeatureSource<G> {
    type Geometry = G;

    fn name(&self) -> &str {
        &self.name
    }

    fn read(&mut self) -> Result<Vec<RawFeature<G>>, InputError> {
        if self.features.is_empty() {
            return Err(InputError::Empty(self.name.clone()));
        }
        Ok(self.features.clone())
    }
}
