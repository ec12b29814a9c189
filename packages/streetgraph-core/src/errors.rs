//! Error types for streetgraph-core
//!
//! Provides unified error handling across the crate. Component errors
//! (configuration, input, geometry, detection, export) lift into
//! [`StreetGraphError`] through `From` so stages can use `?`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::adjacency::DetectionError;
use crate::features::export::ExportError;
use crate::shared::ports::{GeometryError, InputError};

/// Main error type for streetgraph operations
#[derive(Debug, Error)]
pub enum StreetGraphError {
    /// Missing/invalid configuration key or inconsistent combination
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Unreadable or empty feature source, identifier field absent
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Invalid or degenerate geometry reported by the engine
    #[error("Geometry error: {message}")]
    Geometry {
        message: String,
        #[source]
        source: GeometryError,
    },

    /// A detection worker terminated abnormally
    #[error("Partition error: {0}")]
    Partition(String),

    /// Exporter failure (nothing was published)
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StreetGraphError {
    /// Wrap a geometry error with the stage it was raised in
    pub fn geometry(context: impl Into<String>, source: GeometryError) -> Self {
        let context = context.into();
        StreetGraphError::Geometry {
            message: format!("{}: {}", context, source),
            source,
        }
    }

    /// Short category name, matching the error taxonomy
    pub fn kind(&self) -> &'static str {
        match self {
            StreetGraphError::Config(_) => "config",
            StreetGraphError::Input(_) => "input",
            StreetGraphError::Geometry { .. } => "geometry",
            StreetGraphError::Partition(_) => "partition",
            StreetGraphError::Export(_) => "export",
            StreetGraphError::Io(_) => "io",
        }
    }
}

impl From<GeometryError> for StreetGraphError {
    fn from(err: GeometryError) -> Self {
        StreetGraphError::geometry("geometry engine", err)
    }
}

impl From<DetectionError> for StreetGraphError {
    fn from(err: DetectionError) -> Self {
        match err {
            DetectionError::Geometry { index, source } => {
                StreetGraphError::geometry(format!("adjacency detection at feature {}", index), source)
            }
            other => StreetGraphError::Partition(other.to_string()),
        }
    }
}

/// Result type alias for streetgraph operations
pub type Result<T> = std::result::Result<T, StreetGraphError>;
