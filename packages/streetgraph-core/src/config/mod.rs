//! Configuration System
//!
//! Two ways in, one validated value out:
//!
//! ```rust,ignore
//! use streetgraph_core::config::{GraphConfig, IdentifierSpec, ValidatedConfig};
//!
//! // Builder API
//! let config = GraphConfig::new(IdentifierSpec::composite(["NM_TIPO", "NM_LOG"]))
//!     .buffered(5.0)
//!     .workers(4)
//!     .build()?;
//!
//! // YAML (schema v1)
//! let config = ValidatedConfig::from_yaml("config.yaml")?;
//! ```
//!
//! Validation runs once in `GraphConfig::build`; the resulting
//! `ValidatedConfig` is immutable and is what every component receives.

pub mod error;
pub mod graph_config;
pub mod io;
pub mod section_configs;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use graph_config::{GraphConfig, ValidatedConfig, SUPPORTED_VERSIONS};
pub use section_configs::{
    AdjacencyConfig, AdjacencyMode, AdjacencyModeKind, IdentifierSpec, OutputConfig,
    ParallelConfig, Representation,
};
pub use validation::Validatable;
