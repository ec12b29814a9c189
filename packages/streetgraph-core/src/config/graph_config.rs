//! Top-level configuration
//!
//! One explicit immutable value, built once and passed by reference into
//! every component constructor.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::section_configs::{
    AdjacencyConfig, AdjacencyMode, IdentifierSpec, OutputConfig, ParallelConfig, Representation,
};
use super::validation::Validatable;

/// Supported YAML schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Unvalidated configuration (YAML schema v1 and builder API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    /// Schema version (always 1 for v1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    /// Identifier field or ordered list of fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<IdentifierSpec>,

    #[serde(default)]
    pub adjacency: AdjacencyConfig,

    #[serde(default)]
    pub representation: Representation,

    /// Export the line graph (streets as edges) instead of the feature graph
    #[serde(default)]
    pub line_graph: bool,

    #[serde(default)]
    pub outputs: OutputConfig,

    #[serde(default)]
    pub parallel: ParallelConfig,
}

impl GraphConfig {
    /// Start a v1 configuration keyed by `identifier`
    pub fn new(identifier: IdentifierSpec) -> Self {
        Self {
            version: Some(1),
            identifier: Some(identifier),
            adjacency: AdjacencyConfig::default(),
            representation: Representation::default(),
            line_graph: false,
            outputs: OutputConfig::default(),
            parallel: ParallelConfig::default(),
        }
    }

    pub fn direct(mut self) -> Self {
        self.adjacency = AdjacencyConfig::direct();
        self
    }

    pub fn buffered(mut self, distance: f64) -> Self {
        self.adjacency = AdjacencyConfig::buffered(distance);
        self
    }

    pub fn representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    pub fn line_graph(mut self, enabled: bool) -> Self {
        self.line_graph = enabled;
        self
    }

    /// Adjust export toggles: `.outputs(|o| o.graphml(true))`
    pub fn outputs<F>(mut self, f: F) -> Self
    where
        F: FnOnce(OutputConfig) -> OutputConfig,
    {
        self.outputs = f(self.outputs);
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.parallel.workers = workers;
        self
    }

    /// Validate every section and freeze the configuration
    pub fn build(self) -> ConfigResult<ValidatedConfig> {
        let version = self.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let identifier = self
            .identifier
            .clone()
            .ok_or_else(|| ConfigError::MissingKey("identifier".to_string()))?;
        identifier.validate()?;

        let adjacency = self.adjacency.resolve()?;
        self.parallel.validate()?;

        if !self.outputs.any_enabled() {
            tracing::warn!("all output formats disabled; the graph will be built but not exported");
        }

        Ok(ValidatedConfig {
            identifier,
            adjacency,
            workers: self.parallel.effective_workers(),
            config: self,
        })
    }

    /// Human-readable one-line summary
    pub fn describe(&self) -> String {
        let identifier = self
            .identifier
            .as_ref()
            .map(|id| id.fields().join(" + "))
            .unwrap_or_else(|| "<unset>".to_string());
        format!(
            "identifier={} adjacency={:?} representation={} line_graph={} workers={}",
            identifier,
            self.adjacency.mode,
            self.representation,
            self.line_graph,
            self.parallel.workers
        )
    }
}

/// Configuration that passed validation. Immutable.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    config: GraphConfig,
    identifier: IdentifierSpec,
    adjacency: AdjacencyMode,
    workers: usize,
}

impl ValidatedConfig {
    pub fn as_inner(&self) -> &GraphConfig {
        &self.config
    }

    pub fn into_inner(self) -> GraphConfig {
        self.config
    }

    pub fn identifier(&self) -> &IdentifierSpec {
        &self.identifier
    }

    pub fn adjacency(&self) -> AdjacencyMode {
        self.adjacency
    }

    pub fn representation(&self) -> Representation {
        self.config.representation
    }

    pub fn line_graph(&self) -> bool {
        self.config.line_graph
    }

    pub fn outputs(&self) -> OutputConfig {
        self.config.outputs
    }

    /// Effective worker count (`0` already resolved to the CPU count)
    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn describe(&self) -> String {
        self.config.describe()
    }
}
