//! Configuration I/O (YAML loading)

use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use super::graph_config::{GraphConfig, ValidatedConfig};

impl GraphConfig {
    /// Parse YAML text without validating
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Serialize to YAML (schema v1)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        serde_yaml::to_string(self).map_err(ConfigError::Yaml)
    }
}

impl ValidatedConfig {
    /// Load, parse and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        GraphConfig::from_yaml_str(content)?.build()
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        self.as_inner().to_yaml()
    }
}
