//! Section configuration types
//!
//! Each top-level YAML key has its own type with validation.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::validation::Validatable;

// ============================================================================
// Identifier
// ============================================================================

/// Which attribute field(s) name a feature.
///
/// YAML: a plain string selects `Single`, a list selects `Composite`
/// (field order is significant).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdentifierSpec {
    Single(String),
    Composite(Vec<String>),
}

impl IdentifierSpec {
    pub fn single(field: impl Into<String>) -> Self {
        IdentifierSpec::Single(field.into())
    }

    pub fn composite<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IdentifierSpec::Composite(fields.into_iter().map(Into::into).collect())
    }

    /// Configured fields, in order
    pub fn fields(&self) -> Vec<&str> {
        match self {
            IdentifierSpec::Single(field) => vec![field.as_str()],
            IdentifierSpec::Composite(fields) => fields.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, IdentifierSpec::Composite(_))
    }
}

impl Validatable for IdentifierSpec {
    fn validate(&self) -> ConfigResult<()> {
        match self {
            IdentifierSpec::Single(field) => {
                if field.trim().is_empty() {
                    return Err(ConfigError::Validation(
                        "identifier field name must not be blank".to_string(),
                    ));
                }
            }
            IdentifierSpec::Composite(fields) => {
                if fields.is_empty() {
                    return Err(ConfigError::Validation(
                        "composite identifier needs at least one field".to_string(),
                    ));
                }
                let mut seen = HashSet::new();
                for field in fields {
                    if field.trim().is_empty() {
                        return Err(ConfigError::Validation(
                            "identifier field name must not be blank".to_string(),
                        ));
                    }
                    if !seen.insert(field.as_str()) {
                        return Err(ConfigError::Validation(format!(
                            "identifier field '{}' listed more than once",
                            field
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Adjacency
// ============================================================================

/// Adjacency predicate selector as written in YAML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjacencyModeKind {
    Direct,
    Buffered,
}

/// `adjacency:` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdjacencyConfig {
    pub mode: AdjacencyModeKind,

    /// Buffer distance, required when `mode: buffered`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl Default for AdjacencyConfig {
    fn default() -> Self {
        Self {
            mode: AdjacencyModeKind::Direct,
            distance: None,
        }
    }
}

/// Resolved adjacency predicate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdjacencyMode {
    /// `intersects(g_i, g_j)`
    Direct,
    /// `intersects(buffer(g_i, distance), g_j)`
    Buffered { distance: f64 },
}

impl AdjacencyConfig {
    pub fn direct() -> Self {
        Self::default()
    }

    pub fn buffered(distance: f64) -> Self {
        Self {
            mode: AdjacencyModeKind::Buffered,
            distance: Some(distance),
        }
    }

    /// Validate and turn into the tagged mode
    pub fn resolve(&self) -> ConfigResult<AdjacencyMode> {
        self.validate()?;
        Ok(match (self.mode, self.distance) {
            (AdjacencyModeKind::Buffered, Some(distance)) => AdjacencyMode::Buffered { distance },
            _ => AdjacencyMode::Direct,
        })
    }
}

impl Validatable for AdjacencyConfig {
    fn validate(&self) -> ConfigResult<()> {
        match (self.mode, self.distance) {
            (AdjacencyModeKind::Buffered, None) => Err(ConfigError::conflict(
                "buffered adjacency requires a distance",
                "Add 'distance: <value>' under 'adjacency' or use 'mode: direct'",
            )),
            (AdjacencyModeKind::Buffered, Some(d)) if !d.is_finite() || d <= 0.0 => {
                Err(ConfigError::Validation(format!(
                    "adjacency distance must be a finite positive number, got {}",
                    d
                )))
            }
            (AdjacencyModeKind::Direct, Some(_)) => {
                tracing::warn!("adjacency distance ignored (mode is direct)");
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Representation
// ============================================================================

/// Node labelling of the output graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Node label = feature identifier
    #[default]
    Name,
    /// Node label = FeatureTable index
    Id,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Name => write!(f, "name"),
            Representation::Id => write!(f, "id"),
        }
    }
}

// ============================================================================
// Outputs
// ============================================================================

/// `outputs:` section - per-format export toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub adjacency_list: bool,
    pub graphml: bool,
    pub pajek: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            adjacency_list: true,
            graphml: false,
            pajek: false,
        }
    }
}

impl OutputConfig {
    pub fn adjacency_list(mut self, enabled: bool) -> Self {
        self.adjacency_list = enabled;
        self
    }

    pub fn graphml(mut self, enabled: bool) -> Self {
        self.graphml = enabled;
        self
    }

    pub fn pajek(mut self, enabled: bool) -> Self {
        self.pajek = enabled;
        self
    }

    pub fn all() -> Self {
        Self {
            adjacency_list: true,
            graphml: true,
            pajek: true,
        }
    }

    pub fn none() -> Self {
        Self {
            adjacency_list: false,
            graphml: false,
            pajek: false,
        }
    }

    pub fn any_enabled(&self) -> bool {
        self.adjacency_list || self.graphml || self.pajek
    }
}

// ============================================================================
// Parallelism
// ============================================================================

/// `parallel:` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallelConfig {
    /// Number of detection workers (0=auto, 1..=256)
    pub workers: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self { workers: 1 }
    }
}

impl ParallelConfig {
    /// Worker count with `0` resolved to the CPU count
    pub fn effective_workers(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get().max(1)
        } else {
            self.workers
        }
    }
}

impl Validatable for ParallelConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.workers > 256 {
            return Err(ConfigError::range_with_hint(
                "workers",
                self.workers,
                0,
                256,
                "Number of workers must be reasonable (0=auto)",
            ));
        }
        Ok(())
    }
}
