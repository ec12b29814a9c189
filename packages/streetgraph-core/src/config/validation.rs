//! Configuration validation
//!
//! Every configuration section implements [`Validatable`]; `GraphConfig::build`
//! runs all of them before producing a `ValidatedConfig`.

use super::error::ConfigResult;

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;
}
