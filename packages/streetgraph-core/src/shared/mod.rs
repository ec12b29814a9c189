//! Shared module - Common types and ports
//!
//! This module contains types that are shared across all features.
//! It has no dependency on any concrete geometry engine or file format.

pub mod models;
pub mod ports;

// Re-exports for convenience
pub use models::*;
