//! Common test utilities for streetgraph-core
//!
//! Shared fixtures and brute-force oracles for the integration tests.

#![allow(dead_code)]

mod assertions;
mod engines;
mod fixtures;

pub use assertions::*;
pub use engines::*;
pub use fixtures::*;
