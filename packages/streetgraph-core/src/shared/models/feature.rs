//! Feature records
//!
//! `RawFeature` is what a `FeatureSource` yields (attributes + geometry,
//! identifiers may repeat). `Feature` is a dissolved FeatureTable row with
//! a dense index and a unique identifier.

use serde_json::Value;

use super::Envelope;

/// Attribute columns of a feature, keyed by field name
pub type Attributes = serde_json::Map<String, Value>;

/// One input record as yielded by a feature source
#[derive(Debug, Clone)]
pub struct RawFeature<G> {
    pub attributes: Attributes,
    pub geometry: G,
}

impl<G> RawFeature<G> {
    pub fn new(attributes: Attributes, geometry: G) -> Self {
        Self {
            attributes,
            geometry,
        }
    }

    /// Rendered, non-null value of a field (missing keys read as null)
    pub fn field(&self, name: &str) -> Option<String> {
        self.attributes.get(name).and_then(render_attribute)
    }
}

/// One FeatureTable row after grouping
#[derive(Debug, Clone)]
pub struct Feature<G> {
    /// Dense 0-based position in the table
    pub index: usize,
    /// Unique identifier (grouping key)
    pub identifier: String,
    /// Merged geometry of every raw member
    pub geometry: G,
    pub envelope: Envelope,
    /// Per column, the first non-null value among members in input order
    pub attributes: Attributes,
    /// Number of raw features merged into this row
    pub members: usize,
}

/// Render an attribute value as identifier text; `None` for null
pub fn render_attribute(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
