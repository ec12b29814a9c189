//! Grouping ("dissolve") of raw features into a FeatureTable
//!
//! ## Contract
//! - Composite identifiers join non-null field values with a single space,
//!   in configured field order.
//! - A composite row whose fields are all null gets `"Unknown {k}"`, with `k`
//!   counting such rows from 1 in input order.
//! - Single-field identifiers use the raw value; rows with a null value are
//!   dropped from grouping (logged at `warn`).
//! - Output rows are ordered by ascending identifier (byte-wise string
//!   order) and reindexed densely from 0. The same input always yields the
//!   same table.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, info, warn};

use super::domain::FeatureTable;
use crate::config::{IdentifierSpec, ValidatedConfig};
use crate::errors::{Result, StreetGraphError};
use crate::shared::models::{Attributes, Feature, RawFeature};
use crate::shared::ports::{GeometryEngine, InputError};

/// Assigns identifiers to raw features in input order
struct IdentifierLabeler<'a> {
    spec: &'a IdentifierSpec,
    next_unknown: usize,
}

impl<'a> IdentifierLabeler<'a> {
    fn new(spec: &'a IdentifierSpec) -> Self {
        Self {
            spec,
            next_unknown: 1,
        }
    }

    /// `None` means the feature takes no part in grouping
    fn label<G>(&mut self, raw: &RawFeature<G>) -> Option<String> {
        match self.spec {
            IdentifierSpec::Single(field) => raw.field(field),
            IdentifierSpec::Composite(fields) => {
                let values: Vec<String> = fields.iter().filter_map(|f| raw.field(f)).collect();
                if values.is_empty() {
                    let label = format!("Unknown {}", self.next_unknown);
                    self.next_unknown += 1;
                    Some(label)
                } else {
                    Some(values.join(" "))
                }
            }
        }
    }

    fn unknown_issued(&self) -> usize {
        self.next_unknown - 1
    }
}

/// Builds a [`FeatureTable`] from raw features
pub struct FeatureTableBuilder<'a, E: GeometryEngine> {
    engine: &'a E,
    identifier: &'a IdentifierSpec,
}

impl<'a, E: GeometryEngine> FeatureTableBuilder<'a, E> {
    pub fn new(config: &'a ValidatedConfig, engine: &'a E) -> Self {
        Self::with_identifier(config.identifier(), engine)
    }

    pub fn with_identifier(identifier: &'a IdentifierSpec, engine: &'a E) -> Self {
        Self { engine, identifier }
    }

    pub fn build(&self, raw: Vec<RawFeature<E::Geometry>>) -> Result<FeatureTable<E::Geometry>> {
        if raw.is_empty() {
            return Err(InputError::Empty("feature source".to_string()).into());
        }
        self.check_fields_present(&raw)?;

        let raw_count = raw.len();
        let mut labeler = IdentifierLabeler::new(self.identifier);
        let mut groups: BTreeMap<String, Vec<RawFeature<E::Geometry>>> = BTreeMap::new();
        let mut dropped = 0usize;

        for feature in raw {
            match labeler.label(&feature) {
                Some(identifier) => groups.entry(identifier).or_default().push(feature),
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            warn!(
                dropped,
                "features with a null identifier were left out of grouping"
            );
        }
        if groups.is_empty() {
            let field = self.identifier.fields().join(", ");
            return Err(InputError::MissingField(field).into());
        }

        let mut rows = Vec::with_capacity(groups.len());
        for (index, (identifier, members)) in groups.into_iter().enumerate() {
            rows.push(self.dissolve_group(index, identifier, members)?);
        }

        let unknown_count = labeler.unknown_issued();
        info!(
            raw = raw_count,
            grouped = rows.len(),
            unknown = unknown_count,
            "feature table built"
        );

        Ok(FeatureTable::from_rows(rows, raw_count, unknown_count))
    }

    fn check_fields_present(&self, raw: &[RawFeature<E::Geometry>]) -> Result<()> {
        for field in self.identifier.fields() {
            if !raw.iter().any(|f| f.attributes.contains_key(field)) {
                return Err(InputError::MissingField(field.to_string()).into());
            }
        }
        Ok(())
    }

    fn dissolve_group(
        &self,
        index: usize,
        identifier: String,
        members: Vec<RawFeature<E::Geometry>>,
    ) -> Result<Feature<E::Geometry>> {
        let member_count = members.len();
        let attributes = first_non_null(members.iter().map(|m| &m.attributes));
        let mut geometries: Vec<E::Geometry> = members.into_iter().map(|m| m.geometry).collect();

        let geometry = if geometries.len() == 1 {
            geometries.remove(0)
        } else {
            debug!(identifier = %identifier, members = member_count, "dissolving");
            self.engine.union(&geometries).map_err(|e| {
                StreetGraphError::geometry(format!("dissolving '{}'", identifier), e)
            })?
        };

        let envelope = self.engine.envelope(&geometry).map_err(|e| {
            StreetGraphError::geometry(format!("envelope of '{}'", identifier), e)
        })?;

        Ok(Feature {
            index,
            identifier,
            geometry,
            envelope,
            attributes,
            members: member_count,
        })
    }
}

/// Per column, keep the first non-null value in member order
fn first_non_null<'b>(members: impl Iterator<Item = &'b Attributes>) -> Attributes {
    let mut merged = Attributes::new();
    for attributes in members {
        for (key, value) in attributes {
            let slot = merged.entry(key.clone()).or_insert(Value::Null);
            if slot.is_null() {
                *slot = value.clone();
            }
        }
    }
    merged
}
