//! Feature fixtures

use geo_types::{coord, Line, LineString};
use serde_json::json;
use streetgraph_core::config::IdentifierSpec;
use streetgraph_core::features::feature_table::FeatureTableBuilder;
use streetgraph_core::shared::models::Attributes;
use streetgraph_core::{FeatureTable, PlanarEngine, PlanarGeometry, RawFeature};

pub type Segment = (f64, f64, f64, f64);

/// Raw straight segment carrying a single `name` attribute
pub fn segment_feature(name: &str, (x1, y1, x2, y2): Segment) -> RawFeature<PlanarGeometry> {
    let mut attributes = Attributes::new();
    attributes.insert("name".to_string(), json!(name));
    let line = Line::new(coord! { x: x1, y: y1 }, coord! { x: x2, y: y2 });
    RawFeature::new(attributes, PlanarGeometry::plain(line))
}

/// Raw feature from arbitrary attributes and a polyline
pub fn polyline_feature(
    attributes: serde_json::Value,
    points: &[(f64, f64)],
) -> RawFeature<PlanarGeometry> {
    let attributes = attributes.as_object().cloned().unwrap_or_default();
    let line: LineString<f64> = points.iter().map(|&(x, y)| coord! { x: x, y: y }).collect();
    RawFeature::new(attributes, PlanarGeometry::plain(line))
}

/// Segments named `s000`, `s001`, ... so table order equals input order
pub fn numbered_segments(segments: &[Segment]) -> Vec<RawFeature<PlanarGeometry>> {
    segments
        .iter()
        .enumerate()
        .map(|(k, &s)| segment_feature(&format!("s{:03}", k), s))
        .collect()
}

/// Four arms meeting at the origin
pub fn plus_segments() -> Vec<Segment> {
    vec![
        (0.0, 0.0, 1.0, 0.0),
        (0.0, 0.0, 0.0, 1.0),
        (0.0, 0.0, -1.0, 0.0),
        (0.0, 0.0, 0.0, -1.0),
    ]
}

/// `rows` horizontal and `cols` vertical streets over a unit-spaced grid
pub fn grid_segments(rows: usize, cols: usize) -> Vec<Segment> {
    let width = cols.saturating_sub(1) as f64;
    let height = rows.saturating_sub(1) as f64;
    let mut segments = Vec::with_capacity(rows + cols);
    for r in 0..rows {
        segments.push((0.0, r as f64, width, r as f64));
    }
    for c in 0..cols {
        segments.push((c as f64, 0.0, c as f64, height));
    }
    segments
}

/// Seven segments with crossings spread over the whole index range
pub fn seven_segments() -> Vec<Segment> {
    vec![
        (0.0, 0.0, 10.0, 0.0),
        (1.0, -1.0, 1.0, 1.0),
        (9.0, -1.0, 9.0, 5.0),
        (8.0, 4.0, 12.0, 4.0),
        (20.0, 20.0, 21.0, 21.0),
        (0.5, 0.5, 0.5, -3.0),
        (11.0, 3.0, 11.0, 6.0),
    ]
}

pub fn build_table(raw: Vec<RawFeature<PlanarGeometry>>) -> FeatureTable<PlanarGeometry> {
    let spec = IdentifierSpec::single("name");
    FeatureTableBuilder::with_identifier(&spec, &PlanarEngine::new())
        .build(raw)
        .expect("fixture table")
}
