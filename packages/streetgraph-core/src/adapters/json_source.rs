//! JSON feature source with WKT geometries.
//!
//! ```json
//! { "features": [ { "properties": { "NM_LOG": "BRASIL" }, "geometry": "LINESTRING (0 0, 1 1)" } ] }
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use geo_types::Geometry;
use serde::Deserialize;

use super::geo_engine::PlanarGeometry;
use crate::shared::models::{Attributes, RawFeature};
use crate::shared::ports::{FeatureSource, InputError};

#[derive(Debug, Deserialize)]
struct FeatureDocument {
    features: Vec<FeatureRecord>,
}

#[derive(Debug, Deserialize)]
struct FeatureRecord {
    #[serde(default)]
    properties: Attributes,
    geometry: String,
}

enum Origin {
    File(PathBuf),
    Text(String),
}

/// Reads `{"features": [...]}` documents from a file or a string
pub struct JsonFeatureSource {
    name: String,
    origin: Origin,
}

impl JsonFeatureSource {
    /// Source backed by a file; its stem becomes the source name
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "features".to_string());
        Self {
            name,
            origin: Origin::File(path.to_path_buf()),
        }
    }

    /// Source backed by in-memory JSON text
    pub fn from_json_str(name: impl Into<String>, json: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: Origin::Text(json.into()),
        }
    }

    fn load_text(&self) -> Result<String, InputError> {
        match &self.origin {
            Origin::Text(text) => Ok(text.clone()),
            Origin::File(path) => {
                std::fs::read_to_string(path).map_err(|e| InputError::Unreadable {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }
}

/// Parse WKT string to a planar geometry
pub fn parse_wkt(text: &str) -> Result<PlanarGeometry, String> {
    wkt::Wkt::<f64>::from_str(text)
        .map_err(|e| format!("{:?}", e))
        .and_then(|w| {
            let geometry: Result<Geometry<f64>, _> = w.try_into();
            geometry.map_err(|e: wkt::conversion::Error| format!("{:?}", e))
        })
        .map(PlanarGeometry::Plain)
}

impl FeatureSource for JsonFeatureSource {
    type Geometry = PlanarGeometry;

    fn name(&self) -> &str {
        &self.name
    }

    fn read(&mut self) -> Result<Vec<RawFeature<PlanarGeometry>>, InputError> {
        let text = self.load_text()?;
        let document: FeatureDocument =
            serde_json::from_str(&text).map_err(|e| InputError::Malformed(e.to_string()))?;

        if document.features.is_empty() {
            return Err(InputError::Empty(self.name.clone()));
        }

        document
            .features
            .into_iter()
            .enumerate()
            .map(|(n, record)| {
                let geometry = parse_wkt(&record.geometry).map_err(|e| {
                    InputError::Malformed(format!("feature {}: invalid WKT: {}", n, e))
                })?;
                Ok(RawFeature::new(record.properties, geometry))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DOC: &str = r#"{
        "features": [
            {"properties": {"name": "Main"}, "geometry": "LINESTRING (0 0, 1 0)"},
            {"properties": {"name": null}, "geometry": "LINESTRING (1 0, 1 1)"}
        ]
    }"#;

    #[test]
    fn test_reads_features_in_order() {
        let mut source = JsonFeatureSource::from_json_str("doc", DOC);
        let features = source.read().unwrap();

        assert_eq!(features.len(), 2);
        assert_eq!(features[0].attributes["name"], json!("Main"));
        assert_eq!(features[1].field("name"), None);
        assert!(matches!(
            features[0].geometry.core(),
            Geometry::LineString(_)
        ));
    }

    #[test]
    fn test_file_source_uses_stem_as_name() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(DOC.as_bytes()).unwrap();

        let mut source = JsonFeatureSource::from_path(file.path());
        assert!(!source.name().is_empty());
        assert_eq!(source.read().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let mut source = JsonFeatureSource::from_path("/nonexistent/streets.json");
        assert!(matches!(
            source.read(),
            Err(InputError::Unreadable { .. })
        ));
    }

    #[test]
    fn test_bad_wkt_is_malformed() {
        let doc = r#"{"features": [{"properties": {}, "geometry": "LINESTRING (0 0,"}]}"#;
        let mut source = JsonFeatureSource::from_json_str("bad", doc);
        let err = source.read().unwrap_err();
        assert!(matches!(err, InputError::Malformed(ref m) if m.contains("feature 0")));
    }

    #[test]
    fn test_empty_document() {
        let mut source = JsonFeatureSource::from_json_str("empty", r#"{"features": []}"#);
        assert!(matches!(source.read(), Err(InputError::Empty(_))));
    }
}
