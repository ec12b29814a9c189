//! Planar geometry engine over `geo` / `geo-types`.
//!
//! Buffers are kept implicit: a buffered geometry is its core plus a radius,
//! i.e. the exact round-cap Minkowski sum. Intersecting it with another
//! geometry reduces to a Euclidean distance test, so no polygonization is
//! needed and the predicate stays exact.

use geo::{BoundingRect, CoordsIter, Distance, Euclidean, Intersects};
use geo_types::{Geometry, GeometryCollection, LineString, MultiLineString};
use wkt::ToWkt;

use crate::shared::models::Envelope;
use crate::shared::ports::{GeometryEngine, GeometryError, GeometryResult};

/// Geometry handle used by [`PlanarEngine`]
#[derive(Debug, Clone, PartialEq)]
pub enum PlanarGeometry {
    Plain(Geometry<f64>),
    /// Every point within `distance` of `core`
    Buffered { core: Geometry<f64>, distance: f64 },
}

impl PlanarGeometry {
    pub fn plain(geometry: impl Into<Geometry<f64>>) -> Self {
        PlanarGeometry::Plain(geometry.into())
    }

    /// Underlying geometry (the core for buffered shapes)
    pub fn core(&self) -> &Geometry<f64> {
        match self {
            PlanarGeometry::Plain(g) => g,
            PlanarGeometry::Buffered { core, .. } => core,
        }
    }

    /// Buffer radius (`0` for plain geometries)
    pub fn radius(&self) -> f64 {
        match self {
            PlanarGeometry::Plain(_) => 0.0,
            PlanarGeometry::Buffered { distance, .. } => *distance,
        }
    }
}

impl From<Geometry<f64>> for PlanarGeometry {
    fn from(geometry: Geometry<f64>) -> Self {
        PlanarGeometry::Plain(geometry)
    }
}

/// Euclidean-plane implementation of the geometry capability contract
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarEngine;

impl PlanarEngine {
    pub fn new() -> Self {
        Self
    }

    fn ensure_valid(geometry: &Geometry<f64>) -> GeometryResult<()> {
        if geometry
            .coords_iter()
            .any(|c| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(GeometryError::invalid("non-finite coordinate"));
        }
        if geometry.coords_count() == 0 {
            return Err(GeometryError::degenerate("empty geometry"));
        }
        Ok(())
    }

    fn collect_parts(
        geometry: &Geometry<f64>,
        lines: &mut Vec<LineString<f64>>,
        others: &mut Vec<Geometry<f64>>,
    ) {
        match geometry {
            Geometry::Line(line) => lines.push(LineString::from(vec![line.start, line.end])),
            Geometry::LineString(ls) => lines.push(ls.clone()),
            Geometry::MultiLineString(mls) => lines.extend(mls.0.iter().cloned()),
            Geometry::GeometryCollection(gc) => {
                for member in gc.iter() {
                    Self::collect_parts(member, lines, others);
                }
            }
            other => others.push(other.clone()),
        }
    }
}

impl GeometryEngine for PlanarEngine {
    type Geometry = PlanarGeometry;

    fn intersects(&self, a: &PlanarGeometry, b: &PlanarGeometry) -> GeometryResult<bool> {
        Self::ensure_valid(a.core())?;
        Self::ensure_valid(b.core())?;

        match (a, b) {
            (PlanarGeometry::Plain(ga), PlanarGeometry::Plain(gb)) => Ok(ga.intersects(gb)),
            _ => {
                let reach = a.radius() + b.radius();
                let distance = Euclidean::distance(a.core(), b.core());
                if distance.is_nan() {
                    return Err(GeometryError::invalid("distance evaluated to NaN"));
                }
                Ok(distance <= reach)
            }
        }
    }

    fn buffer(&self, geometry: &PlanarGeometry, distance: f64) -> GeometryResult<PlanarGeometry> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(GeometryError::invalid(format!(
                "buffer distance must be finite and non-negative, got {}",
                distance
            )));
        }
        Self::ensure_valid(geometry.core())?;

        Ok(PlanarGeometry::Buffered {
            core: geometry.core().clone(),
            distance: geometry.radius() + distance,
        })
    }

    fn union(&self, geometries: &[PlanarGeometry]) -> GeometryResult<PlanarGeometry> {
        match geometries {
            [] => Err(GeometryError::degenerate("union of zero geometries")),
            [single] => Ok(single.clone()),
            _ => {
                let mut lines = Vec::new();
                let mut others = Vec::new();
                for geometry in geometries {
                    match geometry {
                        PlanarGeometry::Plain(g) => {
                            Self::ensure_valid(g)?;
                            Self::collect_parts(g, &mut lines, &mut others);
                        }
                        PlanarGeometry::Buffered { .. } => {
                            return Err(GeometryError::unsupported("union of buffered geometries"))
                        }
                    }
                }

                let merged = if others.is_empty() {
                    Geometry::MultiLineString(MultiLineString(lines))
                } else {
                    let mut members: Vec<Geometry<f64>> =
                        lines.into_iter().map(Geometry::LineString).collect();
                    members.extend(others);
                    Geometry::GeometryCollection(GeometryCollection(members))
                };
                Ok(PlanarGeometry::Plain(merged))
            }
        }
    }

    fn envelope(&self, geometry: &PlanarGeometry) -> GeometryResult<Envelope> {
        Self::ensure_valid(geometry.core())?;
        let rect = geometry
            .core()
            .bounding_rect()
            .ok_or_else(|| GeometryError::degenerate("geometry has no bounding box"))?;
        let envelope = Envelope::from(rect).expand(geometry.radius());
        if !envelope.is_finite() {
            return Err(GeometryError::invalid(format!(
                "non-finite envelope {:?}",
                envelope
            )));
        }
        Ok(envelope)
    }

    fn to_wkt(&self, geometry: &PlanarGeometry) -> String {
        match geometry {
            PlanarGeometry::Plain(g) => g.wkt_string(),
            PlanarGeometry::Buffered { core, distance } => {
                format!("BUFFER({}, {})", core.wkt_string(), distance)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{coord, line_string, Line};

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> PlanarGeometry {
        PlanarGeometry::plain(Line::new(coord! { x: x1, y: y1 }, coord! { x: x2, y: y2 }))
    }

    #[test]
    fn test_direct_intersects() {
        let engine = PlanarEngine::new();
        let a = seg(0.0, 0.0, 2.0, 0.0);
        let b = seg(1.0, -1.0, 1.0, 1.0);
        let c = seg(0.0, 1.0, 2.0, 1.0);

        assert!(engine.intersects(&a, &b).unwrap());
        assert!(!engine.intersects(&a, &c).unwrap());
    }

    #[test]
    fn test_touching_endpoints_intersect() {
        let engine = PlanarEngine::new();
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(1.0, 0.0, 2.0, 0.0);
        assert!(engine.intersects(&a, &b).unwrap());
    }

    #[test]
    fn test_buffered_intersects_by_distance() {
        let engine = PlanarEngine::new();
        let a = seg(0.0, 0.0, 2.0, 0.0);
        let parallel = seg(0.0, 1.0, 2.0, 1.0);

        let narrow = engine.buffer(&a, 0.5).unwrap();
        let wide = engine.buffer(&a, 1.0).unwrap();

        assert!(!engine.intersects(&narrow, &parallel).unwrap());
        assert!(engine.intersects(&wide, &parallel).unwrap());
    }

    #[test]
    fn test_buffer_envelope_grows_by_distance() {
        let engine = PlanarEngine::new();
        let a = seg(0.0, 0.0, 2.0, 0.0);
        let env = engine.envelope(&engine.buffer(&a, 1.5).unwrap()).unwrap();
        assert_eq!(env, Envelope::new(-1.5, -1.5, 3.5, 1.5));
    }

    #[test]
    fn test_negative_buffer_rejected() {
        let engine = PlanarEngine::new();
        let err = engine.buffer(&seg(0.0, 0.0, 1.0, 0.0), -1.0).unwrap_err();
        assert!(matches!(err, GeometryError::Invalid(_)));
    }

    #[test]
    fn test_non_finite_geometry_is_invalid() {
        let engine = PlanarEngine::new();
        let bad = seg(0.0, f64::NAN, 1.0, 0.0);
        let good = seg(0.0, 0.0, 1.0, 0.0);

        assert!(engine.envelope(&bad).is_err());
        assert!(engine.intersects(&good, &bad).is_err());
    }

    #[test]
    fn test_overflowing_buffer_envelope_is_invalid() {
        let engine = PlanarEngine::new();
        let wide = engine
            .buffer(&seg(0.0, 0.0, f64::MAX, 0.0), f64::MAX)
            .unwrap();
        assert!(matches!(
            engine.envelope(&wide),
            Err(GeometryError::Invalid(_))
        ));
    }

    #[test]
    fn test_empty_geometry_is_degenerate() {
        let engine = PlanarEngine::new();
        let empty = PlanarGeometry::plain(LineString::<f64>::new(vec![]));
        assert!(matches!(
            engine.envelope(&empty),
            Err(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn test_union_of_lines_is_multilinestring() {
        let engine = PlanarEngine::new();
        let merged = engine
            .union(&[seg(0.0, 0.0, 1.0, 0.0), seg(5.0, 5.0, 6.0, 5.0)])
            .unwrap();

        match merged.core() {
            Geometry::MultiLineString(mls) => assert_eq!(mls.0.len(), 2),
            other => panic!("expected MultiLineString, got {:?}", other),
        }

        let env = engine.envelope(&merged).unwrap();
        assert_eq!(env, Envelope::new(0.0, 0.0, 6.0, 5.0));
    }

    #[test]
    fn test_union_intersects_like_members() {
        let engine = PlanarEngine::new();
        let merged = engine
            .union(&[seg(0.0, 0.0, 1.0, 0.0), seg(5.0, 5.0, 6.0, 5.0)])
            .unwrap();
        let crossing = seg(5.5, 4.0, 5.5, 6.0);

        assert!(engine.intersects(&merged, &crossing).unwrap());
    }

    #[test]
    fn test_union_rejects_empty_and_buffered() {
        let engine = PlanarEngine::new();
        assert!(engine.union(&[]).is_err());

        let buffered = engine.buffer(&seg(0.0, 0.0, 1.0, 0.0), 1.0).unwrap();
        let err = engine
            .union(&[buffered, seg(0.0, 0.0, 1.0, 0.0)])
            .unwrap_err();
        assert!(matches!(err, GeometryError::Unsupported(_)));
    }

    #[test]
    fn test_to_wkt() {
        let engine = PlanarEngine::new();
        let ls = PlanarGeometry::plain(line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)]);
        assert!(engine.to_wkt(&ls).starts_with("LINESTRING"));
    }
}
