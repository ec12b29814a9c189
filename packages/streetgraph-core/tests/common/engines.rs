//! Fault-injecting geometry engine

use geo::CoordsIter;
use streetgraph_core::shared::ports::{GeometryError, GeometryResult};
use streetgraph_core::{Envelope, GeometryEngine, PlanarEngine, PlanarGeometry};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fault {
    Error,
    Panic,
}

/// Planar engine whose `intersects` fails whenever either operand has a
/// vertex with `x == poisoned_x`. Every other operation is delegated.
#[derive(Debug, Clone, Copy)]
pub struct FaultyEngine {
    inner: PlanarEngine,
    poisoned_x: f64,
    fault: Fault,
}

impl FaultyEngine {
    pub fn new(poisoned_x: f64, fault: Fault) -> Self {
        Self {
            inner: PlanarEngine::new(),
            poisoned_x,
            fault,
        }
    }

    fn is_poisoned(&self, geometry: &PlanarGeometry) -> bool {
        geometry.core().coords_iter().any(|c| c.x == self.poisoned_x)
    }
}

impl GeometryEngine for FaultyEngine {
    type Geometry = PlanarGeometry;

    fn intersects(&self, a: &PlanarGeometry, b: &PlanarGeometry) -> GeometryResult<bool> {
        if self.is_poisoned(a) || self.is_poisoned(b) {
            match self.fault {
                Fault::Error => return Err(GeometryError::invalid("corrupt vertex")),
                Fault::Panic => panic!("corrupt vertex at x = {}", self.poisoned_x),
            }
        }
        self.inner.intersects(a, b)
    }

    fn buffer(&self, geometry: &PlanarGeometry, distance: f64) -> GeometryResult<PlanarGeometry> {
        self.inner.buffer(geometry, distance)
    }

    fn union(&self, geometries: &[PlanarGeometry]) -> GeometryResult<PlanarGeometry> {
        self.inner.union(geometries)
    }

    fn envelope(&self, geometry: &PlanarGeometry) -> GeometryResult<Envelope> {
        self.inner.envelope(geometry)
    }

    fn to_wkt(&self, geometry: &PlanarGeometry) -> String {
        self.inner.to_wkt(geometry)
    }
}
