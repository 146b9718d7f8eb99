// src/math/geometry/polygon/operations/boolean.rs

use crate::math::geometry::multi_polygon::MultiPolygon;
use crate::math::geometry::polygon::Polygon;
use crate::math::types::Point2D;
use geo::BooleanOps;

type GeoPolygon = geo::Polygon<f64>;
type GeoMultiPolygon = geo::MultiPolygon<f64>;

/// Boolean-Operationstypen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOperation {
    /// Union (A ∪ B)
    Union,
    /// Intersection (A ∩ B)
    Intersection,
    /// Difference (A - B)
    Difference,
    /// Symmetric Difference (A ⊕ B)
    Xor,
}

/// Boolean-Engine für Polygon-Operationen, basierend auf `geo::BooleanOps`.
pub struct PolygonBoolean;

impl PolygonBoolean {
    /// Führt eine Boolean-Operation durch
    pub fn execute(a: &Polygon, b: &Polygon, operation: BooleanOperation) -> MultiPolygon {
        let (ga, gb) = (to_geo_multi(std::slice::from_ref(a)), to_geo_multi(std::slice::from_ref(b)));
        from_geo_multi(&apply(&ga, &gb, operation))
    }

    pub fn union(a: &Polygon, b: &Polygon) -> MultiPolygon {
        Self::execute(a, b, BooleanOperation::Union)
    }

    pub fn intersection(a: &Polygon, b: &Polygon) -> MultiPolygon {
        Self::execute(a, b, BooleanOperation::Intersection)
    }

    pub fn difference(a: &Polygon, b: &Polygon) -> MultiPolygon {
        Self::execute(a, b, BooleanOperation::Difference)
    }

    /// Vereinigt beliebig viele Polygone (paarweise, balanciert).
    pub fn union_many(polygons: &[Polygon]) -> MultiPolygon {
        let parts = polygons
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| to_geo_multi(std::slice::from_ref(p)))
            .collect();
        from_geo_multi(&union_all(parts))
    }
}

pub(crate) fn apply(
    a: &GeoMultiPolygon,
    b: &GeoMultiPolygon,
    operation: BooleanOperation,
) -> GeoMultiPolygon {
    match operation {
        BooleanOperation::Union => a.union(b),
        BooleanOperation::Intersection => a.intersection(b),
        BooleanOperation::Difference => a.difference(b),
        BooleanOperation::Xor => a.xor(b),
    }
}

/// Balancierte paarweise Vereinigung; hält die Zwischenergebnisse klein.
pub(crate) fn union_all(mut parts: Vec<GeoMultiPolygon>) -> GeoMultiPolygon {
    while parts.len() > 1 {
        let mut next = Vec::with_capacity(parts.len().div_ceil(2));
        let mut iter = parts.into_iter();
        while let Some(a) = iter.next() {
            match iter.next() {
                Some(b) => next.push(a.union(&b)),
                None => next.push(a),
            }
        }
        parts = next;
    }
    parts.pop().unwrap_or_else(|| GeoMultiPolygon::new(Vec::new()))
}

fn to_geo_ring(ring: &[Point2D]) -> geo::LineString<f64> {
    ring.iter()
        .map(|p| geo::Coord { x: p.x, y: p.y })
        .collect::<Vec<_>>()
        .into()
}

pub(crate) fn to_geo_polygon(polygon: &Polygon) -> GeoPolygon {
    GeoPolygon::new(
        to_geo_ring(polygon.outer()),
        polygon.holes().iter().map(|h| to_geo_ring(h)).collect(),
    )
}

/// Ring als Polygon ohne Löcher (Stücke für Buffer-Operationen).
pub(crate) fn ring_to_geo_multi(ring: &[Point2D]) -> GeoMultiPolygon {
    GeoMultiPolygon::new(vec![GeoPolygon::new(to_geo_ring(ring), Vec::new())])
}

pub(crate) fn to_geo_multi(polygons: &[Polygon]) -> GeoMultiPolygon {
    GeoMultiPolygon::new(
        polygons
            .iter()
            .filter(|p| !p.is_empty())
            .map(to_geo_polygon)
            .collect(),
    )
}

fn from_geo_ring(ring: &geo::LineString<f64>) -> Vec<Point2D> {
    ring.coords().map(|c| Point2D::new(c.x, c.y)).collect()
}

pub(crate) fn from_geo_polygon(polygon: &GeoPolygon) -> Polygon {
    Polygon::new(
        from_geo_ring(polygon.exterior()),
        polygon.interiors().iter().map(from_geo_ring).collect(),
    )
}

/// Konvertiert zurück; degenerierte Teile ohne Fläche werden verworfen.
pub(crate) fn from_geo_multi(multi: &GeoMultiPolygon) -> MultiPolygon {
    multi
        .0
        .iter()
        .map(from_geo_polygon)
        .filter(|p| !p.is_empty() && p.area() > 0.0)
        .collect()
}
