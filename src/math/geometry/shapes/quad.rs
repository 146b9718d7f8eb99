// src/math/geometry/shapes/quad.rs

use crate::math::geometry::polygon::Polygon;
use crate::math::types::{Bounds2D, Point2D};
use crate::math::utils::simple_geometry;
use serde::{Deserialize, Serialize};

/// Viereck aus vier Punkten in Umlaufreihenfolge (nicht notwendigerweise konvex).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    pub p0: Point2D,
    pub p1: Point2D,
    pub p2: Point2D,
    pub p3: Point2D,
}

impl Quad {
    pub const fn new(p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D) -> Self {
        Self { p0, p1, p2, p3 }
    }

    pub fn points(&self) -> [Point2D; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    pub fn area(&self) -> f64 {
        simple_geometry::ring_signed_area(&self.points()).abs()
    }

    pub fn perimeter(&self) -> f64 {
        simple_geometry::ring_length(&self.points(), true)
    }

    pub fn moved_by(&self, v: Point2D) -> Self {
        Self::new(self.p0 + v, self.p1 + v, self.p2 + v, self.p3 + v)
    }

    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::from_points_iter(self.points())
    }

    pub fn as_polygon(&self) -> Polygon {
        Polygon::new(self.points().to_vec(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concave_quad_area() {
        // Pfeilform: konkav an p2
        let quad = Quad::new(
            Point2D::new(0.0, 0.0),
            Point2D::new(2.0, 1.0),
            Point2D::new(0.0, 2.0),
            Point2D::new(1.0, 1.0),
        );
        assert_eq!(quad.area(), 1.0);
        assert_eq!(quad.as_polygon().area(), 1.0);
    }
}
