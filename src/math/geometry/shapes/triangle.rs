// src/math/geometry/shapes/triangle.rs

use crate::math::geometry::polygon::Polygon;
use crate::math::types::{Bounds2D, Point2D};
use crate::math::utils::simple_geometry;
use serde::{Deserialize, Serialize};

/// Triangle representation
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub p0: Point2D,
    pub p1: Point2D,
    pub p2: Point2D,
}

impl Triangle {
    pub const fn new(p0: Point2D, p1: Point2D, p2: Point2D) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn points(&self) -> [Point2D; 3] {
        [self.p0, self.p1, self.p2]
    }

    /// Vorzeichenbehaftete Fläche (positiv für gegen den Uhrzeigersinn).
    pub fn signed_area(&self) -> f64 {
        0.5 * simple_geometry::orient(self.p0, self.p1, self.p2)
    }

    /// Berechnet die Fläche des Dreiecks
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn perimeter(&self) -> f64 {
        self.p0.distance(self.p1) + self.p1.distance(self.p2) + self.p2.distance(self.p0)
    }

    pub fn centroid(&self) -> Point2D {
        (self.p0 + self.p1 + self.p2) / 3.0
    }

    pub fn moved_by(&self, v: Point2D) -> Self {
        Self::new(self.p0 + v, self.p1 + v, self.p2 + v)
    }

    /// Prüft ob ein Punkt im Dreieck liegt (Rand inklusive)
    pub fn contains_point(&self, point: Point2D) -> bool {
        let d1 = simple_geometry::orient(self.p0, self.p1, point);
        let d2 = simple_geometry::orient(self.p1, self.p2, point);
        let d3 = simple_geometry::orient(self.p2, self.p0, point);

        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

        !(has_neg && has_pos)
    }

    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::from_points_iter(self.points())
    }

    pub fn as_polygon(&self) -> Polygon {
        Polygon::new(self.points().to_vec(), Vec::new())
    }
}
