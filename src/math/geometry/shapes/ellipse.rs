// src/math/geometry/shapes/ellipse.rs

use crate::math::geometry::polygon::{Polygon, ShapeGenerators};
use crate::math::types::{Bounds2D, Point2D};
use crate::math::utils::constants::PI;
use serde::{Deserialize, Serialize};

/// Achsenparallele Ellipse mit Halbachsen `a` (x) und `b` (y).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point2D,
    pub a: f64,
    pub b: f64,
}

impl Ellipse {
    pub const fn new(center: Point2D, a: f64, b: f64) -> Self {
        Self { center, a, b }
    }

    pub fn area(&self) -> f64 {
        PI * (self.a * self.b).abs()
    }

    /// Umfang nach Ramanujans zweiter Näherung.
    pub fn perimeter(&self) -> f64 {
        let (a, b) = (self.a.abs(), self.b.abs());
        if a + b == 0.0 {
            return 0.0;
        }
        let h = ((a - b) / (a + b)).powi(2);
        PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
    }

    pub fn moved_by(&self, v: Point2D) -> Self {
        Self::new(self.center + v, self.a, self.b)
    }

    /// Eine Ellipse mit einer Halbachse 0 ist zur Strecke entartet.
    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0 || self.b == 0.0
    }

    /// Bildet `p` in den Raum ab, in dem die Ellipse der Einheitskreis ist.
    pub fn to_unit_space(&self, p: Point2D) -> Point2D {
        (p - self.center) / Point2D::new(self.a.abs(), self.b.abs())
    }

    pub fn contains_point(&self, p: Point2D) -> bool {
        if self.is_degenerate() {
            let half = Point2D::new(self.a.abs(), self.b.abs());
            let d = (p - self.center).abs();
            return d.x <= half.x && d.y <= half.y;
        }
        self.to_unit_space(p).length_squared() <= 1.0
    }

    pub fn bounds(&self) -> Bounds2D {
        let half = Point2D::new(self.a.abs(), self.b.abs());
        Bounds2D::from_points(self.center - half, self.center + half)
    }

    pub fn as_polygon(&self, segments: usize) -> Polygon {
        Polygon::new(
            ShapeGenerators::create_ellipse_vertices(self.center, self.a.abs(), self.b.abs(), segments),
            Vec::new(),
        )
    }
}
