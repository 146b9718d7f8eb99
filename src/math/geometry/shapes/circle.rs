// src/math/geometry/shapes/circle.rs

use crate::math::geometry::polygon::{Polygon, ShapeGenerators};
use crate::math::types::{Bounds2D, Point2D};
use crate::math::utils::constants::{PI, TAU};
use serde::{Deserialize, Serialize};

/// Kreis mit Mittelpunkt und Radius. Ein negativer Radius wird als Betrag
/// interpretiert, Radius 0 verhält sich wie ein Punkt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2D,
    pub r: f64,
}

impl Circle {
    pub const fn new(center: Point2D, r: f64) -> Self {
        Self { center, r }
    }

    pub fn radius(&self) -> f64 {
        self.r.abs()
    }

    pub fn area(&self) -> f64 {
        PI * self.r * self.r
    }

    pub fn perimeter(&self) -> f64 {
        TAU * self.radius()
    }

    pub fn moved_by(&self, v: Point2D) -> Self {
        Self::new(self.center + v, self.r)
    }

    pub fn contains_point(&self, p: Point2D) -> bool {
        self.center.distance_squared(p) <= self.r * self.r
    }

    pub fn bounds(&self) -> Bounds2D {
        let r = Point2D::splat(self.radius());
        Bounds2D::from_points(self.center - r, self.center + r)
    }

    /// Approximiert den Kreis als regelmäßiges Polygon mit `segments` Ecken.
    pub fn as_polygon(&self, segments: usize) -> Polygon {
        Polygon::new(
            ShapeGenerators::create_circle_vertices(self.center, self.radius(), segments),
            Vec::new(),
        )
    }
}
