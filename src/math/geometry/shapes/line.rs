// src/math/geometry/shapes/line.rs

use crate::math::types::{Bounds2D, Point2D};
use crate::math::utils::simple_geometry;
use serde::{Deserialize, Serialize};

/// Strecke zwischen `begin` und `end`. Länge 0 verhält sich wie ein Punkt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub begin: Point2D,
    pub end: Point2D,
}

impl Line {
    pub const fn new(begin: Point2D, end: Point2D) -> Self {
        Self { begin, end }
    }

    pub fn vector(&self) -> Point2D {
        self.end - self.begin
    }

    pub fn length(&self) -> f64 {
        self.begin.distance(self.end)
    }

    pub fn center(&self) -> Point2D {
        self.begin.lerp(self.end, 0.5)
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.begin)
    }

    pub fn moved_by(&self, v: Point2D) -> Self {
        Self::new(self.begin + v, self.end + v)
    }

    pub fn closest_point_to(&self, p: Point2D) -> Point2D {
        simple_geometry::closest_point_on_segment(p, self.begin, self.end)
    }

    pub fn distance_from(&self, p: Point2D) -> f64 {
        simple_geometry::point_segment_distance(p, self.begin, self.end)
    }

    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::from_points(self.begin, self.end)
    }
}
