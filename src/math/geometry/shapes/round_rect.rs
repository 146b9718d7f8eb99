// src/math/geometry/shapes/round_rect.rs

use super::{Circle, RectF};
use crate::math::geometry::polygon::{Polygon, ShapeGenerators};
use crate::math::types::{Bounds2D, Point2D};
use crate::math::utils::constants::{PI, TAU};
use serde::{Deserialize, Serialize};

/// Rechteck mit abgerundeten Ecken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundRect {
    pub rect: RectF,
    pub r: f64,
}

impl RoundRect {
    pub const fn new(rect: RectF, r: f64) -> Self {
        Self { rect, r }
    }

    /// Eckradius, begrenzt auf die halbe kürzere Seite.
    pub fn effective_radius(&self) -> f64 {
        let n = self.rect.normalized();
        self.r.abs().min(n.w * 0.5).min(n.h * 0.5)
    }

    pub fn area(&self) -> f64 {
        let r = self.effective_radius();
        self.rect.area() - (4.0 - PI) * r * r
    }

    pub fn perimeter(&self) -> f64 {
        let r = self.effective_radius();
        self.rect.perimeter() - 8.0 * r + TAU * r
    }

    pub fn moved_by(&self, v: Point2D) -> Self {
        Self::new(self.rect.moved_by(v), self.r)
    }

    /// Inneres Rechteck, auf dem die Eckkreis-Mittelpunkte liegen.
    pub fn inner_rect(&self) -> RectF {
        self.rect.shrunk(self.effective_radius())
    }

    /// Die vier Eckkreise.
    pub fn corner_circles(&self) -> [Circle; 4] {
        let r = self.effective_radius();
        self.inner_rect().corners().map(|c| Circle::new(c, r))
    }

    /// Zerlegung in zwei sich kreuzende Rechtecke (ohne Eckkreise).
    pub fn cross_rects(&self) -> [RectF; 2] {
        let n = self.rect.normalized();
        let r = self.effective_radius();
        [
            RectF::new(n.x + r, n.y, n.w - 2.0 * r, n.h),
            RectF::new(n.x, n.y + r, n.w, n.h - 2.0 * r),
        ]
    }

    /// Vorzeichenbehafteter Abstand zum inneren Rechteck, innen negativ.
    /// Der RoundRect ist die Menge aller Punkte mit Abstand <= Eckradius.
    pub fn inner_signed_distance(&self, p: Point2D) -> f64 {
        let inner = self.inner_rect();
        let outside = (inner.min() - p).max(p - inner.max());
        if outside.x > 0.0 || outside.y > 0.0 {
            outside.max(Point2D::ZERO).length()
        } else {
            outside.max_element()
        }
    }

    pub fn contains_point(&self, p: Point2D) -> bool {
        self.inner_signed_distance(p) <= self.effective_radius()
    }

    pub fn bounds(&self) -> Bounds2D {
        self.rect.bounds()
    }

    pub fn as_polygon(&self, quality: usize) -> Polygon {
        let n = self.rect.normalized();
        Polygon::new(
            ShapeGenerators::rounded_rectangle(
                Point2D::new(n.x, n.y),
                Point2D::new(n.x + n.w, n.y + n.h),
                self.effective_radius(),
                quality,
            ),
            Vec::new(),
        )
    }
}
