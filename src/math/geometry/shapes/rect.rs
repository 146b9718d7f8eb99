// src/math/geometry/shapes/rect.rs

use crate::math::geometry::polygon::Polygon;
use crate::math::types::{Bounds2D, Point, Point2D};
use serde::{Deserialize, Serialize};

/// Achsenparalleles Rechteck mit ganzzahligen Koordinaten.
/// `(x, y)` ist die Ecke mit den kleinsten Koordinaten bei positiver Größe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos_size(pos: Point, size: Point) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn area(&self) -> f64 {
        (self.w as f64 * self.h as f64).abs()
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.w.unsigned_abs() as f64 + self.h.unsigned_abs() as f64)
    }

    /// Verschiebung; die Koordinaten sättigen an den `i32`-Grenzen.
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy), self.w, self.h)
    }

    pub fn to_rect_f(&self) -> RectF {
        RectF::new(self.x as f64, self.y as f64, self.w as f64, self.h as f64)
    }

    pub fn bounds(&self) -> Bounds2D {
        self.to_rect_f().bounds()
    }

    pub fn as_polygon(&self) -> Polygon {
        self.to_rect_f().as_polygon()
    }
}

/// Achsenparalleles Rechteck mit Fließkomma-Koordinaten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectF {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_center(center: Point2D, w: f64, h: f64) -> Self {
        Self::new(center.x - w * 0.5, center.y - h * 0.5, w, h)
    }

    /// Normalisiert negative Breiten/Höhen.
    pub fn normalized(&self) -> Self {
        let (x, w) = if self.w < 0.0 { (self.x + self.w, -self.w) } else { (self.x, self.w) };
        let (y, h) = if self.h < 0.0 { (self.y + self.h, -self.h) } else { (self.y, self.h) };
        Self::new(x, y, w, h)
    }

    pub fn min(&self) -> Point2D {
        let n = self.normalized();
        Point2D::new(n.x, n.y)
    }

    pub fn max(&self) -> Point2D {
        let n = self.normalized();
        Point2D::new(n.x + n.w, n.y + n.h)
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    pub fn area(&self) -> f64 {
        (self.w * self.h).abs()
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.w.abs() + self.h.abs())
    }

    pub fn moved_by(&self, v: Point2D) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.w, self.h)
    }

    /// Verkleinert (negativ: vergrößert) das Rechteck auf jeder Seite um `amount`.
    pub fn shrunk(&self, amount: f64) -> Self {
        let n = self.normalized();
        Self::new(n.x + amount, n.y + amount, n.w - 2.0 * amount, n.h - 2.0 * amount)
    }

    /// Eckpunkte gegen den Uhrzeigersinn, beginnend bei `min()`.
    pub fn corners(&self) -> [Point2D; 4] {
        let (min, max) = (self.min(), self.max());
        [
            min,
            Point2D::new(max.x, min.y),
            max,
            Point2D::new(min.x, max.y),
        ]
    }

    pub fn contains_point(&self, p: Point2D) -> bool {
        let (min, max) = (self.min(), self.max());
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::from_points(self.min(), self.max())
    }

    pub fn as_polygon(&self) -> Polygon {
        Polygon::new(self.corners().to_vec(), Vec::new())
    }
}

impl From<Rect> for RectF {
    fn from(rect: Rect) -> Self {
        rect.to_rect_f()
    }
}

impl From<Bounds2D> for RectF {
    fn from(bounds: Bounds2D) -> Self {
        if bounds.is_empty() {
            return RectF::default();
        }
        RectF::new(bounds.min.x, bounds.min.y, bounds.width(), bounds.height())
    }
}
