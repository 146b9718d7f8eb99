// src/math/types/bounds.rs

use crate::math::types::Point2D;

/// Achsenparallele Hülle einer Form.
///
/// Die leere Hülle hat `min > max`; alle Mengenoperationen behandeln sie als
/// neutrales Element bzw. als "schneidet nichts".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Hülle zweier beliebiger Eckpunkte.
    pub fn from_points(p1: Point2D, p2: Point2D) -> Self {
        Self {
            min: p1.min(p2),
            max: p1.max(p2),
        }
    }

    /// Hülle einer Punktmenge; `empty()` ohne Punkte.
    pub fn from_points_iter<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point2D>,
    {
        points
            .into_iter()
            .fold(Self::empty(), |acc, p| acc.union(&Self::from_points(p, p)))
    }

    pub fn empty() -> Self {
        Self {
            min: Point2D::splat(f64::INFINITY),
            max: Point2D::splat(f64::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    pub fn center(&self) -> Point2D {
        (self.min + self.max) * 0.5
    }

    /// Rand inklusive.
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// `other` liegt vollständig in `self`. Leere Hüllen sind nirgends enthalten.
    pub fn contains_bounds(&self, other: &Bounds2D) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && other.min.cmpge(self.min).all()
            && other.max.cmple(self.max).all()
    }

    /// Überlappung mit Spielraum `tol`; symmetrisch in beiden Argumenten.
    pub fn near(&self, other: &Bounds2D, tol: f64) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x - other.max.x <= tol
            && other.min.x - self.max.x <= tol
            && self.min.y - other.max.y <= tol
            && other.min.y - self.max.y <= tol
    }

    pub fn union(&self, other: &Bounds2D) -> Self {
        match (self.is_empty(), other.is_empty()) {
            (true, _) => *other,
            (_, true) => *self,
            _ => Self {
                min: self.min.min(other.min),
                max: self.max.max(other.max),
            },
        }
    }

    /// Vergrößert die Hülle allseitig um `margin`.
    pub fn expand(&self, margin: f64) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self {
            min: self.min - Point2D::splat(margin),
            max: self.max + Point2D::splat(margin),
        }
    }
}

impl Default for Bounds2D {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_points() {
        let b = Bounds2D::from_points_iter([
            Point2D::new(1.0, -2.0),
            Point2D::new(-1.0, 3.0),
            Point2D::new(0.5, 0.5),
        ]);
        assert_eq!(b.min, Point2D::new(-1.0, -2.0));
        assert_eq!(b.max, Point2D::new(1.0, 3.0));
        assert!(Bounds2D::from_points_iter(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_touching_bounds_are_near() {
        let a = Bounds2D::from_points(Point2D::ZERO, Point2D::ONE);
        let b = Bounds2D::from_points(Point2D::ONE, Point2D::splat(2.0));
        assert!(a.near(&b, 0.0));
        assert!(b.near(&a, 0.0));
        assert!(!a.near(&Bounds2D::empty(), 1.0));
        assert!(a.union(&b).contains_bounds(&b));
    }

    #[test]
    fn test_gap_within_tolerance() {
        let a = Bounds2D::from_points(Point2D::ZERO, Point2D::ONE);
        let b = Bounds2D::from_points(Point2D::new(1.1, 0.0), Point2D::new(2.0, 1.0));
        assert!(!a.near(&b, 0.05));
        assert!(a.near(&b, 0.2));
        assert!(a.expand(0.2).contains_point(Point2D::new(1.1, 0.5)));
    }
}
