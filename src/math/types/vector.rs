// src/math/types/vector.rs

use super::{Point2D, SpadePoint};

// --- Konvertierungsfunktionen ---

/// Konvertiert einen Punkt in den Punkt-Typ von Spade.
pub fn to_spade_point(p: Point2D) -> SpadePoint {
    SpadePoint::new(p.x, p.y)
}

/// Konvertiert einen Spade-Punkt zurück.
pub fn from_spade_point(p: SpadePoint) -> Point2D {
    Point2D::new(p.x, p.y)
}

// --- Vektor Erweiterungen ---

/// Erweiterte Vektor-Operationen für `DVec2`.
pub trait Vector2DExt {
    /// Linke Normale (90° gegen den Uhrzeigersinn gedreht), normiert.
    /// Gibt `ZERO` für den Nullvektor zurück.
    fn left_normal(&self) -> Self;

    /// Rotiert den Punkt um `pivot` um `angle_rad` (gegen den Uhrzeigersinn).
    fn rotated_at(&self, pivot: Self, angle_rad: f64) -> Self;
}

impl Vector2DExt for Point2D {
    fn left_normal(&self) -> Self {
        self.perp().normalize_or_zero()
    }

    fn rotated_at(&self, pivot: Self, angle_rad: f64) -> Self {
        let (sin_a, cos_a) = angle_rad.sin_cos();
        let d = *self - pivot;
        pivot + Point2D::new(d.x * cos_a - d.y * sin_a, d.x * sin_a + d.y * cos_a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rotated_at_quarter_turn() {
        let p = Point2D::new(2.0, 1.0);
        let r = p.rotated_at(Point2D::new(1.0, 1.0), std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(r.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_left_normal() {
        let n = Point2D::new(3.0, 0.0).left_normal();
        assert_eq!(n, Point2D::new(0.0, 1.0));
        assert_eq!(Point2D::ZERO.left_normal(), Point2D::ZERO);
    }
}
