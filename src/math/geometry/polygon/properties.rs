// src/math/geometry/polygon/properties.rs

use crate::math::types::Point2D;
use crate::math::utils::simple_geometry::{orient, ring_signed_area};

/// Gibt die Orientierung eines Rings an.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear, // Alle Punkte liegen auf einer Linie
}

impl Orientation {
    /// Orientierung nach dem Vorzeichen der Shoelace-Fläche.
    pub fn of_ring(ring: &[Point2D]) -> Self {
        let area = ring_signed_area(ring);
        if area > 0.0 {
            Orientation::CounterClockwise
        } else if area < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }
}

/// Prüft ob ein Ring konvex ist. Kollineare Ecken werden ignoriert,
/// ein vollständig kollinearer Ring gilt nicht als konvex.
pub fn is_convex_ring(ring: &[Point2D]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut sign = 0.0_f64;
    for i in 0..n {
        let turn = orient(ring[i], ring[(i + 1) % n], ring[(i + 2) % n]);
        if turn == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = turn.signum();
        } else if turn.signum() != sign {
            return false;
        }
    }

    // Ein sternförmiger Ring mit Windungszahl > 1 hat ebenfalls nur gleiche Vorzeichen
    sign != 0.0 && total_turn(ring).abs() < 1.5 * std::f64::consts::TAU
}

fn total_turn(ring: &[Point2D]) -> f64 {
    let n = ring.len();
    (0..n)
        .map(|i| {
            let e1 = ring[(i + 1) % n] - ring[i];
            let e2 = ring[(i + 2) % n] - ring[(i + 1) % n];
            e1.perp_dot(e2).atan2(e1.dot(e2))
        })
        .sum()
}

/// Schwerpunkt und vorzeichenbehaftete Fläche eines Rings.
/// `None` für Ringe ohne Fläche.
pub fn ring_centroid(ring: &[Point2D]) -> Option<(Point2D, f64)> {
    let n = ring.len();
    if n < 3 {
        return None;
    }

    // Relativ zum ersten Punkt rechnen, stabiler für große Koordinaten
    let origin = ring[0];
    let mut cx = 0.0;
    let mut cy = 0.0;
    let mut twice_area = 0.0;
    for i in 0..n {
        let p = ring[i] - origin;
        let q = ring[(i + 1) % n] - origin;
        let c = p.x * q.y - q.x * p.y;
        twice_area += c;
        cx += (p.x + q.x) * c;
        cy += (p.y + q.y) * c;
    }

    if twice_area == 0.0 {
        return None;
    }

    let area = twice_area * 0.5;
    Some((origin + Point2D::new(cx, cy) / (6.0 * area), area))
}

/// Mittelwert der Vertices.
pub fn vertex_mean(points: impl IntoIterator<Item = Point2D>) -> Option<Point2D> {
    let (sum, count) = points
        .into_iter()
        .fold((Point2D::ZERO, 0usize), |(s, c), p| (s + p, c + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Point2D> {
        vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(0.0, 2.0),
        ]
    }

    #[test]
    fn test_orientation() {
        let mut ring = square();
        assert_eq!(Orientation::of_ring(&ring), Orientation::CounterClockwise);
        ring.reverse();
        assert_eq!(Orientation::of_ring(&ring), Orientation::Clockwise);
        let line = vec![Point2D::ZERO, Point2D::X, Point2D::new(2.0, 0.0)];
        assert_eq!(Orientation::of_ring(&line), Orientation::Collinear);
    }

    #[test]
    fn test_convexity() {
        assert!(is_convex_ring(&square()));
        let arrow = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(2.0, 1.0),
            Point2D::new(0.0, 2.0),
            Point2D::new(1.0, 1.0),
        ];
        assert!(!is_convex_ring(&arrow));
    }

    #[test]
    fn test_ring_centroid_is_orientation_independent() {
        let mut ring = square();
        let (c, a) = ring_centroid(&ring).unwrap();
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 1.0);
        assert_relative_eq!(a, 4.0);
        ring.reverse();
        let (c, a) = ring_centroid(&ring).unwrap();
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(a, -4.0);
    }
}
