// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    /// Standard-Toleranz für Rand- und Gleichheitsvergleiche.
    pub const EPSILON: f64 = 1e-9;
    pub const TAU: f64 = std::f64::consts::TAU;
    pub const PI: f64 = std::f64::consts::PI;
    pub const PI_OVER_2: f64 = std::f64::consts::FRAC_PI_2;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind, relativ zur Größenordnung.
    pub fn nearly_equal(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
    }
}

/// Geometrische Hilfsfunktionen (Punkte, Segmente, Ringe)
pub mod simple_geometry {
    use crate::math::types::Point2D;

    /// Kreuzprodukt zweier 2D-Vektoren (Skalar)
    pub fn cross(a: Point2D, b: Point2D) -> f64 {
        a.x * b.y - a.y * b.x
    }

    /// Orientierung des Tripels (a, b, c): > 0 links, < 0 rechts, 0 kollinear.
    pub fn orient(a: Point2D, b: Point2D, c: Point2D) -> f64 {
        cross(b - a, c - a)
    }

    /// Nächster Punkt auf dem Segment [a, b] zu `p`.
    /// Ein Segment der Länge null verhält sich wie der Punkt `a`.
    pub fn closest_point_on_segment(p: Point2D, a: Point2D, b: Point2D) -> Point2D {
        let ab = b - a;
        let len_sq = ab.length_squared();
        if len_sq == 0.0 {
            return a;
        }
        let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
        a + ab * t
    }

    pub fn point_segment_distance_sq(p: Point2D, a: Point2D, b: Point2D) -> f64 {
        p.distance_squared(closest_point_on_segment(p, a, b))
    }

    pub fn point_segment_distance(p: Point2D, a: Point2D, b: Point2D) -> f64 {
        point_segment_distance_sq(p, a, b).sqrt()
    }

    /// Prüft ob sich zwei Segmente echt kreuzen (Endpunkte jeweils strikt auf
    /// verschiedenen Seiten).
    pub fn segments_cross_properly(a1: Point2D, a2: Point2D, b1: Point2D, b2: Point2D) -> bool {
        let d1 = orient(b1, b2, a1);
        let d2 = orient(b1, b2, a2);
        let d3 = orient(a1, a2, b1);
        let d4 = orient(a1, a2, b2);
        ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
            && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    }

    /// Quadrierter Abstand zwischen zwei Segmenten.
    pub fn segment_segment_distance_sq(a1: Point2D, a2: Point2D, b1: Point2D, b2: Point2D) -> f64 {
        if segments_cross_properly(a1, a2, b1, b2) {
            return 0.0;
        }
        // Ohne echte Kreuzung liegt das Minimum immer an einem Endpunkt
        point_segment_distance_sq(a1, b1, b2)
            .min(point_segment_distance_sq(a2, b1, b2))
            .min(point_segment_distance_sq(b1, a1, a2))
            .min(point_segment_distance_sq(b2, a1, a2))
    }

    /// Schnitt-Test zweier Segmente mit Toleranz (Berührung zählt als Schnitt).
    /// Symmetrisch in den Argumenten.
    pub fn segments_intersect(
        a1: Point2D,
        a2: Point2D,
        b1: Point2D,
        b2: Point2D,
        tolerance: f64,
    ) -> bool {
        segment_segment_distance_sq(a1, a2, b1, b2) <= tolerance * tolerance
    }

    /// Parameter `t` auf [a1, a2] des Schnittpunkts mit der Geraden durch [b1, b2],
    /// falls sich die Segmente in einem einzelnen Punkt schneiden.
    pub fn segment_intersection_param(
        a1: Point2D,
        a2: Point2D,
        b1: Point2D,
        b2: Point2D,
    ) -> Option<f64> {
        let r = a2 - a1;
        let s = b2 - b1;
        let denom = cross(r, s);
        if denom == 0.0 {
            return None; // parallel oder kollinear
        }
        let qp = b1 - a1;
        let t = cross(qp, s) / denom;
        let u = cross(qp, r) / denom;
        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            Some(t)
        } else {
            None
        }
    }

    /// Vorzeichenbehaftete Fläche eines geschlossenen Rings (Shoelace).
    /// Positiv für gegen den Uhrzeigersinn (mathematische Orientierung).
    pub fn ring_signed_area(ring: &[Point2D]) -> f64 {
        let n = ring.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let p1 = ring[i];
            let p2 = ring[(i + 1) % n];
            sum += p1.x * p2.y - p2.x * p1.y;
        }
        sum * 0.5
    }

    /// Länge eines Rings; `closed` fügt die Kante vom letzten zum ersten Punkt hinzu.
    pub fn ring_length(ring: &[Point2D], closed: bool) -> f64 {
        if ring.len() < 2 {
            return 0.0;
        }
        let open: f64 = ring.windows(2).map(|w| w[0].distance(w[1])).sum();
        if closed {
            open + ring[ring.len() - 1].distance(ring[0])
        } else {
            open
        }
    }

    /// Iteriert über die Kanten eines geschlossenen Rings.
    pub fn ring_edges(ring: &[Point2D]) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = ring.len();
        (0..n).map(move |i| (ring[i], ring[(i + 1) % n]))
    }

    /// Even-Odd Punkt-in-Ring Test (Ray-Casting), ohne Randbehandlung.
    pub fn point_in_ring(point: Point2D, ring: &[Point2D]) -> bool {
        let n = ring.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let pi = ring[i];
            let pj = ring[j];
            if (pi.y > point.y) != (pj.y > point.y) {
                let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
                if point.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Quadrierter Abstand eines Punktes zum Rand eines Rings.
    pub fn point_ring_distance_sq(point: Point2D, ring: &[Point2D]) -> f64 {
        ring_edges(ring)
            .map(|(a, b)| point_segment_distance_sq(point, a, b))
            .fold(f64::INFINITY, f64::min)
    }

    /// Flächeninhalt eines Dreiecks
    pub fn triangle_area(p1: Point2D, p2: Point2D, p3: Point2D) -> f64 {
        0.5 * orient(p1, p2, p3).abs()
    }
}
