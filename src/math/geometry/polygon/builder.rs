// src/math/geometry/polygon/builder.rs

use crate::math::error::MathResult;
use crate::math::geometry::polygon::core::Polygon;
use crate::math::types::{Point2D, Vector2DExt};
use crate::math::utils::constants::{EPSILON, PI_OVER_2, TAU};
use rand::Rng;

/// Builder für Polygone durch Aneinanderreihung von Formen.
/// Das Ergebnis der `build()` Methode ist ein `Polygon`.
#[derive(Debug, Clone, Default)]
pub struct PolygonBuilder {
    vertices: Vec<Point2D>,
    holes: Vec<Vec<Point2D>>,
}

impl PolygonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(mut self, x: f64, y: f64) -> Self {
        self.vertices.push(Point2D::new(x, y));
        self
    }

    pub fn add_vertex(mut self, vertex: Point2D) -> Self {
        self.vertices.push(vertex);
        self
    }

    pub fn add_vertices(mut self, vertices: impl IntoIterator<Item = Point2D>) -> Self {
        self.vertices.extend(vertices);
        self
    }

    /// Fügt einen Kreis hinzu
    pub fn circle(mut self, center: Point2D, radius: f64, segments: usize) -> Self {
        self.vertices
            .extend(ShapeGenerators::create_circle_vertices(center, radius, segments));
        self
    }

    /// Fügt ein Rechteck hinzu
    pub fn rectangle(mut self, min: Point2D, max: Point2D) -> Self {
        self.vertices.extend([
            Point2D::new(min.x, min.y),
            Point2D::new(max.x, min.y),
            Point2D::new(max.x, max.y),
            Point2D::new(min.x, max.y),
        ]);
        self
    }

    pub fn regular_polygon(mut self, sides: usize, radius: f64, center: Point2D) -> Self {
        self.vertices
            .extend(ShapeGenerators::ngon(sides, radius, center, 0.0));
        self
    }

    /// Quadratische Bézierkurve vom letzten Punkt aus.
    pub fn curve_to(mut self, control: Point2D, end: Point2D, segments: usize) -> Self {
        match self.vertices.last().copied() {
            Some(start) => {
                let segments = segments.max(1);
                for i in 1..=segments {
                    let t = i as f64 / segments as f64;
                    self.vertices
                        .push(ShapeGenerators::quadratic_bezier(start, control, end, t));
                }
            }
            None => self.vertices.push(end),
        }
        self
    }

    /// Fügt ein Loch hinzu (Ring in beliebiger Orientierung).
    pub fn hole(mut self, ring: impl IntoIterator<Item = Point2D>) -> Self {
        self.holes.push(ring.into_iter().collect());
        self
    }

    pub fn scale(mut self, factor: f64) -> Self {
        self.for_each_vertex(|v| *v *= factor);
        self
    }

    pub fn translate(mut self, offset: Point2D) -> Self {
        self.for_each_vertex(|v| *v += offset);
        self
    }

    pub fn rotate_around(mut self, center: Point2D, angle_rad: f64) -> Self {
        self.for_each_vertex(|v| *v = v.rotated_at(center, angle_rad));
        self
    }

    fn for_each_vertex(&mut self, mut f: impl FnMut(&mut Point2D)) {
        self.vertices.iter_mut().for_each(&mut f);
        self.holes.iter_mut().flatten().for_each(&mut f);
    }

    pub fn build(self) -> MathResult<Polygon> {
        Polygon::try_new(self.vertices, self.holes)
    }
}

/// Geometrie-Generatoren, die Vertex-Ringe (`Vec<Point2D>`) zurückgeben.
pub struct ShapeGenerators;

impl ShapeGenerators {
    /// Kreis-Ring gegen den Uhrzeigersinn, beginnend auf der positiven x-Achse.
    pub fn create_circle_vertices(center: Point2D, radius: f64, segments: usize) -> Vec<Point2D> {
        Self::create_ellipse_vertices(center, radius, radius, segments)
    }

    pub fn create_ellipse_vertices(
        center: Point2D,
        radius_x: f64,
        radius_y: f64,
        segments: usize,
    ) -> Vec<Point2D> {
        (0..segments)
            .map(|i| {
                let angle = (i as f64 / segments as f64) * TAU;
                center + Point2D::new(radius_x * angle.cos(), radius_y * angle.sin())
            })
            .collect()
    }

    /// Regelmäßiges n-Eck mit Umkreisradius `radius`.
    /// Der erste Vertex zeigt bei `angle == 0` in +y-Richtung.
    pub fn ngon(sides: usize, radius: f64, center: Point2D, angle: f64) -> Vec<Point2D> {
        if sides < 3 {
            return Vec::new();
        }
        (0..sides)
            .map(|i| {
                let a = angle + PI_OVER_2 + (i as f64 / sides as f64) * TAU;
                center + Point2D::new(radius * a.cos(), radius * a.sin())
            })
            .collect()
    }

    pub fn create_star_vertices(
        center: Point2D,
        inner_radius: f64,
        outer_radius: f64,
        num_points: usize,
    ) -> Vec<Point2D> {
        if num_points < 2 {
            return Vec::new();
        }
        let n = num_points * 2;
        (0..n)
            .map(|i| {
                // Spitze nach oben
                let angle = (i as f64 / n as f64) * TAU + PI_OVER_2;
                let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
                center + Point2D::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect()
    }

    pub fn quadratic_bezier(p0: Point2D, p1: Point2D, p2: Point2D, t: f64) -> Point2D {
        let u = 1.0 - t;
        p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
    }

    /// Abgerundetes Rechteck zwischen `min` und `max`, gegen den Uhrzeigersinn.
    /// `quality` ist die Segmentzahl eines Vollkreises; jede Ecke erhält ein Viertel davon.
    pub fn rounded_rectangle(
        min: Point2D,
        max: Point2D,
        corner_radius: f64,
        quality: usize,
    ) -> Vec<Point2D> {
        let (lo, hi) = (min.min(max), min.max(max));
        let half = (hi - lo) * 0.5;
        let r = corner_radius.abs().min(half.x).min(half.y);
        let segments_per_corner = (quality / 4).max(1);

        if r < EPSILON {
            return vec![
                lo,
                Point2D::new(hi.x, lo.y),
                hi,
                Point2D::new(lo.x, hi.y),
            ];
        }

        // Eckmittelpunkte gegen den Uhrzeigersinn ab unten rechts, mit Startwinkel
        let corners = [
            (Point2D::new(hi.x - r, lo.y + r), -PI_OVER_2),
            (Point2D::new(hi.x - r, hi.y - r), 0.0),
            (Point2D::new(lo.x + r, hi.y - r), PI_OVER_2),
            (Point2D::new(lo.x + r, lo.y + r), 2.0 * PI_OVER_2),
        ];

        let mut vertices = Vec::with_capacity(4 * (segments_per_corner + 1));
        for (c, start) in corners {
            for j in 0..=segments_per_corner {
                let angle = start + PI_OVER_2 * (j as f64 / segments_per_corner as f64);
                vertices.push(c + Point2D::new(r * angle.cos(), r * angle.sin()));
            }
        }
        vertices.dedup_by(|a, b| a.distance_squared(*b) < EPSILON * EPSILON);
        if vertices.len() > 1 && vertices[0].distance_squared(vertices[vertices.len() - 1]) < EPSILON * EPSILON {
            vertices.pop();
        }
        vertices
    }

    /// Zufälliges einfaches (sternförmiges) Polygon um `center`.
    /// Radien liegen in `[min_radius, max_radius]`, Winkel sind sortiert.
    pub fn random_simple_polygon<R: Rng + ?Sized>(
        rng: &mut R,
        center: Point2D,
        min_radius: f64,
        max_radius: f64,
        vertices: usize,
    ) -> Vec<Point2D> {
        if vertices < 3 {
            return Vec::new();
        }
        let (lo, hi) = if min_radius <= max_radius {
            (min_radius, max_radius)
        } else {
            (max_radius, min_radius)
        };
        // Gleichmäßige Sektoren mit Jitter, damit die Winkel streng monoton bleiben
        let sector = TAU / vertices as f64;
        (0..vertices)
            .map(|i| {
                let angle = sector * (i as f64 + rng.random_range(0.1..0.9));
                let radius = if hi > lo { rng.random_range(lo..=hi) } else { lo };
                center + Point2D::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::simple_geometry::ring_signed_area;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_ngon_first_vertex_points_up() {
        let ring = ShapeGenerators::ngon(4, 2.0, Point2D::ZERO, 0.0);
        assert_eq!(ring.len(), 4);
        assert_relative_eq!(ring[0].x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(ring[0].y, 2.0, epsilon = 1e-12);
        assert!(ShapeGenerators::ngon(2, 1.0, Point2D::ZERO, 0.0).is_empty());
    }

    #[test]
    fn test_rounded_rectangle_is_ccw_and_closed_area() {
        let ring = ShapeGenerators::rounded_rectangle(
            Point2D::ZERO,
            Point2D::new(10.0, 6.0),
            1.0,
            64,
        );
        let area = ring_signed_area(&ring);
        assert!(area > 0.0);
        let exact = 60.0 - (4.0 - std::f64::consts::PI);
        assert!((area - exact).abs() < 0.01);
    }

    #[test]
    fn test_random_simple_polygon_is_simple_star() {
        let mut rng = StdRng::seed_from_u64(7);
        let ring =
            ShapeGenerators::random_simple_polygon(&mut rng, Point2D::ZERO, 1.0, 3.0, 20);
        assert_eq!(ring.len(), 20);
        assert!(ring_signed_area(&ring) > 0.0);
        for p in &ring {
            let r = p.length();
            assert!((1.0 - 1e-9..=3.0 + 1e-9).contains(&r));
        }
    }

    #[test]
    fn test_builder_with_hole() {
        let polygon = PolygonBuilder::new()
            .rectangle(Point2D::ZERO, Point2D::new(4.0, 4.0))
            .hole(vec![
                Point2D::new(1.0, 1.0),
                Point2D::new(1.0, 2.0),
                Point2D::new(2.0, 2.0),
                Point2D::new(2.0, 1.0),
            ])
            .translate(Point2D::new(1.0, 0.0))
            .build()
            .unwrap();
        assert_relative_eq!(polygon.area(), 15.0, epsilon = 1e-9);
        assert!(PolygonBuilder::new().add_point(0.0, 0.0).build().is_err());
    }
}
