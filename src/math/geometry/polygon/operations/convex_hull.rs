// src/math/geometry/polygon/operations/convex_hull.rs
use crate::math::error::{MathError, MathResult};
use crate::math::geometry::polygon::Polygon;
use crate::math::types::Point2D;
use crate::math::utils::simple_geometry::orient;

/// Konvexe Hülle nach Andrew's Monotone Chain (O(n log n)).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvexHullComputer {
    include_collinear: bool,
}

impl ConvexHullComputer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt ob kollineare Randpunkte in der Hülle bleiben sollen
    pub fn include_collinear(mut self, include: bool) -> Self {
        self.include_collinear = include;
        self
    }

    /// Hüllpunkte gegen den Uhrzeigersinn, beginnend beim kleinsten (x, y).
    pub fn compute_hull_points(&self, points: &[Point2D]) -> MathResult<Vec<Point2D>> {
        let mut points: Vec<Point2D> = points.iter().copied().filter(|p| p.is_finite()).collect();

        // Sortiere Punkte lexikographisch (erst X, dann Y)
        points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        points.dedup();

        if points.len() < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: points.len(),
            });
        }

        let lower = self.half_hull(points.iter().copied());
        let upper = self.half_hull(points.iter().rev().copied());

        // Endpunkte sind jeweils der Anfang der anderen Kette
        let mut hull = lower;
        hull.pop();
        hull.extend(upper.iter().copied().take(upper.len().saturating_sub(1)));

        if hull.len() < 3 {
            return Err(MathError::GeometricFailure {
                operation: "Convex hull of collinear points".to_string(),
            });
        }

        Ok(hull)
    }

    fn half_hull(&self, points: impl Iterator<Item = Point2D>) -> Vec<Point2D> {
        let mut chain: Vec<Point2D> = Vec::new();
        for point in points {
            while chain.len() >= 2 {
                let turn = orient(chain[chain.len() - 2], chain[chain.len() - 1], point);
                let pop = if self.include_collinear { turn < 0.0 } else { turn <= 0.0 };
                if pop {
                    chain.pop();
                } else {
                    break;
                }
            }
            chain.push(point);
        }
        chain
    }

    /// Hülle als Polygon; leeres Polygon wenn keine Fläche entsteht.
    pub fn compute_hull(&self, points: &[Point2D]) -> Polygon {
        match self.compute_hull_points(points) {
            Ok(hull) => Polygon::new(hull, Vec::new()),
            Err(_) => Polygon::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::ShapeGenerators;
    use crate::math::geometry::polygon::properties::is_convex_ring;
    use crate::math::utils::simple_geometry::ring_signed_area;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_convex_hull_square_with_interior_points() {
        let points = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(0.5, 0.5),
            Point2D::new(1.0, 0.0),
            Point2D::new(0.5, 0.0), // kollinear auf der Kante
            Point2D::new(1.0, 1.0),
            Point2D::new(0.0, 1.0),
            Point2D::new(0.25, 0.75),
        ];
        let hull = ConvexHullComputer::new().compute_hull_points(&points).unwrap();
        assert_eq!(hull.len(), 4);
        assert_eq!(hull[0], Point2D::new(0.0, 0.0));
        assert!(ring_signed_area(&hull) > 0.0);

        let with_collinear = ConvexHullComputer::new()
            .include_collinear(true)
            .compute_hull_points(&points)
            .unwrap();
        assert_eq!(with_collinear.len(), 5);
    }

    #[test]
    fn test_degenerate_input_yields_empty_polygon() {
        let line = [Point2D::ZERO, Point2D::X, Point2D::new(2.0, 0.0)];
        assert!(ConvexHullComputer::new().compute_hull(&line).is_empty());
        assert!(ConvexHullComputer::new().compute_hull(&[Point2D::ZERO]).is_empty());
    }

    #[test]
    fn test_random_hull_is_convex_and_contains_input() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..25 {
            let count = rng.random_range(3..60);
            let points: Vec<Point2D> = (0..count)
                .map(|_| Point2D::new(rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0)))
                .collect();
            let hull = ConvexHullComputer::new().compute_hull(&points);
            assert!(is_convex_ring(hull.outer()));
            for p in &points {
                assert!(hull.contains_point(*p));
            }
        }
    }

    #[test]
    fn test_star_hull_is_the_outer_tips() {
        let star = ShapeGenerators::create_star_vertices(Point2D::ZERO, 1.0, 3.0, 5);
        let hull = ConvexHullComputer::new().compute_hull_points(&star).unwrap();
        assert_eq!(hull.len(), 5);
    }
}
