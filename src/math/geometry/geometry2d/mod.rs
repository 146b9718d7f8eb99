// src/math/geometry/geometry2d/mod.rs

//! Schnitt- und Enthaltensein-Prädikate zwischen allen Formen.
//!
//! Beide Argumente werden in eine [`Shape`] überführt. Für einige
//! Kombinationen gibt es direkte Tests; alle anderen laufen über die
//! Zerlegung in primitive Teile. Ränder gehören zur Form, die Toleranz aus
//! [`GeometryConfig`] erweitert sie.

mod intersect;
mod parts;
pub mod shape;
mod within;

pub use intersect::{intersect, intersect_with};
pub use shape::{Shape, ShapeKind};
pub use within::{contains, contains_with, within, within_with};

use crate::math::geometry::config::GeometryConfig;
use crate::math::geometry::multi_polygon::MultiPolygon;
use crate::math::geometry::polygon::Polygon;
use crate::math::geometry::shapes::{
    Circle, Ellipse, Line, LineString, Quad, Rect, RectF, RoundRect, Triangle,
};
use crate::math::types::{Point, Point2D};

/// Abstand eines Punktes zur Form; 0 im Inneren, unendlich für leere Formen.
pub fn distance<'a>(point: Point2D, shape: impl Into<Shape<'a>>) -> f64 {
    distance_with(point, shape, &GeometryConfig::default())
}

pub fn distance_with<'a>(point: Point2D, shape: impl Into<Shape<'a>>, config: &GeometryConfig) -> f64 {
    let config = config.validated();
    shape
        .into()
        .parts()
        .iter()
        .map(|part| parts::point_part_distance(point, part, &config))
        .fold(f64::INFINITY, f64::min)
}

/// Prädikate als Methoden für jede Form.
pub trait ShapePredicates {
    fn as_shape(&self) -> Shape<'_>;

    fn intersects<'b>(&self, other: impl Into<Shape<'b>>) -> bool {
        intersect(self.as_shape(), other)
    }

    /// `other` liegt vollständig in `self`.
    fn contains<'b>(&self, other: impl Into<Shape<'b>>) -> bool {
        within(other, self.as_shape())
    }

    fn is_within<'b>(&self, other: impl Into<Shape<'b>>) -> bool {
        within(self.as_shape(), other)
    }
}

macro_rules! impl_shape_predicates {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ShapePredicates for $ty {
                fn as_shape(&self) -> Shape<'_> {
                    Shape::from(self)
                }
            }
        )*
    };
}

impl_shape_predicates!(
    Point,
    Point2D,
    Rect,
    RectF,
    Circle,
    Ellipse,
    Line,
    Triangle,
    Quad,
    RoundRect,
    Polygon,
    MultiPolygon,
    LineString,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::ShapeGenerators;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Zufällige Formen jeder Art rund um den Ursprung.
    struct Zoo {
        polygons: Vec<Polygon>,
        multis: Vec<MultiPolygon>,
        line_strings: Vec<LineString>,
        values: Vec<Shape<'static>>,
    }

    impl Zoo {
        fn new(rng: &mut StdRng) -> Self {
            let point = |rng: &mut StdRng| {
                Point2D::new(rng.random_range(-4.0..4.0), rng.random_range(-4.0..4.0))
            };
            let mut values = Vec::new();
            for _ in 0..4 {
                let (p, q, s) = (point(rng), point(rng), point(rng));
                let (w, h) = (rng.random_range(-2.0..3.0), rng.random_range(0.0..3.0));
                values.push(Shape::Vec2(p));
                values.push(Shape::Point(Point::new(p.x as i32, q.y as i32)));
                values.push(Shape::Rect(Rect::new(p.x as i32, p.y as i32, w as i32, h as i32)));
                values.push(Shape::RectF(RectF::new(q.x, q.y, w, h)));
                values.push(Shape::Circle(Circle::new(s, w)));
                values.push(Shape::Ellipse(Ellipse::new(p, w.abs() + 0.1, h)));
                values.push(Shape::Line(Line::new(p, q)));
                values.push(Shape::Triangle(Triangle::new(p, q, s)));
                values.push(Shape::Quad(Quad::new(p, q, s, p + Point2D::new(w, h))));
                values.push(Shape::RoundRect(RoundRect::new(RectF::new(s.x, s.y, w, h), h * 0.3)));
            }

            let polygons: Vec<Polygon> = (0..4)
                .map(|i| {
                    let center = point(rng);
                    let outer = ShapeGenerators::random_simple_polygon(rng, center, 1.0, 3.0, 5 + i);
                    let hole = ShapeGenerators::create_circle_vertices(center, 0.5, 6);
                    Polygon::new(outer, if i % 2 == 0 { vec![hole] } else { Vec::new() })
                })
                .chain(std::iter::once(Polygon::empty()))
                .collect();
            let multis = vec![
                MultiPolygon::from(polygons[..2].to_vec()),
                MultiPolygon::from(polygons[2..].to_vec()),
            ];
            let line_strings = (0..3)
                .map(|n| (0..n + 1).map(|_| point(rng)).collect::<LineString>())
                .collect();

            Self {
                polygons,
                multis,
                line_strings,
                values,
            }
        }

        fn shapes(&self) -> Vec<Shape<'_>> {
            let mut shapes: Vec<Shape<'_>> = self.values.clone();
            shapes.extend(self.polygons.iter().map(Shape::from));
            shapes.extend(self.multis.iter().map(Shape::from));
            shapes.extend(self.line_strings.iter().map(Shape::from));
            shapes
        }
    }

    fn is_empty(shape: &Shape) -> bool {
        shape.parts().is_empty()
    }

    #[test]
    fn test_intersect_is_commutative() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..3 {
            let zoo = Zoo::new(&mut rng);
            let shapes = zoo.shapes();
            for a in &shapes {
                for b in &shapes {
                    assert_eq!(
                        intersect(*a, *b),
                        intersect(*b, *a),
                        "{:?} / {:?}",
                        a.kind(),
                        b.kind()
                    );
                }
            }
        }
    }

    #[test]
    fn test_within_implies_intersect() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut within_count = 0;
        for _ in 0..3 {
            let zoo = Zoo::new(&mut rng);
            let shapes = zoo.shapes();
            for a in shapes.iter().filter(|s| !is_empty(s)) {
                assert!(within(*a, *a), "{:?} nicht in sich selbst", a.kind());
                for b in &shapes {
                    if within(*a, *b) {
                        within_count += 1;
                        assert!(intersect(*a, *b), "{:?} in {:?}", a.kind(), b.kind());
                    }
                }
            }
        }
        assert!(within_count > 0);
    }

    #[test]
    fn test_empty_polygon_intersects_nothing() {
        let empty = Polygon::empty();
        let everything = RectF::new(-100.0, -100.0, 200.0, 200.0);
        assert!(!empty.intersects(&everything));
        assert!(!empty.is_within(&everything));
        assert!(!everything.contains(&empty));
        assert_eq!(distance(Point2D::ZERO, &empty), f64::INFINITY);
    }

    #[test]
    fn test_circle_radius_two_against_points() {
        let circle = Circle::new(Point2D::new(1.0, 1.0), 2.0);
        for i in 0..12 {
            let dir = Point2D::from_angle(i as f64 * 0.5);
            assert!(circle.intersects(circle.center + dir));
            assert!(circle.contains(circle.center + dir));
            assert!(!circle.intersects(circle.center + dir * 3.0));
            assert!((circle.center + dir).is_within(&circle));
        }
    }

    #[test]
    fn test_distance_to_shapes() {
        let p = Point2D::new(5.0, 0.0);
        assert_relative_eq!(distance(p, &Circle::new(Point2D::ZERO, 2.0)), 3.0);
        assert_relative_eq!(distance(p, &RectF::new(0.0, -1.0, 2.0, 2.0)), 3.0);
        assert_relative_eq!(distance(p, &Line::new(Point2D::new(0.0, 4.0), Point2D::new(10.0, 4.0))), 4.0);
        assert_eq!(distance(Point2D::new(1.0, 0.0), &RectF::new(0.0, -1.0, 2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_config_tolerance_widens_boundary() {
        let square = RectF::new(0.0, 0.0, 1.0, 1.0);
        let near = Triangle::new(Point2D::new(1.001, 0.0), Point2D::new(2.0, 0.0), Point2D::new(2.0, 1.0));
        assert!(!intersect(&square, &near));
        let loose = GeometryConfig::default().with_tolerance(0.01);
        assert!(intersect_with(&square, &near, &loose));
        assert!(contains_with(&square, Point2D::new(1.005, 0.5), &loose));
    }
}
