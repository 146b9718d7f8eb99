// src/math/geometry/geometry2d/intersect.rs

use super::parts::parts_intersect;
use super::shape::Shape;
use crate::math::geometry::config::GeometryConfig;
use bevy::log::trace;

/// Schneiden sich `a` und `b`? Berührung zählt als Schnitt.
pub fn intersect<'a, 'b>(a: impl Into<Shape<'a>>, b: impl Into<Shape<'b>>) -> bool {
    intersect_with(a, b, &GeometryConfig::default())
}

pub fn intersect_with<'a, 'b>(
    a: impl Into<Shape<'a>>,
    b: impl Into<Shape<'b>>,
    config: &GeometryConfig,
) -> bool {
    let (a, b) = (a.into(), b.into());
    let config = config.validated();
    // Argumente nach Art sortieren; so ist der Test kommutativ
    if a.kind() <= b.kind() {
        ordered_intersect(&a, &b, &config)
    } else {
        ordered_intersect(&b, &a, &config)
    }
}

fn ordered_intersect(a: &Shape, b: &Shape, config: &GeometryConfig) -> bool {
    let tol = config.tolerance;
    if !a.bounds().near(&b.bounds(), tol) {
        return false;
    }

    match (a, b) {
        // Bei achsenparallelen Rechtecken und Punkten ist der Bounds-Test exakt
        (
            Shape::Point(_) | Shape::Vec2(_) | Shape::Rect(_) | Shape::RectF(_),
            Shape::Rect(_) | Shape::RectF(_),
        ) => true,
        (Shape::Point(_) | Shape::Vec2(_), Shape::Circle(c)) => {
            a.as_point().is_some_and(|p| p.distance(c.center) <= c.radius() + tol)
        }
        (Shape::Circle(c1), Shape::Circle(c2)) => {
            c1.center.distance(c2.center) <= c1.radius() + c2.radius() + tol
        }
        _ => {
            let (pa, pb) = (a.parts(), b.parts());
            trace!("intersect {:?}/{:?}: {}x{} parts", a.kind(), b.kind(), pa.len(), pb.len());
            pa.iter().any(|x| pb.iter().any(|y| parts_intersect(x, y, config)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::multi_polygon::MultiPolygon;
    use crate::math::geometry::polygon::Polygon;
    use crate::math::geometry::shapes::{
        Circle, Ellipse, Line, LineString, Quad, Rect, RectF, RoundRect, Triangle,
    };
    use crate::math::types::{Point, Point2D};

    #[test]
    fn test_circle_against_points() {
        let circle = Circle::new(Point2D::ZERO, 2.0);
        assert!(intersect(&circle, Point2D::new(1.0, 0.0)));
        assert!(!intersect(&circle, Point2D::new(3.0, 0.0)));
        assert!(intersect(Point::new(0, 2), &circle));
    }

    #[test]
    fn test_touching_counts() {
        let a = RectF::new(0.0, 0.0, 1.0, 1.0);
        let b = RectF::new(1.0, 0.0, 1.0, 1.0);
        assert!(intersect(&a, &b));
        let tri = Triangle::new(Point2D::new(2.0, 0.0), Point2D::new(3.0, 0.0), Point2D::new(2.0, 1.0));
        assert!(intersect(&b, &tri));
        assert!(!intersect(&a, &tri));
    }

    #[test]
    fn test_polygon_with_hole() {
        let polygon = Polygon::new(
            RectF::new(0.0, 0.0, 6.0, 6.0).corners().to_vec(),
            vec![RectF::new(2.0, 2.0, 2.0, 2.0).corners().to_vec()],
        );
        assert!(!intersect(&polygon, Point2D::new(3.0, 3.0)));
        assert!(!intersect(&polygon, &Circle::new(Point2D::new(3.0, 3.0), 0.5)));
        assert!(intersect(&polygon, &Line::new(Point2D::new(3.0, 3.0), Point2D::new(3.0, 5.0))));
        assert!(!intersect(&polygon, &Polygon::empty()));
    }

    #[test]
    fn test_mixed_shapes() {
        let rr = RoundRect::new(RectF::new(0.0, 0.0, 4.0, 4.0), 1.0);
        // Ecke außerhalb des Eckkreises
        assert!(!intersect(&rr, Point2D::new(0.1, 0.1)));
        assert!(intersect(&rr, Point2D::new(2.0, 0.0)));

        let ellipse = Ellipse::new(Point2D::new(10.0, 0.0), 3.0, 1.0);
        let quad = Quad::new(
            Point2D::new(7.5, -0.5),
            Point2D::new(6.0, -0.5),
            Point2D::new(6.0, 0.5),
            Point2D::new(7.5, 0.5),
        );
        assert!(intersect(&ellipse, &quad));
        assert!(!intersect(&ellipse, &Circle::new(Point2D::new(10.0, 2.5), 1.0)));
        assert!(intersect(&ellipse, &Circle::new(Point2D::new(10.0, 2.5), 1.6)));

        let ls = LineString::new(vec![Point2D::new(-1.0, 5.0), Point2D::new(5.0, 5.0), Point2D::new(5.0, -1.0)]);
        assert!(!intersect(&ls, &rr));
        assert!(intersect(&ls, &Rect::new(4, 4, 2, 2)));

        let multi = MultiPolygon::from(vec![RectF::new(0.0, 0.0, 1.0, 1.0).as_polygon()]);
        assert!(intersect(&multi, &Point::new(1, 1)));
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let ellipse = Ellipse::new(Point2D::new(10.0, 0.0), 3.0, 1.0);
        let circle = Circle::new(Point2D::new(10.0, 2.5), 1.6);
        // Ohne Segmente gäbe es keinen Ellipsen-Ring
        let no_segments = GeometryConfig::default().with_curve_segments(0);
        assert!(intersect_with(&ellipse, &circle, &no_segments));
        let nan_tolerance = GeometryConfig::default().with_tolerance(f64::NAN);
        assert!(intersect_with(&RectF::new(0.0, 0.0, 1.0, 1.0), Point2D::new(1.0, 1.0), &nan_tolerance));
    }
}
