// src/math/geometry/geometry2d/within.rs

use super::intersect::intersect_with;
use super::parts::{part_within_round_rect, part_within_union};
use super::shape::Shape;
use crate::math::geometry::config::GeometryConfig;

/// Liegt `a` vollständig in `b`? Der Rand von `b` gehört dazu.
/// Leere Formen liegen in nichts.
pub fn within<'a, 'b>(a: impl Into<Shape<'a>>, b: impl Into<Shape<'b>>) -> bool {
    within_with(a, b, &GeometryConfig::default())
}

pub fn within_with<'a, 'b>(
    a: impl Into<Shape<'a>>,
    b: impl Into<Shape<'b>>,
    config: &GeometryConfig,
) -> bool {
    let (a, b) = (a.into(), b.into());
    let config = config.validated();
    let config: &GeometryConfig = &config;
    let tol = config.tolerance;
    if !b.bounds().expand(tol).contains_bounds(&a.bounds()) {
        return false;
    }

    // Ein Punkt liegt genau dann in `b`, wenn er `b` schneidet
    if a.as_point().is_some() {
        return intersect_with(a, b, config);
    }

    match (&a, &b) {
        (Shape::Rect(_) | Shape::RectF(_), Shape::Rect(_) | Shape::RectF(_)) => true,
        (Shape::Circle(inner), Shape::Circle(outer)) => {
            inner.center.distance(outer.center) + inner.radius() <= outer.radius() + tol
        }
        _ => {
            let parts = a.parts();
            if parts.is_empty() {
                return false;
            }
            if let Shape::RoundRect(rr) = b {
                if rr.effective_radius() > 0.0 {
                    return parts.iter().all(|part| part_within_round_rect(part, &rr, config));
                }
            }

            // Angrenzende oder überlappende Teile zählen als eine Fläche
            let merged;
            let regions = match b {
                Shape::MultiPolygon(multi) if multi.num_polygons() > 1 => {
                    merged = multi.union_all();
                    Shape::from(&merged).parts()
                }
                _ => b.parts(),
            };
            parts.iter().all(|part| part_within_union(part, &regions, config))
        }
    }
}

/// `b` liegt vollständig in `a`.
pub fn contains<'a, 'b>(a: impl Into<Shape<'a>>, b: impl Into<Shape<'b>>) -> bool {
    within(b, a)
}

pub fn contains_with<'a, 'b>(
    a: impl Into<Shape<'a>>,
    b: impl Into<Shape<'b>>,
    config: &GeometryConfig,
) -> bool {
    within_with(b, a, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::multi_polygon::MultiPolygon;
    use crate::math::geometry::polygon::Polygon;
    use crate::math::geometry::shapes::{Circle, Ellipse, Line, LineString, RectF, RoundRect, Triangle};
    use crate::math::types::Point2D;

    fn frame() -> Polygon {
        Polygon::new(
            RectF::new(0.0, 0.0, 6.0, 6.0).corners().to_vec(),
            vec![RectF::new(2.0, 2.0, 2.0, 2.0).corners().to_vec()],
        )
    }

    #[test]
    fn test_boundary_is_inside() {
        let square = RectF::new(0.0, 0.0, 2.0, 2.0);
        assert!(within(Point2D::new(2.0, 1.0), &square));
        assert!(within(&square, &square));
        let edge = Line::new(Point2D::new(0.0, 0.0), Point2D::new(2.0, 0.0));
        assert!(within(&edge, &square));
        assert!(!within(&square, &edge));
    }

    #[test]
    fn test_holes_exclude() {
        let frame = frame();
        assert!(within(&Circle::new(Point2D::new(1.0, 1.0), 0.9), &frame));
        assert!(!within(&Circle::new(Point2D::new(1.0, 3.0), 1.5), &frame));
        assert!(!within(&RectF::new(1.0, 1.0, 4.0, 4.0), &frame));
        assert!(within(&RectF::new(0.5, 0.5, 1.0, 5.0), &frame));
        assert!(contains(&frame, &Triangle::new(Point2D::ZERO, Point2D::new(6.0, 0.0), Point2D::new(6.0, 2.0))));
    }

    #[test]
    fn test_empty_is_within_nothing() {
        let empty = Polygon::empty();
        assert!(!within(&empty, &frame()));
        assert!(!within(&frame(), &empty));
        assert!(!within(&MultiPolygon::default(), &RectF::new(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn test_curved_containers() {
        let ellipse = Ellipse::new(Point2D::ZERO, 4.0, 2.0);
        assert!(within(&RectF::new(-1.0, -1.0, 2.0, 2.0), &ellipse));
        assert!(!within(&RectF::new(-3.0, -1.5, 6.0, 3.0), &ellipse));
        assert!(within(&Circle::new(Point2D::ZERO, 1.0), &Circle::new(Point2D::new(0.5, 0.0), 1.5)));

        let rr = RoundRect::new(RectF::new(0.0, 0.0, 4.0, 4.0), 1.0);
        assert!(within(&RectF::new(0.5, 0.5, 3.0, 3.0), &rr));
        assert!(!within(&RectF::new(0.0, 0.0, 4.0, 4.0), &rr));
        assert!(within(&rr, &RectF::new(0.0, 0.0, 4.0, 4.0)));
    }

    #[test]
    fn test_round_rect_container_is_exact() {
        let rr = RoundRect::new(RectF::new(0.0, 0.0, 4.0, 4.0), 1.0);
        assert!(within(&rr, &rr));
        assert!(within(&Circle::new(Point2D::new(1.0, 1.0), 1.0), &rr));
        assert!(within(&Circle::new(Point2D::new(2.0, 2.0), 2.0), &rr));
        assert!(within(Point2D::new(2.0, 0.0), &rr));
        assert!(!within(&Circle::new(Point2D::new(1.0, 1.0), 1.01), &rr));
        assert!(!within(&Line::new(Point2D::new(0.1, 0.1), Point2D::new(2.0, 2.0)), &rr));
    }

    #[test]
    fn test_segment_within_collinear_line_string() {
        let ls = LineString::new(vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0), Point2D::new(2.0, 0.0)]);
        let line = Line::new(Point2D::new(0.0, 0.0), Point2D::new(2.0, 0.0));
        assert!(within(&line, &ls));
        assert!(within(&ls, &line));
        assert!(!within(&Line::new(Point2D::new(0.0, 0.0), Point2D::new(2.5, 0.0)), &ls));
    }

    #[test]
    fn test_shape_spanning_adjacent_members() {
        let multi = MultiPolygon::from(vec![
            RectF::new(0.0, 0.0, 1.0, 1.0).as_polygon(),
            RectF::new(1.0, 0.0, 1.0, 1.0).as_polygon(),
        ]);
        assert!(within(&RectF::new(0.5, 0.25, 1.0, 0.5), &multi));
        assert!(within(&Circle::new(Point2D::new(1.0, 0.5), 0.4), &multi));
        assert!(!within(&RectF::new(0.5, 0.25, 2.0, 0.5), &multi));

        let overlapping = MultiPolygon::from(vec![
            RectF::new(0.0, 0.0, 2.0, 2.0).as_polygon(),
            RectF::new(1.0, 1.0, 2.0, 2.0).as_polygon(),
        ]);
        let diagonal = Line::new(Point2D::new(0.5, 0.5), Point2D::new(2.5, 2.5));
        assert!(within(&diagonal, &overlapping));
        assert!(!within(&RectF::new(0.0, 0.0, 3.0, 3.0), &overlapping));
    }

    #[test]
    fn test_line_string_in_multi_polygon() {
        let multi = MultiPolygon::from(vec![
            RectF::new(0.0, 0.0, 2.0, 2.0).as_polygon(),
            RectF::new(5.0, 0.0, 2.0, 2.0).as_polygon(),
        ]);
        let inside = LineString::new(vec![Point2D::new(0.5, 0.5), Point2D::new(1.5, 1.5)]);
        let bridge = LineString::new(vec![Point2D::new(1.0, 1.0), Point2D::new(6.0, 1.0)]);
        assert!(within(&inside, &multi));
        assert!(!within(&bridge, &multi));
    }
}
