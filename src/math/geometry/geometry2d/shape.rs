// src/math/geometry/geometry2d/shape.rs

use super::parts::{Area, Part};
use crate::math::geometry::multi_polygon::MultiPolygon;
use crate::math::geometry::polygon::Polygon;
use crate::math::geometry::shapes::{
    Circle, Ellipse, Line, LineString, Quad, Rect, RectF, RoundRect, Triangle,
};
use crate::math::types::{Bounds2D, Point, Point2D};
use crate::math::utils::simple_geometry::{ring_edges, ring_signed_area};

/// Art einer Form. Die Reihenfolge bestimmt, welches Argument bei der
/// Doppel-Dispatch-Tabelle vorne steht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeKind {
    Point,
    Vec2,
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
}

/// Geschlossene Summe aller Formen, auf denen Prädikate definiert sind.
/// Schwere Formen werden nur geliehen.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Point(Point),
    Vec2(Point2D),
    Rect(Rect),
    RectF(RectF),
    Circle(Circle),
    Ellipse(Ellipse),
    Line(Line),
    Triangle(Triangle),
    Quad(Quad),
    RoundRect(RoundRect),
    Polygon(&'a Polygon),
    MultiPolygon(&'a MultiPolygon),
    LineString(&'a LineString),
}

impl<'a> Shape<'a> {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Vec2(_) => ShapeKind::Vec2,
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::RectF(_) => ShapeKind::RectF,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Quad(_) => ShapeKind::Quad,
            Shape::RoundRect(_) => ShapeKind::RoundRect,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::MultiPolygon(_) => ShapeKind::MultiPolygon,
            Shape::LineString(_) => ShapeKind::LineString,
        }
    }

    pub fn bounds(&self) -> Bounds2D {
        match self {
            Shape::Point(p) => Bounds2D::from_points(p.to_vec2(), p.to_vec2()),
            Shape::Vec2(p) => Bounds2D::from_points(*p, *p),
            Shape::Rect(r) => r.bounds(),
            Shape::RectF(r) => r.bounds(),
            Shape::Circle(c) => c.bounds(),
            Shape::Ellipse(e) => e.bounds(),
            Shape::Line(l) => l.bounds(),
            Shape::Triangle(t) => t.bounds(),
            Shape::Quad(q) => q.bounds(),
            Shape::RoundRect(r) => r.bounds(),
            Shape::Polygon(p) => p.bounds(),
            Shape::MultiPolygon(m) => m.bounds(),
            Shape::LineString(l) => l.bounds(),
        }
    }

    /// Der Punkt, falls die Form ein einzelner Punkt ist.
    pub(crate) fn as_point(&self) -> Option<Point2D> {
        match self {
            Shape::Point(p) => Some(p.to_vec2()),
            Shape::Vec2(p) => Some(*p),
            _ => None,
        }
    }

    /// Zerlegung in primitive Teile, deren Vereinigung die Form ist.
    /// Entartete Formen werden zu ihrem Grenzfall (Strecke oder Punkt).
    pub(crate) fn parts(&self) -> Vec<Part<'a>> {
        match *self {
            Shape::Point(p) => vec![Part::Point(p.to_vec2())],
            Shape::Vec2(p) => vec![Part::Point(p)],
            Shape::Rect(r) => ring_parts(r.to_rect_f().corners().to_vec()),
            Shape::RectF(r) => ring_parts(r.corners().to_vec()),
            Shape::Circle(c) => {
                if c.radius() == 0.0 {
                    vec![Part::Point(c.center)]
                } else {
                    vec![Part::Disc(c.center, c.radius())]
                }
            }
            Shape::Ellipse(e) => ellipse_parts(e),
            Shape::Line(l) => {
                if l.begin == l.end {
                    vec![Part::Point(l.begin)]
                } else {
                    vec![Part::Segment(l.begin, l.end)]
                }
            }
            Shape::Triangle(t) => ring_parts(t.points().to_vec()),
            Shape::Quad(q) => ring_parts(q.points().to_vec()),
            Shape::RoundRect(rr) => {
                let r = rr.effective_radius();
                if r <= 0.0 {
                    return ring_parts(rr.rect.corners().to_vec());
                }
                let mut parts: Vec<Part<'a>> = rr
                    .cross_rects()
                    .iter()
                    .flat_map(|rect| ring_parts(rect.corners().to_vec()))
                    .collect();
                parts.extend(rr.corner_circles().iter().map(|c| Part::Disc(c.center, r)));
                parts
            }
            Shape::Polygon(p) => polygon_part(p).into_iter().collect(),
            Shape::MultiPolygon(m) => m.iter().filter_map(polygon_part).collect(),
            Shape::LineString(l) => line_string_parts(l.points()),
        }
    }
}

fn ring_parts<'a>(ring: Vec<Point2D>) -> Vec<Part<'a>> {
    if ring_signed_area(&ring) != 0.0 {
        return vec![Part::Area(Area::owned(ring))];
    }
    // Zur Strecke oder zum Punkt entartet
    let mut parts: Vec<Part<'a>> = ring_edges(&ring)
        .filter(|(a, b)| a != b)
        .map(|(a, b)| Part::Segment(a, b))
        .collect();
    if parts.is_empty() {
        parts.extend(ring.first().map(|&p| Part::Point(p)));
    }
    parts
}

fn ellipse_parts<'a>(e: Ellipse) -> Vec<Part<'a>> {
    let half = Point2D::new(e.a.abs(), e.b.abs());
    if half == Point2D::ZERO {
        vec![Part::Point(e.center)]
    } else if e.is_degenerate() {
        vec![Part::Segment(e.center - half, e.center + half)]
    } else {
        vec![Part::Ellipse(Ellipse::new(e.center, half.x, half.y))]
    }
}

fn polygon_part(polygon: &Polygon) -> Option<Part<'_>> {
    (!polygon.is_empty()).then(|| Part::Area(Area::borrowed(polygon.outer(), polygon.holes())))
}

fn line_string_parts<'a>(points: &[Point2D]) -> Vec<Part<'a>> {
    let mut parts: Vec<Part<'a>> = points
        .windows(2)
        .filter(|w| w[0] != w[1])
        .map(|w| Part::Segment(w[0], w[1]))
        .collect();
    if parts.is_empty() {
        parts.extend(points.first().map(|&p| Part::Point(p)));
    }
    parts
}

// --- Konvertierungen ---

macro_rules! impl_from_value_shape {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Shape<'_> {
                fn from(value: $ty) -> Self {
                    Shape::$variant(value)
                }
            }

            impl From<&$ty> for Shape<'_> {
                fn from(value: &$ty) -> Self {
                    Shape::$variant(*value)
                }
            }
        )*
    };
}

impl_from_value_shape! {
    Point => Point,
    Point2D => Vec2,
    Rect => Rect,
    RectF => RectF,
    Circle => Circle,
    Ellipse => Ellipse,
    Line => Line,
    Triangle => Triangle,
    Quad => Quad,
    RoundRect => RoundRect,
}

impl<'a> From<&'a Polygon> for Shape<'a> {
    fn from(polygon: &'a Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl<'a> From<&'a MultiPolygon> for Shape<'a> {
    fn from(multi: &'a MultiPolygon) -> Self {
        Shape::MultiPolygon(multi)
    }
}

impl<'a> From<&'a LineString> for Shape<'a> {
    fn from(line_string: &'a LineString) -> Self {
        Shape::LineString(line_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_order_follows_declaration() {
        assert!(ShapeKind::Point < ShapeKind::Circle);
        assert!(ShapeKind::Polygon < ShapeKind::LineString);
        let rect = RectF::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(Shape::from(&rect).kind(), ShapeKind::RectF);
    }

    #[test]
    fn test_degenerate_shapes_become_limits() {
        let flat = RectF::new(0.0, 0.0, 2.0, 0.0);
        let parts = Shape::from(flat).parts();
        assert!(parts.iter().all(|p| matches!(p, Part::Segment(..))));

        let dot = Circle::new(Point2D::new(1.0, 1.0), 0.0);
        assert!(matches!(Shape::from(dot).parts().as_slice(), [Part::Point(_)]));

        let needle = Ellipse::new(Point2D::ZERO, 2.0, 0.0);
        assert!(matches!(Shape::from(needle).parts().as_slice(), [Part::Segment(..)]));
    }

    #[test]
    fn test_round_rect_parts() {
        let rr = RoundRect::new(RectF::new(0.0, 0.0, 4.0, 2.0), 0.5);
        let parts = Shape::from(rr).parts();
        assert_eq!(parts.len(), 6);
        let disc_count = parts.iter().filter(|p| matches!(p, Part::Disc(..))).count();
        assert_eq!(disc_count, 4);
    }

    #[test]
    fn test_empty_polygon_has_no_parts() {
        let empty = Polygon::empty();
        assert!(Shape::from(&empty).parts().is_empty());
        assert!(Shape::from(&empty).bounds().is_empty());
    }
}
