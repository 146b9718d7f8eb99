// src/math/geometry/geometry2d/parts.rs

//! Primitive Teile (Punkt, Strecke, Fläche mit Löchern, Kreisscheibe,
//! Ellipse) und die Prädikate zwischen ihnen. Alle Ränder gehören zur
//! Menge; `tolerance` erweitert sie.

use crate::math::geometry::config::GeometryConfig;
use crate::math::geometry::polygon::ShapeGenerators;
use crate::math::geometry::polygon::properties::ring_centroid;
use crate::math::geometry::shapes::{Ellipse, RoundRect};
use crate::math::types::Point2D;
use crate::math::utils::simple_geometry::{
    point_in_ring, point_ring_distance_sq, point_segment_distance, point_segment_distance_sq,
    ring_edges, segment_intersection_param, segments_intersect,
};
use std::borrow::Cow;

/// Fläche aus äußerem Ring und Löchern (Even-Odd).
#[derive(Debug, Clone)]
pub(crate) struct Area<'a> {
    pub outer: Cow<'a, [Point2D]>,
    pub holes: &'a [Vec<Point2D>],
}

impl<'a> Area<'a> {
    pub fn owned(outer: Vec<Point2D>) -> Self {
        Self {
            outer: Cow::Owned(outer),
            holes: &[],
        }
    }

    pub fn borrowed(outer: &'a [Point2D], holes: &'a [Vec<Point2D>]) -> Self {
        Self {
            outer: Cow::Borrowed(outer),
            holes,
        }
    }

    fn rings(&self) -> impl Iterator<Item = &[Point2D]> + '_ {
        std::iter::once(self.outer.as_ref()).chain(self.holes.iter().map(Vec::as_slice))
    }

    fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        self.rings().flat_map(ring_edges)
    }

    fn boundary_distance_sq(&self, p: Point2D) -> f64 {
        self.rings()
            .map(|r| point_ring_distance_sq(p, r))
            .fold(f64::INFINITY, f64::min)
    }

    pub fn contains_point(&self, p: Point2D, tolerance: f64) -> bool {
        self.boundary_distance_sq(p) <= tolerance * tolerance
            || (point_in_ring(p, &self.outer) && !self.holes.iter().any(|h| point_in_ring(p, h)))
    }

    /// Punkt im Inneren, mindestens `tolerance` vom Rand entfernt.
    fn interior_contains(&self, p: Point2D, tolerance: f64) -> bool {
        self.contains_point(p, tolerance) && self.boundary_distance_sq(p) > tolerance * tolerance
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Part<'a> {
    Point(Point2D),
    Segment(Point2D, Point2D),
    Area(Area<'a>),
    Disc(Point2D, f64),
    Ellipse(Ellipse),
}

impl Part<'_> {
    fn rank(&self) -> u8 {
        match self {
            Part::Point(_) => 0,
            Part::Segment(..) => 1,
            Part::Area(_) => 2,
            Part::Disc(..) => 3,
            Part::Ellipse(_) => 4,
        }
    }
}

// --- Ellipsen-Hilfen ---

/// Toleranz im Einheitskreis-Raum der Ellipse.
fn unit_tolerance(e: &Ellipse, tolerance: f64) -> f64 {
    tolerance / e.a.min(e.b)
}

fn ellipse_contains(e: &Ellipse, p: Point2D, tolerance: f64) -> bool {
    e.to_unit_space(p).length() <= 1.0 + unit_tolerance(e, tolerance)
}

fn segment_meets_ellipse(e: &Ellipse, a: Point2D, b: Point2D, tolerance: f64) -> bool {
    let (ua, ub) = (e.to_unit_space(a), e.to_unit_space(b));
    point_segment_distance(Point2D::ZERO, ua, ub) <= 1.0 + unit_tolerance(e, tolerance)
}

fn ellipse_ring(e: &Ellipse, config: &GeometryConfig) -> Vec<Point2D> {
    ShapeGenerators::create_ellipse_vertices(e.center, e.a, e.b, config.curve_segments)
}

fn circle_ring(center: Point2D, r: f64, config: &GeometryConfig) -> Vec<Point2D> {
    ShapeGenerators::create_circle_vertices(center, r, config.curve_segments)
}

// --- Schnitt ---

/// Symmetrischer Schnitt-Test zweier Teile.
pub(crate) fn parts_intersect(a: &Part, b: &Part, config: &GeometryConfig) -> bool {
    let (a, b) = if a.rank() <= b.rank() { (a, b) } else { (b, a) };
    let tol = config.tolerance;
    match (a, b) {
        (Part::Point(p), Part::Point(q)) => p.distance_squared(*q) <= tol * tol,
        (Part::Point(p), Part::Segment(s1, s2)) => point_segment_distance_sq(*p, *s1, *s2) <= tol * tol,
        (Part::Point(p), Part::Area(area)) => area.contains_point(*p, tol),
        (Part::Point(p), Part::Disc(c, r)) => p.distance(*c) <= r + tol,
        (Part::Point(p), Part::Ellipse(e)) => ellipse_contains(e, *p, tol),

        (Part::Segment(a1, a2), Part::Segment(b1, b2)) => segments_intersect(*a1, *a2, *b1, *b2, tol),
        (Part::Segment(a1, a2), Part::Area(area)) => segment_meets_area(*a1, *a2, area, tol),
        (Part::Segment(a1, a2), Part::Disc(c, r)) => point_segment_distance(*c, *a1, *a2) <= r + tol,
        (Part::Segment(a1, a2), Part::Ellipse(e)) => segment_meets_ellipse(e, *a1, *a2, tol),

        (Part::Area(x), Part::Area(y)) => areas_meet(x, y, tol),
        (Part::Area(area), Part::Disc(c, r)) => area_meets_disc(area, *c, *r, tol),
        (Part::Area(area), Part::Ellipse(e)) => {
            area.contains_point(e.center, tol)
                || area.edges().any(|(a1, a2)| segment_meets_ellipse(e, a1, a2, tol))
        }

        (Part::Disc(c1, r1), Part::Disc(c2, r2)) => c1.distance(*c2) <= r1 + r2 + tol,
        // Kreis gegen Ellipse über das Ellipsen-Polygon
        (Part::Disc(c, r), Part::Ellipse(e)) => {
            ellipse_contains(e, *c, tol) || area_meets_disc(&Area::owned(ellipse_ring(e, config)), *c, *r, tol)
        }
        (Part::Ellipse(e), Part::Ellipse(f)) => {
            ellipse_contains(e, f.center, tol)
                || ellipse_contains(f, e.center, tol)
                || areas_meet(
                    &Area::owned(ellipse_ring(e, config)),
                    &Area::owned(ellipse_ring(f, config)),
                    tol,
                )
        }
        // Durch die Rangordnung ausgeschlossen
        _ => false,
    }
}

fn segment_meets_area(a: Point2D, b: Point2D, area: &Area, tol: f64) -> bool {
    area.contains_point(a, tol)
        || area.contains_point(b, tol)
        || area.edges().any(|(c, d)| segments_intersect(a, b, c, d, tol))
}

fn areas_meet(x: &Area, y: &Area, tol: f64) -> bool {
    x.outer.iter().any(|&p| y.contains_point(p, tol))
        || y.outer.iter().any(|&p| x.contains_point(p, tol))
        || x.edges()
            .any(|(a1, a2)| y.edges().any(|(b1, b2)| segments_intersect(a1, a2, b1, b2, tol)))
}

fn area_meets_disc(area: &Area, c: Point2D, r: f64, tol: f64) -> bool {
    area.contains_point(c, tol) || area.boundary_distance_sq(c).sqrt() <= r + tol
}

// --- Enthaltensein ---

/// `part` liegt vollständig in `region`.
pub(crate) fn part_within(part: &Part, region: &Part, config: &GeometryConfig) -> bool {
    let tol = config.tolerance;
    match region {
        Part::Point(q) => match part {
            Part::Point(p) => p.distance_squared(*q) <= tol * tol,
            _ => false,
        },
        Part::Segment(s1, s2) => {
            let on_segment = |p: Point2D| point_segment_distance_sq(p, *s1, *s2) <= tol * tol;
            match part {
                Part::Point(p) => on_segment(*p),
                Part::Segment(a, b) => on_segment(*a) && on_segment(*b),
                _ => false,
            }
        }
        Part::Area(area) => match part {
            Part::Point(p) => area.contains_point(*p, tol),
            Part::Segment(a, b) => segment_within_area(*a, *b, area, tol),
            Part::Area(inner) => area_within_area(inner, area, tol),
            Part::Disc(c, r) => area.contains_point(*c, tol) && area.boundary_distance_sq(*c).sqrt() + tol >= *r,
            Part::Ellipse(e) => area_within_area(&Area::owned(ellipse_ring(e, config)), area, tol),
        },
        Part::Disc(c, r) => {
            let in_disc = |p: Point2D| p.distance(*c) <= r + tol;
            match part {
                Part::Point(p) => in_disc(*p),
                Part::Segment(a, b) => in_disc(*a) && in_disc(*b),
                Part::Area(inner) => inner.outer.iter().all(|&p| in_disc(p)),
                Part::Disc(c2, r2) => c2.distance(*c) + r2 <= r + tol,
                Part::Ellipse(e) => ellipse_ring(e, config).into_iter().all(in_disc),
            }
        }
        Part::Ellipse(e) => {
            let in_ellipse = |p: Point2D| ellipse_contains(e, p, tol);
            match part {
                Part::Point(p) => in_ellipse(*p),
                Part::Segment(a, b) => in_ellipse(*a) && in_ellipse(*b),
                Part::Area(inner) => inner.outer.iter().all(|&p| in_ellipse(p)),
                Part::Disc(c, r) => circle_ring(*c, *r, config).into_iter().all(in_ellipse),
                Part::Ellipse(f) => ellipse_ring(f, config).into_iter().all(in_ellipse),
            }
        }
    }
}

/// `part` liegt in der Vereinigung der `regions`. Eine Strecke darf über
/// mehrere Regionen laufen; sie wird an deren Rändern geteilt und jedes
/// Stück muss in einer Region liegen.
pub(crate) fn part_within_union(part: &Part, regions: &[Part], config: &GeometryConfig) -> bool {
    if regions.iter().any(|region| part_within(part, region, config)) {
        return true;
    }
    let &Part::Segment(a, b) = part else {
        return false;
    };
    if regions.len() < 2 {
        return false;
    }

    let tol = config.tolerance;
    let mut params: Vec<f64> = regions
        .iter()
        .flat_map(|region| split_params(a, b, region, tol))
        .collect();
    params.extend([0.0, 1.0]);
    params.sort_by(f64::total_cmp);
    params.dedup();

    let at = |t: f64| a + (b - a) * t;
    params.windows(2).all(|w| {
        let piece = Part::Segment(at(w[0]), at(w[1]));
        regions.iter().any(|region| part_within(&piece, region, config))
    })
}

/// Parameter auf `a`-`b`, an denen die Strecke den Rand von `region` trifft
/// oder einen ihrer Eckpunkte berührt.
fn split_params(a: Point2D, b: Point2D, region: &Part, tol: f64) -> Vec<f64> {
    let on_ab = |p: Point2D| param_on_segment(p, a, b, tol);
    match region {
        Part::Point(q) => on_ab(*q).into_iter().collect(),
        Part::Segment(c, d) => [on_ab(*c), on_ab(*d), segment_intersection_param(a, b, *c, *d)]
            .into_iter()
            .flatten()
            .collect(),
        Part::Area(area) => area
            .edges()
            .flat_map(|(c, d)| [on_ab(c), segment_intersection_param(a, b, c, d)])
            .flatten()
            .collect(),
        // Runde Regionen kommen nur einzeln vor
        Part::Disc(..) | Part::Ellipse(_) => Vec::new(),
    }
}

/// Parameter der Projektion von `p` auf `a`-`b`, falls `p` auf der Strecke liegt.
fn param_on_segment(p: Point2D, a: Point2D, b: Point2D, tol: f64) -> Option<f64> {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 || point_segment_distance_sq(p, a, b) > tol * tol {
        return None;
    }
    Some(((p - a).dot(ab) / len_sq).clamp(0.0, 1.0))
}

/// `part` liegt im abgerundeten Rechteck. Die Form ist konvex: das innere
/// Rechteck, erweitert um den Eckradius.
pub(crate) fn part_within_round_rect(part: &Part, rr: &RoundRect, config: &GeometryConfig) -> bool {
    let tol = config.tolerance;
    let r = rr.effective_radius();
    let fits = |p: Point2D, radius: f64| rr.inner_signed_distance(p) + radius <= r + tol;
    match part {
        Part::Point(p) => fits(*p, 0.0),
        Part::Segment(a, b) => fits(*a, 0.0) && fits(*b, 0.0),
        Part::Area(inner) => inner.outer.iter().all(|&p| fits(p, 0.0)),
        Part::Disc(c, radius) => fits(*c, *radius),
        Part::Ellipse(e) => ellipse_ring(e, config).into_iter().all(|p| fits(p, 0.0)),
    }
}

/// Die Strecke wird an allen Schnitten mit Randkanten geteilt; jedes
/// Stück muss mit seiner Mitte in der Fläche liegen.
fn segment_within_area(a: Point2D, b: Point2D, area: &Area, tol: f64) -> bool {
    if !area.contains_point(a, tol) || !area.contains_point(b, tol) {
        return false;
    }
    let mut params: Vec<f64> = area
        .edges()
        .filter_map(|(c, d)| segment_intersection_param(a, b, c, d))
        .collect();
    params.push(0.0);
    params.push(1.0);
    params.sort_by(f64::total_cmp);
    params
        .windows(2)
        .all(|w| area.contains_point(a + (b - a) * ((w[0] + w[1]) * 0.5), tol))
}

fn area_within_area(inner: &Area, outer: &Area, tol: f64) -> bool {
    ring_edges(&inner.outer).all(|(a, b)| segment_within_area(a, b, outer, tol))
        && outer
            .holes
            .iter()
            .filter_map(|h| interior_point(h))
            .all(|p| !inner.interior_contains(p, tol))
}

/// Ein Punkt im Inneren eines einfachen Rings.
fn interior_point(ring: &[Point2D]) -> Option<Point2D> {
    if let Some((c, _)) = ring_centroid(ring) {
        if point_in_ring(c, ring) {
            return Some(c);
        }
    }
    let n = ring.len();
    (0..n)
        .map(|i| (ring[(i + n - 1) % n] + ring[i] + ring[(i + 1) % n]) / 3.0)
        .find(|&p| point_in_ring(p, ring))
}

// --- Abstand ---

pub(crate) fn point_part_distance(p: Point2D, part: &Part, config: &GeometryConfig) -> f64 {
    match part {
        Part::Point(q) => p.distance(*q),
        Part::Segment(a, b) => point_segment_distance(p, *a, *b),
        Part::Area(area) => {
            if area.contains_point(p, 0.0) {
                0.0
            } else {
                area.boundary_distance_sq(p).sqrt()
            }
        }
        Part::Disc(c, r) => (p.distance(*c) - r).max(0.0),
        Part::Ellipse(e) => {
            if ellipse_contains(e, p, 0.0) {
                0.0
            } else {
                point_ring_distance_sq(p, &ellipse_ring(e, config)).sqrt()
            }
        }
    }
}
