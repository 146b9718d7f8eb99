// src/math/geometry/polygon/operations/buffer.rs

//! Offset-Flächen (Buffer) für Polygone und Linienketten.
//!
//! Der Buffer wird als Vereinigung einfacher Stücke gebildet: ein Rechteck
//! der Breite `2d` pro Kante und ein Verbindungsstück pro Ecke (Kreisscheibe
//! oder Miter-Keil). Positive Distanzen vereinigen diese Stücke mit dem
//! Polygon, negative ziehen sie ab.

use super::boolean::{self, BooleanOperation};
use crate::math::geometry::config::BufferConfig;
use crate::math::geometry::multi_polygon::MultiPolygon;
use crate::math::geometry::polygon::{Polygon, ShapeGenerators};
use crate::math::geometry::shapes::{CloseRing, LineString};
use crate::math::types::{Point2D, Vector2DExt};
use crate::math::utils::simple_geometry::{cross, ring_signed_area};
use bevy::log::{debug, trace};

/// Form der Ecken eines Buffers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinStyle {
    /// Spitze Ecken, oberhalb des Miter-Limits abgeschrägt
    #[default]
    Miter,
    /// Kreisbögen um die Ecken
    Round,
}

/// Buffer eines Polygons; das Ergebnis kann in mehrere Teile zerfallen
/// oder (bei negativer Distanz) leer sein.
pub fn buffer_polygon(
    polygon: &Polygon,
    distance: f64,
    join: JoinStyle,
    config: &BufferConfig,
) -> MultiPolygon {
    if polygon.is_empty() || !distance.is_finite() {
        return MultiPolygon::default();
    }
    let config = &config.validated();
    if distance == 0.0 {
        return MultiPolygon::from(vec![polygon.clone()]);
    }

    let d = distance.abs();
    let mut pieces = Vec::new();
    for ring in std::iter::once(polygon.outer()).chain(polygon.holes().iter().map(Vec::as_slice)) {
        ring_pieces(ring, true, d, join, config, &mut pieces);
    }

    let strips = boolean::union_all(pieces.iter().map(|p| boolean::ring_to_geo_multi(p)).collect());
    let base = boolean::to_geo_multi(std::slice::from_ref(polygon));
    let operation = if distance > 0.0 {
        BooleanOperation::Union
    } else {
        BooleanOperation::Difference
    };

    let result = boolean::from_geo_multi(&boolean::apply(&base, &strips, operation));
    trace!(
        "Buffer d={} from {} pieces -> {} polygons",
        distance,
        pieces.len(),
        result.num_polygons()
    );
    if result.is_empty() {
        debug!("Buffer with distance {} collapsed the polygon", distance);
    }
    result
}

/// Buffer aller Teile; bei positiver Distanz werden überlappende Teile verschmolzen.
pub fn buffer_multi_polygon(
    multi: &MultiPolygon,
    distance: f64,
    join: JoinStyle,
    config: &BufferConfig,
) -> MultiPolygon {
    let buffered: Vec<Polygon> = multi
        .iter()
        .flat_map(|p| buffer_polygon(p, distance, join, config))
        .collect();

    if distance > 0.0 && buffered.len() > 1 {
        boolean::PolygonBoolean::union_many(&buffered)
    } else {
        MultiPolygon::from(buffered)
    }
}

/// Buffer einer Linienkette. Nur positive Distanzen ergeben eine Fläche.
/// Offene Ketten erhalten bei `Round` runde, bei `Miter` flache Enden.
pub fn buffer_line_string(
    line_string: &LineString,
    distance: f64,
    close: CloseRing,
    join: JoinStyle,
    config: &BufferConfig,
) -> MultiPolygon {
    if !(distance > 0.0) || !distance.is_finite() || line_string.is_empty() {
        return MultiPolygon::default();
    }
    let config = &config.validated();

    let mut points = line_string.points().to_vec();
    points.dedup();
    let closed = close.is_closed() && points.len() > 2;
    if closed && points.first() == points.last() {
        points.pop();
    }

    let mut pieces = Vec::new();
    if points.len() == 1 {
        if join == JoinStyle::Round {
            pieces.push(disc(points[0], distance, config.quality));
        }
    } else {
        ring_pieces(&points, closed, distance, join, config, &mut pieces);
    }

    let merged = boolean::union_all(pieces.iter().map(|p| boolean::ring_to_geo_multi(p)).collect());
    boolean::from_geo_multi(&merged)
}

/// Erzeugt Kantenstreifen und Eckstücke für eine Kette.
fn ring_pieces(
    points: &[Point2D],
    closed: bool,
    d: f64,
    join: JoinStyle,
    config: &BufferConfig,
    pieces: &mut Vec<Vec<Point2D>>,
) {
    let n = points.len();
    if n < 2 {
        return;
    }

    let edge_count = if closed { n } else { n - 1 };
    for i in 0..edge_count {
        let (a, b) = (points[i], points[(i + 1) % n]);
        if a == b {
            continue;
        }
        let offset = (b - a).left_normal() * d;
        // Gegen den Uhrzeigersinn: rechts von a nach b, links zurück
        pieces.push(vec![a - offset, b - offset, b + offset, a + offset]);
    }

    for i in 0..n {
        let is_end = !closed && (i == 0 || i == n - 1);
        if is_end {
            if join == JoinStyle::Round {
                pieces.push(disc(points[i], d, config.quality));
            }
            continue;
        }

        let prev = points[(i + n - 1) % n];
        let curr = points[i];
        let next = points[(i + 1) % n];
        match join {
            JoinStyle::Round => pieces.push(disc(curr, d, config.quality)),
            JoinStyle::Miter => {
                if let Some(wedge) = miter_wedge(prev, curr, next, d, config.miter_limit) {
                    pieces.push(wedge);
                }
            }
        }
    }
}

fn disc(center: Point2D, radius: f64, quality: usize) -> Vec<Point2D> {
    ShapeGenerators::create_circle_vertices(center, radius, quality.max(4))
}

/// Keil, der die Lücke zwischen zwei Kantenstreifen an der Außenseite einer
/// Ecke füllt. Gerade Fortsetzungen brauchen keinen Keil.
fn miter_wedge(
    prev: Point2D,
    curr: Point2D,
    next: Point2D,
    d: f64,
    miter_limit: f64,
) -> Option<Vec<Point2D>> {
    let e1 = curr - prev;
    let e2 = next - curr;
    let turn = cross(e1, e2);
    if turn == 0.0 && e1.dot(e2) >= 0.0 {
        return None;
    }

    // Außenseite: rechts bei Linkskurve, links bei Rechtskurve
    let side = if turn > 0.0 { -1.0 } else { 1.0 };
    let n1 = e1.left_normal() * side;
    let n2 = e2.left_normal() * side;

    let sum = n1 + n2;
    let cos_half = sum.length() * 0.5;
    let mut wedge = if cos_half > 1e-12 && 1.0 / cos_half <= miter_limit {
        let miter = curr + sum.normalize() * (d / cos_half);
        vec![curr, curr + n1 * d, miter, curr + n2 * d]
    } else {
        // Abschrägung (Bevel)
        vec![curr, curr + n1 * d, curr + n2 * d]
    };

    if ring_signed_area(&wedge) < 0.0 {
        wedge.reverse();
    }
    (ring_signed_area(&wedge) > 0.0).then_some(wedge)
}
