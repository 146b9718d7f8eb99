// src/math/geometry/polygon/core.rs

use crate::math::error::{MathError, MathResult};
use crate::math::geometry::config::GeometryConfig;
use crate::math::geometry::multi_polygon::MultiPolygon;
use crate::math::geometry::polygon::ShapeGenerators;
use crate::math::geometry::polygon::operations::buffer::{self, JoinStyle};
use crate::math::geometry::polygon::operations::convex_hull::ConvexHullComputer;
use crate::math::geometry::polygon::operations::simplify;
use crate::math::geometry::polygon::operations::triangulation::{
    PolygonTriangulator, TriangleIndex,
};
use crate::math::geometry::polygon::properties::{
    Orientation, is_convex_ring, ring_centroid, vertex_mean,
};
use crate::math::geometry::polygon::transformations::AffineTransform;
use crate::math::geometry::shapes::{Quad, Rect, RectF, Triangle};
use crate::math::types::{Bounds2D, Point2D};
use crate::math::utils::simple_geometry::{
    closest_point_on_segment, point_in_ring, point_ring_distance_sq, ring_edges, ring_length,
    ring_signed_area,
};
use bevy::log::warn;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Ringe, Triangulation und Bounding-Box eines Polygons.
/// Wird zwischen Klonen geteilt und erst beim Schreiben kopiert.
#[derive(Debug, Clone, Default)]
struct PolygonDetail {
    outer: Vec<Point2D>,
    holes: Vec<Vec<Point2D>>,
    /// Indizes in `outer` gefolgt von allen `holes`
    indices: Vec<TriangleIndex>,
    bounding_rect: RectF,
}

impl PolygonDetail {
    fn build(outer: Vec<Point2D>, holes: Vec<Vec<Point2D>>, config: &GeometryConfig) -> Self {
        let mut detail = Self {
            outer,
            holes,
            indices: Vec::new(),
            bounding_rect: RectF::default(),
        };
        detail.retriangulate(config);
        detail
    }

    fn retriangulate(&mut self, config: &GeometryConfig) {
        self.bounding_rect = ring_bounding_rect(&self.outer);
        self.indices = match PolygonTriangulator::new(config.triangulation)
            .triangulate(&self.outer, &self.holes)
        {
            Ok(indices) => indices,
            Err(err) => {
                warn!("Polygon triangulation failed: {}", err);
                Vec::new()
            }
        };
    }

    fn apply(&mut self, transform: &AffineTransform) {
        for p in self.outer.iter_mut().chain(self.holes.iter_mut().flatten()) {
            *p = transform.transform_point(*p);
        }
        // Spiegelungen kehren die Orientierung der Dreiecke um
        if transform.determinant() < 0.0 {
            for triangle in &mut self.indices {
                *triangle = triangle.flipped();
            }
        }
        self.bounding_rect = ring_bounding_rect(&self.outer);
    }
}

fn ring_bounding_rect(ring: &[Point2D]) -> RectF {
    if ring.is_empty() {
        return RectF::default();
    }
    RectF::from(Bounds2D::from_points_iter(ring.iter().copied()))
}

/// Entfernt aufeinanderfolgende Duplikate und einen expliziten Schlusspunkt.
fn clean_ring(mut ring: Vec<Point2D>) -> Vec<Point2D> {
    ring.dedup();
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

fn distinct_count(ring: &[Point2D]) -> usize {
    let mut sorted = ring.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();
    sorted.len()
}

/// Einfaches Polygon mit optionalen Löchern.
///
/// Die Ringe behalten die Orientierung des Aufrufers. Die Triangulation und
/// die Bounding-Box werden bei jeder Änderung der Ringe neu berechnet und
/// sind zwischen Klonen geteilt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(into = "PolygonData", from = "PolygonData")]
pub struct Polygon {
    detail: Arc<PolygonDetail>,
}

/// Serialisierte Form eines Polygons.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PolygonData {
    outer: Vec<Point2D>,
    holes: Vec<Vec<Point2D>>,
}

impl From<Polygon> for PolygonData {
    fn from(polygon: Polygon) -> Self {
        Self {
            outer: polygon.outer().to_vec(),
            holes: polygon.holes().to_vec(),
        }
    }
}

impl From<PolygonData> for Polygon {
    fn from(data: PolygonData) -> Self {
        Polygon::new(data.outer, data.holes)
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.detail, &other.detail)
            || (self.detail.outer == other.detail.outer && self.detail.holes == other.detail.holes)
    }
}

impl Polygon {
    /// Erstellt ein Polygon aus äußerem Ring und Löchern.
    ///
    /// Aufeinanderfolgende doppelte Punkte und ein wiederholter Startpunkt am
    /// Ende werden entfernt. Ein äußerer Ring mit weniger als drei
    /// verschiedenen Punkten ergibt ein leeres Polygon; solche Löcher werden
    /// verworfen.
    pub fn new(outer: Vec<Point2D>, holes: Vec<Vec<Point2D>>) -> Self {
        Self::new_with(outer, holes, &GeometryConfig::default())
    }

    pub fn new_with(outer: Vec<Point2D>, holes: Vec<Vec<Point2D>>, config: &GeometryConfig) -> Self {
        match Self::try_new_with(outer, holes, &config.validated()) {
            Ok(polygon) => polygon,
            Err(err) => {
                warn!("Degenerate polygon replaced by empty polygon: {}", err);
                Self::empty()
            }
        }
    }

    /// Wie `new`, lehnt aber einen degenerierten äußeren Ring ab.
    pub fn try_new(outer: Vec<Point2D>, holes: Vec<Vec<Point2D>>) -> MathResult<Self> {
        Self::try_new_with(outer, holes, &GeometryConfig::default())
    }

    pub fn try_new_with(
        outer: Vec<Point2D>,
        holes: Vec<Vec<Point2D>>,
        config: &GeometryConfig,
    ) -> MathResult<Self> {
        config.validate()?;
        let outer = clean_ring(outer);
        let distinct = distinct_count(&outer);
        if distinct < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: distinct,
            });
        }

        let holes: Vec<Vec<Point2D>> = holes
            .into_iter()
            .map(clean_ring)
            .filter(|hole| {
                let keep = distinct_count(hole) >= 3;
                if !keep {
                    warn!("Dropping degenerate hole with {} vertices", hole.len());
                }
                keep
            })
            .collect();

        Ok(Self {
            detail: Arc::new(PolygonDetail::build(outer, holes, config)),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Regelmäßiges n-Eck mit Umkreisradius `radius`; erster Vertex oben.
    pub fn create_ngon(sides: usize, radius: f64, center: Point2D) -> Self {
        Self::new(ShapeGenerators::ngon(sides, radius, center, 0.0), Vec::new())
    }

    /// Fügt ein Loch hinzu und trianguliert neu. `false` wenn das Loch
    /// degeneriert oder das Polygon leer ist.
    pub fn add_hole(&mut self, hole: Vec<Point2D>) -> bool {
        self.add_hole_with(hole, &GeometryConfig::default())
    }

    pub fn add_hole_with(&mut self, hole: Vec<Point2D>, config: &GeometryConfig) -> bool {
        let hole = clean_ring(hole);
        if self.is_empty() || distinct_count(&hole) < 3 {
            return false;
        }
        let detail = Arc::make_mut(&mut self.detail);
        detail.holes.push(hole);
        detail.retriangulate(&config.validated());
        true
    }

    // --- Zugriff ---

    pub fn outer(&self) -> &[Point2D] {
        &self.detail.outer
    }

    pub fn holes(&self) -> &[Vec<Point2D>] {
        &self.detail.holes
    }

    pub fn has_holes(&self) -> bool {
        !self.detail.holes.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.detail.outer.is_empty()
    }

    /// Anzahl aller Vertices (äußerer Ring und Löcher).
    pub fn num_vertices(&self) -> usize {
        self.detail.outer.len() + self.detail.holes.iter().map(Vec::len).sum::<usize>()
    }

    /// Alle Vertices in Index-Reihenfolge der Triangulation.
    pub fn vertices(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.detail
            .outer
            .iter()
            .chain(self.detail.holes.iter().flatten())
            .copied()
    }

    /// Vertex zum Triangulations-Index.
    pub fn vertex(&self, index: usize) -> Option<Point2D> {
        let mut index = index;
        for ring in std::iter::once(&self.detail.outer).chain(&self.detail.holes) {
            if index < ring.len() {
                return Some(ring[index]);
            }
            index -= ring.len();
        }
        None
    }

    fn rings(&self) -> impl Iterator<Item = &[Point2D]> + '_ {
        std::iter::once(self.detail.outer.as_slice()).chain(self.detail.holes.iter().map(Vec::as_slice))
    }

    // --- Triangulation ---

    pub fn indices(&self) -> &[TriangleIndex] {
        &self.detail.indices
    }

    pub fn num_triangles(&self) -> usize {
        self.detail.indices.len()
    }

    pub fn triangle(&self, index: usize) -> Option<Triangle> {
        let [a, b, c] = self.detail.indices.get(index)?.as_array();
        Some(Triangle::new(self.vertex(a)?, self.vertex(b)?, self.vertex(c)?))
    }

    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.num_triangles()).filter_map(|i| self.triangle(i))
    }

    // --- Eigenschaften ---

    /// Fläche des äußeren Rings abzüglich der Löcher.
    pub fn area(&self) -> f64 {
        let outer = ring_signed_area(&self.detail.outer).abs();
        let holes: f64 = self.detail.holes.iter().map(|h| ring_signed_area(h).abs()).sum();
        (outer - holes).max(0.0)
    }

    /// Umfang des äußeren Rings.
    pub fn perimeter(&self) -> f64 {
        ring_length(&self.detail.outer, true)
    }

    pub fn perimeter_with_holes(&self) -> f64 {
        self.rings().map(|r| ring_length(r, true)).sum()
    }

    /// Flächenschwerpunkt unter Berücksichtigung der Löcher.
    pub fn centroid(&self) -> Point2D {
        if self.is_empty() {
            return Point2D::ZERO;
        }

        let mut weighted = Point2D::ZERO;
        let mut total = 0.0;
        if let Some((c, a)) = ring_centroid(&self.detail.outer) {
            weighted += c * a.abs();
            total += a.abs();
        }
        for hole in &self.detail.holes {
            if let Some((c, a)) = ring_centroid(hole) {
                weighted -= c * a.abs();
                total -= a.abs();
            }
        }

        if total > 0.0 {
            weighted / total
        } else {
            vertex_mean(self.detail.outer.iter().copied()).unwrap_or(Point2D::ZERO)
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::of_ring(&self.detail.outer)
    }

    pub fn is_convex(&self) -> bool {
        !self.has_holes() && is_convex_ring(&self.detail.outer)
    }

    pub fn bounding_rect(&self) -> RectF {
        self.detail.bounding_rect
    }

    pub fn bounds(&self) -> Bounds2D {
        if self.is_empty() {
            return Bounds2D::empty();
        }
        let r = self.detail.bounding_rect;
        Bounds2D::from_points(r.min(), r.max())
    }

    // --- Punktabfragen ---

    /// Punkt im Polygon oder auf dessen Rand.
    pub fn contains_point(&self, point: Point2D) -> bool {
        self.contains_point_with(point, GeometryConfig::default().tolerance)
    }

    pub fn contains_point_with(&self, point: Point2D, tolerance: f64) -> bool {
        if self.is_empty() {
            return false;
        }
        if !self.bounds().expand(tolerance).contains_point(point) {
            return false;
        }
        if self.rings().any(|r| point_ring_distance_sq(point, r) <= tolerance * tolerance) {
            return true;
        }
        point_in_ring(point, &self.detail.outer)
            && !self.detail.holes.iter().any(|h| point_in_ring(point, h))
    }

    /// Abstand zur Fläche; 0 für Punkte innerhalb.
    pub fn distance_to_point(&self, point: Point2D) -> f64 {
        if self.is_empty() {
            return f64::INFINITY;
        }
        if self.contains_point(point) {
            return 0.0;
        }
        self.rings()
            .map(|r| point_ring_distance_sq(point, r))
            .fold(f64::INFINITY, f64::min)
            .sqrt()
    }

    pub fn closest_point_on_boundary(&self, point: Point2D) -> Option<Point2D> {
        self.rings()
            .flat_map(ring_edges)
            .map(|(a, b)| closest_point_on_segment(point, a, b))
            .min_by(|a, b| a.distance_squared(point).total_cmp(&b.distance_squared(point)))
    }

    // --- Abgeleitete Polygone ---

    /// Konvexe Hülle des äußeren Rings, gegen den Uhrzeigersinn.
    pub fn compute_convex_hull(&self) -> Polygon {
        ConvexHullComputer::new().compute_hull(&self.detail.outer)
    }

    /// Douglas-Peucker pro Ring; zusammengefallene Löcher entfallen.
    pub fn simplified(&self, max_distance: f64) -> Polygon {
        if self.is_empty() {
            return Self::empty();
        }
        let outer = simplify::douglas_peucker_closed(&self.detail.outer, max_distance);
        let holes = self
            .detail
            .holes
            .iter()
            .map(|h| simplify::douglas_peucker_closed(h, max_distance))
            .filter(|h| ring_signed_area(h) != 0.0)
            .collect();
        Self::new(outer, holes)
    }

    /// Wendet die Transformation an. Die Triangulation wird übernommen.
    pub fn transformed(&self, transform: &AffineTransform) -> Polygon {
        let mut result = self.clone();
        result.transform(transform);
        result
    }

    pub fn transform(&mut self, transform: &AffineTransform) {
        if self.is_empty() {
            return;
        }
        Arc::make_mut(&mut self.detail).apply(transform);
    }

    pub fn moved_by(&self, offset: Point2D) -> Polygon {
        self.transformed(&AffineTransform::translation(offset))
    }

    pub fn move_by(&mut self, offset: Point2D) {
        self.transform(&AffineTransform::translation(offset));
    }

    pub fn scaled(&self, s: f64) -> Polygon {
        self.scaled_xy(s, s)
    }

    pub fn scaled_xy(&self, sx: f64, sy: f64) -> Polygon {
        self.transformed(&AffineTransform::scale(sx, sy))
    }

    pub fn scaled_at(&self, pivot: Point2D, s: f64) -> Polygon {
        self.transformed(&AffineTransform::scale_around(s, s, pivot))
    }

    pub fn scale(&mut self, s: f64) {
        self.transform(&AffineTransform::scale(s, s));
    }

    /// Rotation um den Ursprung.
    pub fn rotated(&self, angle_rad: f64) -> Polygon {
        self.transformed(&AffineTransform::rotation(angle_rad))
    }

    pub fn rotated_at(&self, pivot: Point2D, angle_rad: f64) -> Polygon {
        self.transformed(&AffineTransform::rotation_around(angle_rad, pivot))
    }

    pub fn rotate_at(&mut self, pivot: Point2D, angle_rad: f64) {
        self.transform(&AffineTransform::rotation_around(angle_rad, pivot));
    }

    // --- Buffer ---

    /// Buffer mit spitzen Ecken; das größte resultierende Teilpolygon.
    pub fn calculate_buffer(&self, distance: f64) -> Polygon {
        self.calculate_buffer_with(distance, JoinStyle::Miter, &GeometryConfig::default())
    }

    /// Buffer mit runden Ecken; das größte resultierende Teilpolygon.
    pub fn calculate_round_buffer(&self, distance: f64) -> Polygon {
        self.calculate_buffer_with(distance, JoinStyle::Round, &GeometryConfig::default())
    }

    pub fn calculate_buffer_with(
        &self,
        distance: f64,
        join: JoinStyle,
        config: &GeometryConfig,
    ) -> Polygon {
        self.buffer_parts(distance, join, config).into_largest()
    }

    /// Alle Teile eines Buffers.
    pub fn buffer_parts(&self, distance: f64, join: JoinStyle, config: &GeometryConfig) -> MultiPolygon {
        buffer::buffer_polygon(self, distance, join, &config.buffer)
    }
}

impl From<Triangle> for Polygon {
    fn from(triangle: Triangle) -> Self {
        triangle.as_polygon()
    }
}

impl From<Rect> for Polygon {
    fn from(rect: Rect) -> Self {
        rect.as_polygon()
    }
}

impl From<RectF> for Polygon {
    fn from(rect: RectF) -> Self {
        rect.as_polygon()
    }
}

impl From<Quad> for Polygon {
    fn from(quad: Quad) -> Self {
        quad.as_polygon()
    }
}
