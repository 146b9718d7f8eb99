// src/math/geometry/multi_polygon.rs

use crate::math::geometry::config::GeometryConfig;
use crate::math::geometry::polygon::Polygon;
use crate::math::geometry::polygon::operations::boolean::PolygonBoolean;
use crate::math::geometry::polygon::operations::buffer::{self, JoinStyle};
use crate::math::geometry::polygon::operations::convex_hull::ConvexHullComputer;
use crate::math::geometry::shapes::RectF;
use crate::math::types::{Bounds2D, Point2D};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Geordnete Sammlung von Polygonen.
///
/// Die Teile dürfen sich überlappen; `union_all` verschmilzt sie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    pub fn push(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// Leer, wenn kein Teil eine Fläche besitzt.
    pub fn is_empty(&self) -> bool {
        self.polygons.iter().all(Polygon::is_empty)
    }

    // --- Eigenschaften ---

    pub fn area(&self) -> f64 {
        self.polygons.iter().map(Polygon::area).sum()
    }

    pub fn perimeter(&self) -> f64 {
        self.polygons.iter().map(Polygon::perimeter).sum()
    }

    pub fn bounds(&self) -> Bounds2D {
        self.polygons
            .iter()
            .fold(Bounds2D::empty(), |acc, p| acc.union(&p.bounds()))
    }

    pub fn bounding_rect(&self) -> RectF {
        RectF::from(self.bounds())
    }

    /// Flächengewichteter Schwerpunkt aller Teile.
    pub fn centroid(&self) -> Point2D {
        let total = self.area();
        if total <= 0.0 {
            let bounds = self.bounds();
            return if bounds.is_empty() { Point2D::ZERO } else { bounds.center() };
        }
        self.polygons
            .iter()
            .map(|p| p.centroid() * p.area())
            .fold(Point2D::ZERO, |acc, c| acc + c)
            / total
    }

    // --- Abgeleitete Formen ---

    pub fn moved_by(&self, offset: Point2D) -> Self {
        self.iter().map(|p| p.moved_by(offset)).collect()
    }

    pub fn rotated_at(&self, pivot: Point2D, angle_rad: f64) -> Self {
        self.iter().map(|p| p.rotated_at(pivot, angle_rad)).collect()
    }

    pub fn scaled(&self, s: f64) -> Self {
        self.iter().map(|p| p.scaled(s)).collect()
    }

    /// Vereinfacht jeden Teil; dabei leer gewordene Teile entfallen.
    pub fn simplified(&self, max_distance: f64) -> Self {
        self.iter()
            .map(|p| p.simplified(max_distance))
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Konvexe Hülle über die äußeren Ringe aller Teile.
    pub fn compute_convex_hull(&self) -> Polygon {
        let points: Vec<Point2D> = self.iter().flat_map(|p| p.outer().iter().copied()).collect();
        ConvexHullComputer::new().compute_hull(&points)
    }

    /// Verschmilzt überlappende Teile.
    pub fn union_all(&self) -> Self {
        PolygonBoolean::union_many(&self.polygons)
    }

    pub fn calculate_buffer(&self, distance: f64) -> Self {
        self.calculate_buffer_with(distance, JoinStyle::Miter, &GeometryConfig::default())
    }

    pub fn calculate_round_buffer(&self, distance: f64) -> Self {
        self.calculate_buffer_with(distance, JoinStyle::Round, &GeometryConfig::default())
    }

    pub fn calculate_buffer_with(&self, distance: f64, join: JoinStyle, config: &GeometryConfig) -> Self {
        buffer::buffer_multi_polygon(self, distance, join, &config.buffer)
    }

    /// Teil mit der größten Fläche; leeres Polygon, wenn keiner existiert.
    pub fn into_largest(self) -> Polygon {
        self.polygons
            .into_iter()
            .max_by(|a, b| a.area().total_cmp(&b.area()))
            .unwrap_or_default()
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(polygons: Vec<Polygon>) -> Self {
        Self::new(polygons)
    }
}

impl From<Polygon> for MultiPolygon {
    fn from(polygon: Polygon) -> Self {
        Self::new(vec![polygon])
    }
}

impl FromIterator<Polygon> for MultiPolygon {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for MultiPolygon {
    type Item = Polygon;
    type IntoIter = std::vec::IntoIter<Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiPolygon {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}

impl Index<usize> for MultiPolygon {
    type Output = Polygon;

    fn index(&self, index: usize) -> &Polygon {
        &self.polygons[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn two_squares() -> MultiPolygon {
        MultiPolygon::from(vec![
            RectF::new(0.0, 0.0, 2.0, 2.0).as_polygon(),
            RectF::new(4.0, 0.0, 1.0, 1.0).as_polygon(),
        ])
    }

    #[test]
    fn test_area_perimeter_bounds() {
        let multi = two_squares();
        assert_eq!(multi.num_polygons(), 2);
        assert_relative_eq!(multi.area(), 5.0);
        assert_relative_eq!(multi.perimeter(), 12.0);
        assert_eq!(multi.bounding_rect(), RectF::new(0.0, 0.0, 5.0, 2.0));
    }

    #[test]
    fn test_centroid_is_area_weighted() {
        let c = two_squares().centroid();
        assert_relative_eq!(c.x, (4.0 * 1.0 + 1.0 * 4.5) / 5.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, (4.0 * 1.0 + 1.0 * 0.5) / 5.0, epsilon = 1e-12);
        assert_eq!(MultiPolygon::default().centroid(), Point2D::ZERO);
    }

    #[test]
    fn test_transforms_apply_to_all_parts() {
        let multi = two_squares();
        let moved = multi.moved_by(Point2D::new(1.0, 1.0));
        assert_eq!(moved.bounding_rect(), RectF::new(1.0, 1.0, 5.0, 2.0));
        let rotated = multi.rotated_at(Point2D::ZERO, FRAC_PI_2);
        assert_relative_eq!(rotated.area(), 5.0, epsilon = 1e-9);
        assert_relative_eq!(multi.scaled(2.0).area(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_convex_hull_spans_all_parts() {
        let hull = two_squares().compute_convex_hull();
        assert_relative_eq!(hull.area(), 8.5, epsilon = 1e-9);
        for p in two_squares().iter().flat_map(|p| p.outer().to_vec()) {
            assert!(hull.contains_point(p));
        }
    }

    #[test]
    fn test_union_all_merges_overlaps() {
        let mut multi = two_squares();
        multi.push(RectF::new(1.0, 1.0, 2.0, 2.0).as_polygon());
        let merged = multi.union_all();
        assert_eq!(merged.num_polygons(), 2);
        assert_relative_eq!(merged.area(), 4.0 + 3.0 + 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_into_largest() {
        assert_relative_eq!(two_squares().into_largest().area(), 4.0);
        assert!(MultiPolygon::default().into_largest().is_empty());
    }

    #[test]
    fn test_buffer_merges_close_parts() {
        let buffered = two_squares().calculate_buffer(1.5);
        assert_eq!(buffered.num_polygons(), 1);
        assert!(buffered.area() > two_squares().area());
        assert!(two_squares().calculate_round_buffer(-1.5).is_empty());
    }
}
