// src/math/geometry/shapes/line_string.rs

use super::Line;
use crate::math::geometry::config::GeometryConfig;
use crate::math::geometry::polygon::Polygon;
use crate::math::geometry::polygon::operations::buffer::{self, JoinStyle};
use crate::math::geometry::polygon::operations::simplify;
use crate::math::types::{Bounds2D, Point2D};
use crate::math::utils::simple_geometry;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Gibt an, ob eine Linienkette als geschlossen (letzter Punkt mit dem
/// ersten verbunden) behandelt werden soll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloseRing {
    #[default]
    Open,
    Close,
}

impl CloseRing {
    pub fn is_closed(self) -> bool {
        self == CloseRing::Close
    }
}

/// Veränderliche Folge von Punkten; benachbarte Punkte bilden Segmente.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    points: Vec<Point2D>,
}

impl LineString {
    pub fn new(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut Vec<Point2D> {
        &mut self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: Point2D) {
        self.points.push(point);
    }

    pub fn insert(&mut self, index: usize, point: Point2D) {
        self.points.insert(index.min(self.points.len()), point);
    }

    /// Entfernt den Punkt am Index, falls vorhanden.
    pub fn remove(&mut self, index: usize) -> Option<Point2D> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }

    /// Anzahl der Segmente.
    pub fn num_lines(&self, close: CloseRing) -> usize {
        match self.points.len() {
            0 | 1 => 0,
            2 => 1,
            n if close.is_closed() => n,
            n => n - 1,
        }
    }

    pub fn line(&self, index: usize, close: CloseRing) -> Option<Line> {
        if index >= self.num_lines(close) {
            return None;
        }
        let next = (index + 1) % self.points.len();
        Some(Line::new(self.points[index], self.points[next]))
    }

    pub fn lines(&self, close: CloseRing) -> impl Iterator<Item = Line> + '_ {
        (0..self.num_lines(close)).filter_map(move |i| self.line(i, close))
    }

    pub fn length(&self, close: CloseRing) -> f64 {
        self.lines(close).map(|l| l.length()).sum()
    }

    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::from_points_iter(self.points.iter().copied())
    }

    pub fn moved_by(&self, v: Point2D) -> Self {
        Self::new(self.points.iter().map(|&p| p + v).collect())
    }

    /// Douglas-Peucker-Vereinfachung der offenen Kette.
    pub fn simplified(&self, max_distance: f64) -> Self {
        Self::new(simplify::douglas_peucker_open(&self.points, max_distance))
    }

    /// Nächster Punkt auf der (offenen) Kette; `None` für eine leere Kette.
    pub fn closest_point_to(&self, p: Point2D) -> Option<Point2D> {
        match self.points.len() {
            0 => None,
            1 => Some(self.points[0]),
            _ => self
                .points
                .windows(2)
                .map(|w| simple_geometry::closest_point_on_segment(p, w[0], w[1]))
                .min_by(|a, b| a.distance_squared(p).total_cmp(&b.distance_squared(p))),
        }
    }

    /// Umhüllung der Kette mit Abstand `distance` und spitzen Ecken;
    /// das größte resultierende Teilpolygon.
    pub fn calculate_buffer(&self, distance: f64, close: CloseRing) -> Polygon {
        self.calculate_buffer_with(distance, close, JoinStyle::Miter, &GeometryConfig::default())
    }

    pub fn calculate_round_buffer(&self, distance: f64, close: CloseRing) -> Polygon {
        self.calculate_buffer_with(distance, close, JoinStyle::Round, &GeometryConfig::default())
    }

    pub fn calculate_buffer_with(
        &self,
        distance: f64,
        close: CloseRing,
        join: JoinStyle,
        config: &GeometryConfig,
    ) -> Polygon {
        buffer::buffer_line_string(self, distance, close, join, &config.buffer).into_largest()
    }
}

impl From<Vec<Point2D>> for LineString {
    fn from(points: Vec<Point2D>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point2D> for LineString {
    fn from_iter<I: IntoIterator<Item = Point2D>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for LineString {
    type Output = Point2D;

    fn index(&self, index: usize) -> &Point2D {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a LineString {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag() -> LineString {
        LineString::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(3.0, 4.0),
            Point2D::new(6.0, 0.0),
        ])
    }

    #[test]
    fn test_length_open_and_closed() {
        let ls = zigzag();
        assert_eq!(ls.num_lines(CloseRing::Open), 2);
        assert_eq!(ls.num_lines(CloseRing::Close), 3);
        assert_eq!(ls.length(CloseRing::Open), 10.0);
        assert_eq!(ls.length(CloseRing::Close), 16.0);
    }

    #[test]
    fn test_mutation() {
        let mut ls = zigzag();
        ls.push(Point2D::new(9.0, 4.0));
        ls.insert(0, Point2D::new(-1.0, 0.0));
        assert_eq!(ls.len(), 5);
        assert_eq!(ls.remove(0), Some(Point2D::new(-1.0, 0.0)));
        assert_eq!(ls.remove(10), None);
        assert_eq!(ls[3], Point2D::new(9.0, 4.0));
    }

    #[test]
    fn test_closest_point() {
        let ls = zigzag();
        assert_eq!(ls.closest_point_to(Point2D::new(3.0, 10.0)), Some(Point2D::new(3.0, 4.0)));
        assert_eq!(LineString::default().closest_point_to(Point2D::ZERO), None);
    }

    #[test]
    fn test_round_buffer_area_of_single_segment() {
        let ls = LineString::new(vec![Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)]);
        let polygon = ls.calculate_round_buffer(1.0, CloseRing::Open);
        // Rechteck 10x2 plus Kreisfläche (approximiert)
        let expected = 20.0 + std::f64::consts::PI;
        assert!((polygon.area() - expected).abs() < 0.05);
        assert!(polygon.contains_point(Point2D::new(-0.9, 0.0)));
    }
}
