// src/math/geometry/polygon/validation.rs

use crate::math::geometry::polygon::core::Polygon;
use crate::math::geometry::polygon::properties::Orientation;
use crate::math::types::Point2D;
use crate::math::utils::constants;
use crate::math::utils::simple_geometry::{
    point_in_ring, point_ring_distance_sq, ring_edges, ring_signed_area,
    segment_intersection_param, segments_cross_properly,
};
use bevy::log::debug;

/// Verschiedene Validierungsebenen für Polygone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationLevel {
    Basic,         // Punkt-Anzahl, endliche Koordinaten, Duplikate
    Standard,      // zusätzlich Selbstüberschneidungen und Lage der Löcher
    Comprehensive, // zusätzlich Orientierung und Flächen-Warnungen
}

/// Kennzeichnet einen Ring des Polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingId {
    Outer,
    Hole(usize),
}

/// Ergebnis einer Polygon-Validierung.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Fehler, die ein Polygon ungültig machen.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    InsufficientVertices { ring: RingId, distinct: usize },
    NonFiniteVertex { ring: RingId, vertex_index: usize },
    SelfIntersection {
        ring: RingId,
        edges: (usize, usize),
        point: Point2D,
    },
    HoleOutsideOuter { hole: usize },
    HolesIntersect { first: usize, second: usize },
}

/// Warnungen, die das Polygon nicht ungültig machen.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    DuplicateConsecutiveVertices { ring: RingId, vertex_index: usize },
    LargeCoordinateValues { ring: RingId, vertex_index: usize },
    SmallArea { area: f64 },
    ClockwiseOuter,
    HoleWindingMatchesOuter { hole: usize },
}

/// Prüft Ringe auf Eigenschaften, die `Polygon` voraussetzt, aber nicht erzwingt.
#[derive(Debug, Clone, Copy)]
pub struct PolygonValidator {
    level: ValidationLevel,
    tolerance: f64,
}

impl PolygonValidator {
    pub fn new(level: ValidationLevel) -> Self {
        Self {
            level,
            tolerance: constants::EPSILON,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn validate(&self, polygon: &Polygon) -> ValidationReport {
        self.validate_rings(polygon.outer(), polygon.holes())
    }

    /// Validiert rohe Ringe, z.B. vor der Konstruktion.
    pub fn validate_rings(&self, outer: &[Point2D], holes: &[Vec<Point2D>]) -> ValidationReport {
        let mut report = ValidationReport::default();
        let rings: Vec<(RingId, &[Point2D])> = std::iter::once((RingId::Outer, outer))
            .chain(holes.iter().enumerate().map(|(i, h)| (RingId::Hole(i), h.as_slice())))
            .collect();

        // --- Basic ---
        for &(id, ring) in &rings {
            self.validate_vertices(id, ring, &mut report);
        }

        if !report.is_valid() || self.level == ValidationLevel::Basic {
            return report;
        }

        // --- Standard ---
        for &(id, ring) in &rings {
            self.validate_self_intersections(id, ring, &mut report);
        }
        self.validate_hole_placement(outer, holes, &mut report);

        if !report.is_valid() || self.level == ValidationLevel::Standard {
            debug!("Polygon validation: {} errors", report.errors.len());
            return report;
        }

        // --- Comprehensive ---
        self.validate_orientation(outer, holes, &mut report);
        report
    }

    fn validate_vertices(&self, id: RingId, ring: &[Point2D], report: &mut ValidationReport) {
        for (i, vertex) in ring.iter().enumerate() {
            if !vertex.is_finite() {
                report.errors.push(ValidationError::NonFiniteVertex { ring: id, vertex_index: i });
            } else if vertex.x.abs() > 1e12 || vertex.y.abs() > 1e12 {
                report
                    .warnings
                    .push(ValidationWarning::LargeCoordinateValues { ring: id, vertex_index: i });
            }
            if i > 0 && ring[i - 1] == *vertex {
                report
                    .warnings
                    .push(ValidationWarning::DuplicateConsecutiveVertices { ring: id, vertex_index: i });
            }
        }

        let mut distinct = ring.to_vec();
        distinct.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        distinct.dedup();
        if distinct.len() < 3 {
            report.errors.push(ValidationError::InsufficientVertices {
                ring: id,
                distinct: distinct.len(),
            });
        }
    }

    fn validate_self_intersections(&self, id: RingId, ring: &[Point2D], report: &mut ValidationReport) {
        let n = ring.len();
        if n < 4 {
            return;
        }
        for i in 0..n {
            let (p1, p2) = (ring[i], ring[(i + 1) % n]);
            // Nicht-adjazente Kanten
            for j in i + 2..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (p3, p4) = (ring[j], ring[(j + 1) % n]);
                if segments_cross_properly(p1, p2, p3, p4) {
                    let t = segment_intersection_param(p1, p2, p3, p4).unwrap_or(0.0);
                    report.errors.push(ValidationError::SelfIntersection {
                        ring: id,
                        edges: (i, j),
                        point: p1 + (p2 - p1) * t,
                    });
                }
            }
        }
    }

    fn validate_hole_placement(&self, outer: &[Point2D], holes: &[Vec<Point2D>], report: &mut ValidationReport) {
        for (i, hole) in holes.iter().enumerate() {
            if hole.iter().any(|&p| !point_in_ring(p, outer) && !on_ring(p, outer, self.tolerance)) {
                report.errors.push(ValidationError::HoleOutsideOuter { hole: i });
            }
            for (j, other) in holes.iter().enumerate().skip(i + 1) {
                if rings_cross(hole, other) || other.iter().any(|&p| point_in_ring(p, hole)) {
                    report
                        .errors
                        .push(ValidationError::HolesIntersect { first: i, second: j });
                }
            }
        }
    }

    fn validate_orientation(&self, outer: &[Point2D], holes: &[Vec<Point2D>], report: &mut ValidationReport) {
        let outer_orientation = Orientation::of_ring(outer);
        if outer_orientation == Orientation::Clockwise {
            report.warnings.push(ValidationWarning::ClockwiseOuter);
        }
        for (i, hole) in holes.iter().enumerate() {
            if Orientation::of_ring(hole) == outer_orientation {
                report.warnings.push(ValidationWarning::HoleWindingMatchesOuter { hole: i });
            }
        }

        let area = ring_signed_area(outer).abs()
            - holes.iter().map(|h| ring_signed_area(h).abs()).sum::<f64>();
        if area < self.tolerance * self.tolerance * 100.0 {
            report.warnings.push(ValidationWarning::SmallArea { area });
        }
    }
}

fn on_ring(p: Point2D, ring: &[Point2D], tolerance: f64) -> bool {
    point_ring_distance_sq(p, ring) <= tolerance * tolerance
}

fn rings_cross(a: &[Point2D], b: &[Point2D]) -> bool {
    ring_edges(a).any(|(a1, a2)| ring_edges(b).any(|(b1, b2)| segments_cross_properly(a1, a2, b1, b2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f64, max: f64) -> Vec<Point2D> {
        vec![
            Point2D::new(min, min),
            Point2D::new(max, min),
            Point2D::new(max, max),
            Point2D::new(min, max),
        ]
    }

    #[test]
    fn test_valid_polygon_with_hole() {
        let mut hole = square(1.0, 2.0);
        hole.reverse();
        let report = PolygonValidator::new(ValidationLevel::Comprehensive)
            .validate_rings(&square(0.0, 4.0), &[hole]);
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_bow_tie_is_self_intersecting() {
        let bow_tie = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(0.0, 1.0),
        ];
        let report = PolygonValidator::new(ValidationLevel::Standard).validate_rings(&bow_tie, &[]);
        assert!(matches!(
            report.errors.as_slice(),
            [ValidationError::SelfIntersection { ring: RingId::Outer, .. }]
        ));
    }

    #[test]
    fn test_hole_problems_reported() {
        let report = PolygonValidator::new(ValidationLevel::Standard)
            .validate_rings(&square(0.0, 4.0), &[square(3.0, 5.0), square(1.0, 3.5)]);
        assert!(report.errors.contains(&ValidationError::HoleOutsideOuter { hole: 0 }));
        assert!(report
            .errors
            .contains(&ValidationError::HolesIntersect { first: 0, second: 1 }));
    }

    #[test]
    fn test_basic_checks() {
        let ring = vec![Point2D::ZERO, Point2D::ZERO, Point2D::new(f64::NAN, 0.0)];
        let report = PolygonValidator::new(ValidationLevel::Basic).validate_rings(&ring, &[]);
        assert!(!report.is_valid());
        assert!(report.warnings.iter().any(|w| matches!(
            w,
            ValidationWarning::DuplicateConsecutiveVertices { vertex_index: 1, .. }
        )));
    }

    #[test]
    fn test_clockwise_outer_warning() {
        let mut outer = square(0.0, 1.0);
        outer.reverse();
        let polygon = Polygon::new(outer, Vec::new());
        let report = PolygonValidator::new(ValidationLevel::Comprehensive).validate(&polygon);
        assert!(report.warnings.contains(&ValidationWarning::ClockwiseOuter));
    }
}
