// src/math/geometry/polygon/transformations/affine.rs
use crate::math::geometry::multi_polygon::MultiPolygon;
use crate::math::geometry::polygon::Polygon;
use crate::math::geometry::shapes::LineString;
use crate::math::types::Point2D;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Affine Transformations-Matrix (3x3 für 2D)
///
/// ```text
/// [a c tx]
/// [b d ty]
/// [0 0  1]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    matrix: Matrix3<f64>,
}

impl AffineTransform {
    fn from_parts(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self {
            matrix: Matrix3::new(a, c, tx, b, d, ty, 0.0, 0.0, 1.0),
        }
    }

    /// Identitäts-Transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Translation
    pub fn translation(offset: Point2D) -> Self {
        Self::from_parts(1.0, 0.0, 0.0, 1.0, offset.x, offset.y)
    }

    /// Skalierung
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::from_parts(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Skalierung mit festem Punkt `pivot`
    pub fn scale_around(sx: f64, sy: f64, pivot: Point2D) -> Self {
        Self::translation(pivot)
            .compose(&Self::scale(sx, sy))
            .compose(&Self::translation(-pivot))
    }

    /// Rotation um den Ursprung (gegen den Uhrzeigersinn)
    pub fn rotation(angle_rad: f64) -> Self {
        let (sin_a, cos_a) = angle_rad.sin_cos();
        Self::from_parts(cos_a, sin_a, -sin_a, cos_a, 0.0, 0.0)
    }

    /// Rotation um einen Punkt
    pub fn rotation_around(angle_rad: f64, center: Point2D) -> Self {
        Self::translation(center)
            .compose(&Self::rotation(angle_rad))
            .compose(&Self::translation(-center))
    }

    /// Scherung
    pub fn shear(shx: f64, shy: f64) -> Self {
        Self::from_parts(1.0, shy, shx, 1.0, 0.0, 0.0)
    }

    /// Spiegelung an der X-Achse
    pub fn reflect_x() -> Self {
        Self::scale(1.0, -1.0)
    }

    /// `self ∘ other`: erst `other`, dann `self`.
    pub fn compose(&self, other: &AffineTransform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    /// Determinante des linearen Anteils; negativ bei Spiegelungen.
    pub fn determinant(&self) -> f64 {
        self.matrix[(0, 0)] * self.matrix[(1, 1)] - self.matrix[(0, 1)] * self.matrix[(1, 0)]
    }

    pub fn transform_point(&self, point: Point2D) -> Point2D {
        let v = self.matrix * Vector3::new(point.x, point.y, 1.0);
        Point2D::new(v.x, v.y)
    }

    /// Transformiert eine Richtung (ohne Translation)
    pub fn transform_direction(&self, direction: Point2D) -> Point2D {
        let v = self.matrix * Vector3::new(direction.x, direction.y, 0.0);
        Point2D::new(v.x, v.y)
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Typen, auf die eine affine Transformation angewendet werden kann.
pub trait AffineTransformable: Sized {
    fn apply_transform(&self, transform: &AffineTransform) -> Self;

    fn translate(&self, offset: Point2D) -> Self {
        self.apply_transform(&AffineTransform::translation(offset))
    }

    fn rotate_around(&self, angle_rad: f64, center: Point2D) -> Self {
        self.apply_transform(&AffineTransform::rotation_around(angle_rad, center))
    }
}

impl AffineTransformable for Polygon {
    fn apply_transform(&self, transform: &AffineTransform) -> Self {
        self.transformed(transform)
    }
}

impl AffineTransformable for MultiPolygon {
    fn apply_transform(&self, transform: &AffineTransform) -> Self {
        self.iter().map(|p| p.transformed(transform)).collect()
    }
}

impl AffineTransformable for LineString {
    fn apply_transform(&self, transform: &AffineTransform) -> Self {
        self.points()
            .iter()
            .map(|&p| transform.transform_point(p))
            .collect()
    }
}

/// Builder für zusammengesetzte Transformationen, in Aufrufreihenfolge angewendet.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformBuilder {
    transform: AffineTransform,
}

impl TransformBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn then(mut self, next: AffineTransform) -> Self {
        self.transform = next.compose(&self.transform);
        self
    }

    pub fn translate(self, offset: Point2D) -> Self {
        self.then(AffineTransform::translation(offset))
    }

    pub fn scale(self, sx: f64, sy: f64) -> Self {
        self.then(AffineTransform::scale(sx, sy))
    }

    pub fn rotate(self, angle_rad: f64) -> Self {
        self.then(AffineTransform::rotation(angle_rad))
    }

    pub fn rotate_around(self, angle_rad: f64, center: Point2D) -> Self {
        self.then(AffineTransform::rotation_around(angle_rad, center))
    }

    pub fn shear(self, shx: f64, shy: f64) -> Self {
        self.then(AffineTransform::shear(shx, shy))
    }

    pub fn build(self) -> AffineTransform {
        self.transform
    }

    pub fn apply_to<T: AffineTransformable>(&self, target: &T) -> T {
        target.apply_transform(&self.transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rotation_around_point() {
        let t = AffineTransform::rotation_around(FRAC_PI_2, Point2D::new(1.0, 1.0));
        let p = t.transform_point(Point2D::new(2.0, 1.0));
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(t.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_builder_applies_in_call_order() {
        let t = TransformBuilder::new()
            .translate(Point2D::new(1.0, 0.0))
            .scale(2.0, 2.0)
            .build();
        assert_eq!(t.transform_point(Point2D::ZERO), Point2D::new(2.0, 0.0));
    }

    #[test]
    fn test_inverse_and_reflection() {
        let t = AffineTransform::scale_around(2.0, 3.0, Point2D::new(1.0, 1.0));
        let inv = t.inverse().unwrap();
        let p = Point2D::new(5.0, -2.0);
        let back = inv.transform_point(t.transform_point(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-12);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-12);
        assert!(AffineTransform::reflect_x().determinant() < 0.0);
        assert!(AffineTransform::scale(0.0, 1.0).inverse().is_none());
    }

    #[test]
    fn test_transformable_line_string() {
        let ls = LineString::new(vec![Point2D::ZERO, Point2D::X]);
        let moved = ls.translate(Point2D::new(0.0, 2.0));
        assert_eq!(moved[1], Point2D::new(1.0, 2.0));
    }
}
