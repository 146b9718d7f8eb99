use super::*;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Ganzzahliger 2D-Punkt (Pixel-/Gitterkoordinaten).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        self.to_vec2().distance(other.to_vec2())
    }

    pub fn to_vec2(&self) -> Point2D {
        Point2D::new(self.x as f64, self.y as f64)
    }

    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

// Ganzzahl-Arithmetik sättigt statt überzulaufen
impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        self.moved_by(rhs.x, rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

// Conversion traits
impl From<Point> for Point2D {
    fn from(p: Point) -> Self {
        p.to_vec2()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
