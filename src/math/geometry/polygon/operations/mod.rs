pub mod boolean;
pub mod buffer;
pub mod convex_hull;
pub mod simplify;
pub mod triangulation;

pub use boolean::{BooleanOperation, PolygonBoolean};
pub use buffer::JoinStyle;
pub use convex_hull::ConvexHullComputer;
pub use triangulation::*;
