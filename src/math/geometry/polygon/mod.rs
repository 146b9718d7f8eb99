// src/math/geometry/polygon/mod.rs

pub mod builder;
pub mod core;
pub mod format;
pub mod operations;
pub mod properties;
pub mod transformations;
pub mod validation;

pub use self::builder::{PolygonBuilder, ShapeGenerators};
pub use self::core::Polygon;
pub use self::operations::{
    BooleanOperation, ConvexHullComputer, JoinStyle, PolygonBoolean, PolygonTriangulator,
    TriangleIndex, TriangulationAlgorithm, TriangulationUtils,
};
pub use self::properties::Orientation;
pub use self::transformations::{AffineTransform, AffineTransformable, TransformBuilder};
pub use self::validation::{
    PolygonValidator, RingId, ValidationError, ValidationLevel, ValidationReport,
    ValidationWarning,
};
