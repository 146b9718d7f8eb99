// src/math/geometry/mod.rs

// Deklaration der Haupt-Geometriemodule
pub mod config;
pub mod geometry2d;
pub mod multi_polygon;
pub mod polygon;
pub mod shapes;

// Re-Exporte für einen schnellen Zugriff auf die Kern-Geometrietypen,
// falls man nicht das gesamte `math::prelude` importieren möchte.
pub use self::config::{BufferConfig, GeometryConfig};
pub use self::geometry2d::{Shape, ShapeKind, ShapePredicates};
pub use self::multi_polygon::MultiPolygon;
pub use self::shapes::{
    Circle, CloseRing, Ellipse, Line, LineString, Quad, Rect, RectF, RoundRect, Triangle,
};

// Polygon-Exporte
pub use self::polygon::{
    Orientation, Polygon, PolygonBuilder, PolygonValidator, ShapeGenerators, ValidationError,
    ValidationLevel, ValidationReport, ValidationWarning,
    operations::{
        BooleanOperation, ConvexHullComputer, JoinStyle, PolygonBoolean, PolygonTriangulator,
        TriangleIndex, TriangulationAlgorithm, TriangulationUtils,
    },
    transformations::affine::{
        AffineTransform, AffineTransformable, TransformBuilder as AffineTransformBuilder,
    },
};
