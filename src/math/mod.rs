pub mod error;
pub mod geometry;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{MathError, MathResult},
        geometry::{
            config::*,
            geometry2d::{contains, distance, intersect, within, Shape, ShapePredicates},
            multi_polygon::MultiPolygon,
            polygon::{operations::*, transformations::affine::*, Polygon, PolygonBuilder, ShapeGenerators},
            shapes::*,
        },
        types::*,
    };
}
