// src/math/geometry/shapes/mod.rs

// Einfache Wert-Typen für 2D-Formen. Polygon und MultiPolygon liegen in
// eigenen Modulen, da sie zusätzliche, geteilte Daten verwalten.
pub mod circle;
pub mod ellipse;
pub mod line;
pub mod line_string;
pub mod quad;
pub mod rect;
pub mod round_rect;
pub mod triangle;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;
pub use line_string::{CloseRing, LineString};
pub use quad::Quad;
pub use rect::{Rect, RectF};
pub use round_rect::RoundRect;
pub use triangle::Triangle;
