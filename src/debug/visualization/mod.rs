// src/debug/visualization/mod.rs

// SVG-Ausgabe zur visuellen Kontrolle von Kern-Ergebnissen
pub mod svg;

pub use self::svg::{SvgBuilder, write_polygons_svg};
