// src/debug/visualization/svg.rs
use crate::math::geometry::multi_polygon::MultiPolygon;
use crate::math::geometry::polygon::Polygon;
use crate::math::geometry::shapes::{Circle, LineString};
use crate::math::types::{Bounds2D, Point2D};
use ::svg::{Document, Node};
use ::svg::node::element::path::Data;
use ::svg::node::element::{Circle as SvgCircle, Group, Path, Rectangle};
use bevy::log::info;
use std::path::Path as FsPath;

// ===================================================================================
// HILFS-STRUCT für die SVG-Erstellung
// ===================================================================================
/// Ein Helfer zum Erstellen einer SVG-Datei aus Kern-Formen.
///
/// Die y-Achse zeigt wie in der Mathematik nach oben; beim Zeichnen wird
/// sie an der Mitte der `display_bounds` gespiegelt.
pub struct SvgBuilder {
    document: Document,
    flip_y: f64,
    // Relative Größen, abhängig von der Größe der ViewBox
    stroke_w_normal: f64,
    stroke_w_thin: f64,
    point_radius: f64,
}

impl SvgBuilder {
    /// Erstellt ein neues SVG-Grundgerüst mit Hintergrund.
    pub fn new(display_bounds: &Bounds2D, svg_pixel_size: f64) -> Self {
        let (min, width, height) = (display_bounds.min, display_bounds.width(), display_bounds.height());
        let extent = (width + height) / 2.0;

        let background = Rectangle::new()
            .set("x", min.x)
            .set("y", min.y)
            .set("width", width)
            .set("height", height)
            .set("fill", "#f0f0f0");
        let document = Document::new()
            .set("width", svg_pixel_size)
            .set("height", svg_pixel_size)
            .set("viewBox", (min.x, min.y, width, height))
            .add(background);

        Self {
            document,
            flip_y: display_bounds.min.y + display_bounds.max.y,
            stroke_w_normal: extent * 0.005,
            stroke_w_thin: extent * 0.002,
            point_radius: extent * 0.004,
        }
    }

    /// Builder mit Rand um die gegebenen Bounds.
    pub fn fitted(bounds: &Bounds2D, svg_pixel_size: f64) -> Self {
        let margin = (bounds.width() + bounds.height()).max(1.0) * 0.05;
        Self::new(&bounds.expand(margin), svg_pixel_size)
    }

    fn map(&self, p: Point2D) -> (f64, f64) {
        (p.x, self.flip_y - p.y)
    }

    fn ring_data(&self, mut data: Data, ring: &[Point2D], closed: bool) -> Data {
        for (i, &p) in ring.iter().enumerate() {
            data = if i == 0 { data.move_to(self.map(p)) } else { data.line_to(self.map(p)) };
        }
        if closed && !ring.is_empty() {
            data = data.close();
        }
        data
    }

    /// Äußerer Ring und Löcher als Unterpfade eines Pfads.
    fn polygon_data(&self, polygon: &Polygon) -> Data {
        std::iter::once(polygon.outer())
            .chain(polygon.holes().iter().map(Vec::as_slice))
            .fold(Data::new(), |data, ring| self.ring_data(data, ring, true))
    }

    fn add(&mut self, node: impl Into<Box<dyn Node>>) {
        self.document.append(node);
    }

    /// Zeichnet ein Polygon mit Löchern (Even-Odd-Füllung).
    pub fn draw_polygon(&mut self, polygon: &Polygon, fill: &str, stroke: &str) {
        if polygon.is_empty() {
            return;
        }
        let path = Path::new()
            .set("d", self.polygon_data(polygon))
            .set("fill", fill)
            .set("fill-rule", "evenodd")
            .set("stroke", stroke)
            .set("stroke-width", self.stroke_w_normal);
        self.add(path);
    }

    pub fn draw_multi_polygon(&mut self, multi: &MultiPolygon, fill: &str, stroke: &str) {
        for polygon in multi {
            self.draw_polygon(polygon, fill, stroke);
        }
    }

    /// Zeichnet die Dreiecke der Triangulation als Drahtgitter.
    pub fn draw_triangulation(&mut self, polygon: &Polygon, stroke: &str) {
        let mut group = Group::new()
            .set("fill", "none")
            .set("stroke", stroke)
            .set("stroke-width", self.stroke_w_thin);
        for triangle in polygon.triangles() {
            group = group.add(Path::new().set("d", self.ring_data(Data::new(), &triangle.points(), true)));
        }
        self.add(group);
    }

    pub fn draw_line_string(&mut self, line_string: &LineString, stroke: &str) {
        if line_string.len() < 2 {
            return;
        }
        let path = Path::new()
            .set("d", self.ring_data(Data::new(), line_string.points(), false))
            .set("fill", "none")
            .set("stroke", stroke)
            .set("stroke-width", self.stroke_w_normal);
        self.add(path);
    }

    pub fn draw_circle(&mut self, circle: &Circle, stroke: &str) {
        let (cx, cy) = self.map(circle.center);
        let node = SvgCircle::new()
            .set("cx", cx)
            .set("cy", cy)
            .set("r", circle.radius())
            .set("fill", "none")
            .set("stroke", stroke)
            .set("stroke-width", self.stroke_w_normal);
        self.add(node);
    }

    /// Zeichnet einen Punkt als kleinen gefüllten Kreis.
    pub fn draw_point(&mut self, p: Point2D, fill: &str) {
        let (cx, cy) = self.map(p);
        let node = SvgCircle::new()
            .set("cx", cx)
            .set("cy", cy)
            .set("r", self.point_radius)
            .set("fill", fill);
        self.add(node);
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Speichert die SVG-Datei.
    pub fn save(&self, filename: impl AsRef<FsPath>) -> Result<(), Box<dyn std::error::Error>> {
        ::svg::save(filename.as_ref(), &self.document)?;
        info!("Debug SVG '{}' wurde erstellt.", filename.as_ref().display());
        Ok(())
    }
}

/// Schreibt Polygone samt Triangulation in eine SVG-Datei.
/// Die ViewBox umfasst alle Polygone.
pub fn write_polygons_svg(
    filename: impl AsRef<FsPath>,
    polygons: &[Polygon],
    svg_pixel_size: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let bounds = polygons
        .iter()
        .fold(Bounds2D::empty(), |acc, p| acc.union(&p.bounds()));
    if bounds.is_empty() {
        return Err("no non-empty polygon to draw".into());
    }

    let mut svg = SvgBuilder::fitted(&bounds, svg_pixel_size);
    for polygon in polygons {
        svg.draw_polygon(polygon, "rgba(200, 150, 255, 0.7)", "#5500aa");
        svg.draw_triangulation(polygon, "#00aa00");
    }
    svg.save(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::shapes::RectF;
    use ::svg::node::element::path::Command;

    fn framed_square() -> Polygon {
        Polygon::new(
            RectF::new(0.0, 0.0, 4.0, 4.0).corners().to_vec(),
            vec![RectF::new(1.0, 1.0, 2.0, 2.0).corners().to_vec()],
        )
    }

    #[test]
    fn test_polygon_with_hole_uses_evenodd() {
        let polygon = framed_square();
        let mut svg = SvgBuilder::fitted(&polygon.bounds(), 256.0);
        svg.draw_polygon(&polygon, "gray", "black");
        assert!(svg.document().to_string().contains("evenodd"));
        // Äußerer Ring und Loch als zwei Unterpfade
        let data = svg.polygon_data(&polygon);
        assert_eq!(data.iter().filter(|c| matches!(c, Command::Close)).count(), 2);
        assert_eq!(data.iter().filter(|c| matches!(c, Command::Move(..))).count(), 2);
    }

    #[test]
    fn test_y_axis_is_flipped() {
        let bounds = Bounds2D::from_points(Point2D::ZERO, Point2D::new(10.0, 10.0));
        let svg = SvgBuilder::new(&bounds, 100.0);
        assert_eq!(svg.map(Point2D::new(2.0, 1.0)), (2.0, 9.0));
    }

    #[test]
    fn test_triangulation_and_save() {
        let polygon = framed_square();
        let mut svg = SvgBuilder::fitted(&polygon.bounds(), 256.0);
        svg.draw_triangulation(&polygon, "green");
        svg.draw_circle(&Circle::new(Point2D::new(2.0, 2.0), 0.5), "red");
        svg.draw_line_string(&LineString::new(vec![Point2D::ZERO, Point2D::new(4.0, 4.0)]), "blue");
        let text = svg.document().to_string();
        assert_eq!(text.matches("<path").count(), polygon.num_triangles() + 1);

        let file = std::env::temp_dir().join("planar_kernel_svg_test.svg");
        write_polygons_svg(&file, &[polygon], 128.0).unwrap();
        let written = std::fs::read_to_string(&file).unwrap();
        assert!(written.contains("<svg"));
        let _ = std::fs::remove_file(&file);
        assert!(write_polygons_svg(&file, &[Polygon::empty()], 128.0).is_err());
    }
}
