// src/math/geometry/polygon/operations/triangulation.rs
use crate::math::error::{MathError, MathResult};
use crate::math::types::vector::{from_spade_point, to_spade_point};
use crate::math::types::{Point2D, SpadePoint};
use crate::math::utils::simple_geometry::{orient, point_in_ring, ring_signed_area, triangle_area};
use bevy::log::{debug, trace};
use serde::{Deserialize, Serialize};
use spade::handles::FixedVertexHandle;
use spade::{ConstrainedDelaunayTriangulation, Triangulation};
use std::collections::HashMap;

/// Verschiedene Triangulations-Algorithmen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriangulationAlgorithm {
    /// Constrained Delaunay über `spade`, mit Ear Clipping als Rückfallebene
    #[default]
    ConstrainedDelaunay,
    /// Ear Clipping mit Brücken zu den Löchern (O(n²))
    EarClipping,
}

/// Dreieck als Indizes in die Vertex-Liste (äußerer Ring, danach die Löcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriangleIndex {
    pub i0: u32,
    pub i1: u32,
    pub i2: u32,
}

impl TriangleIndex {
    pub const fn new(i0: u32, i1: u32, i2: u32) -> Self {
        Self { i0, i1, i2 }
    }

    pub fn as_array(&self) -> [usize; 3] {
        [self.i0 as usize, self.i1 as usize, self.i2 as usize]
    }

    /// Gleiches Dreieck mit umgekehrter Orientierung.
    pub fn flipped(&self) -> Self {
        Self::new(self.i0, self.i2, self.i1)
    }
}

/// Triangulations-Engine
#[derive(Debug, Clone, Copy)]
pub struct PolygonTriangulator {
    algorithm: TriangulationAlgorithm,
}

impl PolygonTriangulator {
    pub fn new(algorithm: TriangulationAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Trianguliert einen Ring mit Löchern. Die Indizes beziehen sich auf
    /// `outer` gefolgt von allen `holes`; alle Dreiecke sind gegen den
    /// Uhrzeigersinn orientiert.
    pub fn triangulate(
        &self,
        outer: &[Point2D],
        holes: &[Vec<Point2D>],
    ) -> MathResult<Vec<TriangleIndex>> {
        if outer.len() < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: outer.len(),
            });
        }

        match self.algorithm {
            TriangulationAlgorithm::ConstrainedDelaunay => {
                match self.constrained_delaunay(outer, holes) {
                    Ok(indices) => Ok(indices),
                    Err(err) => {
                        debug!("Constrained Delaunay failed ({}), falling back to ear clipping", err);
                        self.ear_clipping(outer, holes)
                    }
                }
            }
            TriangulationAlgorithm::EarClipping => self.ear_clipping(outer, holes),
        }
    }

    // === Constrained Delaunay ===

    fn constrained_delaunay(
        &self,
        outer: &[Point2D],
        holes: &[Vec<Point2D>],
    ) -> MathResult<Vec<TriangleIndex>> {
        let rings: Vec<&[Point2D]> = std::iter::once(outer)
            .chain(holes.iter().map(Vec::as_slice))
            .collect();

        let mut cdt = ConstrainedDelaunayTriangulation::<SpadePoint>::new();
        // Spade vereint identische Positionen; der erste Index gewinnt
        let mut handle_to_index: HashMap<usize, u32> = HashMap::new();
        let mut ring_handles: Vec<Vec<FixedVertexHandle>> = Vec::with_capacity(rings.len());
        let mut next_index = 0u32;

        for ring in &rings {
            let mut handles = Vec::with_capacity(ring.len());
            for &p in ring.iter() {
                let handle = cdt
                    .insert(to_spade_point(p))
                    .map_err(|e| MathError::TriangulationFailed {
                        reason: format!("vertex {:?} rejected: {:?}", p, e),
                    })?;
                handle_to_index.entry(handle.index()).or_insert(next_index);
                handles.push(handle);
                next_index += 1;
            }
            ring_handles.push(handles);
        }

        for handles in &ring_handles {
            let n = handles.len();
            for i in 0..n {
                let (from, to) = (handles[i], handles[(i + 1) % n]);
                if from == to {
                    continue;
                }
                if !cdt.can_add_constraint(from, to) {
                    return Err(MathError::TriangulationFailed {
                        reason: "ring edges intersect each other".to_string(),
                    });
                }
                cdt.add_constraint(from, to);
            }
        }

        let mut indices = Vec::with_capacity(cdt.num_inner_faces());
        for face in cdt.inner_faces() {
            let vertices = face.vertices();
            let positions = vertices.map(|v| from_spade_point(v.position()));
            let centroid = (positions[0] + positions[1] + positions[2]) / 3.0;

            // Even-Odd über alle Ringe: Dreiecke außerhalb oder in Löchern verwerfen
            let crossings = rings.iter().filter(|r| point_in_ring(centroid, r)).count();
            if crossings % 2 == 0 {
                continue;
            }

            let lookup = |i: usize| handle_to_index.get(&vertices[i].fix().index()).copied();
            match (lookup(0), lookup(1), lookup(2)) {
                (Some(i0), Some(i1), Some(i2)) => indices.push(TriangleIndex::new(i0, i1, i2)),
                _ => {
                    return Err(MathError::TriangulationFailed {
                        reason: "face references an unknown vertex".to_string(),
                    });
                }
            }
        }

        trace!("Constrained Delaunay produced {} triangles", indices.len());
        Ok(indices)
    }

    // === Ear Clipping ===

    fn ear_clipping(
        &self,
        outer: &[Point2D],
        holes: &[Vec<Point2D>],
    ) -> MathResult<Vec<TriangleIndex>> {
        let positions: Vec<Point2D> = outer
            .iter()
            .chain(holes.iter().flatten())
            .copied()
            .collect();

        // Äußerer Ring gegen, Löcher im Uhrzeigersinn
        let mut ring: Vec<usize> = (0..outer.len()).collect();
        if ring_signed_area(outer) < 0.0 {
            ring.reverse();
        }

        let mut offset = outer.len();
        let mut hole_rings: Vec<Vec<usize>> = Vec::with_capacity(holes.len());
        for hole in holes {
            let mut indices: Vec<usize> = (offset..offset + hole.len()).collect();
            if ring_signed_area(hole) > 0.0 {
                indices.reverse();
            }
            offset += hole.len();
            if hole.len() >= 3 {
                hole_rings.push(indices);
            }
        }

        // Löcher von rechts nach links einbinden
        let max_x = |hole: &Vec<usize>| {
            hole.iter()
                .map(|&i| positions[i].x)
                .fold(f64::NEG_INFINITY, f64::max)
        };
        hole_rings.sort_by(|a, b| max_x(b).total_cmp(&max_x(a)));

        for hole in &hole_rings {
            self.bridge_hole(&positions, &mut ring, hole)?;
        }

        self.clip_ears(&positions, ring)
    }

    /// Verbindet ein Loch über eine Brückenkante mit dem Ring.
    fn bridge_hole(
        &self,
        positions: &[Point2D],
        ring: &mut Vec<usize>,
        hole: &[usize],
    ) -> MathResult<()> {
        let (hole_start, m) = hole
            .iter()
            .enumerate()
            .map(|(k, &i)| (k, positions[i]))
            .max_by(|a, b| a.1.x.total_cmp(&b.1.x).then(a.1.y.total_cmp(&b.1.y)))
            .ok_or_else(|| MathError::TriangulationFailed {
                reason: "empty hole".to_string(),
            })?;

        let n = ring.len();

        // Strahl von M nach +x: nächste aufwärts laufende Kante
        let mut hit: Option<(usize, f64)> = None;
        for k in 0..n {
            let a = positions[ring[k]];
            let b = positions[ring[(k + 1) % n]];
            if !(a.y <= m.y && m.y <= b.y && a.y < b.y) {
                continue;
            }
            let x = a.x + (m.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if x < m.x {
                continue;
            }
            if hit.is_none_or(|(_, best)| x < best) {
                hit = Some((k, x));
            }
        }

        let (edge, hit_x) = hit.ok_or_else(|| MathError::TriangulationFailed {
            reason: "hole is not inside the outer ring".to_string(),
        })?;

        let ka = edge;
        let kb = (edge + 1) % n;
        let (a, b) = (positions[ring[ka]], positions[ring[kb]]);
        let intersection = Point2D::new(hit_x, m.y);

        let mut bridge = if a.y == m.y {
            ka
        } else if b.y == m.y {
            kb
        } else if a.x > b.x {
            ka
        } else {
            kb
        };

        if positions[ring[bridge]] != intersection {
            // Vertices im Dreieck (M, I, P) verdecken P; nimm den mit kleinstem Winkel
            let p = positions[ring[bridge]];
            let mut best: Option<(usize, f64, f64)> = None;
            for (j, &idx) in ring.iter().enumerate() {
                let v = positions[idx];
                if j == bridge || v == m || v == p {
                    continue;
                }
                if !point_in_triangle(v, m, intersection, p) {
                    continue;
                }
                let angle = (v.y - m.y).abs().atan2(v.x - m.x);
                let dist = v.distance_squared(m);
                let better = match best {
                    None => true,
                    Some((_, best_angle, best_dist)) => {
                        angle < best_angle || (angle == best_angle && dist < best_dist)
                    }
                };
                if better {
                    best = Some((j, angle, dist));
                }
            }
            if let Some((j, _, _)) = best {
                bridge = j;
            }
        }

        // Bei mehrfach vorkommenden Positionen den Sektor wählen, der M sieht
        let target = positions[ring[bridge]];
        if let Some(k) = (0..n).find(|&k| {
            positions[ring[k]] == target
                && sector_contains(
                    positions[ring[(k + n - 1) % n]],
                    target,
                    positions[ring[(k + 1) % n]],
                    m,
                )
        }) {
            bridge = k;
        }

        let mut bridged = Vec::with_capacity(ring.len() + hole.len() + 2);
        bridged.extend_from_slice(&ring[..=bridge]);
        bridged.extend(hole[hole_start..].iter().chain(&hole[..hole_start]));
        bridged.push(hole[hole_start]);
        bridged.push(ring[bridge]);
        bridged.extend_from_slice(&ring[bridge + 1..]);
        *ring = bridged;
        Ok(())
    }

    fn clip_ears(
        &self,
        positions: &[Point2D],
        mut ring: Vec<usize>,
    ) -> MathResult<Vec<TriangleIndex>> {
        let mut triangles = Vec::with_capacity(ring.len().saturating_sub(2));

        let scale = {
            let (min, max) = positions.iter().fold(
                (Point2D::splat(f64::INFINITY), Point2D::splat(f64::NEG_INFINITY)),
                |(lo, hi), &p| (lo.min(p), hi.max(p)),
            );
            (max - min).length_squared()
        };
        let degenerate_tolerance = scale * 1e-12;

        while ring.len() > 3 {
            let n = ring.len();
            let ear = (0..n).find(|&i| self.is_ear(positions, &ring, i));

            match ear {
                Some(i) => {
                    let (prev, curr, next) = (ring[(i + n - 1) % n], ring[i], ring[(i + 1) % n]);
                    triangles.push(TriangleIndex::new(prev as u32, curr as u32, next as u32));
                    ring.remove(i);
                }
                None => {
                    // Keine Ecke abschneidbar: flachste Ecke ohne Dreieck entfernen
                    let flattest = (0..n)
                        .map(|i| {
                            let turn = orient(
                                positions[ring[(i + n - 1) % n]],
                                positions[ring[i]],
                                positions[ring[(i + 1) % n]],
                            );
                            (i, turn.abs())
                        })
                        .min_by(|a, b| a.1.total_cmp(&b.1));

                    match flattest {
                        Some((i, turn)) if turn <= degenerate_tolerance => {
                            ring.remove(i);
                        }
                        _ => {
                            return Err(MathError::TriangulationFailed {
                                reason: "no ear found (self-intersecting ring?)".to_string(),
                            });
                        }
                    }
                }
            }
        }

        if let [a, b, c] = ring[..] {
            if orient(positions[a], positions[b], positions[c]) > 0.0 {
                triangles.push(TriangleIndex::new(a as u32, b as u32, c as u32));
            }
        }

        Ok(triangles)
    }

    /// Prüft ob die Ecke `i` ein "Ear" ist
    fn is_ear(&self, positions: &[Point2D], ring: &[usize], i: usize) -> bool {
        let n = ring.len();
        let a = positions[ring[(i + n - 1) % n]];
        let b = positions[ring[i]];
        let c = positions[ring[(i + 1) % n]];

        if orient(a, b, c) <= 0.0 {
            return false; // Reflex vertex
        }

        ring.iter().all(|&idx| {
            let v = positions[idx];
            v == a || v == b || v == c || !point_in_triangle(v, a, b, c)
        })
    }
}

/// Punkt im Dreieck, Rand inklusive, unabhängig von der Orientierung.
fn point_in_triangle(p: Point2D, a: Point2D, b: Point2D, c: Point2D) -> bool {
    let d1 = orient(a, b, p);
    let d2 = orient(b, c, p);
    let d3 = orient(c, a, p);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Liegt `p` im Innenwinkel an `v` (Ring gegen den Uhrzeigersinn)?
fn sector_contains(prev: Point2D, v: Point2D, next: Point2D, p: Point2D) -> bool {
    if orient(prev, v, next) >= 0.0 {
        orient(prev, v, p) >= 0.0 && orient(v, next, p) >= 0.0
    } else {
        orient(prev, v, p) >= 0.0 || orient(v, next, p) >= 0.0
    }
}

/// Triangulations-Utilities
pub struct TriangulationUtils;

impl TriangulationUtils {
    /// Summe der Dreiecksflächen einer indizierten Triangulation
    pub fn total_area(vertices: &[Point2D], indices: &[TriangleIndex]) -> f64 {
        indices
            .iter()
            .filter_map(|t| {
                let [a, b, c] = t.as_array();
                Some(triangle_area(*vertices.get(a)?, *vertices.get(b)?, *vertices.get(c)?))
            })
            .sum()
    }

    /// Ungerichtete, eindeutige Kanten der Triangulation (für Wireframes)
    pub fn extract_edges(indices: &[TriangleIndex]) -> Vec<(u32, u32)> {
        let mut edges: Vec<(u32, u32)> = indices
            .iter()
            .flat_map(|t| [(t.i0, t.i1), (t.i1, t.i2), (t.i2, t.i0)])
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();
        edges.sort_unstable();
        edges.dedup();
        edges
    }
}
