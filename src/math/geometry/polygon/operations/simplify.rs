// src/math/geometry/polygon/operations/simplify.rs

//! Douglas-Peucker-Vereinfachung für offene Ketten und geschlossene Ringe.
//! Es werden nur Punkte entfernt, nie verschoben oder hinzugefügt.

use crate::math::types::Point2D;
use crate::math::utils::simple_geometry::point_segment_distance;

/// Markiert die zu behaltenden Punkte zwischen `first` und `last` (iterativ).
fn mark(points: &[Point2D], first: usize, last: usize, max_distance: f64, keep: &mut [bool]) {
    let mut stack = vec![(first, last)];
    while let Some((start, end)) = stack.pop() {
        if end <= start + 1 {
            continue;
        }
        let (a, b) = (points[start], points[end]);
        let (index, distance) = (start + 1..end)
            .map(|i| (i, point_segment_distance(points[i], a, b)))
            .fold((start, -1.0), |best, cur| if cur.1 > best.1 { cur } else { best });

        if distance > max_distance {
            keep[index] = true;
            stack.push((start, index));
            stack.push((index, end));
        }
    }
}

/// Vereinfacht eine offene Kette; Anfangs- und Endpunkt bleiben erhalten.
pub fn douglas_peucker_open(points: &[Point2D], max_distance: f64) -> Vec<Point2D> {
    let n = points.len();
    if n < 3 || !(max_distance > 0.0) {
        return points.to_vec();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;
    mark(points, 0, n - 1, max_distance, &mut keep);

    points
        .iter()
        .zip(keep)
        .filter_map(|(&p, k)| k.then_some(p))
        .collect()
}

/// Vereinfacht einen geschlossenen Ring (ohne wiederholten Endpunkt).
/// Ein Ring mit mindestens drei nicht kollinearen Punkten behält mindestens drei.
pub fn douglas_peucker_closed(ring: &[Point2D], max_distance: f64) -> Vec<Point2D> {
    let n = ring.len();
    if n <= 3 || !(max_distance > 0.0) {
        return ring.to_vec();
    }

    // Anker: Index 0 und der davon entfernteste Punkt
    let far = (1..n)
        .max_by(|&a, &b| {
            ring[0]
                .distance_squared(ring[a])
                .total_cmp(&ring[0].distance_squared(ring[b]))
        })
        .unwrap_or(n / 2);

    let mut extended = ring.to_vec();
    extended.push(ring[0]);

    let mut keep = vec![false; n + 1];
    keep[0] = true;
    keep[far] = true;
    mark(&extended, 0, far, max_distance, &mut keep);
    mark(&extended, far, n, max_distance, &mut keep);

    if keep[..n].iter().filter(|&&k| k).count() < 3 {
        // Dritten Punkt erzwingen: am weitesten von der Ankerstrecke entfernt
        let (a, b) = (ring[0], ring[far]);
        if let Some(extra) = (1..n).filter(|&i| i != far).max_by(|&i, &j| {
            point_segment_distance(ring[i], a, b).total_cmp(&point_segment_distance(ring[j], a, b))
        }) {
            keep[extra] = true;
        }
    }

    ring.iter()
        .zip(&keep[..n])
        .filter_map(|(&p, &k)| k.then_some(p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::ShapeGenerators;
    use crate::math::utils::simple_geometry::point_ring_distance_sq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_open_removes_collinear_points() {
        let points: Vec<Point2D> = (0..10).map(|i| Point2D::new(i as f64, 0.0)).collect();
        let simplified = douglas_peucker_open(&points, 0.1);
        assert_eq!(simplified, vec![Point2D::new(0.0, 0.0), Point2D::new(9.0, 0.0)]);
    }

    #[test]
    fn test_open_keeps_significant_corner() {
        let points = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.01),
            Point2D::new(2.0, 2.0),
            Point2D::new(3.0, 0.0),
        ];
        let simplified = douglas_peucker_open(&points, 0.1);
        assert_eq!(simplified.len(), 3);
        assert_eq!(simplified[1], Point2D::new(2.0, 2.0));
    }

    #[test]
    fn test_closed_keeps_at_least_triangle() {
        let circle = ShapeGenerators::create_circle_vertices(Point2D::ZERO, 1.0, 64);
        let simplified = douglas_peucker_closed(&circle, 100.0);
        assert_eq!(simplified.len(), 3);
    }

    #[test]
    fn test_closed_bounds_random_rings() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let ring = ShapeGenerators::random_simple_polygon(&mut rng, Point2D::ZERO, 3.0, 6.0, 40);
            let max_distance = 0.5;
            let simplified = douglas_peucker_closed(&ring, max_distance);
            assert!(simplified.len() <= ring.len());
            assert!(simplified.len() >= 3);
            // Jeder ursprüngliche Punkt liegt nahe am vereinfachten Rand
            for p in &ring {
                assert!(point_ring_distance_sq(*p, &simplified).sqrt() <= max_distance + 1e-9);
            }
            // Jeder verbleibende Punkt stammt aus dem Original
            for p in &simplified {
                assert!(ring.contains(p));
            }
        }
    }
}
