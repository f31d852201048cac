use super::FitError;
use crate::model::zone::{Coord, Ring};
use spade::{DelaunayTriangulation, Point2, Triangulation};
use std::collections::HashMap;

/// computes the alpha shape of a point cloud: the union of Delaunay
/// triangles whose circumradius is at most 1/alpha, returned as one outer
/// ring per edge-connected component. larger alpha admits fewer triangles
/// (a tighter, more concave fit); alpha near zero approaches the convex
/// hull. an empty result means no triangle survived the radius filter.
pub fn alpha_shape(points: &[Coord], alpha: f64) -> Result<Vec<Ring>, FitError> {
    if points.len() < 3 {
        return Err(FitError::NotEnoughPoints(points.len()));
    }
    if alpha <= 0.0 {
        return Err(FitError::InvalidConfiguration(format!(
            "alpha must be positive, got {alpha}"
        )));
    }

    let mut triangulation: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();
    for (lon, lat) in points {
        triangulation
            .insert(Point2::new(*lon, *lat))
            .map_err(|e| FitError::TriangulationError(format!("{e:?}")))?;
    }

    let mut positions: Vec<Coord> = vec![(0.0, 0.0); triangulation.num_vertices()];
    for vertex in triangulation.vertices() {
        let p = vertex.position();
        positions[vertex.fix().index()] = (p.x, p.y);
    }

    let radius_limit = 1.0 / alpha;
    let mut kept: Vec<[usize; 3]> = Vec::new();
    for face in triangulation.inner_faces() {
        if circumradius(&face.positions()) <= radius_limit {
            kept.push(face.vertices().map(|v| v.fix().index()));
        }
    }
    if kept.is_empty() {
        return Ok(Vec::new());
    }

    let rings = connected_components(&kept)
        .iter()
        .filter_map(|component| outer_ring(component, &kept, &positions))
        .collect();
    Ok(rings)
}

fn circumradius(triangle: &[Point2<f64>; 3]) -> f64 {
    let a = distance(&triangle[0], &triangle[1]);
    let b = distance(&triangle[1], &triangle[2]);
    let c = distance(&triangle[2], &triangle[0]);
    let s = (a + b + c) / 2.0;
    let area_squared = s * (s - a) * (s - b) * (s - c);
    if area_squared <= 0.0 {
        return f64::INFINITY;
    }
    (a * b * c) / (4.0 * area_squared.sqrt())
}

fn distance(p: &Point2<f64>, q: &Point2<f64>) -> f64 {
    ((p.x - q.x).powi(2) + (p.y - q.y).powi(2)).sqrt()
}

fn triangle_edges(triangle: &[usize; 3]) -> [(usize, usize); 3] {
    let edge = |a: usize, b: usize| if a < b { (a, b) } else { (b, a) };
    [
        edge(triangle[0], triangle[1]),
        edge(triangle[1], triangle[2]),
        edge(triangle[2], triangle[0]),
    ]
}

/// groups triangles into components connected through shared edges
fn connected_components(triangles: &[[usize; 3]]) -> Vec<Vec<usize>> {
    let mut edge_faces: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
    for (face, triangle) in triangles.iter().enumerate() {
        for edge in triangle_edges(triangle) {
            edge_faces.entry(edge).or_default().push(face);
        }
    }

    let mut component = vec![usize::MAX; triangles.len()];
    let mut count = 0;
    for start in 0..triangles.len() {
        if component[start] != usize::MAX {
            continue;
        }
        component[start] = count;
        let mut stack = vec![start];
        while let Some(face) = stack.pop() {
            for edge in triangle_edges(&triangles[face]) {
                for &neighbor in &edge_faces[&edge] {
                    if component[neighbor] == usize::MAX {
                        component[neighbor] = count;
                        stack.push(neighbor);
                    }
                }
            }
        }
        count += 1;
    }

    let mut components = vec![Vec::new(); count];
    for (face, c) in component.iter().enumerate() {
        components[*c].push(face);
    }
    components
}

/// walks the boundary of one component (edges used by exactly one of its
/// triangles) into closed rings and returns the largest-area ring as the
/// component's outer ring. returns None for a component whose boundary does
/// not close, which can only arise from degenerate geometry.
fn outer_ring(faces: &[usize], triangles: &[[usize; 3]], positions: &[Coord]) -> Option<Ring> {
    let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
    for &face in faces {
        for edge in triangle_edges(&triangles[face]) {
            *edge_count.entry(edge).or_insert(0) += 1;
        }
    }
    // sorted for a deterministic walk order
    let mut boundary: Vec<(usize, usize)> = edge_count
        .into_iter()
        .filter(|(_, n)| *n == 1)
        .map(|(e, _)| e)
        .collect();
    boundary.sort_unstable();

    let mut incident: HashMap<usize, Vec<usize>> = HashMap::new();
    for (i, (a, b)) in boundary.iter().enumerate() {
        incident.entry(*a).or_default().push(i);
        incident.entry(*b).or_default().push(i);
    }

    // pinch vertices can sit on more than one ring, so edges are consumed as
    // they are walked
    let mut used = vec![false; boundary.len()];
    let mut rings: Vec<Vec<usize>> = Vec::new();
    for first in 0..boundary.len() {
        if used[first] {
            continue;
        }
        used[first] = true;
        let (start, mut current) = boundary[first];
        let mut ring = vec![start, current];
        while current != start {
            let next = incident
                .get(&current)
                .and_then(|edges| edges.iter().find(|&&i| !used[i]).copied());
            match next {
                None => break,
                Some(i) => {
                    used[i] = true;
                    let (a, b) = boundary[i];
                    current = if a == current { b } else { a };
                    ring.push(current);
                }
            }
        }
        // a closed walk revisits its start; drop the repeated vertex
        if ring.len() >= 4 && ring.first() == ring.last() {
            ring.pop();
            rings.push(ring);
        }
    }

    let ring = rings.into_iter().max_by(|r1, r2| {
        shoelace_area(r1, positions)
            .abs()
            .total_cmp(&shoelace_area(r2, positions).abs())
    })?;
    Some(ring.iter().map(|&i| positions[i]).collect())
}

fn shoelace_area(ring: &[usize], positions: &[Coord]) -> f64 {
    let mut doubled = 0.0;
    for i in 0..ring.len() {
        let (x1, y1) = positions[ring[i]];
        let (x2, y2) = positions[ring[(i + 1) % ring.len()]];
        doubled += x1 * y2 - x2 * y1;
    }
    doubled / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    /// a dense square grid of points spaced `step` apart, anchored at (x, y)
    fn grid(x: f64, y: f64, n: usize, step: f64) -> Vec<Coord> {
        let mut points = Vec::new();
        for i in 0..n {
            for j in 0..n {
                points.push((x + i as f64 * step, y + j as f64 * step));
            }
        }
        points
    }

    #[test]
    fn test_single_cluster_yields_one_ring() {
        let points = grid(4.0, 52.0, 5, 0.001);
        let rings = alpha_shape(&points, 55.0).expect("test invariant failed: alpha shape");
        assert_eq!(rings.len(), 1);
        assert!(rings[0].len() >= 3);
    }

    #[test]
    fn test_two_far_clusters_yield_two_rings() {
        let mut points = grid(4.0, 52.0, 4, 0.001);
        points.extend(grid(9.0, 55.0, 4, 0.001));
        let rings = alpha_shape(&points, 55.0).expect("test invariant failed: alpha shape");
        assert_eq!(rings.len(), 2);
        assert!(rings.iter().all(|r| r.len() >= 3));
    }

    #[test]
    fn test_too_large_alpha_filters_everything() {
        // triangle legs of length 1 have a circumradius far above 1/55
        let points = vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
        let rings = alpha_shape(&points, 55.0).expect("test invariant failed: alpha shape");
        assert!(rings.is_empty());
    }

    #[test]
    fn test_fewer_than_three_points_is_an_error() {
        let points = vec![(4.0, 52.0), (4.1, 52.1)];
        assert!(matches!(
            alpha_shape(&points, 55.0),
            Err(FitError::NotEnoughPoints(2))
        ));
    }

    #[test]
    fn test_outer_ring_covers_the_cluster_extent() {
        let points = grid(0.0, 0.0, 6, 0.001);
        let rings = alpha_shape(&points, 55.0).expect("test invariant failed: alpha shape");
        let ring = &rings[0];
        let max_x = ring.iter().map(|(x, _)| *x).fold(f64::MIN, f64::max);
        let max_y = ring.iter().map(|(_, y)| *y).fold(f64::MIN, f64::max);
        assert!((max_x - 0.005).abs() < 1e-9);
        assert!((max_y - 0.005).abs() < 1e-9);
    }
}
