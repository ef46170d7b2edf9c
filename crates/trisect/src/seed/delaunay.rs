//! Delaunay triangulation of a seed point set.

use crate::point::Point;
use crate::triangle::Triangle;

/// Triangulates `points` with a Delaunay construction.
///
/// Returns an empty list when the points are all collinear or fewer than
/// three. Triangles follow the triangulation's own vertex order.
pub fn delaunay(points: &[Point]) -> Vec<Triangle> {
    let input: Vec<delaunator::Point> = points
        .iter()
        .map(|p| delaunator::Point { x: p.x, y: p.y })
        .collect();

    let triangulation = delaunator::triangulate(&input);

    triangulation
        .triangles
        .chunks_exact(3)
        .map(|t| Triangle::from_points(points[t[0]], points[t[1]], points[t[2]]))
        .collect()
}
