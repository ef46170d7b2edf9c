//! Visitor pattern for walking a generation.
//!
//! Visitors let a renderer or exporter consume triangles without the
//! driver knowing what is done with them.

use crate::triangle::Triangle;

/// Visitor for processing triangles of a generation.
pub trait GenerationVisitor {
    /// Called once per triangle, in generation order.
    fn visit(&mut self, triangle: &Triangle);
}

/// Running size summary of the triangles visited so far.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeshStats {
    pub count: usize,
    pub total_area: f64,
    pub smallest_area: Option<f64>,
    pub longest_side: f64,
}

impl MeshStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mean triangle area, or `None` before any triangle was visited.
    pub fn mean_area(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total_area / self.count as f64)
    }
}

impl GenerationVisitor for MeshStats {
    fn visit(&mut self, triangle: &Triangle) {
        let area = triangle.area();
        self.count += 1;
        self.total_area += area;
        self.smallest_area = Some(self.smallest_area.map_or(area, |a| a.min(area)));
        self.longest_side = self
            .longest_side
            .max(triangle.edge_length(triangle.longest_edge()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Generation;
    use crate::point::Point;

    fn right(offset: f64, leg: f64) -> Triangle {
        Triangle::new(
            Point::new(offset, 0.0),
            Point::new(offset + leg, 0.0),
            Point::new(offset, leg),
        )
        .unwrap()
    }

    #[test]
    fn empty_generation_has_no_mean() {
        let mut stats = MeshStats::new();
        Generation::default().accept(&mut stats);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean_area(), None);
        assert_eq!(stats.smallest_area, None);
    }

    #[test]
    fn stats_summarize_generation() {
        let generation = Generation::seed(vec![right(0.0, 2.0), right(10.0, 4.0)]);
        let mut stats = MeshStats::new();
        generation.accept(&mut stats);

        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_area, 10.0);
        assert_eq!(stats.smallest_area, Some(2.0));
        assert_eq!(stats.mean_area(), Some(5.0));
        assert!((stats.longest_side - 32f64.sqrt()).abs() < 1e-12);
    }
}
