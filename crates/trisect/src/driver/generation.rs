//! A single generation of the mesh.

use crate::triangle::Triangle;

use super::visitor::GenerationVisitor;

/// The triangles making up the mesh at one iteration.
///
/// Generations are immutable once built. Stepping consumes a generation
/// and returns its successor, so no triangle outlives the generation that
/// owns it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generation {
    triangles: Vec<Triangle>,
    iteration: u32,
}

impl Generation {
    /// Creates generation 0 from seed triangles.
    pub fn seed(triangles: Vec<Triangle>) -> Self {
        Self {
            triangles,
            iteration: 0,
        }
    }

    pub(crate) fn new(triangles: Vec<Triangle>, iteration: u32) -> Self {
        Self {
            triangles,
            iteration,
        }
    }

    /// Number of steps that produced this generation.
    #[inline]
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// The triangles in generation order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Consumes the generation, returning its triangles.
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if every triangle has been dropped.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Sum of the triangle areas.
    pub fn total_area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Calls `visitor` for each triangle in generation order.
    pub fn accept<V: GenerationVisitor>(&self, visitor: &mut V) {
        for triangle in &self.triangles {
            visitor.visit(triangle);
        }
    }
}

impl From<Vec<Triangle>> for Generation {
    fn from(triangles: Vec<Triangle>) -> Self {
        Self::seed(triangles)
    }
}
