//! Triangle representation with labelled vertices.

use crate::error::{TrisectError, TrisectResult};
use crate::point::{Point, distance, is_finite, signed_area};

/// Label of one of a triangle's three vertex slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertex {
    A,
    B,
    C,
}

impl Vertex {
    /// All labels in slot order.
    pub const ALL: [Vertex; 3] = [Vertex::A, Vertex::B, Vertex::C];

    #[inline]
    const fn index(self) -> usize {
        match self {
            Vertex::A => 0,
            Vertex::B => 1,
            Vertex::C => 2,
        }
    }
}

/// An edge of a triangle, named by its two endpoint labels.
///
/// Edges are only used to compare side lengths; they are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    AB,
    BC,
    AC,
}

impl Edge {
    /// All edges in enumeration order. Ties in length are resolved in
    /// favour of the edge listed first.
    pub const ALL: [Edge; 3] = [Edge::AB, Edge::BC, Edge::AC];

    /// The two vertex labels this edge connects.
    #[inline]
    pub const fn endpoints(self) -> (Vertex, Vertex) {
        match self {
            Edge::AB => (Vertex::A, Vertex::B),
            Edge::BC => (Vertex::B, Vertex::C),
            Edge::AC => (Vertex::A, Vertex::C),
        }
    }

    /// The vertex label opposite this edge.
    #[inline]
    pub const fn apex(self) -> Vertex {
        match self {
            Edge::AB => Vertex::C,
            Edge::BC => Vertex::A,
            Edge::AC => Vertex::B,
        }
    }
}

/// A triangle in the plane, defined by three labelled vertices.
///
/// The labels carry no geometric meaning (winding is not normalized), but
/// they are preserved so that subdivision is reproducible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point; 3],
}

impl Triangle {
    /// Creates a new triangle from three points.
    ///
    /// # Errors
    /// Returns [`TrisectError::InvalidTriangle`] if a coordinate is not
    /// finite or two vertices coincide.
    pub fn new(a: Point, b: Point, c: Point) -> TrisectResult<Self> {
        if ![a, b, c].into_iter().all(is_finite) {
            return Err(TrisectError::InvalidTriangle("non-finite coordinate"));
        }
        if a == b || b == c || a == c {
            return Err(TrisectError::InvalidTriangle("repeated vertex"));
        }
        Ok(Self::from_points(a, b, c))
    }

    /// Builds a triangle without validation. Used for subdivision
    /// children, whose vertices come from an already valid parent.
    #[inline]
    pub(crate) const fn from_points(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Returns the three vertices in slot order A, B, C.
    #[inline]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    /// Returns the vertex stored under `label`.
    #[inline]
    pub fn vertex(&self, label: Vertex) -> Point {
        self.vertices[label.index()]
    }

    /// Returns a copy of this triangle with the vertex under `label` replaced.
    ///
    /// # Errors
    /// Fails under the same conditions as [`Triangle::new`].
    pub fn with_vertex(&self, label: Vertex, point: Point) -> TrisectResult<Self> {
        let mut vertices = self.vertices;
        vertices[label.index()] = point;
        let [a, b, c] = vertices;
        Self::new(a, b, c)
    }

    /// Length of one edge.
    #[inline]
    pub fn edge_length(&self, edge: Edge) -> f64 {
        let (p, q) = edge.endpoints();
        distance(self.vertex(p), self.vertex(q))
    }

    /// The three side lengths in enumeration order AB, BC, AC.
    pub fn side_lengths(&self) -> [(Edge, f64); 3] {
        Edge::ALL.map(|edge| (edge, self.edge_length(edge)))
    }

    /// The longest edge.
    ///
    /// Sides are compared pairwise with a strict "greater than" in the order
    /// AB, BC, AC, so on exact ties the earlier edge wins. An equilateral
    /// triangle therefore always yields [`Edge::AB`].
    pub fn longest_edge(&self) -> Edge {
        let [first, rest @ ..] = self.side_lengths();
        rest.into_iter()
            .fold(first, |best, candidate| {
                if candidate.1 > best.1 { candidate } else { best }
            })
            .0
    }

    /// Unsigned area of the triangle.
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        signed_area(a, b, c).abs()
    }

    /// Computes the centroid (center of mass) of the triangle.
    pub fn centroid(&self) -> Point {
        let [a, b, c] = &self.vertices;
        Point::from((a.coords + b.coords + c.coords) / 3.0)
    }
}
