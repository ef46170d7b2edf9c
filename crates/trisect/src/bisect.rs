//! Triangle splitting operations.

use rand::Rng;

use crate::jitter::{Jitter, split_point};
use crate::point::midpoint;
use crate::triangle::{Triangle, Vertex};

/// How a kept triangle is split into children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitRule {
    /// Cut from the (jittered) midpoint of the longest edge to the opposite
    /// vertex, producing two children.
    #[default]
    LongestEdge,
    /// Connect the three edge midpoints, producing four children.
    Midpoint,
}

impl SplitRule {
    /// Number of children produced per split triangle.
    #[must_use]
    pub const fn fan_out(self) -> usize {
        match self {
            SplitRule::LongestEdge => 2,
            SplitRule::Midpoint => 4,
        }
    }

    /// Splits `triangle` according to this rule, appending the children to
    /// `out`.
    pub fn split_into<R: Rng + ?Sized>(
        self,
        triangle: &Triangle,
        jitter: &Jitter,
        rng: &mut R,
        out: &mut Vec<Triangle>,
    ) {
        match self {
            SplitRule::LongestEdge => out.extend(triangle.bisect(jitter, rng)),
            SplitRule::Midpoint => out.extend(split_midpoints(triangle)),
        }
    }
}

/// Trait for geometry that can be bisected along its longest edge.
pub trait Bisect {
    /// Splits along the longest edge.
    ///
    /// With longest edge `P1`-`P2`, apex `P3` and split point `D`, returns
    /// `[(P1, P3, D), (P2, P3, D)]`. Every child vertex is one of the parent's
    /// vertices or `D`.
    fn bisect<R: Rng + ?Sized>(&self, jitter: &Jitter, rng: &mut R) -> [Triangle; 2];
}

impl Bisect for Triangle {
    fn bisect<R: Rng + ?Sized>(&self, jitter: &Jitter, rng: &mut R) -> [Triangle; 2] {
        let edge = self.longest_edge();
        let (p1, p2) = edge.endpoints();
        let p1 = self.vertex(p1);
        let p2 = self.vertex(p2);
        let p3 = self.vertex(edge.apex());
        let d = split_point(p1, p2, jitter, rng);

        [
            Triangle::from_points(p1, p3, d),
            Triangle::from_points(p2, p3, d),
        ]
    }
}

/// Four-way split through the exact edge midpoints.
///
/// Returns the three corner triangles followed by the medial triangle.
pub fn split_midpoints(triangle: &Triangle) -> [Triangle; 4] {
    let a = triangle.vertex(Vertex::A);
    let b = triangle.vertex(Vertex::B);
    let c = triangle.vertex(Vertex::C);
    let ab = midpoint(a, b);
    let bc = midpoint(b, c);
    let ac = midpoint(a, c);

    [
        Triangle::from_points(a, ab, ac),
        Triangle::from_points(ab, b, bc),
        Triangle::from_points(ac, bc, c),
        Triangle::from_points(ab, bc, ac),
    ]
}
