//! Planar point primitives.

use nalgebra::Point2;

/// A point in the plane.
pub type Point = Point2<f64>;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// The exact midpoint of the segment `a`-`b`.
#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Returns `true` if both coordinates are finite.
#[inline]
pub fn is_finite(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Signed area of the triangle `a`, `b`, `c`.
///
/// Positive for counter-clockwise winding, negative for clockwise,
/// zero for collinear points.
#[inline]
pub fn signed_area(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    (ab.x * ac.y - ab.y * ac.x) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_345() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(distance(b, a), 5.0);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn midpoint_exact() {
        let m = midpoint(Point::new(1.0, -2.0), Point::new(4.0, 6.0));
        assert_eq!(m, Point::new(2.5, 2.0));
    }

    #[test]
    fn finiteness() {
        assert!(is_finite(Point::new(1.0, 2.0)));
        assert!(!is_finite(Point::new(f64::NAN, 2.0)));
        assert!(!is_finite(Point::new(1.0, f64::INFINITY)));
    }

    #[test]
    fn signed_area_winding() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 0.0);
        let c = Point::new(0.0, 2.0);
        assert_eq!(signed_area(a, b, c), 2.0);
        assert_eq!(signed_area(a, c, b), -2.0);
        assert_eq!(signed_area(a, b, Point::new(4.0, 0.0)), 0.0);
    }
}
