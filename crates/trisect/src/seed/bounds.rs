//! The padded rectangle that seed meshes cover.

use crate::error::{TrisectError, TrisectResult};
use crate::point::Point;

/// An axis-aligned canvas inset by a uniform padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    /// Creates the padded rectangle `[padding, width - padding] x
    /// [padding, height - padding]`.
    ///
    /// # Errors
    /// - [`TrisectError::InvalidDimensions`] if a dimension is not a positive
    ///   finite number.
    /// - [`TrisectError::InvalidPadding`] if the padding is negative, not
    ///   finite, or at least half of either dimension.
    pub fn new(width: f64, height: f64, padding: f64) -> TrisectResult<Self> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(width) || !positive(height) {
            return Err(TrisectError::InvalidDimensions { width, height });
        }
        if !padding.is_finite() || padding < 0.0 || padding * 2.0 >= width.min(height) {
            return Err(TrisectError::InvalidPadding {
                padding,
                width,
                height,
            });
        }

        Ok(Self {
            min: Point::new(padding, padding),
            max: Point::new(width - padding, height - padding),
        })
    }

    /// Lower-left corner.
    #[inline]
    pub fn min(&self) -> Point {
        self.min
    }

    /// Upper-right corner.
    #[inline]
    pub fn max(&self) -> Point {
        self.max
    }

    /// Width of the padded rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the padded rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Area of the padded rectangle.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// The four corners in the order (min, min), (min, max), (max, min),
    /// (max, max).
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min.x, self.min.y),
            Point::new(self.min.x, self.max.y),
            Point::new(self.max.x, self.min.y),
            Point::new(self.max.x, self.max.y),
        ]
    }

    /// Returns `true` if `p` lies inside or on the boundary.
    pub fn contains(&self, p: Point) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_extent() {
        let bounds = Bounds::new(850.0, 600.0, 50.0).unwrap();
        assert_eq!(bounds.min(), Point::new(50.0, 50.0));
        assert_eq!(bounds.max(), Point::new(800.0, 550.0));
        assert_eq!(bounds.width(), 750.0);
        assert_eq!(bounds.height(), 500.0);
        assert_eq!(bounds.area(), 375_000.0);
    }

    #[test]
    fn corners_are_contained() {
        let bounds = Bounds::new(100.0, 100.0, 10.0).unwrap();
        for corner in bounds.corners() {
            assert!(bounds.contains(corner));
        }
        assert!(!bounds.contains(Point::new(5.0, 50.0)));
    }

    #[test]
    fn zero_padding_allowed() {
        assert!(Bounds::new(10.0, 10.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(matches!(
            Bounds::new(-1.0, 10.0, 0.0),
            Err(TrisectError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Bounds::new(10.0, 0.0, 0.0),
            Err(TrisectError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Bounds::new(f64::NAN, 10.0, 0.0),
            Err(TrisectError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn rejects_bad_padding() {
        assert!(matches!(
            Bounds::new(100.0, 100.0, -1.0),
            Err(TrisectError::InvalidPadding { .. })
        ));
        // Exactly half collapses the rectangle.
        assert!(matches!(
            Bounds::new(100.0, 40.0, 20.0),
            Err(TrisectError::InvalidPadding { .. })
        ));
    }
}
