//! Split-point placement along an edge, with optional bounded jitter.

use rand::Rng;

use crate::point::{Point, midpoint};

/// Divisor applied to the jitter scale. An offset is drawn uniformly from
/// `[-scale / (2 * JITTER_DIVISOR), scale / (2 * JITTER_DIVISOR))`.
pub const JITTER_DIVISOR: f64 = 36.0;

/// Jitter settings for split points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jitter {
    /// Whether split points are perturbed at all.
    pub enabled: bool,
    /// Reference scale (usually the canvas width) bounding the offset.
    pub scale: f64,
}

impl Default for Jitter {
    fn default() -> Self {
        Self::disabled()
    }
}

impl Jitter {
    /// No perturbation; split points are exact midpoints.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            scale: 0.0,
        }
    }

    /// Offsets bounded by `scale / JITTER_DIVISOR`.
    #[must_use]
    pub const fn scaled(scale: f64) -> Self {
        Self {
            enabled: true,
            scale,
        }
    }

    /// Offsets drawn as `(u - 0.5) * multiplier`, independent of any canvas.
    #[must_use]
    pub fn fixed(multiplier: f64) -> Self {
        Self::scaled(multiplier * JITTER_DIVISOR)
    }

    /// Largest absolute offset this jitter can produce on one axis.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        if self.enabled {
            self.scale / (2.0 * JITTER_DIVISOR)
        } else {
            0.0
        }
    }

    /// Draws one offset. Consumes a single value from `rng` when enabled and
    /// none when disabled.
    pub fn offset<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if !self.enabled {
            return 0.0;
        }
        let u: f64 = rng.gen_range(0.0..1.0);
        (u - 0.5) * self.scale / JITTER_DIVISOR
    }
}

/// Point at which the edge `a`-`b` is split.
///
/// The same offset is added to both coordinates, so jittered split points
/// move along the diagonal through the midpoint.
pub fn split_point<R: Rng + ?Sized>(a: Point, b: Point, jitter: &Jitter, rng: &mut R) -> Point {
    let m = midpoint(a, b);
    let offset = jitter.offset(rng);
    Point::new(m.x + offset, m.y + offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn disabled_is_exact_midpoint() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = Point::new(10.0, 20.0);
        let b = Point::new(31.0, -7.0);
        let d = split_point(a, b, &Jitter::disabled(), &mut rng);
        assert_eq!(d, Point::new((10.0 + 31.0) / 2.0, (20.0 - 7.0) / 2.0));
    }

    #[test]
    fn disabled_does_not_consume_randomness() {
        let mut used = StdRng::seed_from_u64(9);
        let mut fresh = StdRng::seed_from_u64(9);
        let _ = split_point(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            &Jitter::disabled(),
            &mut used,
        );
        assert_eq!(
            used.gen_range(0.0..1.0_f64),
            fresh.gen_range(0.0..1.0_f64)
        );
    }

    #[test]
    fn scaled_offset_is_bounded() {
        let mut rng = StdRng::seed_from_u64(42);
        let jitter = Jitter::scaled(850.0);
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 50.0);
        let m = midpoint(a, b);
        for _ in 0..1000 {
            let d = split_point(a, b, &jitter, &mut rng);
            assert!((d.x - m.x).abs() <= 850.0 / 36.0);
            assert!((d.y - m.y).abs() <= 850.0 / 36.0);
            assert!((d.x - m.x).abs() <= jitter.max_offset());
            // Both axes receive the same offset.
            assert!(((d.x - m.x) - (d.y - m.y)).abs() < 1e-9);
        }
    }

    #[test]
    fn fixed_multiplier_bound() {
        let jitter = Jitter::fixed(22.0);
        assert!((jitter.max_offset() - 11.0).abs() < 1e-12);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert!(jitter.offset(&mut rng).abs() <= 11.0);
        }
    }

    #[test]
    fn default_is_disabled() {
        assert_eq!(Jitter::default(), Jitter::disabled());
        assert_eq!(Jitter::default().max_offset(), 0.0);
    }
}
