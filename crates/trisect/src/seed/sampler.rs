//! Rejection sampling of well-separated seed points.

use rand::Rng;
use tracing::warn;

use super::bounds::Bounds;
use crate::error::{TrisectError, TrisectResult};
use crate::point::{Point, distance};

/// Returns the four corners of `bounds` followed by `count` random points.
///
/// Each random point is drawn uniformly inside the padded rectangle (one
/// draw for x, then one for y) and rejected if it lies closer than
/// `min_separation` to any point already accepted, corners included.
///
/// # Errors
/// Returns [`TrisectError::PointPlacementExhausted`] when `max_attempts`
/// consecutive candidates for one point are all rejected.
pub fn sample_points<R: Rng + ?Sized>(
    bounds: &Bounds,
    count: usize,
    min_separation: f64,
    max_attempts: usize,
    rng: &mut R,
) -> TrisectResult<Vec<Point>> {
    let mut points = Vec::with_capacity(count + 4);
    points.extend(bounds.corners());

    let (min, max) = (bounds.min(), bounds.max());

    for placed in 0..count {
        let accepted = (0..max_attempts).find_map(|_| {
            let candidate = Point::new(
                rng.gen_range(min.x..=max.x),
                rng.gen_range(min.y..=max.y),
            );
            points
                .iter()
                .all(|p| distance(*p, candidate) >= min_separation)
                .then_some(candidate)
        });

        match accepted {
            Some(point) => points.push(point),
            None => {
                warn!(
                    placed,
                    requested = count,
                    max_attempts,
                    min_separation,
                    "seed point placement exhausted"
                );
                return Err(TrisectError::PointPlacementExhausted {
                    placed,
                    requested: count,
                    attempts: max_attempts,
                });
            }
        }
    }

    Ok(points)
}
