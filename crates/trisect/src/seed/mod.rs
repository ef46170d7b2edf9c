//! Construction of generation 0.
//!
//! Two seed meshes are supported, selected by [`SeedMode`]:
//!
//! - **Fixed split**: the padded rectangle is cut along its diagonal into
//!   two triangles.
//! - **Delaunay**: the four padded corners plus `point_count` random points,
//!   kept at least `min_point_separation` apart, are Delaunay triangulated.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use trisect::{SeedMode, SubdivisionConfig, initial_mesh};
//!
//! let config = SubdivisionConfig::default().with_seed_mode(SeedMode::FixedSplit);
//! let mut rng = StdRng::seed_from_u64(1);
//! let generation = initial_mesh(0, 850.0, 600.0, 50.0, &config, &mut rng)?;
//! assert_eq!(generation.len(), 2);
//! # Ok::<(), trisect::TrisectError>(())
//! ```

mod bounds;
mod delaunay;
mod sampler;

pub use bounds::Bounds;
pub use delaunay::delaunay;
pub use sampler::sample_points;

use rand::Rng;
use tracing::debug;

use crate::config::{SeedMode, SubdivisionConfig};
use crate::driver::Generation;
use crate::error::TrisectResult;
use crate::triangle::Triangle;

/// Splits the padded rectangle along the diagonal from its lower-left to
/// its upper-right corner.
pub fn fixed_split(bounds: &Bounds) -> [Triangle; 2] {
    let [lower_left, upper_left, lower_right, upper_right] = bounds.corners();
    [
        Triangle::from_points(lower_left, lower_right, upper_right),
        Triangle::from_points(lower_left, upper_right, upper_left),
    ]
}

/// Builds generation 0 over a `width` x `height` canvas inset by `padding`.
///
/// `point_count` random points are added in [`SeedMode::Delaunay`] and
/// ignored in [`SeedMode::FixedSplit`].
///
/// # Errors
/// - A configuration error if `config` or the canvas is invalid.
/// - [`crate::TrisectError::PointPlacementExhausted`] if the random points
///   cannot be separated within the retry budget.
pub fn initial_mesh<R: Rng + ?Sized>(
    point_count: usize,
    width: f64,
    height: f64,
    padding: f64,
    config: &SubdivisionConfig,
    rng: &mut R,
) -> TrisectResult<Generation> {
    config.validate()?;
    let bounds = Bounds::new(width, height, padding)?;

    let triangles = match config.seed_mode {
        SeedMode::FixedSplit => fixed_split(&bounds).to_vec(),
        SeedMode::Delaunay => {
            let points = sample_points(
                &bounds,
                point_count,
                config.min_point_separation,
                config.max_placement_attempts,
                rng,
            )?;
            delaunay(&points)
        }
    };

    debug!(
        mode = ?config.seed_mode,
        point_count,
        triangles = triangles.len(),
        "Seeded initial mesh"
    );

    Ok(Generation::seed(triangles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrisectError;
    use crate::point::distance;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fixed_split_covers_rectangle() {
        let bounds = Bounds::new(300.0, 200.0, 20.0).unwrap();
        let [first, second] = fixed_split(&bounds);
        assert_eq!(first.area(), 260.0 * 160.0 / 2.0);
        assert_eq!(second.area(), 260.0 * 160.0 / 2.0);

        // The two triangles share exactly the diagonal.
        let shared: Vec<_> = first
            .vertices()
            .iter()
            .filter(|v| second.vertices().contains(v))
            .collect();
        assert_eq!(shared.len(), 2);
        assert!(shared.contains(&&bounds.min()));
        assert!(shared.contains(&&bounds.max()));
    }

    #[test]
    fn fixed_mode_ignores_point_count() {
        let config = SubdivisionConfig::deterministic();
        let mut rng = StdRng::seed_from_u64(0);
        let generation = initial_mesh(25, 400.0, 400.0, 10.0, &config, &mut rng).unwrap();
        assert_eq!(generation.len(), 2);
        assert_eq!(generation.iteration(), 0);
    }

    #[test]
    fn delaunay_mode_with_no_points_triangulates_corners() {
        let config = SubdivisionConfig::default();
        let mut rng = StdRng::seed_from_u64(0);
        let generation = initial_mesh(0, 850.0, 850.0, 50.0, &config, &mut rng).unwrap();
        assert_eq!(generation.len(), 2);
        assert!((generation.total_area() - 750.0 * 750.0).abs() < 1e-6);
    }

    #[test]
    fn delaunay_mode_covers_rectangle() {
        let config = SubdivisionConfig::default();
        let mut rng = StdRng::seed_from_u64(77);
        let generation = initial_mesh(6, 850.0, 1200.0, 50.0, &config, &mut rng).unwrap();

        let bounds = Bounds::new(850.0, 1200.0, 50.0).unwrap();
        assert!((generation.total_area() - bounds.area()).abs() < 1e-6 * bounds.area());

        let mut vertices: Vec<_> = Vec::new();
        for t in generation.triangles() {
            for v in t.vertices() {
                assert!(bounds.contains(*v));
                if !vertices.contains(v) {
                    vertices.push(*v);
                }
            }
        }
        assert_eq!(vertices.len(), 10);
        for (i, p) in vertices.iter().enumerate() {
            for q in &vertices[i + 1..] {
                assert!(distance(*p, *q) >= 150.0);
            }
        }
    }

    #[test]
    fn invalid_inputs_are_reported() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = SubdivisionConfig::default();
        assert!(matches!(
            initial_mesh(0, 100.0, 100.0, 60.0, &config, &mut rng),
            Err(TrisectError::InvalidPadding { .. })
        ));

        let config = SubdivisionConfig::default().with_drop(2, 2.0);
        assert!(matches!(
            initial_mesh(0, 100.0, 100.0, 10.0, &config, &mut rng),
            Err(TrisectError::InvalidProbability(_))
        ));
    }

    #[test]
    fn crowded_canvas_exhausts_placement() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = SubdivisionConfig::default().with_max_placement_attempts(20);
        let err = initial_mesh(50, 400.0, 400.0, 0.0, &config, &mut rng).unwrap_err();
        assert!(matches!(err, TrisectError::PointPlacementExhausted { .. }));
    }
}
