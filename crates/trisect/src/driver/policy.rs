//! Split policies deciding which triangles survive into the next generation.
//!
//! Dropping triangles after the first few iterations leaves holes in the
//! mesh, which is what gives the rendered output its irregular texture.

use rand::Rng;

use crate::config::SubdivisionConfig;

/// Strategy for deciding whether a triangle is split or dropped.
pub trait SplitPolicy {
    /// Returns `true` if a triangle of the generation at `iteration` should
    /// be split, `false` if it is dropped.
    ///
    /// Implementations draw at most once from `rng` per call.
    fn should_split<R: Rng + ?Sized>(&self, iteration: u32, rng: &mut R) -> bool;
}

/// Splits every triangle. Never draws from the random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysSplit;

impl SplitPolicy for AlwaysSplit {
    fn should_split<R: Rng + ?Sized>(&self, _iteration: u32, _rng: &mut R) -> bool {
        true
    }
}

/// Splits every triangle up to `threshold`, then drops each triangle with
/// `probability`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropAfter {
    /// Last iteration at which every triangle is split.
    pub threshold: u32,
    /// Chance of dropping a triangle past the threshold.
    pub probability: f64,
}

impl DropAfter {
    /// Creates a drop policy.
    pub fn new(threshold: u32, probability: f64) -> Self {
        Self {
            threshold,
            probability,
        }
    }
}

impl From<&SubdivisionConfig> for DropAfter {
    fn from(config: &SubdivisionConfig) -> Self {
        Self::new(config.drop_threshold_iteration, config.drop_probability)
    }
}

impl SplitPolicy for DropAfter {
    fn should_split<R: Rng + ?Sized>(&self, iteration: u32, rng: &mut R) -> bool {
        if iteration <= self.threshold {
            return true;
        }
        let u: f64 = rng.gen_range(0.0..1.0);
        u >= self.probability
    }
}
