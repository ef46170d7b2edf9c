//! Configuration for seeding and subdividing a mesh.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bisect::SplitRule;
use crate::error::{TrisectError, TrisectResult};
use crate::jitter::Jitter;

/// Canvas width the reference parameters were tuned for.
pub const REFERENCE_WIDTH: f64 = 850.0;

/// How generation 0 is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedMode {
    /// The padded rectangle cut along one diagonal into two triangles.
    FixedSplit,
    /// Delaunay triangulation of the corners plus random interior points.
    #[default]
    Delaunay,
}

/// Parameters for seeding and subdividing a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct SubdivisionConfig {
    /// Whether split points are jittered. Default: true
    pub jitter_enabled: bool,

    /// Reference scale bounding the jitter, usually the canvas width.
    /// Default: 850.0
    pub jitter_scale: f64,

    /// Last iteration index at which every triangle is split. Default: 2
    pub drop_threshold_iteration: u32,

    /// Probability of dropping a triangle once past the threshold.
    /// Default: 0.2
    pub drop_probability: f64,

    /// Number of steps after which the driver halts. Default: 10
    pub max_iterations: u32,

    /// Minimum distance between seed points. Not scaled with the canvas.
    /// Default: 150.0
    pub min_point_separation: f64,

    /// Seed for the shared random source. `None` draws from OS entropy.
    pub random_seed: Option<u64>,

    /// How generation 0 is built. Default: [`SeedMode::Delaunay`]
    pub seed_mode: SeedMode,

    /// How kept triangles are split. Default: [`SplitRule::LongestEdge`]
    pub split_rule: SplitRule,

    /// Candidates drawn for one seed point before giving up. Default: 1000
    pub max_placement_attempts: usize,
}

impl Default for SubdivisionConfig {
    fn default() -> Self {
        Self {
            jitter_enabled: true,
            jitter_scale: REFERENCE_WIDTH,
            drop_threshold_iteration: 2,
            drop_probability: 0.2,
            max_iterations: 10,
            min_point_separation: 150.0,
            random_seed: None,
            seed_mode: SeedMode::Delaunay,
            split_rule: SplitRule::LongestEdge,
            max_placement_attempts: 1000,
        }
    }
}

impl SubdivisionConfig {
    /// Exact midpoints, no drops, fixed-split seed.
    #[must_use]
    pub fn deterministic() -> Self {
        Self {
            jitter_enabled: false,
            drop_probability: 0.0,
            seed_mode: SeedMode::FixedSplit,
            ..Default::default()
        }
    }

    /// Set the random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Enable or disable jitter.
    #[must_use]
    pub const fn with_jitter(mut self, enabled: bool) -> Self {
        self.jitter_enabled = enabled;
        self
    }

    /// Set the jitter scale.
    #[must_use]
    pub const fn with_jitter_scale(mut self, scale: f64) -> Self {
        self.jitter_scale = scale;
        self
    }

    /// Set the drop threshold and probability.
    #[must_use]
    pub const fn with_drop(mut self, threshold: u32, probability: f64) -> Self {
        self.drop_threshold_iteration = threshold;
        self.drop_probability = probability;
        self
    }

    /// Set the iteration cap.
    #[must_use]
    pub const fn with_max_iterations(mut self, max: u32) -> Self {
        self.max_iterations = max;
        self
    }

    /// Set the minimum seed point separation.
    #[must_use]
    pub const fn with_min_point_separation(mut self, separation: f64) -> Self {
        self.min_point_separation = separation;
        self
    }

    /// Set the seed mode.
    #[must_use]
    pub const fn with_seed_mode(mut self, mode: SeedMode) -> Self {
        self.seed_mode = mode;
        self
    }

    /// Set the split rule.
    #[must_use]
    pub const fn with_split_rule(mut self, rule: SplitRule) -> Self {
        self.split_rule = rule;
        self
    }

    /// Set the per-point placement budget.
    #[must_use]
    pub const fn with_max_placement_attempts(mut self, attempts: usize) -> Self {
        self.max_placement_attempts = attempts;
        self
    }

    /// Checks every value for range errors.
    ///
    /// # Errors
    /// Returns the first configuration error found.
    pub fn validate(&self) -> TrisectResult<()> {
        if !(0.0..=1.0).contains(&self.drop_probability) {
            return Err(TrisectError::InvalidProbability(self.drop_probability));
        }
        if !self.jitter_scale.is_finite() || self.jitter_scale < 0.0 {
            return Err(TrisectError::InvalidJitterScale(self.jitter_scale));
        }
        if !self.min_point_separation.is_finite() || self.min_point_separation < 0.0 {
            return Err(TrisectError::InvalidSeparation(self.min_point_separation));
        }
        if self.max_placement_attempts == 0 {
            return Err(TrisectError::InvalidAttempts);
        }
        Ok(())
    }

    /// The jitter applied to split points.
    #[must_use]
    pub fn jitter(&self) -> Jitter {
        if self.jitter_enabled {
            Jitter::scaled(self.jitter_scale)
        } else {
            Jitter::disabled()
        }
    }

    /// Builds the shared random source.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.random_seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
    }
}

impl From<&SubdivisionConfig> for Jitter {
    fn from(config: &SubdivisionConfig) -> Self {
        config.jitter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config() {
        let config = SubdivisionConfig::default();
        assert!(config.jitter_enabled);
        assert_eq!(config.drop_threshold_iteration, 2);
        assert!((config.drop_probability - 0.2).abs() < 1e-12);
        assert!((config.min_point_separation - 150.0).abs() < 1e-12);
        assert_eq!(config.seed_mode, SeedMode::Delaunay);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn probability_out_of_range() {
        let config = SubdivisionConfig::default().with_drop(2, 1.5);
        assert_eq!(config.validate(), Err(TrisectError::InvalidProbability(1.5)));

        let config = SubdivisionConfig::default().with_drop(2, -0.1);
        assert!(config.validate().unwrap_err().is_configuration());

        let config = SubdivisionConfig::default().with_drop(2, f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_scale_and_separation() {
        let config = SubdivisionConfig::default().with_jitter_scale(-1.0);
        assert_eq!(config.validate(), Err(TrisectError::InvalidJitterScale(-1.0)));

        let config = SubdivisionConfig::default().with_min_point_separation(f64::INFINITY);
        assert!(matches!(
            config.validate(),
            Err(TrisectError::InvalidSeparation(_))
        ));

        let config = SubdivisionConfig::default().with_max_placement_attempts(0);
        assert_eq!(config.validate(), Err(TrisectError::InvalidAttempts));
    }

    #[test]
    fn jitter_follows_flag() {
        let config = SubdivisionConfig::default().with_jitter_scale(360.0);
        assert_eq!(Jitter::from(&config), Jitter::scaled(360.0));
        assert_eq!(config.with_jitter(false).jitter(), Jitter::disabled());
    }

    #[test]
    fn seeded_rng_replays() {
        let config = SubdivisionConfig::default().with_seed(7);
        let a: Vec<f64> = (0..5).map(|_| config.rng().gen_range(0.0..1.0)).collect();
        let mut first = config.rng();
        let mut second = config.rng();
        for _ in 0..5 {
            assert_eq!(
                first.gen_range(0.0..1.0_f64),
                second.gen_range(0.0..1.0_f64)
            );
        }
        assert!(a.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn deterministic_preset() {
        let config = SubdivisionConfig::deterministic();
        assert!(!config.jitter_enabled);
        assert_eq!(config.drop_probability, 0.0);
        assert_eq!(config.seed_mode, SeedMode::FixedSplit);
    }
}
