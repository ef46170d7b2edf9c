//! Generation stepping and the iteration driver.

use rand::Rng;
use tracing::debug;

use crate::bisect::SplitRule;
use crate::config::SubdivisionConfig;
use crate::error::TrisectResult;
use crate::jitter::Jitter;

use super::generation::Generation;
use super::policy::{DropAfter, SplitPolicy};

/// Produces the next generation using the settings in `config`.
///
/// For each triangle in order, the drop decision is drawn first (only past
/// the drop threshold), then the jitter of its split point (only if the
/// triangle is kept). Dropped triangles contribute nothing.
///
/// `config` is assumed valid; [`Subdivision::new`] checks it once up front.
pub fn step<R: Rng + ?Sized>(
    generation: Generation,
    config: &SubdivisionConfig,
    rng: &mut R,
) -> Generation {
    step_with(
        generation,
        &DropAfter::from(config),
        config.split_rule,
        &config.jitter(),
        rng,
    )
}

/// Produces the next generation with an explicit policy, rule and jitter.
pub fn step_with<P: SplitPolicy, R: Rng + ?Sized>(
    generation: Generation,
    policy: &P,
    rule: SplitRule,
    jitter: &Jitter,
    rng: &mut R,
) -> Generation {
    let iteration = generation.iteration();
    let parents = generation.into_triangles();
    let mut children = Vec::with_capacity(parents.len() * rule.fan_out());

    for triangle in &parents {
        if policy.should_split(iteration, rng) {
            rule.split_into(triangle, jitter, rng, &mut children);
        }
    }

    debug!(
        "Iteration {}: {} triangles -> {}",
        iteration + 1,
        parents.len(),
        children.len()
    );

    Generation::new(children, iteration + 1)
}

/// Iteration driver holding the current generation.
///
/// The random source is passed to each call rather than owned, so a caller
/// can interleave its own draws (e.g. palette colors) between steps.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use trisect::{Subdivision, SubdivisionConfig, initial_mesh};
///
/// let config = SubdivisionConfig::deterministic().with_max_iterations(3);
/// let mut rng = StdRng::seed_from_u64(0);
/// let seed = initial_mesh(0, 400.0, 400.0, 20.0, &config, &mut rng)?;
///
/// let mut driver = Subdivision::new(seed, config)?;
/// driver.run(&mut rng);
/// assert!(driver.is_finished());
/// assert_eq!(driver.iteration(), 4);
/// assert_eq!(driver.current().len(), 2 * 2 * 2 * 2 * 2);
/// # Ok::<(), trisect::TrisectError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Subdivision {
    current: Generation,
    config: SubdivisionConfig,
}

impl Subdivision {
    /// Creates a driver starting from `seed`.
    ///
    /// # Errors
    /// Returns a configuration error if `config` does not validate.
    pub fn new(seed: Generation, config: SubdivisionConfig) -> TrisectResult<Self> {
        config.validate()?;
        Ok(Self {
            current: seed,
            config,
        })
    }

    /// The generation currently held.
    #[inline]
    pub fn current(&self) -> &Generation {
        &self.current
    }

    /// The configuration in use.
    #[inline]
    pub fn config(&self) -> &SubdivisionConfig {
        &self.config
    }

    /// Iteration index of the current generation.
    #[inline]
    pub fn iteration(&self) -> u32 {
        self.current.iteration()
    }

    /// Returns `true` once the iteration counter exceeds `max_iterations`,
    /// i.e. after `max_iterations + 1` steps from generation 0.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current.iteration() > self.config.max_iterations
    }

    /// Replaces the current generation with its successor.
    ///
    /// Returns `false` without drawing from `rng` if the driver is finished.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.is_finished() {
            return false;
        }
        let previous = std::mem::take(&mut self.current);
        self.current = step(previous, &self.config, rng);
        true
    }

    /// Advances until finished.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        while self.advance(rng) {}
    }

    /// Discards the current generation and starts over from `seed`.
    pub fn restart(&mut self, seed: Generation) {
        self.current = seed;
    }

    /// Consumes the driver, returning the current generation.
    pub fn into_generation(self) -> Generation {
        self.current
    }
}
