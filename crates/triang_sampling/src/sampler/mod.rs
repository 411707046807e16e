//! Deterministic pick-and-remove sampler.
//!
//! This module provides the orchestration layer for draw generation:
//! 1. One [`FlightRng`](crate::rng::FlightRng) stream, seeded once per call
//! 2. A fresh working copy of the pool per participant
//! 3. Three rounds of uniform pick-and-remove per copy
//!
//! # Stream Discipline
//!
//! The PRNG stream is shared across all participants and all rounds and is
//! consumed strictly sequentially: participant 1's three picks, then
//! participant 2's three picks, and so on. Reseeding per participant would
//! silently change every output for a given seed, so the stream is seeded
//! exactly once at the start of [`Sampler::generate`].

mod config;

pub use config::{SamplerConfig, SamplerConfigBuilder};

use triang_core::types::{Draw, SamplePool, DRAW_SIZE};

use crate::rng::FlightRng;

/// Deterministic draw generator.
///
/// Holds a validated [`SamplerConfig`] and produces one [`Draw`] per
/// participant from a [`SamplePool`]. Sampling is "with replacement
/// across participants, without replacement within a participant's
/// draw": every participant samples from an independent full copy of
/// the pool, and within one draw each pool position is consumed at
/// most once.
///
/// # Examples
///
/// ```rust
/// use triang_core::types::SamplePool;
/// use triang_sampling::{Sampler, SamplerConfig};
///
/// let pool = SamplePool::new(vec![
///     "A".to_string(),
///     "B".to_string(),
///     "C".to_string(),
///     "D".to_string(),
/// ])
/// .unwrap();
///
/// let config = SamplerConfig::builder()
///     .num_participants(3)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// let draws = Sampler::new(config).generate(&pool);
/// assert_eq!(draws.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Sampler {
    /// Validated sampling configuration.
    config: SamplerConfig,
}

impl Sampler {
    /// Creates a sampler from a validated configuration.
    #[inline]
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// Returns the sampler's configuration.
    #[inline]
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Generates one draw per participant.
    ///
    /// Seeds a single [`FlightRng`] stream and consumes it in a fixed
    /// sequential order across participants. Given a constructed
    /// [`SamplePool`] (which guarantees at least
    /// [`MIN_POOL_SIZE`](triang_core::types::MIN_POOL_SIZE) entries) and
    /// a built [`SamplerConfig`], this call cannot fail.
    pub fn generate(&self, pool: &SamplePool) -> Vec<Draw> {
        let mut rng = FlightRng::from_seed(self.config.seed());
        (0..self.config.num_participants())
            .map(|_| Self::draw_flight(pool, &mut rng))
            .collect()
    }

    /// Draws one participant's samples from a fresh pool copy.
    ///
    /// Removal is order-preserving (`Vec::remove`), so the remaining
    /// copy keeps the master pool's relative order between picks.
    fn draw_flight(pool: &SamplePool, rng: &mut FlightRng) -> Draw {
        let mut working = pool.working_copy();
        let mut picks = Vec::with_capacity(DRAW_SIZE);
        for _ in 0..DRAW_SIZE {
            let idx = rng.gen_index(working.len());
            picks.push(working.remove(idx));
        }
        Draw::new(picks)
    }
}
