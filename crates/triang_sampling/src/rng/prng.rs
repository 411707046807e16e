//! Pseudo-random index generator for draw selection.
//!
//! This module provides [`FlightRng`], a seeded PRNG wrapper that offers
//! reproducible uniform index generation for pick-and-remove sampling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded random index generator for flight draws.
///
/// Wraps a concrete [`StdRng`] instance together with the seed it was
/// initialised from, so the seed can be echoed for reproducibility
/// auditing. The same seed always produces the same index stream.
///
/// # Examples
///
/// ```rust
/// use triang_sampling::rng::FlightRng;
///
/// let mut rng1 = FlightRng::from_seed(42);
/// let mut rng2 = FlightRng::from_seed(42);
///
/// // Same seed produces identical index streams.
/// assert_eq!(rng1.gen_index(10), rng2.gen_index(10));
/// ```
pub struct FlightRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl FlightRng {
    /// Creates a new generator initialised with the given seed.
    ///
    /// # Arguments
    ///
    /// * `seed` - 64-bit seed value for reproducibility
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    ///
    /// Useful for logging and for echoing into the datasheet preamble.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a uniformly distributed index in `[0, bound)`.
    ///
    /// # Arguments
    ///
    /// * `bound` - Exclusive upper bound; must be positive
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero. The sampler never requests an index
    /// from an empty working pool, so the panic is unreachable from the
    /// public sampling path.
    #[inline]
    pub fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}
