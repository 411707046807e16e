//! # Random Number Generation Infrastructure
//!
//! This module provides the seeded index generator used by the sampler.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: the generator is seeded explicitly and the same
//!   seed always yields the same index stream
//! - **Pinned algorithm**: the wrapper holds `rand::rngs::StdRng` from the
//!   0.8 series directly rather than a language-default generator, so the
//!   underlying algorithm cannot drift between toolchain versions without
//!   a deliberate dependency bump (a snapshot regression test in the
//!   sampler pins concrete seed-42 draws, and a reference-stream test
//!   guards the consumption order)
//! - **Explicit state**: the generator is an owned value threaded through
//!   the sampling routine, never implicit global state
//!
//! ## Usage Example
//!
//! ```rust
//! use triang_sampling::rng::FlightRng;
//!
//! let mut rng = FlightRng::from_seed(12345);
//! let idx = rng.gen_index(4);
//! assert!(idx < 4);
//! ```

mod prng;

// Public re-exports
pub use prng::FlightRng;
