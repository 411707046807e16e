//! # triang_sampling: Seeded Sampling Engine
//!
//! ## Layer 2 (Engine) Role
//!
//! triang_sampling turns a validated [`SamplePool`] into one draw per
//! participant:
//! - Seeded, reproducible random number generation (`rng`)
//! - The pick-and-remove sampler and its configuration (`sampler`)
//!
//! ## Reproducibility Contract
//!
//! One seed produces one fully reproducible sequence of decisions. A
//! single PRNG stream is seeded once per [`Sampler::generate`] call and
//! consumed in a fixed order — participant 1's three picks, then
//! participant 2's, and so on. The stream is deliberately *not* reseeded
//! per participant; doing so would silently change every seeded output.
//!
//! ## Usage Example
//!
//! ```rust
//! use triang_core::types::SamplePool;
//! use triang_sampling::{Sampler, SamplerConfig};
//!
//! let pool = SamplePool::new(vec![
//!     "A".to_string(),
//!     "B".to_string(),
//!     "C".to_string(),
//!     "D".to_string(),
//! ])
//! .unwrap();
//!
//! let config = SamplerConfig::builder()
//!     .num_participants(2)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let draws = Sampler::new(config).generate(&pool);
//! assert_eq!(draws.len(), 2);
//! assert_eq!(draws[0].names().len(), 3);
//! ```
//!
//! [`SamplePool`]: triang_core::types::SamplePool

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod rng;
pub mod sampler;

pub use rng::FlightRng;
pub use sampler::{Sampler, SamplerConfig, SamplerConfigBuilder};
