//! Core domain types for triangulation datasheets.
//!
//! This module provides:
//! - `pool`: The master sample pool with construction-time validation
//! - `draw`: One participant's ordered selection of sample names
//! - `error`: Structured error types for pool and configuration validation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`SamplePool`] from `pool`
//! - [`Draw`] from `draw`
//! - [`PoolError`], [`ConfigError`] from `error`

pub mod draw;
pub mod error;
pub mod pool;

// Re-export commonly used types at module level
pub use draw::Draw;
pub use error::{ConfigError, PoolError};
pub use pool::SamplePool;

/// Number of samples presented to each participant.
///
/// A triangle test always presents three pours, so every [`Draw`] holds
/// exactly this many names.
pub const DRAW_SIZE: usize = 3;

/// Smallest admissible sample pool.
///
/// With exactly [`DRAW_SIZE`] samples every participant would receive the
/// whole pool and the test would carry no information, so the pool must
/// hold at least one more name than a single draw consumes.
pub const MIN_POOL_SIZE: usize = DRAW_SIZE + 1;
