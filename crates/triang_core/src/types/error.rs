//! Error types for structured error handling.
//!
//! This module provides:
//! - `PoolError`: Errors from sample pool construction
//! - `ConfigError`: Errors from sampler configuration validation

use thiserror::Error;

use super::MIN_POOL_SIZE;

/// Sample pool construction errors.
///
/// Provides structured error handling for pool validation with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `TooFewSamples`: Pool shorter than the minimum admissible size
///
/// # Examples
/// ```
/// use triang_core::types::PoolError;
///
/// let err = PoolError::TooFewSamples { provided: 2 };
/// assert_eq!(
///     format!("{}", err),
///     "Too few samples: got 2, need at least 4"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Pool contains fewer entries than [`MIN_POOL_SIZE`].
    #[error("Too few samples: got {provided}, need at least {}", MIN_POOL_SIZE)]
    TooFewSamples {
        /// Number of sample names actually supplied.
        provided: usize,
    },
}

/// Sampler configuration errors.
///
/// These errors occur during construction when invalid parameters are
/// provided; a built configuration is always valid.
///
/// # Variants
/// - `InvalidParticipantCount`: Participant count outside the valid range
/// - `InvalidParameter`: General parameter validation failure
///
/// # Examples
/// ```
/// use triang_core::types::ConfigError;
///
/// let err = ConfigError::InvalidParticipantCount(0);
/// assert!(format!("{}", err).contains("participant count 0"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Participant count must be at least 1.
    #[error("Invalid participant count {0}: must be at least 1")]
    InvalidParticipantCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}
