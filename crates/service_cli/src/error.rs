//! CLI error types.
//!
//! Collects every failure the `triang` binary can surface into one
//! enum so `main` can print a single diagnostic line and exit non-zero.

use thiserror::Error;

use triang_core::types::{ConfigError, PoolError};

/// Errors surfaced by the `triang` binary.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command-line input caught before the core is invoked.
    #[error("Invalid information was provided. {0}")]
    InvalidArgument(String),

    /// Sample pool construction failed.
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// Sampler configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON serialisation of the datasheet document failed.
    #[error("Failed to serialise datasheet: {0}")]
    Serialise(#[from] serde_json::Error),
}

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
