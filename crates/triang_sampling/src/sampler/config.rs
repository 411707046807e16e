//! Sampler configuration.
//!
//! This module provides configuration types and builders for deterministic
//! draw generation.

use triang_core::types::ConfigError;

/// Sampler configuration.
///
/// Immutable configuration specifying how many participants to draw for
/// and the seed driving the shared PRNG stream. Use
/// [`SamplerConfigBuilder`] to construct instances; a built configuration
/// is always valid.
///
/// # Examples
///
/// ```rust
/// use triang_sampling::SamplerConfig;
///
/// let config = SamplerConfig::builder()
///     .num_participants(12)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.num_participants(), 12);
/// assert_eq!(config.seed(), 42);
/// ```
#[derive(Clone, Debug)]
pub struct SamplerConfig {
    /// Number of participants to generate draws for.
    num_participants: usize,
    /// Seed for the shared PRNG stream.
    seed: u64,
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Returns the number of participants.
    #[inline]
    pub fn num_participants(&self) -> usize {
        self.num_participants
    }

    /// Returns the seed for the shared PRNG stream.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParticipantCount`] if
    /// `num_participants` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_participants == 0 {
            return Err(ConfigError::InvalidParticipantCount(self.num_participants));
        }
        Ok(())
    }
}

/// Builder for [`SamplerConfig`].
///
/// Provides a fluent API for constructing sampler configurations with
/// validation at build time.
///
/// # Examples
///
/// ```rust
/// use triang_sampling::SamplerConfig;
///
/// let config = SamplerConfig::builder()
///     .num_participants(8)
///     .seed(12345)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    num_participants: Option<usize>,
    seed: Option<u64>,
}

impl SamplerConfigBuilder {
    /// Sets the number of participants.
    ///
    /// # Arguments
    ///
    /// * `num_participants` - Number of participants, at least 1
    #[inline]
    pub fn num_participants(mut self, num_participants: usize) -> Self {
        self.num_participants = Some(num_participants);
        self
    }

    /// Sets the seed for the shared PRNG stream.
    ///
    /// # Arguments
    ///
    /// * `seed` - 64-bit seed value
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `num_participants` not set or zero
    /// - `seed` not set
    pub fn build(self) -> Result<SamplerConfig, ConfigError> {
        let num_participants =
            self.num_participants
                .ok_or(ConfigError::InvalidParameter {
                    name: "num_participants",
                    value: "must be specified".to_string(),
                })?;

        let seed = self.seed.ok_or(ConfigError::InvalidParameter {
            name: "seed",
            value: "must be specified".to_string(),
        })?;

        let config = SamplerConfig {
            num_participants,
            seed,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = SamplerConfig::builder()
            .num_participants(10)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.num_participants(), 10);
        assert_eq!(config.seed(), 42);
    }

    #[test]
    fn test_config_invalid_zero_participants() {
        let result = SamplerConfig::builder().num_participants(0).seed(1).build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidParticipantCount(0))
        ));
    }

    #[test]
    fn test_config_missing_participants() {
        let result = SamplerConfig::builder().seed(1).build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "num_participants",
                ..
            })
        ));
    }

    #[test]
    fn test_config_missing_seed() {
        let result = SamplerConfig::builder().num_participants(1).build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "seed", .. })
        ));
    }

    #[test]
    fn test_single_participant_allowed() {
        let config = SamplerConfig::builder()
            .num_participants(1)
            .seed(0)
            .build()
            .unwrap();
        assert_eq!(config.num_participants(), 1);
    }
}
