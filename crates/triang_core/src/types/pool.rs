//! The master sample pool.
//!
//! This module provides [`SamplePool`], the ordered, immutable list of
//! candidate sample names from which every participant's draw is taken.
//!
//! # Examples
//!
//! ```
//! use triang_core::types::pool::SamplePool;
//!
//! let pool = SamplePool::new(vec![
//!     "A".to_string(),
//!     "B".to_string(),
//!     "C".to_string(),
//!     "D".to_string(),
//! ])
//! .unwrap();
//!
//! assert_eq!(pool.len(), 4);
//! assert_eq!(pool.names()[0], "A");
//! ```

use serde::{Deserialize, Serialize};

use super::error::PoolError;
use super::MIN_POOL_SIZE;

/// Ordered master list of candidate sample names.
///
/// The pool is validated at construction and never mutated afterwards.
/// Sampling consumes short-lived working copies (see [`working_copy`]),
/// so every participant draws from the full pool independently.
///
/// Duplicate names are permitted and treated as distinct positions: two
/// identical names occupy two slots and can both be drawn into the same
/// flight.
///
/// [`working_copy`]: SamplePool::working_copy
///
/// # Examples
///
/// ```
/// use triang_core::types::{PoolError, SamplePool};
///
/// // Pools shorter than the minimum are rejected up front.
/// let err = SamplePool::new(vec!["A".to_string()]).unwrap_err();
/// assert_eq!(err, PoolError::TooFewSamples { provided: 1 });
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplePool {
    /// Sample names in supplied order.
    names: Vec<String>,
}

impl SamplePool {
    /// Creates a pool from the supplied names.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::TooFewSamples`] if fewer than
    /// [`MIN_POOL_SIZE`](super::MIN_POOL_SIZE) names are supplied.
    pub fn new(names: Vec<String>) -> Result<Self, PoolError> {
        if names.len() < MIN_POOL_SIZE {
            return Err(PoolError::TooFewSamples {
                provided: names.len(),
            });
        }
        Ok(Self { names })
    }

    /// Returns the number of names in the pool.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the pool holds no names.
    ///
    /// A constructed pool always holds at least
    /// [`MIN_POOL_SIZE`](super::MIN_POOL_SIZE) names, so this is `false`
    /// in practice; provided for slice-like API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the names in supplied order.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns a fresh, independently owned copy of the pool for one
    /// participant's draw.
    ///
    /// Pick-and-remove sampling mutates this copy only; the master pool
    /// is never touched, so pool exhaustion cannot leak across
    /// participants.
    #[inline]
    pub fn working_copy(&self) -> Vec<String> {
        self.names.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pool_minimum_size_accepted() {
        let pool = SamplePool::new(names(&["A", "B", "C", "D"])).unwrap();
        assert_eq!(pool.len(), 4);
        assert!(!pool.is_empty());
    }

    #[test]
    fn test_pool_below_minimum_rejected() {
        for n in 0..MIN_POOL_SIZE {
            let raw: Vec<String> = (0..n).map(|i| format!("S{}", i)).collect();
            let err = SamplePool::new(raw).unwrap_err();
            assert_eq!(err, PoolError::TooFewSamples { provided: n });
        }
    }

    #[test]
    fn test_pool_preserves_order() {
        let pool = SamplePool::new(names(&["D", "A", "C", "B"])).unwrap();
        assert_eq!(pool.names(), &names(&["D", "A", "C", "B"])[..]);
    }

    #[test]
    fn test_pool_permits_duplicate_names() {
        let pool = SamplePool::new(names(&["A", "A", "B", "C"])).unwrap();
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn test_working_copy_is_independent() {
        let pool = SamplePool::new(names(&["A", "B", "C", "D"])).unwrap();
        let mut copy = pool.working_copy();
        copy.remove(0);
        copy.remove(0);

        // Master pool is untouched by consumption of the copy.
        assert_eq!(pool.len(), 4);
        assert_eq!(pool.names()[0], "A");
    }

    use proptest::prelude::*;

    proptest! {
        /// Property test: construction succeeds exactly when the supplied
        /// list reaches the minimum size.
        #[test]
        fn prop_construction_matches_minimum(len in 0..32usize) {
            let raw: Vec<String> = (0..len).map(|i| format!("S{}", i)).collect();
            let result = SamplePool::new(raw);
            if len >= MIN_POOL_SIZE {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(
                    result.unwrap_err(),
                    PoolError::TooFewSamples { provided: len }
                );
            }
        }
    }
}
