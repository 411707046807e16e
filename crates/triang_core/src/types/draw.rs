//! One participant's draw.
//!
//! This module provides [`Draw`], the ordered selection of sample names
//! handed to a single participant.

use serde::{Deserialize, Serialize};

use super::DRAW_SIZE;

/// Ordered selection of exactly [`DRAW_SIZE`](super::DRAW_SIZE) sample
/// names for one participant.
///
/// Order reflects selection order; it affects only how the datasheet is
/// displayed, not the semantics of the draw. The names are pairwise
/// distinct by *position* in the pool copy they were taken from, so a
/// pool holding duplicate names can legitimately produce a draw with two
/// equal names.
///
/// # Examples
///
/// ```
/// use triang_core::types::Draw;
///
/// let draw = Draw::new(vec![
///     "B".to_string(),
///     "D".to_string(),
///     "A".to_string(),
/// ]);
/// assert_eq!(draw.names().len(), 3);
/// assert_eq!(draw.names()[0], "B");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    /// Selected names in selection order.
    names: Vec<String>,
}

impl Draw {
    /// Creates a draw from the selected names.
    ///
    /// Callers are expected to supply exactly
    /// [`DRAW_SIZE`](super::DRAW_SIZE) names in selection order; the
    /// sampler is the only production call site and upholds this by
    /// construction.
    #[inline]
    pub fn new(names: Vec<String>) -> Self {
        debug_assert_eq!(names.len(), DRAW_SIZE);
        Self { names }
    }

    /// Returns the selected names in selection order.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
