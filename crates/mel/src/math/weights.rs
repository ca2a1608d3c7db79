//! Recency weighting for the trajectory fit.
//!
//! ## Purpose
//!
//! This module maps a sample's position in the window to its weight in the
//! least-squares fit. Sample `i` (0 = oldest) of `n` receives `(i + 1)^w`,
//! so newer samples dominate as the exponent grows.
//!
//! ## Design notes
//!
//! * **Normalization**: Weights are divided by the newest weight `n^w`. Scaling
//!   every weight by the same constant leaves the least-squares solution unchanged
//!   and keeps the Gram matrix entries bounded by the sample count.
//! * **Degenerate exponent**: `w = 0` gives every sample weight 1 (ordinary least squares).
//!
//! ## Invariants
//!
//! * Weights are positive and non-decreasing in recency.
//! * The newest sample always has weight 1.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Power-law recency weighting with exponent `Weight`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecencyWeight<T> {
    exponent: T,
}

impl<T: Float> RecencyWeight<T> {
    /// Create a weighting with the given exponent.
    #[inline]
    pub fn new(exponent: T) -> Self {
        Self { exponent }
    }

    /// The configured exponent.
    #[inline]
    pub fn exponent(&self) -> T {
        self.exponent
    }

    /// Raw (unnormalized) weight `(index + 1)^w` of the sample at `index`.
    #[inline]
    pub fn raw(&self, index: usize) -> T {
        let rank = T::from(index + 1).unwrap_or(T::one());
        rank.powf(self.exponent)
    }

    /// Fill `out` with the normalized weights for a window of `n` samples.
    pub fn fill(&self, n: usize, out: &mut Vec<T>) {
        out.clear();
        if n == 0 {
            return;
        }

        let newest = self.raw(n - 1);
        if self.exponent == T::zero() || !(newest > T::zero()) || !newest.is_finite() {
            out.resize(n, T::one());
            return;
        }

        out.extend((0..n).map(|i| self.raw(i) / newest));
    }
}

impl<T: Float> Default for RecencyWeight<T> {
    fn default() -> Self {
        Self::new(T::from(1.4).unwrap_or(T::one()))
    }
}
