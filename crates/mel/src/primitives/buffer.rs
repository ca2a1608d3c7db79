//! Scratch memory for curve fitting.
//!
//! ## Purpose
//!
//! This module provides a reusable workspace so that repeated predictions do
//! not allocate. The window snapshot, recency weights, Gram matrix and
//! right-hand sides all live in one `FitBuffer` owned by the predictor.
//!
//! ## Design notes
//!
//! * **Lazy Expansion**: Slots grow on demand but never shrink, stabilizing at
//!   the largest window and degree seen.
//! * **Logical clearing**: `clear` resets lengths only; capacity is retained.
//!
//! ## Invariants
//!
//! * Capacity is monotonically increasing.
//!
//! ## Non-goals
//!
//! * Thread-local caching (the buffer is owned by exactly one predictor).

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};
use num_traits::Zero;

// Internal dependencies
use crate::primitives::window::Sample;

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Clear the slot (sets length to 0, preserves capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Get a mutable reference to the underlying vector.
    #[inline]
    pub fn as_vec_mut(&mut self) -> &mut Vec<T> {
        &mut self.0
    }
}

impl<T: Copy> Slot<T> {
    /// Resize to exactly `len` elements, all set to `value`.
    #[inline]
    pub fn assign(&mut self, len: usize, value: T) {
        self.0.clear();
        self.0.resize(len, value);
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// ============================================================================
// Fit Buffer
// ============================================================================

/// Working memory for one predictor's fits.
#[derive(Debug, Clone)]
pub struct FitBuffer<T> {
    /// Point-in-time copy of the sample window.
    pub samples: Slot<Sample<T>>,

    /// Normalized recency weights, one per sample.
    pub weights: Slot<T>,

    /// Row-major `(d+1) x (d+1)` Gram matrix, overwritten by its Cholesky factor.
    pub gram: Slot<T>,

    /// Right-hand side for the x-axis, overwritten by the solution.
    pub rhs_x: Slot<T>,

    /// Right-hand side for the y-axis, overwritten by the solution.
    pub rhs_y: Slot<T>,
}

impl<T: Copy + Zero> FitBuffer<T> {
    /// Allocate for `samples` window entries and `coefficients` terms per axis.
    pub fn with_capacity(samples: usize, coefficients: usize) -> Self {
        Self {
            samples: Slot::new(samples),
            weights: Slot::new(samples),
            gram: Slot::new(coefficients * coefficients),
            rhs_x: Slot::new(coefficients),
            rhs_y: Slot::new(coefficients),
        }
    }

    /// Zero the normal-equation storage for `coefficients` terms.
    pub fn prepare_system(&mut self, coefficients: usize) {
        self.gram.assign(coefficients * coefficients, T::zero());
        self.rhs_x.assign(coefficients, T::zero());
        self.rhs_y.assign(coefficients, T::zero());
    }

    /// Clear all slots (capacity is preserved).
    pub fn clear(&mut self) {
        self.samples.clear();
        self.weights.clear();
        self.gram.clear();
        self.rhs_x.clear();
        self.rhs_y.clear();
    }
}

impl<T: Copy + Zero> Default for FitBuffer<T> {
    fn default() -> Self {
        Self::with_capacity(0, 0)
    }
}
