//! Sample window for motion prediction.
//!
//! ## Purpose
//!
//! This module provides the fixed-capacity, time-ordered ring buffer of
//! timestamped positions that every fit is computed against.
//!
//! ## Design notes
//!
//! * **Storage**: Uses a circular buffer (VecDeque) so eviction is O(1).
//! * **Eviction**: Oldest samples are evicted first when capacity is reached.
//! * **Ordering**: Samples older than the newest entry are rejected, never reordered.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Window length never exceeds capacity.
//! * Capacity is always at least 1.
//! * Timestamps are non-decreasing from oldest to newest.
//!
//! ## Non-goals
//!
//! * This module does not validate that coordinates are finite.
//! * This module does not fit or evaluate models.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::VecDeque, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::VecDeque, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MelError;

// ============================================================================
// Sample
// ============================================================================

/// A single timestamped 2D position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<T> {
    /// Monotonic time of the report (unit chosen by the caller, e.g. milliseconds).
    pub timestamp: T,

    /// Horizontal position.
    pub x: T,

    /// Vertical position.
    pub y: T,
}

impl<T: Float> Sample<T> {
    /// Create a sample from a position and its timestamp.
    #[inline]
    pub fn new(x: T, y: T, timestamp: T) -> Self {
        Self { timestamp, x, y }
    }

    /// Position as an `(x, y)` pair.
    #[inline]
    pub fn position(&self) -> (T, T) {
        (self.x, self.y)
    }

    /// Whether timestamp and both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.timestamp.is_finite() && self.x.is_finite() && self.y.is_finite()
    }
}

// ============================================================================
// Sample Window
// ============================================================================

/// Fixed-capacity FIFO of samples ordered by timestamp.
#[derive(Debug, Clone)]
pub struct SampleWindow<T> {
    samples: VecDeque<Sample<T>>,
    capacity: usize,
}

impl<T: Float> SampleWindow<T> {
    /// Create an empty window, clamping `capacity` to at least 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Create an empty window holding at most `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Result<Self, MelError> {
        check_capacity(capacity)?;
        Ok(Self::new(capacity))
    }

    /// Append a sample, evicting the oldest one if the window is full.
    ///
    /// Returns `false` (and leaves the window untouched) when the sample is
    /// older than the newest entry.
    pub fn push(&mut self, sample: Sample<T>) -> bool {
        if let Some(newest) = self.samples.back() {
            if sample.timestamp < newest.timestamp {
                return false;
            }
        }

        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
        true
    }

    /// Change the capacity, dropping the oldest excess samples immediately.
    ///
    /// Returns the number of evicted samples.
    pub fn resize(&mut self, capacity: usize) -> Result<usize, MelError> {
        check_capacity(capacity)?;

        let excess = self.samples.len().saturating_sub(capacity);
        self.samples.drain(..excess);
        self.capacity = capacity;

        Ok(excess)
    }

    /// Copy the current contents, oldest first.
    pub fn snapshot(&self) -> Vec<Sample<T>> {
        let mut out = Vec::with_capacity(self.samples.len());
        self.snapshot_into(&mut out);
        out
    }

    /// Copy the current contents into `out` (cleared first), oldest first.
    #[inline]
    pub fn snapshot_into(&self, out: &mut Vec<Sample<T>>) {
        out.clear();
        out.extend(self.samples.iter().copied());
    }

    /// Iterate over samples from oldest to newest.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Sample<T>> + '_ {
        self.samples.iter()
    }

    /// Most recently pushed sample.
    #[inline]
    pub fn newest(&self) -> Option<&Sample<T>> {
        self.samples.back()
    }

    /// Oldest retained sample.
    #[inline]
    pub fn oldest(&self) -> Option<&Sample<T>> {
        self.samples.front()
    }

    /// Maximum number of retained samples.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of samples currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the window holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Remove all samples, keeping the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[inline]
fn check_capacity(capacity: usize) -> Result<(), MelError> {
    if capacity < 1 {
        return Err(MelError::InvalidConfig {
            parameter: "samples",
            value: capacity as f64,
            constraint: "must be at least 1",
        });
    }
    Ok(())
}
