//! Predictor configuration.
//!
//! ## Purpose
//!
//! This module defines the tunable parameters of a predictor as a plain,
//! validated struct, decoupled from any host property-binding mechanism.
//!
//! ## Key concepts
//!
//! * **Samples**: Window capacity (default 20).
//! * **Complexity**: Polynomial degree (default 2).
//! * **Weight**: Recency-weighting exponent (default 1.4).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::MelError;

/// Default window capacity.
pub const DEFAULT_SAMPLES: usize = 20;

/// Default polynomial degree.
pub const DEFAULT_COMPLEXITY: usize = 2;

/// Default recency-weighting exponent.
pub const DEFAULT_WEIGHT: f64 = 1.4;

/// Tunable predictor parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictorConfig<T> {
    /// Window capacity (`Samples`).
    pub samples: usize,

    /// Polynomial degree (`Complexity`).
    pub complexity: usize,

    /// Recency-weighting exponent (`Weight`).
    pub weight: T,
}

impl<T: Float> PredictorConfig<T> {
    /// Check every parameter against its valid range.
    pub fn validate(&self) -> Result<(), MelError> {
        Validator::validate_samples(self.samples)?;
        Validator::validate_complexity(self.complexity)?;
        Validator::validate_weight(self.weight)?;
        Ok(())
    }

    /// Number of samples needed before a fit is determined.
    #[inline]
    pub fn min_samples(&self) -> usize {
        self.complexity + 1
    }
}

impl<T: Float> Default for PredictorConfig<T> {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            complexity: DEFAULT_COMPLEXITY,
            weight: T::from(DEFAULT_WEIGHT).unwrap_or(T::one()),
        }
    }
}
