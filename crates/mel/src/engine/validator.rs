//! Parameter validation for the predictor.
//!
//! ## Purpose
//!
//! This module holds one check per tunable parameter (`Samples`,
//! `Complexity`, `Weight`, `Offset`) so that the predictor, the shared handle,
//! the filter and the builder all reject the same values the same way.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Float parameters are validated generically and reported as `f64`.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clamp or otherwise correct invalid values.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MelError;

pub use crate::algorithms::regression::MAX_COMPLEXITY;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for predictor parameters.
pub struct Validator;

impl Validator {
    /// Validate the window capacity (`Samples`).
    pub fn validate_samples(samples: usize) -> Result<(), MelError> {
        if samples < 1 {
            return Err(MelError::InvalidConfig {
                parameter: "samples",
                value: samples as f64,
                constraint: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Validate the polynomial degree (`Complexity`).
    ///
    /// # Notes
    ///
    /// * A degree that exceeds the window capacity is accepted; the predictor
    ///   simply never becomes ready.
    pub fn validate_complexity(complexity: usize) -> Result<(), MelError> {
        if complexity > MAX_COMPLEXITY {
            return Err(MelError::InvalidConfig {
                parameter: "complexity",
                value: complexity as f64,
                constraint: "must be at most 32",
            });
        }
        Ok(())
    }

    /// Validate the recency-weighting exponent (`Weight`).
    pub fn validate_weight<T: Float>(weight: T) -> Result<(), MelError> {
        if !weight.is_finite() || weight < T::zero() {
            return Err(MelError::InvalidConfig {
                parameter: "weight",
                value: weight.to_f64().unwrap_or(f64::NAN),
                constraint: "must be finite and >= 0",
            });
        }
        Ok(())
    }

    /// Validate a prediction time offset.
    pub fn validate_offset<T: Float>(offset: T) -> Result<(), MelError> {
        if !offset.is_finite() {
            return Err(MelError::InvalidConfig {
                parameter: "offset",
                value: offset.to_f64().unwrap_or(f64::NAN),
                constraint: "must be finite",
            });
        }
        Ok(())
    }

    /// Convert a host-supplied signed integer into a count, rejecting negatives.
    pub fn validate_non_negative(parameter: &'static str, value: i64) -> Result<usize, MelError> {
        usize::try_from(value).map_err(|_| MelError::InvalidConfig {
            parameter,
            value: value as f64,
            constraint: "must be non-negative",
        })
    }

    /// Validate that no parameter was set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), MelError> {
        if let Some(parameter) = duplicate_param {
            return Err(MelError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
