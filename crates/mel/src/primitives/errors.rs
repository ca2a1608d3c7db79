//! Error types for motion prediction.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! a predictor, feeding it samples, and fitting or evaluating its model.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., samples held vs. required).
//! * **Recoverable**: No variant is fatal; the caller decides the fallback.
//! * **No-std**: Supports `no_std` environments (no heap data in any variant).
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Configuration errors**: Out-of-range `Samples`, `Complexity`, `Weight` or `Offset`.
//! 2. **Readiness errors**: Prediction requested before enough history exists.
//! 3. **Fit errors**: The normal equations could not be solved for the current window.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use `f64` regardless of the predictor's float type.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for motion prediction operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MelError {
    /// A parameter was set to a value outside its valid range.
    InvalidConfig {
        /// Name of the parameter (e.g., "samples", "weight").
        parameter: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable description of the valid range.
        constraint: &'static str,
    },

    /// Prediction was requested before the window holds `Complexity + 1` samples.
    NotReady {
        /// Number of samples currently in the window.
        got: usize,
        /// Number of samples required for a determined fit.
        min: usize,
    },

    /// Fewer samples than polynomial coefficients were handed to the fitter.
    Underdetermined {
        /// Number of samples provided.
        got: usize,
        /// Minimum required samples.
        min: usize,
    },

    /// The normal equations are numerically singular or the data is not finite.
    IllConditioned {
        /// Number of samples in the fit.
        samples: usize,
        /// Number of polynomial coefficients per axis.
        coefficients: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl MelError {
    /// Whether this error came from the curve fit itself rather than configuration or readiness.
    #[inline]
    pub fn is_fit_error(&self) -> bool {
        matches!(
            self,
            Self::Underdetermined { .. } | Self::IllConditioned { .. }
        )
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for MelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidConfig {
                parameter,
                value,
                constraint,
            } => {
                write!(f, "Invalid {parameter}: {value} ({constraint})")
            }
            Self::NotReady { got, min } => {
                write!(f, "Predictor not ready: {got} samples, need at least {min}")
            }
            Self::Underdetermined { got, min } => {
                write!(f, "Underdetermined fit: got {got} samples, need at least {min}")
            }
            Self::IllConditioned {
                samples,
                coefficients,
            } => {
                write!(
                    f,
                    "Ill-conditioned fit: normal equations are singular or non-finite [n: {samples}, k: {coefficients}]"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for MelError {}
