//! Weighted polynomial trajectory fitting.
//!
//! ## Purpose
//!
//! This module fits position as a polynomial function of time, independently
//! for the x and y axes, by weighted least squares over a window of samples.
//! The result is a [`TrajectoryModel`] that can be evaluated anywhere in time,
//! including beyond the newest sample (extrapolation).
//!
//! ## Design notes
//!
//! * **Recentering**: Time is measured from the newest sample, so the model's
//!   constant term is the fitted position "now".
//! * **Normalization**: Time offsets are divided by the window span before the
//!   powers are formed, keeping every term in `[-1, 0]` whatever the time unit.
//! * **Shared factorization**: Both axes share the same design matrix, so the
//!   Gram matrix is factored once and solved for two right-hand sides.
//!
//! ## Key concepts
//!
//! * **Normal equations**: `(XᵀWX) c = XᵀWv` with rows `[1, τ, τ², …, τ^d]`.
//! * **Degree**: `Complexity`; the fit needs at least `d + 1` samples.
//!
//! ## Invariants
//!
//! * Both coefficient vectors have exactly `d + 1` entries.
//! * A returned model never contains non-finite coefficients.
//!
//! ## Non-goals
//!
//! * Robust (outlier-resistant) fitting.
//! * Choosing the degree automatically.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linalg::{cholesky_decompose, cholesky_solve, default_pivot_tolerance};
use crate::math::polynomial::{horner, unscale};
use crate::math::weights::RecencyWeight;
use crate::primitives::buffer::FitBuffer;
use crate::primitives::errors::MelError;
use crate::primitives::window::Sample;

/// Highest polynomial degree the fitter accepts.
pub const MAX_COMPLEXITY: usize = 32;

// ============================================================================
// Trajectory Model
// ============================================================================

/// Per-axis polynomial model of position over time.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryModel<T> {
    /// Coefficients for x in the normalized time variable, lowest degree first.
    x: Vec<T>,

    /// Coefficients for y in the normalized time variable, lowest degree first.
    y: Vec<T>,

    /// Timestamp of the newest sample (where `τ = 0`).
    origin: T,

    /// Time span used to normalize offsets.
    scale: T,

    /// Smallest relative Cholesky pivot seen while solving.
    conditioning: T,
}

impl<T: Float> TrajectoryModel<T> {
    /// Polynomial degree of both axes.
    #[inline]
    pub fn degree(&self) -> usize {
        self.x.len().saturating_sub(1)
    }

    /// Timestamp the model is centered on (the newest sample).
    #[inline]
    pub fn origin(&self) -> T {
        self.origin
    }

    /// Smallest relative pivot `L_kk² / A_kk` of the factorization, in `(0, 1]`.
    ///
    /// Values close to zero indicate a nearly singular fit.
    #[inline]
    pub fn conditioning(&self) -> T {
        self.conditioning
    }

    /// Evaluate the position at absolute time `timestamp`.
    #[inline]
    pub fn evaluate(&self, timestamp: T) -> (T, T) {
        self.evaluate_offset(timestamp - self.origin)
    }

    /// Evaluate the position `offset` time units after the newest sample.
    #[inline]
    pub fn evaluate_offset(&self, offset: T) -> (T, T) {
        let tau = offset / self.scale;
        (horner(&self.x, tau), horner(&self.y, tau))
    }

    /// x-axis coefficients `c_k` of `Σ c_k · (t − origin)^k`.
    pub fn coefficients_x(&self) -> Vec<T> {
        unscale(&self.x, self.scale)
    }

    /// y-axis coefficients `c_k` of `Σ c_k · (t − origin)^k`.
    pub fn coefficients_y(&self) -> Vec<T> {
        unscale(&self.y, self.scale)
    }
}

// ============================================================================
// Curve Fitter
// ============================================================================

/// Weighted least-squares polynomial fitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveFitter<T> {
    /// Polynomial degree (`Complexity`).
    pub degree: usize,

    /// Recency weighting (`Weight`).
    pub weighting: RecencyWeight<T>,

    /// Relative pivot tolerance for the singularity test.
    pub tolerance: T,
}

impl<T: Float> CurveFitter<T> {
    /// Create a fitter for the given degree and recency exponent.
    pub fn new(degree: usize, weight: T) -> Self {
        Self {
            degree,
            weighting: RecencyWeight::new(weight),
            tolerance: default_pivot_tolerance(),
        }
    }

    /// Number of coefficients per axis.
    #[inline]
    pub fn coefficients(&self) -> usize {
        self.degree + 1
    }

    /// Fit `samples` (oldest first) using `buffer` as scratch space.
    pub fn fit(
        &self,
        samples: &[Sample<T>],
        buffer: &mut FitBuffer<T>,
    ) -> Result<TrajectoryModel<T>, MelError> {
        let n = samples.len();
        let k = self.coefficients();

        if self.degree > MAX_COMPLEXITY {
            return Err(MelError::InvalidConfig {
                parameter: "complexity",
                value: self.degree as f64,
                constraint: "must be at most 32",
            });
        }

        if n < k {
            return Err(MelError::Underdetermined { got: n, min: k });
        }

        let ill_conditioned = MelError::IllConditioned {
            samples: n,
            coefficients: k,
        };

        if samples.iter().any(|s| !s.is_finite()) {
            return Err(ill_conditioned);
        }

        // n >= k >= 1, so both ends exist.
        let (first, last) = match (samples.first(), samples.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(MelError::Underdetermined { got: n, min: k }),
        };
        let origin = last.timestamp;
        let span = origin - first.timestamp;
        let scale = if span > T::zero() { span } else { T::one() };

        self.weighting.fill(n, buffer.weights.as_vec_mut());
        buffer.prepare_system(k);

        accumulate_normal_equations(samples, buffer, origin, scale, k);

        let conditioning = cholesky_decompose(&mut buffer.gram, k, self.tolerance)
            .ok_or(ill_conditioned)?;

        cholesky_solve(&buffer.gram, k, &mut buffer.rhs_x);
        cholesky_solve(&buffer.gram, k, &mut buffer.rhs_y);

        let finite = buffer
            .rhs_x
            .iter()
            .chain(buffer.rhs_y.iter())
            .all(|c| c.is_finite());
        if !finite {
            return Err(ill_conditioned);
        }

        Ok(TrajectoryModel {
            x: buffer.rhs_x.to_vec(),
            y: buffer.rhs_y.to_vec(),
            origin,
            scale,
            conditioning,
        })
    }
}

// ============================================================================
// Accumulation
// ============================================================================

/// Accumulate `XᵀWX` (lower triangle mirrored) and `XᵀWx`, `XᵀWy` into `buffer`.
fn accumulate_normal_equations<T: Float>(
    samples: &[Sample<T>],
    buffer: &mut FitBuffer<T>,
    origin: T,
    scale: T,
    k: usize,
) {
    // Powers τ^0 ..= τ^(2d) cover every Gram entry.
    const MAX_POWERS: usize = 2 * MAX_COMPLEXITY + 1;
    let mut powers = [T::zero(); MAX_POWERS];
    let n_powers = 2 * k - 1;
    debug_assert!(n_powers <= MAX_POWERS, "degree exceeds MAX_COMPLEXITY");

    let gram = &mut buffer.gram;
    let rhs_x = &mut buffer.rhs_x;
    let rhs_y = &mut buffer.rhs_y;

    for (sample, &w) in samples.iter().zip(buffer.weights.iter()) {
        let tau = (sample.timestamp - origin) / scale;

        let mut p = w;
        for slot in powers.iter_mut().take(n_powers) {
            *slot = p;
            p = p * tau;
        }

        // Gram entry (i, j) is Σ w τ^(i+j): a Hankel matrix.
        for i in 0..k {
            for j in 0..=i {
                gram[i * k + j] = gram[i * k + j] + powers[i + j];
            }
            rhs_x[i] = rhs_x[i] + powers[i] * sample.x;
            rhs_y[i] = rhs_y[i] + powers[i] * sample.y;
        }
    }

    for i in 0..k {
        for j in (i + 1)..k {
            gram[i * k + j] = gram[j * k + i];
        }
    }
}
