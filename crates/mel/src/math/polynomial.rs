//! Polynomial evaluation and change of basis.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Evaluate `Σ c_k · t^k` using Horner's method. Coefficients are lowest degree first.
#[inline]
pub fn horner<T: Float>(coefficients: &[T], t: T) -> T {
    coefficients
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * t + c)
}

/// Convert coefficients fitted against `τ = u / scale` into coefficients in `u`.
///
/// `a_k τ^k = (a_k / scale^k) u^k`.
pub fn unscale<T: Float>(coefficients: &[T], scale: T) -> Vec<T> {
    let mut factor = T::one();
    coefficients
        .iter()
        .map(|&a| {
            let c = a / factor;
            factor = factor * scale;
            c
        })
        .collect()
}
