//! Dense symmetric solver for small normal-equation systems.
//!
//! ## Purpose
//!
//! This module factors the `(d+1) x (d+1)` Gram matrix of a weighted polynomial
//! fit with an in-place Cholesky decomposition and solves it for one or more
//! right-hand sides.
//!
//! ## Design notes
//!
//! * **Storage**: Row-major square matrices in flat slices; only the lower
//!   triangle is read and written by the factorization.
//! * **Conditioning**: A pivot is rejected when it does not exceed
//!   `tolerance * A_kk`, i.e. when the column adds (almost) no information
//!   beyond the previous ones. NaN pivots are rejected by the same test.
//!
//! ## Invariants
//!
//! * On success the lower triangle holds `L` with `A = L Lᵀ` and a positive diagonal.
//!
//! ## Non-goals
//!
//! * Large or sparse systems; degrees here are single digits.

// External dependencies
use num_traits::Float;

/// Relative pivot tolerance used by the curve fitter.
///
/// `sqrt(epsilon)` is roughly `1.5e-8` for `f64` and `3.5e-4` for `f32`.
#[inline]
pub fn default_pivot_tolerance<T: Float>() -> T {
    T::epsilon().sqrt()
}

/// Factor the symmetric positive-definite matrix `a` (`n x n`, row-major) in place.
///
/// Returns the smallest relative pivot `L_kk^2 / A_kk`, a cheap conditioning
/// indicator, or `None` if the matrix is singular to within `tolerance`.
pub fn cholesky_decompose<T: Float>(a: &mut [T], n: usize, tolerance: T) -> Option<T> {
    debug_assert!(a.len() >= n * n, "cholesky_decompose: matrix too small");

    let mut min_ratio = T::infinity();

    for j in 0..n {
        let diag = a[j * n + j];
        let mut pivot = diag;
        for k in 0..j {
            let l = a[j * n + k];
            pivot = pivot - l * l;
        }

        if !(pivot > tolerance * diag) || !pivot.is_finite() {
            return None;
        }

        min_ratio = min_ratio.min(pivot / diag);
        let l_jj = pivot.sqrt();
        a[j * n + j] = l_jj;

        for i in (j + 1)..n {
            let mut sum = a[i * n + j];
            for k in 0..j {
                sum = sum - a[i * n + k] * a[j * n + k];
            }
            a[i * n + j] = sum / l_jj;
        }
    }

    Some(min_ratio)
}

/// Solve `L Lᵀ x = b` in place, given the factor produced by [`cholesky_decompose`].
pub fn cholesky_solve<T: Float>(l: &[T], n: usize, b: &mut [T]) {
    debug_assert!(b.len() >= n, "cholesky_solve: right-hand side too small");

    // Forward substitution: L z = b
    for i in 0..n {
        let mut sum = b[i];
        for k in 0..i {
            sum = sum - l[i * n + k] * b[k];
        }
        b[i] = sum / l[i * n + i];
    }

    // Back substitution: Lᵀ x = z
    for i in (0..n).rev() {
        let mut sum = b[i];
        for k in (i + 1)..n {
            sum = sum - l[k * n + i] * b[k];
        }
        b[i] = sum / l[i * n + i];
    }
}
