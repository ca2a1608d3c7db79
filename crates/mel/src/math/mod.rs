//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the fitter:
//! - Recency weights for the least-squares fit
//! - Cholesky factorization of small symmetric systems
//! - Polynomial evaluation and change of basis
//!
//! These are reusable mathematical building blocks with no prediction-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Recency weighting.
pub mod weights;

/// Dense Cholesky solver.
pub mod linalg;

/// Polynomial helpers.
pub mod polynomial;
