//! Layer 3: Algorithms
//!
//! Core fitting algorithm: weighted least-squares polynomial regression of
//! position over time.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Trajectory fitting.
pub mod regression;
