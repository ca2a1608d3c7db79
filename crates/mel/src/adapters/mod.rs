//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer wraps the engine for the ways a host actually drives it:
//!
//! - **Shared**: Mutex-guarded handle for concurrent configuration and prediction
//! - **Filter**: Per-report wrapper with clock, offset and raw-input fallback
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Thread-safe predictor handle.
#[cfg(feature = "std")]
pub mod shared;

/// Host filter with raw-input fallback.
pub mod filter;
