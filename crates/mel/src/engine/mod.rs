//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates prediction: it owns the sample window and the
//! tunable parameters, gates fitting on readiness, and evaluates the fitted
//! model at the requested time offset.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Predictor parameters.
pub mod config;

/// Readiness-gated prediction.
pub mod predictor;

/// Parameter validation.
pub mod validator;
