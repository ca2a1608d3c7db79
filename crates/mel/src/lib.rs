//! # MeL — Motion Estimation by Least squares
//!
//! Latency-compensating position prediction for pen, tablet and cursor input.
//!
//! ## What does it do?
//!
//! Input reaches the screen late: rendering, composition and transport add
//! milliseconds between the device report and the pixel. MeL keeps a short
//! sliding window of timestamped positions, fits a recency-weighted polynomial
//! of position over time to each axis, and evaluates it a configurable time
//! ahead of the newest sample to forecast where the pen will be.
//!
//! ## Quick Start
//!
//! ```rust
//! use mel::prelude::*;
//!
//! let mut predictor = Mel::new()
//!     .samples(20)        // Fit over the 20 most recent reports
//!     .complexity(2)      // Quadratic model (position, velocity, acceleration)
//!     .weight(1.4)        // Favor recent samples
//!     .adapter(Standalone)?;
//!
//! // Reports every 5 ms, moving 2 px/ms to the right
//! for i in 0..10 {
//!     let t = i as f64 * 5.0;
//!     predictor.add_sample(2.0 * t, 100.0, t);
//! }
//!
//! // Where will the pen be 8 ms after the newest report?
//! let (x, y) = predictor.predict(8.0)?;
//! assert!((x - 106.0).abs() < 1e-6);
//! assert!((y - 100.0).abs() < 1e-6);
//! # Result::<(), MelError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `predict` returns `Result<(T, T), MelError>` and never substitutes a value
//! on failure:
//!
//! - **`NotReady`**: fewer than `complexity + 1` samples have been recorded.
//! - **`Underdetermined`** / **`IllConditioned`**: the window cannot support the
//!   fit (e.g., every sample shares one timestamp, or a coordinate is NaN).
//! - **`InvalidConfig`**: a parameter or offset is out of range.
//!
//! Callers that prefer "never fail, pass the pen through" use the filter
//! adapter, which falls back to the raw point and logs the first failure of
//! each streak:
//!
//! ```rust
//! use mel::prelude::*;
//!
//! let mut filter = Mel::new()
//!     .complexity(1)
//!     .offset(10.0)
//!     .adapter(Filter(MonotonicClock::new()))?;
//!
//! // Timestamps supplied by the host
//! assert_eq!(filter.filter_at(0.0, 0.0, 0.0), (0.0, 0.0)); // not ready: passed through
//! let (x, _): (f64, f64) = filter.filter_at(10.0, 0.0, 10.0);
//! assert!((x - 20.0).abs() < 1e-9);
//! # Result::<(), MelError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency. The
//! predictor and filter remain available; the shared handle and
//! `MonotonicClock` require `std`.
//!
//! ```toml
//! [dependencies]
//! mel = { version = "0.3", default-features = false }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and installs no logger.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - samples, window, errors, buffers.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - weighted polynomial fitting.
mod algorithms;

// Layer 4: Engine - readiness and prediction.
mod engine;

// Layer 5: Adapters - shared handle and host filter.
mod adapters;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    #[cfg(feature = "std")]
    pub use crate::adapters::shared::SharedPredictor;
    #[cfg(feature = "std")]
    pub use crate::api::{Adapter::Shared, MonotonicClock};
    pub use crate::adapters::filter::{Clock, PredictionFilter, PredictionSource};
    pub use crate::api::{
        Adapter::{Filter, Standalone},
        CurveFitter, MelBuilder as Mel, MelError, Predictor, PredictorConfig, PredictorState,
        Sample, SampleWindow, TrajectoryModel,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
