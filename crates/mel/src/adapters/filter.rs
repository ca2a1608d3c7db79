//! Host filter adapter with raw-input fallback.
//!
//! ## Purpose
//!
//! This module provides the per-report wrapper a tablet pipeline calls for
//! every input point. It timestamps the point, feeds the predictor, and
//! returns the forecast `Offset` milliseconds ahead once the predictor is
//! ready. Until then, and whenever a prediction fails, the raw point is
//! passed through unchanged.
//!
//! ## Design notes
//!
//! * **Explicit fallback**: The core reports typed errors; this adapter is the
//!   one place that turns them into "pass the pen through".
//! * **Rate-limited logging**: Only the first failure of a streak is logged at
//!   `error` level; the next successful or not-ready report re-arms it.
//! * **Pluggable clock**: Timestamps come from a [`Clock`], so tests and hosts
//!   with their own report timestamps can drive time explicitly.
//!
//! ## Key concepts
//!
//! * **Offset**: Latency compensation in milliseconds (default 0).
//! * **Host-typed parameters**: `Samples` and `Complexity` arrive as signed
//!   integers and negative values are rejected.

// Feature-gated imports
#[cfg(feature = "std")]
use std::time::Instant;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::predictor::Predictor;
use crate::engine::validator::Validator;
use crate::primitives::errors::MelError;

#[cfg(feature = "std")]
use crate::adapters::shared::SharedPredictor;

// ============================================================================
// Clock
// ============================================================================

/// Source of monotonic timestamps in milliseconds.
pub trait Clock {
    /// Current time in milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> f64;
}

/// Wall-clock-independent clock backed by [`Instant`].
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

#[cfg(feature = "std")]
impl MonotonicClock {
    /// Start a clock at zero now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for MonotonicClock {
    #[inline]
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

// ============================================================================
// Prediction Source
// ============================================================================

/// What the filter needs from a predictor.
///
/// Implemented by [`Predictor`] (exclusive ownership) and, with `std`, by
/// `SharedPredictor` so a settings surface can hold another handle.
pub trait PredictionSource<T> {
    /// Record the position `(x, y)` observed at `timestamp`.
    fn add_sample(&mut self, x: T, y: T, timestamp: T);

    /// Whether enough samples exist for a determined fit.
    fn is_ready(&self) -> bool;

    /// Forecast the position `offset` after the newest sample.
    fn predict(&mut self, offset: T) -> Result<(T, T), MelError>;

    /// Set the window capacity.
    fn set_samples(&mut self, samples: usize) -> Result<(), MelError>;

    /// Set the polynomial degree.
    fn set_complexity(&mut self, complexity: usize) -> Result<(), MelError>;

    /// Set the recency-weighting exponent.
    fn set_weight(&mut self, weight: T) -> Result<(), MelError>;
}

impl<T: Float> PredictionSource<T> for Predictor<T> {
    fn add_sample(&mut self, x: T, y: T, timestamp: T) {
        Predictor::add_sample(self, x, y, timestamp);
    }

    fn is_ready(&self) -> bool {
        Predictor::is_ready(self)
    }

    fn predict(&mut self, offset: T) -> Result<(T, T), MelError> {
        Predictor::predict(self, offset)
    }

    fn set_samples(&mut self, samples: usize) -> Result<(), MelError> {
        Predictor::set_samples(self, samples)
    }

    fn set_complexity(&mut self, complexity: usize) -> Result<(), MelError> {
        Predictor::set_complexity(self, complexity)
    }

    fn set_weight(&mut self, weight: T) -> Result<(), MelError> {
        Predictor::set_weight(self, weight)
    }
}

#[cfg(feature = "std")]
impl<T: Float> PredictionSource<T> for SharedPredictor<T> {
    fn add_sample(&mut self, x: T, y: T, timestamp: T) {
        SharedPredictor::add_sample(self, x, y, timestamp);
    }

    fn is_ready(&self) -> bool {
        SharedPredictor::is_ready(self)
    }

    fn predict(&mut self, offset: T) -> Result<(T, T), MelError> {
        SharedPredictor::predict(self, offset)
    }

    fn set_samples(&mut self, samples: usize) -> Result<(), MelError> {
        SharedPredictor::set_samples(self, samples)
    }

    fn set_complexity(&mut self, complexity: usize) -> Result<(), MelError> {
        SharedPredictor::set_complexity(self, complexity)
    }

    fn set_weight(&mut self, weight: T) -> Result<(), MelError> {
        SharedPredictor::set_weight(self, weight)
    }
}

// ============================================================================
// Prediction Filter
// ============================================================================

/// Per-report filter that forecasts the pen position `offset` ms ahead.
#[derive(Debug, Clone)]
pub struct PredictionFilter<T, C, P = Predictor<T>> {
    source: P,
    clock: C,
    offset: T,
    rate_limited: bool,
    last_error: Option<MelError>,
}

impl<T: Float, C: Clock, P: PredictionSource<T>> PredictionFilter<T, C, P> {
    /// Wrap `source`, reading timestamps from `clock`. The offset starts at 0.
    pub fn new(source: P, clock: C) -> Self {
        Self {
            source,
            clock,
            offset: T::zero(),
            rate_limited: false,
            last_error: None,
        }
    }

    /// Filter a point reported now (according to the clock).
    pub fn filter(&mut self, x: T, y: T) -> (T, T) {
        let now = T::from(self.clock.now_ms()).unwrap_or_else(T::nan);
        self.filter_at(x, y, now)
    }

    /// Filter a point reported at `timestamp` (milliseconds).
    ///
    /// Returns the forecast when the predictor is ready and the fit succeeds,
    /// otherwise the input point itself.
    pub fn filter_at(&mut self, x: T, y: T, timestamp: T) -> (T, T) {
        self.source.add_sample(x, y, timestamp);

        if !self.source.is_ready() {
            self.rate_limited = false;
            self.last_error = None;
            return (x, y);
        }

        match self.source.predict(self.offset) {
            Ok(position) => {
                self.rate_limited = false;
                self.last_error = None;
                position
            }
            Err(err) => {
                if !self.rate_limited {
                    log::error!("prediction failed, passing input through: {err}");
                    self.rate_limited = true;
                }
                self.last_error = Some(err);
                (x, y)
            }
        }
    }

    // ========================================================================
    // Host Parameters
    // ========================================================================

    /// Set the latency compensation in milliseconds.
    pub fn set_offset(&mut self, offset: T) -> Result<(), MelError> {
        Validator::validate_offset(offset)?;
        self.offset = offset;
        Ok(())
    }

    /// Set the window capacity from a host integer.
    pub fn set_samples(&mut self, samples: i32) -> Result<(), MelError> {
        let samples = Validator::validate_non_negative("samples", i64::from(samples))?;
        self.source.set_samples(samples)
    }

    /// Set the polynomial degree from a host integer.
    pub fn set_complexity(&mut self, complexity: i32) -> Result<(), MelError> {
        let complexity = Validator::validate_non_negative("complexity", i64::from(complexity))?;
        self.source.set_complexity(complexity)
    }

    /// Set the recency-weighting exponent.
    pub fn set_weight(&mut self, weight: T) -> Result<(), MelError> {
        self.source.set_weight(weight)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Latency compensation in milliseconds.
    #[inline]
    pub fn offset(&self) -> T {
        self.offset
    }

    /// Whether a failure has been logged and further failures are being suppressed.
    #[inline]
    pub fn is_rate_limited(&self) -> bool {
        self.rate_limited
    }

    /// Error behind the most recent pass-through, if the last prediction failed.
    #[inline]
    pub fn last_error(&self) -> Option<MelError> {
        self.last_error
    }

    /// The wrapped prediction source.
    #[inline]
    pub fn source(&self) -> &P {
        &self.source
    }

    /// Mutable access to the wrapped prediction source.
    #[inline]
    pub fn source_mut(&mut self) -> &mut P {
        &mut self.source
    }

    /// Unwrap into the prediction source.
    pub fn into_source(self) -> P {
        self.source
    }
}
