//! Motion predictor orchestration.
//!
//! ## Purpose
//!
//! This module ties the sample window and the curve fitter together. The
//! predictor accepts samples, owns the tunable parameters, reports readiness,
//! and answers "where will the point be `offset` from now?" queries.
//!
//! ## Design notes
//!
//! * **Derived readiness**: Ready iff the window holds `Complexity + 1`
//!   samples; the state is recomputed on demand, never stored.
//! * **No silent fallback**: Every failure is returned as a typed error; the
//!   caller chooses whether to pass the raw sample through.
//! * **Transient models**: A fresh model is fitted for every prediction because
//!   the window may have changed since the last one.
//! * **Allocation-free hot path**: Snapshot and normal equations reuse a `FitBuffer`.
//!
//! ## Invariants
//!
//! * `is_ready()` is `false` exactly when `predict` would fail with `NotReady`.
//! * Setters leave the predictor unchanged when validation fails.
//!
//! ## Non-goals
//!
//! * Thread safety (see the shared adapter).
//! * Device I/O or timestamping (see the filter adapter).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::{CurveFitter, TrajectoryModel};
use crate::engine::config::PredictorConfig;
use crate::engine::validator::Validator;
use crate::primitives::buffer::FitBuffer;
use crate::primitives::errors::MelError;
use crate::primitives::window::{Sample, SampleWindow};

// ============================================================================
// Predictor State
// ============================================================================

/// Readiness of a predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictorState {
    /// Fewer than `Complexity + 1` samples are available.
    NotReady,

    /// A determined fit is possible.
    Ready,
}

// ============================================================================
// Predictor
// ============================================================================

/// Weighted polynomial motion predictor for a single input stream.
#[derive(Debug, Clone)]
pub struct Predictor<T> {
    config: PredictorConfig<T>,
    window: SampleWindow<T>,
    buffer: FitBuffer<T>,
}

impl<T: Float> Predictor<T> {
    /// Create a predictor with the default parameters (20 samples, degree 2, weight 1.4).
    pub fn new() -> Self {
        let config = PredictorConfig::default();
        Self {
            window: SampleWindow::new(config.samples),
            buffer: FitBuffer::with_capacity(config.samples, config.min_samples()),
            config,
        }
    }

    /// Create a predictor from an explicit configuration.
    pub fn with_config(config: PredictorConfig<T>) -> Result<Self, MelError> {
        config.validate()?;
        Ok(Self {
            window: SampleWindow::with_capacity(config.samples)?,
            buffer: FitBuffer::with_capacity(config.samples, config.min_samples()),
            config,
        })
    }

    // ========================================================================
    // Samples
    // ========================================================================

    /// Record the position `(x, y)` observed at `timestamp`.
    ///
    /// Samples older than the newest one are dropped. Non-finite values are
    /// stored as-is and make fits fail with `IllConditioned` until evicted.
    pub fn add_sample(&mut self, x: T, y: T, timestamp: T) {
        self.push(Sample::new(x, y, timestamp));
    }

    /// Record a prepared sample. Returns `false` if it was dropped as out of order.
    pub fn push(&mut self, sample: Sample<T>) -> bool {
        let accepted = self.window.push(sample);
        if !accepted {
            log::trace!(
                "dropping out-of-order sample at t={:?} (newest t={:?})",
                sample.timestamp.to_f64(),
                self.window.newest().and_then(|s| s.timestamp.to_f64()),
            );
        }
        accepted
    }

    /// Discard all recorded samples.
    pub fn reset(&mut self) {
        self.window.clear();
        self.buffer.clear();
    }

    // ========================================================================
    // Readiness
    // ========================================================================

    /// Whether enough samples exist for a determined fit.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.window.len() >= self.config.min_samples()
    }

    /// Current readiness state.
    #[inline]
    pub fn state(&self) -> PredictorState {
        if self.is_ready() {
            PredictorState::Ready
        } else {
            PredictorState::NotReady
        }
    }

    // ========================================================================
    // Prediction
    // ========================================================================

    /// Fit the current window and return the model.
    pub fn fit(&mut self) -> Result<TrajectoryModel<T>, MelError> {
        if !self.is_ready() {
            return Err(MelError::NotReady {
                got: self.window.len(),
                min: self.config.min_samples(),
            });
        }

        // Detach the snapshot slot so the fitter can borrow the rest of the buffer mutably.
        let mut snapshot = core::mem::take(&mut self.buffer.samples);
        self.window.snapshot_into(snapshot.as_vec_mut());

        let fitter = CurveFitter::new(self.config.complexity, self.config.weight);
        let result = fitter.fit(&snapshot, &mut self.buffer);
        self.buffer.samples = snapshot;

        result
    }

    /// Forecast the position `offset` time units after the newest sample.
    ///
    /// Negative offsets estimate earlier positions with the same model.
    pub fn predict(&mut self, offset: T) -> Result<(T, T), MelError> {
        Validator::validate_offset(offset)?;
        let model = self.fit()?;
        Ok(model.evaluate_offset(offset))
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Set the window capacity, dropping the oldest excess samples immediately.
    pub fn set_samples(&mut self, samples: usize) -> Result<(), MelError> {
        Validator::validate_samples(samples)?;
        let evicted = self.window.resize(samples)?;
        self.config.samples = samples;
        log::debug!("samples set to {samples} ({evicted} evicted)");
        Ok(())
    }

    /// Set the polynomial degree. Samples are kept even if this makes the predictor not ready.
    pub fn set_complexity(&mut self, complexity: usize) -> Result<(), MelError> {
        Validator::validate_complexity(complexity)?;
        self.config.complexity = complexity;
        log::debug!("complexity set to {complexity}");
        Ok(())
    }

    /// Set the recency-weighting exponent.
    pub fn set_weight(&mut self, weight: T) -> Result<(), MelError> {
        Validator::validate_weight(weight)?;
        self.config.weight = weight;
        log::debug!("weight set to {:?}", weight.to_f64());
        Ok(())
    }

    /// Apply a whole configuration atomically (nothing changes if any field is invalid).
    pub fn configure(&mut self, config: PredictorConfig<T>) -> Result<(), MelError> {
        config.validate()?;
        let evicted = self.window.resize(config.samples)?;
        self.config = config;
        log::debug!(
            "configured samples={} complexity={} weight={:?} ({evicted} evicted)",
            config.samples,
            config.complexity,
            config.weight.to_f64(),
        );
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current configuration.
    #[inline]
    pub fn config(&self) -> &PredictorConfig<T> {
        &self.config
    }

    /// Window capacity (`Samples`).
    #[inline]
    pub fn samples(&self) -> usize {
        self.config.samples
    }

    /// Polynomial degree (`Complexity`).
    #[inline]
    pub fn complexity(&self) -> usize {
        self.config.complexity
    }

    /// Recency-weighting exponent (`Weight`).
    #[inline]
    pub fn weight(&self) -> T {
        self.config.weight
    }

    /// Number of samples currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Check if no samples are held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Read-only view of the sample window.
    #[inline]
    pub fn window(&self) -> &SampleWindow<T> {
        &self.window
    }

    /// Most recently accepted sample.
    #[inline]
    pub fn last_sample(&self) -> Option<Sample<T>> {
        self.window.newest().copied()
    }
}

impl<T: Float> Default for Predictor<T> {
    fn default() -> Self {
        Self::new()
    }
}
