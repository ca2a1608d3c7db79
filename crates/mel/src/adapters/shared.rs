//! Thread-safe predictor handle.
//!
//! ## Purpose
//!
//! This module lets a configuration surface (e.g., a settings UI) change
//! `Samples`, `Complexity` and `Weight` while the input path keeps adding
//! samples and predicting on another thread.
//!
//! ## Design notes
//!
//! * **Single lock**: One mutex guards the window and the parameters together,
//!   and `predict` holds it across snapshot and fit, so a fit never observes a
//!   partially applied change.
//! * **Cheap clones**: Handles share one predictor through an `Arc`.
//! * **Poison recovery**: The predictor is valid between any two operations,
//!   so a poisoned lock is recovered rather than propagated.
//!
//! ## Non-goals
//!
//! * Lock-free operation; every call is microseconds long.

// External dependencies
use num_traits::Float;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// Internal dependencies
use crate::algorithms::regression::TrajectoryModel;
use crate::engine::config::PredictorConfig;
use crate::engine::predictor::{Predictor, PredictorState};
use crate::primitives::errors::MelError;
use crate::primitives::window::Sample;

/// Cloneable, mutex-guarded handle to one [`Predictor`].
#[derive(Debug)]
pub struct SharedPredictor<T> {
    inner: Arc<Mutex<Predictor<T>>>,
}

impl<T> Clone for SharedPredictor<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Float> SharedPredictor<T> {
    /// Wrap a predictor for shared use.
    pub fn new(predictor: Predictor<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(predictor)),
        }
    }

    #[inline]
    fn lock(&self) -> MutexGuard<'_, Predictor<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the predictor.
    pub fn with<R>(&self, f: impl FnOnce(&mut Predictor<T>) -> R) -> R {
        f(&mut self.lock())
    }

    /// Record the position `(x, y)` observed at `timestamp`.
    pub fn add_sample(&self, x: T, y: T, timestamp: T) {
        self.lock().add_sample(x, y, timestamp);
    }

    /// Record a prepared sample. Returns `false` if it was dropped as out of order.
    pub fn push(&self, sample: Sample<T>) -> bool {
        self.lock().push(sample)
    }

    /// Forecast the position `offset` after the newest sample.
    pub fn predict(&self, offset: T) -> Result<(T, T), MelError> {
        self.lock().predict(offset)
    }

    /// Fit the current window and return the model.
    pub fn fit(&self) -> Result<TrajectoryModel<T>, MelError> {
        self.lock().fit()
    }

    /// Whether enough samples exist for a determined fit.
    pub fn is_ready(&self) -> bool {
        self.lock().is_ready()
    }

    /// Current readiness state.
    pub fn state(&self) -> PredictorState {
        self.lock().state()
    }

    /// Number of samples currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if no samples are held.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the current configuration.
    pub fn config(&self) -> PredictorConfig<T> {
        *self.lock().config()
    }

    /// Set the window capacity.
    pub fn set_samples(&self, samples: usize) -> Result<(), MelError> {
        self.lock().set_samples(samples)
    }

    /// Set the polynomial degree.
    pub fn set_complexity(&self, complexity: usize) -> Result<(), MelError> {
        self.lock().set_complexity(complexity)
    }

    /// Set the recency-weighting exponent.
    pub fn set_weight(&self, weight: T) -> Result<(), MelError> {
        self.lock().set_weight(weight)
    }

    /// Apply a whole configuration under one lock acquisition.
    pub fn configure(&self, config: PredictorConfig<T>) -> Result<(), MelError> {
        self.lock().configure(config)
    }

    /// Discard all recorded samples.
    pub fn reset(&self) {
        self.lock().reset();
    }
}
