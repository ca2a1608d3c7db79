//! High-level API for motion prediction.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the predictor parameters and a choice of adapter that
//! decides how the predictor is driven.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with the host defaults for every parameter.
//! * **Polymorphic**: Marker types select the output (plain, shared, or filter).
//! * **Validated**: Parameters are validated when the adapter is applied.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MelBuilder`] via `Mel::new()`.
//! 2. Chain configuration methods (`.samples()`, `.complexity()`, `.weight()`, `.offset()`).
//! 3. Select an adapter via `.adapter(Standalone)` to get the configured value.
//!
//! `offset` is only consumed by the [`Filter`] adapter; the other adapters
//! take the offset as an argument to `predict`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::filter::{Clock, PredictionFilter};
use crate::engine::validator::Validator;

#[cfg(feature = "std")]
use crate::adapters::shared::SharedPredictor;

// Publicly re-exported types
#[cfg(feature = "std")]
pub use crate::adapters::filter::MonotonicClock;
pub use crate::adapters::filter::PredictionSource;
pub use crate::algorithms::regression::{CurveFitter, TrajectoryModel};
pub use crate::engine::config::PredictorConfig;
pub use crate::engine::predictor::{Predictor, PredictorState};
pub use crate::primitives::errors::MelError;
pub use crate::primitives::window::{Sample, SampleWindow};

/// Marker types for selecting adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    #[cfg(feature = "std")]
    pub use super::Shared;
    pub use super::{Filter, Standalone};
}

/// Fluent builder for predictor parameters.
#[derive(Debug, Clone)]
pub struct MelBuilder<T> {
    /// Window capacity.
    pub samples: Option<usize>,

    /// Polynomial degree.
    pub complexity: Option<usize>,

    /// Recency-weighting exponent.
    pub weight: Option<T>,

    /// Latency compensation in milliseconds (Filter only).
    pub offset: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for MelBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> MelBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            samples: None,
            complexity: None,
            weight: None,
            offset: None,
            duplicate_param: None,
        }
    }

    /// Select an adapter, validating the configuration.
    pub fn adapter<A>(self, adapter: A) -> A::Output
    where
        A: MelAdapter<T>,
    {
        adapter.convert(self)
    }

    /// Set the window capacity (`Samples`, default 20).
    pub fn samples(mut self, samples: usize) -> Self {
        if self.samples.is_some() {
            self.duplicate_param = Some("samples");
        }
        self.samples = Some(samples);
        self
    }

    /// Set the polynomial degree (`Complexity`, default 2).
    pub fn complexity(mut self, complexity: usize) -> Self {
        if self.complexity.is_some() {
            self.duplicate_param = Some("complexity");
        }
        self.complexity = Some(complexity);
        self
    }

    /// Set the recency-weighting exponent (`Weight`, default 1.4).
    pub fn weight(mut self, weight: T) -> Self {
        if self.weight.is_some() {
            self.duplicate_param = Some("weight");
        }
        self.weight = Some(weight);
        self
    }

    /// Set the latency compensation in milliseconds (`Offset`, default 0).
    pub fn offset(mut self, offset: T) -> Self {
        if self.offset.is_some() {
            self.duplicate_param = Some("offset");
        }
        self.offset = Some(offset);
        self
    }

    /// Resolve the configuration, applying defaults for unset parameters.
    pub fn config(&self) -> PredictorConfig<T> {
        let defaults = PredictorConfig::default();
        PredictorConfig {
            samples: self.samples.unwrap_or(defaults.samples),
            complexity: self.complexity.unwrap_or(defaults.complexity),
            weight: self.weight.unwrap_or(defaults.weight),
        }
    }

    fn build_predictor(&self) -> Result<Predictor<T>, MelError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Predictor::with_config(self.config())
    }
}

/// Trait for turning a configured [`MelBuilder`] into something runnable.
pub trait MelAdapter<T: Float> {
    /// The adapter output.
    type Output;

    /// Validate the builder and produce the output.
    fn convert(self, builder: MelBuilder<T>) -> Self::Output;
}

/// Marker for a plain, exclusively owned [`Predictor`].
#[derive(Debug, Clone, Copy)]
pub struct Standalone;

impl<T: Float> MelAdapter<T> for Standalone {
    type Output = Result<Predictor<T>, MelError>;

    fn convert(self, builder: MelBuilder<T>) -> Self::Output {
        builder.build_predictor()
    }
}

/// Marker for a mutex-guarded [`SharedPredictor`].
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct Shared;

#[cfg(feature = "std")]
impl<T: Float> MelAdapter<T> for Shared {
    type Output = Result<SharedPredictor<T>, MelError>;

    fn convert(self, builder: MelBuilder<T>) -> Self::Output {
        Ok(SharedPredictor::new(builder.build_predictor()?))
    }
}

/// Marker for a [`PredictionFilter`] timestamped by the wrapped clock.
#[derive(Debug, Clone, Copy)]
pub struct Filter<C>(pub C);

impl<T: Float, C: Clock> MelAdapter<T> for Filter<C> {
    type Output = Result<PredictionFilter<T, C>, MelError>;

    fn convert(self, builder: MelBuilder<T>) -> Self::Output {
        let predictor = builder.build_predictor()?;
        let mut filter = PredictionFilter::new(predictor, self.0);
        if let Some(offset) = builder.offset {
            filter.set_offset(offset)?;
        }
        Ok(filter)
    }
}
