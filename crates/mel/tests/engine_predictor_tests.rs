#![cfg(feature = "dev")]
//! Tests for the motion predictor.
//!
//! These tests verify the predictor as a host sees it:
//! - Defaults and readiness
//! - Window management through parameter changes
//! - Prediction accuracy on exact motion
//! - Error reporting without silent fallback
//!
//! ## Test Organization
//!
//! 1. **Defaults and Readiness**
//! 2. **Prediction** - Exact motion, negative offsets, large timestamps
//! 3. **Parameter Changes** - Samples, complexity, weight, configure
//! 4. **Failure Modes** - Degenerate and non-finite windows

use approx::assert_relative_eq;

use mel::internals::engine::config::PredictorConfig;
use mel::internals::engine::predictor::{Predictor, PredictorState};
use mel::internals::primitives::errors::MelError;
use mel::internals::primitives::window::Sample;

fn predictor(samples: usize, complexity: usize, weight: f64) -> Predictor<f64> {
    Predictor::with_config(PredictorConfig {
        samples,
        complexity,
        weight,
    })
    .unwrap()
}

// ============================================================================
// Defaults and Readiness Tests
// ============================================================================

/// Test the host defaults.
#[test]
fn test_defaults() {
    let p = Predictor::<f64>::new();
    assert_eq!(p.samples(), 20);
    assert_eq!(p.complexity(), 2);
    assert_relative_eq!(p.weight(), 1.4);
    assert_eq!(p.state(), PredictorState::NotReady);
    assert!(p.is_empty());
}

/// Test that predicting too early reports how many samples are missing.
#[test]
fn test_not_ready() {
    let mut p = Predictor::<f64>::new();
    p.add_sample(0.0, 0.0, 0.0);
    p.add_sample(1.0, 1.0, 1.0);

    assert_eq!(p.predict(5.0), Err(MelError::NotReady { got: 2, min: 3 }));
    assert!(p.fit().is_err());
}

/// Test that readiness agrees with the error `predict` returns.
#[test]
fn test_readiness_consistency() {
    let mut p = predictor(10, 3, 1.4);
    for i in 0..8 {
        let t = i as f64;
        let result = p.predict(1.0);
        assert_eq!(
            p.is_ready(),
            !matches!(result, Err(MelError::NotReady { .. })),
            "readiness mismatch at {i} samples"
        );
        p.add_sample(t, t, t);
    }
    assert_eq!(p.state(), PredictorState::Ready);
}

// ============================================================================
// Prediction Tests
// ============================================================================

/// Test that a stationary pen stays put for every degree and weight.
#[test]
fn test_constant_position() {
    for complexity in 0..=3 {
        for weight in [0.0, 1.4, 3.0] {
            let mut p = predictor(10, complexity, weight);
            for i in 0..10 {
                p.add_sample(5.0, -3.0, i as f64 * 8.0);
            }
            let (x, y) = p.predict(15.0).unwrap();
            assert_relative_eq!(x, 5.0, epsilon = 1e-9);
            assert_relative_eq!(y, -3.0, epsilon = 1e-9);
        }
    }
}

/// Test negative offsets estimate earlier positions.
#[test]
fn test_negative_offset() {
    let mut p = predictor(20, 1, 1.4);
    for i in 0..=10 {
        let t = i as f64;
        p.add_sample(2.0 * t, 0.0, t);
    }

    let (x, _) = p.predict(-4.0).unwrap();
    assert_relative_eq!(x, 12.0, epsilon = 1e-9);
}

/// Test that a zero offset returns the fitted current position.
#[test]
fn test_zero_offset() {
    let mut p = predictor(20, 2, 1.4);
    for i in 0..6 {
        let t = i as f64 * 3.0;
        p.add_sample(t * t, 1.0, t);
    }
    let (x, y) = p.predict(0.0).unwrap();
    assert_relative_eq!(x, 225.0, epsilon = 1e-8);
    assert_relative_eq!(y, 1.0, epsilon = 1e-9);
}

/// Test extrapolation of constant acceleration.
#[test]
fn test_quadratic_motion() {
    let mut p = Predictor::<f64>::new();
    let pos = |t: f64| (0.02 * t * t + 0.5 * t + 10.0, -0.01 * t * t + 200.0);
    for i in 0..30 {
        let t = i as f64 * 4.0;
        let (x, y) = pos(t);
        p.add_sample(x, y, t);
    }

    let (x, y) = p.predict(12.0).unwrap();
    let (ex, ey) = pos(29.0 * 4.0 + 12.0);
    assert_relative_eq!(x, ex, epsilon = 1e-6);
    assert_relative_eq!(y, ey, epsilon = 1e-6);
    assert_eq!(p.len(), 20);
}

/// Test that epoch-millisecond timestamps do not lose precision.
#[test]
fn test_large_timestamps() {
    let base = 1.7e12;
    let mut p = predictor(20, 2, 1.4);
    for i in 0..20 {
        let dt = i as f64 * 8.0;
        p.add_sample(100.0 + 0.5 * dt, 50.0 - 0.25 * dt, base + dt);
    }

    let (x, y) = p.predict(16.0).unwrap();
    let dt = 19.0 * 8.0 + 16.0;
    assert_relative_eq!(x, 100.0 + 0.5 * dt, epsilon = 1e-6);
    assert_relative_eq!(y, 50.0 - 0.25 * dt, epsilon = 1e-6);
}

/// Test that the model returned by `fit` is centered on the newest sample.
#[test]
fn test_fit_origin() {
    let mut p = predictor(5, 1, 1.4);
    for i in 0..7 {
        p.add_sample(i as f64, 0.0, 100.0 + i as f64);
    }
    let model = p.fit().unwrap();
    assert_relative_eq!(model.origin(), 106.0);
    assert_eq!(p.last_sample(), Some(Sample::new(6.0, 0.0, 106.0)));
}

// ============================================================================
// Parameter Change Tests
// ============================================================================

/// Test that the window keeps only the most recent `samples` entries.
#[test]
fn test_window_capacity() {
    let mut p = predictor(2, 1, 1.4);
    for i in 0..5 {
        p.add_sample(i as f64, 0.0, i as f64);
    }
    assert_eq!(p.len(), 2);
    let ts: Vec<f64> = p.window().iter().map(|s| s.timestamp).collect();
    assert_eq!(ts, vec![3.0, 4.0]);
}

/// Test that shrinking the window discards old samples before the next fit.
///
/// An outlier at t = 0 distorts the fit until `set_samples(4)` evicts it.
#[test]
fn test_set_samples_evicts_outlier() {
    let mut p = predictor(10, 1, 0.0);
    p.add_sample(50.0, 0.0, 0.0);
    for i in 1..=4 {
        let t = i as f64;
        p.add_sample(t, 0.0, t);
    }

    let (before, _) = p.predict(1.0).unwrap();
    assert!((before - 5.0).abs() > 1.0);

    p.set_samples(4).unwrap();
    assert_eq!(p.len(), 4);

    let (after, _) = p.predict(1.0).unwrap();
    assert_relative_eq!(after, 5.0, epsilon = 1e-9);
}

/// Test that raising the degree keeps samples but may leave the predictor not ready.
#[test]
fn test_set_complexity_keeps_samples() {
    let mut p = predictor(20, 1, 1.4);
    for i in 0..3 {
        p.add_sample(i as f64, 0.0, i as f64);
    }
    assert!(p.is_ready());

    p.set_complexity(5).unwrap();
    assert!(!p.is_ready());
    assert_eq!(p.len(), 3);
    assert_eq!(p.predict(1.0), Err(MelError::NotReady { got: 3, min: 6 }));

    p.set_complexity(2).unwrap();
    assert!(p.is_ready());
}

/// Test that a degree larger than the window is accepted but never ready.
#[test]
fn test_complexity_exceeding_window() {
    let mut p = predictor(3, 5, 1.4);
    for i in 0..10 {
        p.add_sample(0.0, 0.0, i as f64);
    }
    assert_eq!(p.len(), 3);
    assert_eq!(p.state(), PredictorState::NotReady);
}

/// Test that invalid setters leave the predictor unchanged.
#[test]
fn test_invalid_setters_rejected() {
    let mut p = predictor(8, 2, 1.4);
    for i in 0..8 {
        p.add_sample(i as f64, 0.0, i as f64);
    }

    assert!(p.set_samples(0).is_err());
    assert!(p.set_complexity(33).is_err());
    assert!(p.set_weight(-1.0).is_err());
    assert!(p.set_weight(f64::NAN).is_err());
    assert!(p.set_weight(f64::INFINITY).is_err());

    assert_eq!(p.samples(), 8);
    assert_eq!(p.complexity(), 2);
    assert_relative_eq!(p.weight(), 1.4);
    assert_eq!(p.len(), 8);
}

/// Test that `configure` applies all parameters or none.
#[test]
fn test_configure_atomic() {
    let mut p = predictor(10, 2, 1.4);
    for i in 0..10 {
        p.add_sample(i as f64, 0.0, i as f64);
    }

    let invalid = PredictorConfig {
        samples: 3,
        complexity: 1,
        weight: f64::NAN,
    };
    assert!(p.configure(invalid).is_err());
    assert_eq!(p.samples(), 10);
    assert_eq!(p.len(), 10);

    let valid = PredictorConfig {
        samples: 3,
        complexity: 1,
        weight: 0.5,
    };
    p.configure(valid).unwrap();
    assert_eq!(p.config(), &valid);
    assert_eq!(p.len(), 3);
}

/// Test that `with_config` rejects invalid configurations.
#[test]
fn test_with_config_invalid() {
    let result = Predictor::with_config(PredictorConfig {
        samples: 0,
        complexity: 2,
        weight: 1.4,
    });
    assert!(matches!(
        result,
        Err(MelError::InvalidConfig {
            parameter: "samples",
            ..
        })
    ));
}

/// Test that out-of-order samples are dropped.
#[test]
fn test_out_of_order_dropped() {
    let mut p = predictor(10, 1, 1.4);
    assert!(p.push(Sample::new(0.0, 0.0, 10.0)));
    assert!(!p.push(Sample::new(1.0, 1.0, 5.0)));
    assert_eq!(p.len(), 1);
}

/// Test that reset discards history but keeps parameters.
#[test]
fn test_reset() {
    let mut p = predictor(10, 1, 2.0);
    for i in 0..5 {
        p.add_sample(i as f64, 0.0, i as f64);
    }
    p.reset();

    assert!(p.is_empty());
    assert_eq!(p.state(), PredictorState::NotReady);
    assert_eq!(p.samples(), 10);

    // Earlier timestamps are accepted again after a reset.
    assert!(p.push(Sample::new(0.0, 0.0, 0.0)));
}

// ============================================================================
// Failure Mode Tests
// ============================================================================

/// Test that a burst of reports sharing one timestamp is reported, not hidden.
#[test]
fn test_duplicate_timestamps() {
    let mut p = predictor(10, 1, 1.4);
    p.add_sample(0.0, 0.0, 5.0);
    p.add_sample(1.0, 1.0, 5.0);

    assert!(matches!(
        p.predict(1.0),
        Err(MelError::IllConditioned { .. })
    ));
}

/// Test that a NaN sample poisons fits only until it is evicted.
#[test]
fn test_nan_recovery() {
    let mut p = predictor(3, 1, 1.4);
    p.add_sample(f64::NAN, 0.0, 0.0);
    p.add_sample(1.0, 0.0, 1.0);
    p.add_sample(2.0, 0.0, 2.0);
    assert!(matches!(
        p.predict(1.0),
        Err(MelError::IllConditioned { .. })
    ));

    p.add_sample(3.0, 0.0, 3.0);
    let (x, y) = p.predict(1.0).unwrap();
    assert_relative_eq!(x, 4.0, epsilon = 1e-9);
    assert_relative_eq!(y, 0.0, epsilon = 1e-9);
}

/// Test that a non-finite offset is a configuration error.
#[test]
fn test_non_finite_offset() {
    let mut p = predictor(10, 1, 1.4);
    for i in 0..5 {
        p.add_sample(i as f64, 0.0, i as f64);
    }
    assert!(matches!(
        p.predict(f64::NAN),
        Err(MelError::InvalidConfig {
            parameter: "offset",
            ..
        })
    ));
    assert!(p.predict(f64::INFINITY).is_err());
}

/// Test that the predictor works with `f32`.
#[test]
fn test_f32_prediction() {
    let mut p = Predictor::<f32>::with_config(PredictorConfig {
        samples: 10,
        complexity: 1,
        weight: 1.4,
    })
    .unwrap();
    for i in 0..10 {
        let t = i as f32 * 5.0;
        p.add_sample(t, 2.0 * t, t);
    }
    let (x, y) = p.predict(5.0).unwrap();
    assert_relative_eq!(x, 50.0, epsilon = 1e-3);
    assert_relative_eq!(y, 100.0, epsilon = 1e-3);
}
