#![cfg(all(feature = "dev", feature = "std"))]
//! Tests for the thread-safe predictor handle.
//!
//! ## Test Organization
//!
//! 1. **Handles** - Clones share one predictor
//! 2. **Concurrency** - Reconfiguration racing with prediction
//! 3. **Poisoning** - Recovery after a panic under the lock

use approx::assert_relative_eq;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use mel::internals::adapters::shared::SharedPredictor;
use mel::internals::engine::config::PredictorConfig;
use mel::internals::engine::predictor::{Predictor, PredictorState};
use mel::internals::primitives::errors::MelError;

fn shared(samples: usize, complexity: usize, weight: f64) -> SharedPredictor<f64> {
    SharedPredictor::new(
        Predictor::with_config(PredictorConfig {
            samples,
            complexity,
            weight,
        })
        .unwrap(),
    )
}

// ============================================================================
// Handle Tests
// ============================================================================

/// Test that clones observe each other's samples and settings.
#[test]
fn test_clones_share_state() {
    let a = shared(10, 1, 1.4);
    let b = a.clone();

    a.add_sample(0.0, 0.0, 0.0);
    b.add_sample(1.0, 2.0, 1.0);
    assert_eq!(a.len(), 2);
    assert_eq!(b.state(), PredictorState::Ready);

    b.set_samples(1).unwrap();
    assert_eq!(a.config().samples, 1);
    assert_eq!(a.len(), 1);
    assert_eq!(a.predict(1.0), Err(MelError::NotReady { got: 1, min: 2 }));

    a.reset();
    assert!(b.is_empty());
}

/// Test the closure access and the fit passthrough.
#[test]
fn test_with_and_fit() {
    let p = shared(10, 1, 0.0);
    for i in 0..4 {
        p.add_sample(i as f64, 0.0, i as f64);
    }
    let newest = p.with(|inner| inner.last_sample().map(|s| s.timestamp));
    assert_eq!(newest, Some(3.0));

    let model = p.fit().unwrap();
    assert_relative_eq!(model.evaluate_offset(1.0).0, 4.0, epsilon = 1e-9);
}

/// Test that an invalid configuration through the handle changes nothing.
#[test]
fn test_invalid_configure() {
    let p = shared(10, 2, 1.4);
    let before = p.config();
    assert!(p
        .configure(PredictorConfig {
            samples: 0,
            complexity: 1,
            weight: 1.0,
        })
        .is_err());
    assert!(p.set_weight(f64::NAN).is_err());
    assert!(p.set_complexity(40).is_err());
    assert_eq!(p.config(), before);
}

// ============================================================================
// Concurrency Tests
// ============================================================================

/// Test that predictions stay exact while another thread reconfigures.
///
/// The motion is linear, so every valid configuration predicts it exactly; a
/// fit that saw a half-applied change would not.
#[test]
fn test_concurrent_reconfiguration() {
    let input = shared(30, 1, 1.4);
    let settings = input.clone();
    let done = Arc::new(AtomicBool::new(false));

    let toggler = {
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut flip = false;
            while !done.load(Ordering::SeqCst) {
                let samples = if flip { 5 } else { 30 };
                let weight = if flip { 0.0 } else { 3.0 };
                settings.set_samples(samples).unwrap();
                settings.set_weight(weight).unwrap();
                settings
                    .configure(PredictorConfig {
                        samples,
                        complexity: if flip { 2 } else { 1 },
                        weight,
                    })
                    .unwrap();
                flip = !flip;
                thread::yield_now();
            }
        })
    };

    for i in 0..2000 {
        let t = i as f64 * 2.0;
        input.add_sample(3.0 * t + 1.0, -0.5 * t, t);

        match input.predict(4.0) {
            Ok((x, y)) => {
                let expected = t + 4.0;
                let tol = 1e-6 * (1.0 + 3.0 * expected);
                assert!((x - (3.0 * expected + 1.0)).abs() < tol, "x = {x} at t = {t}");
                assert!((y + 0.5 * expected).abs() < tol, "y = {y} at t = {t}");
            }
            Err(MelError::NotReady { .. }) => {}
            Err(err) => panic!("unexpected error at t = {t}: {err}"),
        }
    }

    done.store(true, Ordering::SeqCst);
    toggler.join().unwrap();
    assert!(input.len() <= 30);
}

// ============================================================================
// Poisoning Tests
// ============================================================================

/// Test that a panic while holding the lock does not disable the predictor.
#[test]
fn test_poison_recovery() {
    let p = shared(10, 1, 1.4);
    p.add_sample(0.0, 0.0, 0.0);

    let handle = p.clone();
    let result = thread::spawn(move || {
        handle.with(|_| panic!("host callback failed"));
    })
    .join();
    assert!(result.is_err());

    p.add_sample(1.0, 1.0, 1.0);
    let (x, y) = p.predict(1.0).unwrap();
    assert_relative_eq!(x, 2.0, epsilon = 1e-9);
    assert_relative_eq!(y, 2.0, epsilon = 1e-9);
}
