//! Pen Latency Compensation Examples
//!
//! This example demonstrates motion prediction on a simulated pen stroke:
//! - Basic prediction with the default settings
//! - Comparing window sizes, degrees and recency weights
//! - Driving the host filter with report timestamps
//! - Reconfiguring a shared predictor from a settings thread
//!
//! Positions are in pixels and time in milliseconds; the digitizer reports at 250 Hz.

#[cfg(feature = "std")]
use mel::prelude::*;
#[cfg(feature = "std")]
use std::f64::consts::PI;
#[cfg(feature = "std")]
use std::thread;

/// Report interval of a 250 Hz digitizer.
#[cfg(feature = "std")]
const REPORT_MS: f64 = 4.0;

/// A circle of radius 200 px traced once per second.
#[cfg(feature = "std")]
fn pen_position(t: f64) -> (f64, f64) {
    let phase = 2.0 * PI * t / 1000.0;
    (500.0 + 200.0 * phase.cos(), 400.0 + 200.0 * phase.sin())
}

#[cfg(feature = "std")]
fn main() -> Result<(), MelError> {
    println!("{}", "=".repeat(80));
    println!("MeL Pen Prediction - Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_prediction()?;
    example_2_compare_settings()?;
    example_3_host_filter()?;
    example_4_shared_settings()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

/// Example 1: Basic Prediction
/// Feed half a stroke and forecast 16 ms ahead.
#[cfg(feature = "std")]
fn example_1_basic_prediction() -> Result<(), MelError> {
    println!("Example 1: Basic Prediction");
    println!("{}", "-".repeat(80));

    let mut predictor = Mel::<f64>::new().adapter(Standalone)?;

    let mut t = 0.0;
    while t <= 500.0 {
        let (x, y) = pen_position(t);
        predictor.add_sample(x, y, t);
        t += REPORT_MS;
    }

    let newest = predictor.last_sample().map_or(0.0, |s| s.timestamp);
    let (px, py) = predictor.predict(16.0)?;
    let (ex, ey) = pen_position(newest + 16.0);

    println!("Newest report:  t = {newest:.0} ms");
    println!("Forecast:       ({px:8.2}, {py:8.2})");
    println!("True position:  ({ex:8.2}, {ey:8.2})");
    println!("Error:          {:.3} px", (px - ex).hypot(py - ey));
    println!();

    Ok(())
}

/// Example 2: Comparing Settings
/// Mean forecast error over a full stroke for several parameter choices.
#[cfg(feature = "std")]
fn example_2_compare_settings() -> Result<(), MelError> {
    println!("Example 2: Comparing Settings (offset 16 ms)");
    println!("{}", "-".repeat(80));
    println!(
        "{:>8} {:>11} {:>7} {:>14} {:>14}",
        "Samples", "Complexity", "Weight", "Mean err (px)", "Max err (px)"
    );

    let settings = [
        (20, 2, 1.4),
        (5, 1, 0.0),
        (10, 1, 1.4),
        (10, 2, 1.4),
        (30, 2, 1.4),
        (30, 2, 4.0),
        (30, 3, 1.4),
    ];

    for (samples, complexity, weight) in settings {
        let mut predictor = Mel::new()
            .samples(samples)
            .complexity(complexity)
            .weight(weight)
            .adapter(Standalone)?;

        let mut total = 0.0;
        let mut worst: f64 = 0.0;
        let mut count = 0usize;

        for i in 0..250 {
            let t = i as f64 * REPORT_MS;
            let (x, y) = pen_position(t);
            predictor.add_sample(x, y, t);

            if predictor.is_ready() {
                let (px, py) = predictor.predict(16.0)?;
                let (ex, ey) = pen_position(t + 16.0);
                let err = (px - ex).hypot(py - ey);
                total += err;
                worst = worst.max(err);
                count += 1;
            }
        }

        println!(
            "{:>8} {:>11} {:>7.1} {:>14.4} {:>14.4}",
            samples,
            complexity,
            weight,
            total / count.max(1) as f64,
            worst
        );
    }
    println!();

    Ok(())
}

/// Example 3: Host Filter
/// Points pass through until the predictor is ready, then are forecast.
#[cfg(feature = "std")]
fn example_3_host_filter() -> Result<(), MelError> {
    println!("Example 3: Host Filter (offset 12 ms)");
    println!("{}", "-".repeat(80));

    let mut filter = Mel::<f64>::new()
        .offset(12.0)
        .adapter(Filter(MonotonicClock::new()))?;

    for i in 0..6 {
        let t = i as f64 * REPORT_MS;
        let (x, y) = pen_position(t);
        let (fx, fy) = filter.filter_at(x, y, t);
        let state = if filter.source().is_ready() {
            "forecast"
        } else {
            "raw"
        };
        println!("t = {t:4.0} ms  in ({x:7.2}, {y:7.2})  out ({fx:7.2}, {fy:7.2})  [{state}]");
    }

    // A burst of reports sharing one timestamp cannot be fitted: the filter
    // falls back to the raw point and logs once.
    let (x, y) = pen_position(24.0);
    filter.set_complexity(1)?;
    filter.set_samples(2)?;
    filter.filter_at(x, y, 24.0);
    let out = filter.filter_at(x + 1.0, y, 24.0);
    println!(
        "duplicate timestamp -> out ({:7.2}, {:7.2}), error: {:?}",
        out.0,
        out.1,
        filter.last_error()
    );
    println!();

    Ok(())
}

/// Example 4: Shared Settings
/// A settings thread changes the window size while the input thread predicts.
#[cfg(feature = "std")]
fn example_4_shared_settings() -> Result<(), MelError> {
    println!("Example 4: Shared Settings");
    println!("{}", "-".repeat(80));

    let input: SharedPredictor<f64> = Mel::<f64>::new().adapter(Shared)?;
    let settings = input.clone();

    let worker = thread::spawn(move || -> Result<(), MelError> {
        for samples in [10, 30, 5, 20] {
            settings.set_samples(samples)?;
            thread::yield_now();
        }
        Ok(())
    });

    let mut forecasts = 0;
    for i in 0..500 {
        let t = i as f64 * REPORT_MS;
        let (x, y) = pen_position(t);
        input.add_sample(x, y, t);
        if input.predict(8.0).is_ok() {
            forecasts += 1;
        }
    }

    if let Ok(result) = worker.join() {
        result?;
    }

    let config = input.config();
    println!("forecasts made:  {forecasts}");
    println!(
        "final settings:  samples = {}, complexity = {}, weight = {}",
        config.samples, config.complexity, config.weight
    );
    println!();

    Ok(())
}
