//! Common test utilities and data generators.

#![allow(dead_code)]

use faer::Col;
use regress_engine::core::Dataset;

/// Evenly spaced points on `y = slope * x + intercept`, x from 0 to `n - 1`
/// scaled by `step`.
pub fn line_dataset(n: usize, slope: f64, intercept: f64, step: f64) -> Dataset {
    let x = Col::from_fn(n, |i| i as f64 * step);
    let y = Col::from_fn(n, |i| slope * x[i] + intercept);
    Dataset::new(x, y).expect("columns have equal length")
}

/// A line with a fixed, symmetric noise pattern added to `y`.
pub fn noisy_line_dataset(n: usize, slope: f64, intercept: f64) -> Dataset {
    let pattern = [0.5, -0.3, 0.8, -0.2, 0.1, -0.6, 0.4, -0.1, 0.3, -0.5];
    let points: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let x = i as f64 * 0.2;
            (x, slope * x + intercept + pattern[i % pattern.len()])
        })
        .collect();
    Dataset::from_pairs(&points)
}

/// Dataset whose residuals against `y = x` are known in advance.
///
/// Points 1 and 3 share the largest deviation, so ranking must fall back to
/// dataset order.
pub fn tied_outlier_dataset() -> Dataset {
    Dataset::from_pairs(&[
        (0.0, 0.0),
        (1.0, 4.0),
        (2.0, 2.0),
        (3.0, 6.0),
        (4.0, 4.5),
        (5.0, 5.0),
    ])
}

/// Approximate equality check for floating point values.
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
