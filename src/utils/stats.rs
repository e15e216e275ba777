//! Column summary helpers.

use faer::Col;
use statrs::statistics::Statistics;

/// Center a vector by subtracting the mean.
pub fn center_vector(y: &Col<f64>) -> (Col<f64>, f64) {
    let mean = y.iter().mean();
    let centered = Col::from_fn(y.nrows(), |i| y[i] - mean);

    (centered, mean)
}

/// Sum of squared deviations from the mean.
pub fn total_sum_of_squares(y: &Col<f64>) -> f64 {
    let (centered, _) = center_vector(y);
    centered.iter().map(|&d| d * d).sum()
}

/// Smallest and largest entry, or `None` for an empty column.
pub fn value_range(v: &Col<f64>) -> Option<(f64, f64)> {
    if v.nrows() == 0 {
        return None;
    }
    Some((Statistics::min(v.iter()), Statistics::max(v.iter())))
}

/// Round to `digits` decimal places using the shortest correctly rounded
/// decimal representation.
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", digits as usize, value)
        .parse()
        .unwrap_or(value)
}
