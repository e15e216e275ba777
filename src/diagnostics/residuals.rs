//! Predictions, absolute residuals and goodness of fit.

use crate::core::Dataset;
use crate::solvers::{DegenerateInput, FittedRegressor, RegressionError};
use crate::utils::total_sum_of_squares;
use faer::Col;

/// Residual sum of squares below which a constant target counts as fit exactly.
const EXACT_FIT_TOLERANCE: f64 = 1e-10;

fn check_lengths(data: &Dataset, predictions: &Col<f64>) -> Result<(), RegressionError> {
    if data.len() != predictions.nrows() {
        return Err(RegressionError::DimensionMismatch {
            x_rows: data.len(),
            y_len: predictions.nrows(),
        });
    }
    Ok(())
}

/// Evaluate a fitted line at every `x` of the dataset.
pub fn predict<M: FittedRegressor>(model: &M, data: &Dataset) -> Col<f64> {
    model.predict(data.x())
}

/// Compute absolute residuals `|y_i - ŷ_i|`, in dataset order.
pub fn residuals(data: &Dataset, predictions: &Col<f64>) -> Result<Col<f64>, RegressionError> {
    check_lengths(data, predictions)?;
    let y = data.y();
    Ok(Col::from_fn(y.nrows(), |i| (y[i] - predictions[i]).abs()))
}

/// Compute R² = 1 - RSS / TSS.
///
/// The value is at most 1 and can be negative for predictions worse than the
/// mean. When every `y` is identical TSS is zero: the score is 1 if the
/// predictions reproduce `y`, otherwise the input is degenerate.
pub fn r_squared(data: &Dataset, predictions: &Col<f64>) -> Result<f64, RegressionError> {
    let resid = residuals(data, predictions)?;
    r_squared_from_residuals(data, &resid)
}

/// R² from residuals already computed against `data`.
///
/// Only squares of the residuals enter, so absolute and signed residuals give
/// the same score.
pub(crate) fn r_squared_from_residuals(
    data: &Dataset,
    residuals: &Col<f64>,
) -> Result<f64, RegressionError> {
    check_lengths(data, residuals)?;
    let y = data.y();
    let rss: f64 = residuals.iter().map(|&r| r * r).sum();

    let constant_target = y.nrows() == 0 || y.iter().all(|&yi| yi == y[0]);
    if constant_target {
        if rss < EXACT_FIT_TOLERANCE {
            return Ok(1.0);
        }
        return Err(DegenerateInput::ConstantTarget { rss }.into());
    }

    let tss = total_sum_of_squares(y);
    Ok(1.0 - rss / tss)
}
