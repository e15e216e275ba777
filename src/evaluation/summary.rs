//! Assembly of the plottable summary.

use crate::core::{
    Coefficients, Dataset, EvaluationSummary, OutlierRecord, PlotSeries, DEFAULT_DISPLAY_PRECISION,
};
use crate::diagnostics::{outlier_positions, r_squared_from_residuals};
use crate::solvers::{DegenerateInput, FittedRegressor, RegressionError};
use crate::utils::{round_to, value_range};
use faer::Col;

/// Build the summary with coefficients rounded to 4 decimal digits.
pub fn summarize<M: FittedRegressor>(
    data: &Dataset,
    model: &M,
    predictions: &Col<f64>,
    residuals: &Col<f64>,
    outliers: &[OutlierRecord],
) -> Result<EvaluationSummary, RegressionError> {
    summarize_with_precision(
        data,
        model,
        predictions,
        residuals,
        outliers,
        DEFAULT_DISPLAY_PRECISION,
    )
}

/// Build the summary with coefficients rounded to `precision` decimal digits.
///
/// Rounding touches only the reported coefficients. Plot arrays, line
/// endpoints and outlier records keep full precision, and nothing rounded
/// flows back into a computation. The plot markers are the positions of
/// `outliers`, so both views always show the same points.
pub fn summarize_with_precision<M: FittedRegressor>(
    data: &Dataset,
    model: &M,
    predictions: &Col<f64>,
    residuals: &Col<f64>,
    outliers: &[OutlierRecord],
    precision: u32,
) -> Result<EvaluationSummary, RegressionError> {
    if predictions.nrows() != data.len() {
        return Err(RegressionError::DimensionMismatch {
            x_rows: data.len(),
            y_len: predictions.nrows(),
        });
    }

    let (x_min, x_max) = value_range(data.x()).ok_or(
        DegenerateInput::InsufficientObservations {
            needed: 1,
            got: 0,
        },
    )?;

    let r_squared = r_squared_from_residuals(data, residuals)?;

    let coefficients = Coefficients {
        slope: round_to(model.slope(), precision),
        intercept: round_to(model.intercept(), precision),
        r_squared: round_to(r_squared, precision),
    };

    let plot_series = PlotSeries {
        x: data.x().iter().copied().collect(),
        y: data.y().iter().copied().collect(),
        predictions: predictions.iter().copied().collect(),
        outlier_indices: outlier_positions(outliers),
        line_endpoints_x: [x_min, x_max],
        line_endpoints_y: [model.predict_at(x_min), model.predict_at(x_max)],
    };

    Ok(EvaluationSummary {
        coefficients,
        outliers: outliers.to_vec(),
        plot_series,
    })
}
