//! Core traits for regression estimators.

use crate::core::Dataset;
use faer::Col;
use thiserror::Error;

/// Inputs for which a line fit or its evaluation is mathematically undefined.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DegenerateInput {
    #[error("insufficient observations: need at least {needed}, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    #[error("all x values are identical, slope is undefined")]
    ConstantPredictor,

    #[error("y is constant but the fit leaves a residual sum of squares of {rss}")]
    ConstantTarget { rss: f64 },
}

/// Errors that can occur during fitting and evaluation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegressionError {
    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("degenerate input: {0}")]
    DegenerateInput(#[from] DegenerateInput),

    #[error("outlier count must be at least 1, got {0}")]
    InvalidOutlierCount(usize),
}

/// A regression estimator that can be fit to data.
///
/// Fitting returns a separate fitted model; the estimator itself is never
/// changed by a fit.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to the data.
    fn fit(&self, data: &Dataset) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted single-predictor line.
pub trait FittedRegressor {
    /// Estimated slope.
    fn slope(&self) -> f64;

    /// Estimated intercept.
    fn intercept(&self) -> f64;

    /// Evaluate the line at one point.
    fn predict_at(&self, x: f64) -> f64 {
        self.slope() * x + self.intercept()
    }

    /// Evaluate the line at every entry of `x`.
    fn predict(&self, x: &Col<f64>) -> Col<f64> {
        Col::from_fn(x.nrows(), |i| self.predict_at(x[i]))
    }

    /// Calculate the score (R²) on a dataset.
    fn score(&self, data: &Dataset) -> Result<f64, RegressionError> {
        let predictions = self.predict(data.x());
        crate::diagnostics::r_squared(data, &predictions)
    }
}
