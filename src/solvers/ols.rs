//! Ordinary Least Squares line fit for one predictor.

use crate::core::Dataset;
use crate::solvers::traits::{DegenerateInput, FittedRegressor, RegressionError, Regressor};
use crate::utils::center_vector;

/// Closed-form simple OLS estimator.
///
/// The slope is `Sxy / Sxx` on mean-centred data and the intercept is
/// `mean(y) - slope * mean(x)`. Centering first keeps the sums small when
/// `x` sits far from the origin.
///
/// # Example
///
/// ```rust,ignore
/// use regress_engine::prelude::*;
///
/// let data = Dataset::from_pairs(&[(0.0, 2.0), (1.0, 5.0), (2.0, 8.0)]);
/// let fitted = OlsRegressor::new().fit(&data)?;
///
/// println!("y = {} x + {}", fitted.slope(), fitted.intercept());
/// ```
#[derive(Debug, Clone)]
pub struct OlsRegressor {
    constant_tolerance: f64,
}

impl Default for OlsRegressor {
    fn default() -> Self {
        Self {
            constant_tolerance: 1e-10,
        }
    }
}

impl OlsRegressor {
    /// Create a regressor with the default constant-predictor tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spread below which `x` counts as constant.
    pub fn constant_tolerance(mut self, tol: f64) -> Self {
        self.constant_tolerance = tol;
        self
    }

    /// Check whether every `x` lies within the tolerance of the first one.
    pub fn is_constant_predictor(&self, data: &Dataset) -> bool {
        let x = data.x();
        if x.nrows() == 0 {
            return true;
        }
        let first = x[0];
        x.iter().all(|&xi| (xi - first).abs() < self.constant_tolerance)
    }
}

impl Regressor for OlsRegressor {
    type Fitted = FittedModel;

    fn fit(&self, data: &Dataset) -> Result<Self::Fitted, RegressionError> {
        let n_samples = data.len();

        // Need at least 2 observations
        if n_samples < 2 {
            return Err(DegenerateInput::InsufficientObservations {
                needed: 2,
                got: n_samples,
            }
            .into());
        }

        if self.is_constant_predictor(data) {
            return Err(DegenerateInput::ConstantPredictor.into());
        }

        let (x_centered, x_mean) = center_vector(data.x());
        let (y_centered, y_mean) = center_vector(data.y());

        let sxx: f64 = x_centered.iter().map(|&dx| dx * dx).sum();
        let sxy: f64 = x_centered
            .iter()
            .zip(y_centered.iter())
            .map(|(&dx, &dy)| dx * dy)
            .sum();

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;

        Ok(FittedModel {
            slope,
            intercept,
            n_observations: n_samples,
        })
    }
}

/// A fitted line, immutable once estimated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedModel {
    slope: f64,
    intercept: f64,
    n_observations: usize,
}

impl FittedModel {
    /// Number of observations the line was estimated from.
    pub fn n_observations(&self) -> usize {
        self.n_observations
    }
}

impl FittedRegressor for FittedModel {
    fn slope(&self) -> f64 {
        self.slope
    }

    fn intercept(&self) -> f64 {
        self.intercept
    }
}
