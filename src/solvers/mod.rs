//! Line fitting.

mod ols;
mod traits;

pub use ols::{FittedModel, OlsRegressor};
pub use traits::{DegenerateInput, FittedRegressor, RegressionError, Regressor};
