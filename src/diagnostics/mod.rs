//! Fit evaluation: predictions, residuals, R² and outliers.
//!
//! Residuals here are absolute differences `|y - ŷ|`, which is what outlier
//! ranking needs; the fitter works with squared errors internally.
//!
//! # Example
//!
//! ```rust,ignore
//! use regress_engine::diagnostics::{predict, r_squared, residuals, top_outliers};
//!
//! let predictions = predict(&fitted, &data);
//! let resid = residuals(&data, &predictions)?;
//! let r2 = r_squared(&data, &predictions)?;
//! let worst = top_outliers(&data, &predictions, &resid, 5)?;
//! ```

mod outliers;
mod residuals;

pub use outliers::{outlier_positions, top_outliers};
pub use residuals::{predict, r_squared, residuals};
pub(crate) use residuals::r_squared_from_residuals;
