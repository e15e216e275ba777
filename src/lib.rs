//! Synthetic linear data, simple least-squares fits and outlier reports.
//!
//! The pipeline draws a noisy line `y = a·x + 5 + ε` from a seed, fits it by
//! ordinary least squares, and reports the coefficients, R², the points with
//! the largest absolute residuals and everything needed to plot the result.
//! Every stage is a pure function of its inputs, so a seed always reproduces
//! the same summary.
//!
//! # Example
//!
//! ```rust,ignore
//! use regress_engine::prelude::*;
//!
//! let params = GenerationParameters::new(100, 2.0, 1.0, 42);
//! let summary = RegressionEngine::default().run(&params)?;
//!
//! println!("a = {}", summary.coefficients.slope);
//! println!("R² = {}", summary.coefficients.r_squared);
//! for outlier in &summary.outliers {
//!     println!("#{} residual {}", outlier.point_index, outlier.residual);
//! }
//! ```

pub mod core;
pub mod diagnostics;
pub mod evaluation;
pub mod server;
pub mod solvers;
pub mod synthesis;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        Coefficients, Dataset, EngineOptions, EngineOptionsBuilder, EvaluationSummary,
        GenerationParameters, OptionsError, OutlierRecord, PlotSeries, ValidationError,
    };
    pub use crate::diagnostics::{predict, r_squared, residuals, top_outliers};
    pub use crate::evaluation::{
        summarize, summarize_with_precision, EngineError, PipelineRun, RegressionEngine,
    };
    pub use crate::solvers::{
        DegenerateInput, FittedModel, FittedRegressor, OlsRegressor, RegressionError, Regressor,
    };
    pub use crate::synthesis::{synthesize, SynthesisError, Synthesizer, TRUE_INTERCEPT};
}

pub use crate::core::{Dataset, EvaluationSummary, GenerationParameters, OutlierRecord};
pub use crate::evaluation::{EngineError, RegressionEngine};
pub use crate::solvers::{FittedModel, RegressionError};
