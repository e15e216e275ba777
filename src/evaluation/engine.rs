//! The end-to-end pipeline: synthesize, fit, predict, evaluate, summarize.

use log::debug;
use thiserror::Error;

use crate::core::{
    Dataset, EngineOptions, EvaluationSummary, GenerationParameters, OptionsError, ValidationError,
};
use crate::diagnostics::{predict, residuals, top_outliers};
use crate::evaluation::summary::summarize_with_precision;
use crate::solvers::{FittedModel, FittedRegressor, OlsRegressor, RegressionError, Regressor};
use crate::synthesis::{synthesize, SynthesisError};
use faer::Col;

/// Any failure of a pipeline run.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error(transparent)]
    Regression(#[from] RegressionError),
}

/// Every intermediate artifact of one run, plus its summary.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub dataset: Dataset,
    pub model: FittedModel,
    pub predictions: Col<f64>,
    pub residuals: Col<f64>,
    pub summary: EvaluationSummary,
}

/// Runs the regression pipeline.
///
/// The engine holds only configuration. Every call builds its own dataset and
/// model, so one engine can serve concurrent callers without locking.
///
/// # Example
///
/// ```rust,ignore
/// use regress_engine::prelude::*;
///
/// let engine = RegressionEngine::default();
/// let summary = engine.run(&GenerationParameters::default())?;
///
/// println!("slope = {}", summary.coefficients.slope);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegressionEngine {
    options: EngineOptions,
    regressor: OlsRegressor,
}

impl RegressionEngine {
    /// Create an engine with validated options.
    pub fn new(options: EngineOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            options,
            regressor: OlsRegressor::new(),
        })
    }

    /// Get the options this engine runs with.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Validate `params` and run the full pipeline, returning the summary.
    pub fn run(&self, params: &GenerationParameters) -> Result<EvaluationSummary, EngineError> {
        Ok(self.run_detailed(params)?.summary)
    }

    /// Validate `params` and run the full pipeline, keeping every artifact.
    pub fn run_detailed(&self, params: &GenerationParameters) -> Result<PipelineRun, EngineError> {
        params.validate()?;

        let dataset = synthesize(params)?;
        debug!(
            "synthesized {} points (slope={}, noise_variance={}, seed={})",
            dataset.len(),
            params.slope,
            params.noise_variance,
            params.seed
        );

        self.evaluate(dataset)
    }

    /// Fit and evaluate an existing dataset.
    pub fn evaluate(&self, dataset: Dataset) -> Result<PipelineRun, EngineError> {
        let model = self.regressor.fit(&dataset)?;
        debug!(
            "fitted slope={} intercept={}",
            model.slope(),
            model.intercept()
        );

        let predictions = predict(&model, &dataset);
        let residuals = residuals(&dataset, &predictions)?;
        let outliers = top_outliers(
            &dataset,
            &predictions,
            &residuals,
            self.options.outlier_count,
        )?;
        debug!("selected {} outliers", outliers.len());

        let summary = summarize_with_precision(
            &dataset,
            &model,
            &predictions,
            &residuals,
            &outliers,
            self.options.display_precision,
        )?;

        Ok(PipelineRun {
            dataset,
            model,
            predictions,
            residuals,
            summary,
        })
    }
}
