//! Core types for the regression pipeline.

mod dataset;
mod options;
mod params;
mod result;

pub use dataset::Dataset;
pub use options::{
    EngineOptions, EngineOptionsBuilder, OptionsError, DEFAULT_DISPLAY_PRECISION,
    DEFAULT_OUTLIER_COUNT,
};
pub use params::{
    GenerationParameters, ValidationError, NOISE_VARIANCE_RANGE, POINT_COUNT_RANGE, SLOPE_RANGE,
};
pub use result::{Coefficients, EvaluationSummary, OutlierRecord, PlotSeries};
