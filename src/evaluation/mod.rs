//! Pipeline orchestration and summary assembly.

mod engine;
mod summary;

pub use engine::{EngineError, PipelineRun, RegressionEngine};
pub use summary::{summarize, summarize_with_precision};
