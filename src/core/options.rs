//! Engine options and configuration.

use thiserror::Error;

/// Number of outliers reported and marked on the plot by default.
pub const DEFAULT_OUTLIER_COUNT: usize = 5;

/// Decimal digits kept when coefficients are reported.
pub const DEFAULT_DISPLAY_PRECISION: u32 = 4;

/// Largest precision that still changes an `f64` when rounding.
const MAX_DISPLAY_PRECISION: u32 = 15;

/// Configuration options for the regression engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// How many of the worst-predicted points to report (default: 5).
    pub outlier_count: usize,
    /// Decimal digits for reported coefficients (default: 4).
    pub display_precision: u32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            outlier_count: DEFAULT_OUTLIER_COUNT,
            display_precision: DEFAULT_DISPLAY_PRECISION,
        }
    }
}

/// Errors that can occur when validating engine options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("outlier_count must be at least 1, got {0}")]
    InvalidOutlierCount(usize),
    #[error("display_precision must be at most 15, got {0}")]
    InvalidDisplayPrecision(u32),
}

impl EngineOptions {
    /// Create a new builder for engine options.
    pub fn builder() -> EngineOptionsBuilder {
        EngineOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.outlier_count < 1 {
            return Err(OptionsError::InvalidOutlierCount(self.outlier_count));
        }
        if self.display_precision > MAX_DISPLAY_PRECISION {
            return Err(OptionsError::InvalidDisplayPrecision(
                self.display_precision,
            ));
        }
        Ok(())
    }
}

/// Builder for `EngineOptions`.
#[derive(Debug, Clone, Default)]
pub struct EngineOptionsBuilder {
    options: EngineOptions,
}

impl EngineOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many outliers are selected.
    pub fn outlier_count(mut self, k: usize) -> Self {
        self.options.outlier_count = k;
        self
    }

    /// Set the number of decimal digits for reported coefficients.
    pub fn display_precision(mut self, digits: u32) -> Self {
        self.options.display_precision = digits;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<EngineOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> EngineOptions {
        self.options
    }
}
