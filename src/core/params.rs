//! Generation parameters and their boundary validation.

use std::ops::RangeInclusive;
use thiserror::Error;

/// Accepted number of synthesized points.
pub const POINT_COUNT_RANGE: RangeInclusive<usize> = 20..=500;

/// Accepted true slope of the generating line.
pub const SLOPE_RANGE: RangeInclusive<f64> = -5.0..=5.0;

/// Accepted variance of the injected Gaussian noise.
pub const NOISE_VARIANCE_RANGE: RangeInclusive<f64> = 0.0..=10.0;

/// A caller-supplied parameter outside its allowed range.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("point_count must be between 20 and 500, got {0}")]
    PointCount(i64),

    #[error("slope must be between -5.0 and 5.0, got {0}")]
    Slope(f64),

    #[error("noise_variance must be between 0.0 and 10.0, got {0}")]
    NoiseVariance(f64),
}

/// Shape and seed of one synthetic dataset.
///
/// Values are plain data; the pipeline never mutates them. Call
/// [`GenerationParameters::validate`] (or build through
/// [`GenerationParameters::try_new`]) before handing them to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParameters {
    /// Number of points to draw.
    pub point_count: usize,
    /// True slope `a` in `y = a·x + 5 + noise`.
    pub slope: f64,
    /// Variance of the Gaussian noise term.
    pub noise_variance: f64,
    /// Seed of the random stream.
    pub seed: u64,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            point_count: 100,
            slope: 2.0,
            noise_variance: 1.0,
            seed: 42,
        }
    }
}

impl GenerationParameters {
    /// Create parameters without validating them.
    pub fn new(point_count: usize, slope: f64, noise_variance: f64, seed: u64) -> Self {
        Self {
            point_count,
            slope,
            noise_variance,
            seed,
        }
    }

    /// Create parameters from a possibly negative point count and validate them.
    pub fn try_new(
        point_count: i64,
        slope: f64,
        noise_variance: f64,
        seed: u64,
    ) -> Result<Self, ValidationError> {
        let point_count =
            usize::try_from(point_count).map_err(|_| ValidationError::PointCount(point_count))?;
        let params = Self::new(point_count, slope, noise_variance, seed);
        params.validate()?;
        Ok(params)
    }

    /// Check every field against its range, in declaration order.
    ///
    /// NaN never lies inside a range and is rejected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !POINT_COUNT_RANGE.contains(&self.point_count) {
            let got = i64::try_from(self.point_count).unwrap_or(i64::MAX);
            return Err(ValidationError::PointCount(got));
        }
        if !SLOPE_RANGE.contains(&self.slope) {
            return Err(ValidationError::Slope(self.slope));
        }
        if !NOISE_VARIANCE_RANGE.contains(&self.noise_variance) {
            return Err(ValidationError::NoiseVariance(self.noise_variance));
        }
        Ok(())
    }
}
