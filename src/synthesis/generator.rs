use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{uniform::Error as UniformError, Distribution, Normal, NormalError, Uniform};
use thiserror::Error;

use crate::core::{Dataset, GenerationParameters};
use faer::Col;

/// Intercept of the generating line, fixed by the domain model.
pub const TRUE_INTERCEPT: f64 = 5.0;

/// Inclusive lower bound of the sampled `x` values.
pub const X_LOW: f64 = 0.0;

/// Exclusive upper bound of the sampled `x` values.
pub const X_HIGH: f64 = 10.0;

/// Error returned when the sampling distributions cannot be built, which only
/// happens for parameters that skipped validation.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("invalid noise distribution: {0}")]
    Noise(#[from] NormalError),

    #[error("invalid x distribution: {0}")]
    Range(#[from] UniformError),
}

/// Draws `y = slope·x + 5 + ε` datasets from a single seeded stream.
///
/// The stream is consumed in a fixed order: all `point_count` x values first,
/// then all `point_count` noise values. Keeping that order is what makes a
/// seed reproduce the same dataset.
pub struct Synthesizer {
    x_range: Uniform<f64>,
}

impl Synthesizer {
    /// Creates a new `Synthesizer` sampling `x` uniformly from `[0, 10)`.
    pub fn new() -> Result<Self, SynthesisError> {
        Ok(Self {
            x_range: Uniform::new(X_LOW, X_HIGH)?,
        })
    }

    /// Generates the dataset for `params` from a fresh `StdRng` seeded with
    /// `params.seed`.
    pub fn synthesize(&self, params: &GenerationParameters) -> Result<Dataset, SynthesisError> {
        let mut rng = StdRng::seed_from_u64(params.seed);
        self.synthesize_with_rng(params, &mut rng)
    }

    /// Generates a dataset drawing from the given random stream.
    ///
    /// # Arguments
    /// * `params` - Shape of the dataset, `params.seed` is ignored.
    /// * `rng` - The stream to draw the x values and then the noise from.
    pub fn synthesize_with_rng<R: Rng>(
        &self,
        params: &GenerationParameters,
        rng: &mut R,
    ) -> Result<Dataset, SynthesisError> {
        let n = params.point_count;
        let noise = Normal::new(0.0, params.noise_variance.sqrt())?;

        let x: Vec<f64> = (0..n).map(|_| self.x_range.sample(rng)).collect();
        let eps: Vec<f64> = (0..n).map(|_| noise.sample(rng)).collect();

        let x = Col::from_fn(n, |i| x[i]);
        let y = Col::from_fn(n, |i| params.slope * x[i] + TRUE_INTERCEPT + eps[i]);

        Ok(Dataset::from_columns(x, y))
    }
}

/// Generates the dataset for `params`.
///
/// Identical parameters always produce identical datasets.
pub fn synthesize(params: &GenerationParameters) -> Result<Dataset, SynthesisError> {
    Synthesizer::new()?.synthesize(params)
}
