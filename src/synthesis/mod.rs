//! Seeded generation of noisy linear datasets.

mod generator;

pub use generator::{synthesize, SynthesisError, Synthesizer, TRUE_INTERCEPT, X_HIGH, X_LOW};
