//! Dataset synthesis tests.

use approx::assert_relative_eq;
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal, Uniform};
use regress_engine::core::GenerationParameters;
use regress_engine::synthesis::{synthesize, Synthesizer, TRUE_INTERCEPT, X_HIGH, X_LOW};
use statrs::statistics::Statistics;

#[test]
fn test_deterministic_for_fixed_inputs() {
    for seed in [0, 1, 42, 999, u64::MAX] {
        let params = GenerationParameters::new(75, 1.1, 4.0, seed);
        let first = synthesize(&params).unwrap();
        let second = synthesize(&params).unwrap();
        assert_eq!(first, second, "seed {seed} should reproduce its dataset");
    }
}

#[test]
fn test_length_matches_point_count() {
    for n in [20, 21, 137, 499, 500] {
        let data = synthesize(&GenerationParameters::new(n, 2.0, 1.0, 42)).unwrap();
        assert_eq!(data.len(), n);
    }
}

#[test]
fn test_x_within_sampling_range() {
    let data = synthesize(&GenerationParameters::new(500, 2.0, 1.0, 9)).unwrap();
    for &x in data.x().iter() {
        assert!((X_LOW..X_HIGH).contains(&x), "x = {x} outside [0, 10)");
    }

    // 500 uniform draws should cover most of the interval
    let mean = data.x().iter().mean();
    assert!((mean - 5.0).abs() < 0.5, "mean of x was {mean}");
}

#[test]
fn test_noise_variance_is_respected() {
    let params = GenerationParameters::new(500, 3.0, 4.0, 17);
    let data = synthesize(&params).unwrap();

    let noise: Vec<f64> = data
        .iter()
        .map(|(x, y)| y - (params.slope * x + TRUE_INTERCEPT))
        .collect();

    let mean = noise.iter().mean();
    let variance = noise.iter().variance();
    assert!(mean.abs() < 0.3, "noise mean was {mean}");
    assert!((variance - 4.0).abs() < 1.0, "noise variance was {variance}");
}

#[test]
fn test_slope_does_not_change_the_stream() {
    // The same seed draws the same x values and noise; only the line changes.
    let a = synthesize(&GenerationParameters::new(60, 1.0, 2.0, 8)).unwrap();
    let b = synthesize(&GenerationParameters::new(60, -2.0, 2.0, 8)).unwrap();

    for ((xa, ya), (xb, yb)) in a.iter().zip(b.iter()) {
        assert_eq!(xa, xb);
        assert_relative_eq!(ya - xa, yb + 2.0 * xb, epsilon = 1e-9);
    }
}

#[test]
fn test_explicit_rng_matches_seeded_run() {
    let params = GenerationParameters::new(40, 0.5, 1.5, 123);
    let synthesizer = Synthesizer::new().unwrap();

    let mut rng = StdRng::seed_from_u64(123);
    let from_rng = synthesizer.synthesize_with_rng(&params, &mut rng).unwrap();

    assert_eq!(from_rng, synthesizer.synthesize(&params).unwrap());
}

#[test]
fn test_stream_yields_all_x_then_all_noise() {
    for (n, slope, variance, seed) in [(20, 2.0, 1.0, 42), (57, -4.5, 9.0, 3), (200, 0.3, 0.25, 1001)] {
        let mut rng = StdRng::seed_from_u64(seed);
        let x_dist = Uniform::new(X_LOW, X_HIGH).unwrap();
        let noise_dist = Normal::new(0.0, f64::sqrt(variance)).unwrap();
        let xs: Vec<f64> = (0..n).map(|_| x_dist.sample(&mut rng)).collect();
        let noise: Vec<f64> = (0..n).map(|_| noise_dist.sample(&mut rng)).collect();

        let data = synthesize(&GenerationParameters::new(n, slope, variance, seed)).unwrap();
        for (i, (x, y)) in data.iter().enumerate() {
            assert_eq!(x, xs[i], "x[{i}] for seed {seed}");
            assert_eq!(y, slope * xs[i] + TRUE_INTERCEPT + noise[i], "y[{i}] for seed {seed}");
        }
    }
}
