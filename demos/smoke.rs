//! # Pipeline smoke run
//!
//! Runs every stage on the default parameters (n = 100, a = 2.0,
//! noise variance = 1.0, seed = 42) and prints what each one produced.
//! Useful as a quick check before starting the server.
//!
//! Run with: `cargo run --example smoke`

use regress_engine::diagnostics::{predict, r_squared, residuals, top_outliers};
use regress_engine::prelude::*;
use regress_engine::utils::value_range;

fn main() {
    println!("{}", "=".repeat(60));
    println!("Linear regression pipeline smoke run");
    println!("{}", "=".repeat(60));

    let params = GenerationParameters::default();
    params.validate().expect("default parameters are valid");
    println!(
        "\n1. Parameters: n = {}, a = {}, noise variance = {}, seed = {}",
        params.point_count, params.slope, params.noise_variance, params.seed
    );

    println!("\n2. Generating synthetic data...");
    let data = synthesize(&params).expect("synthesis should succeed");
    let (x_min, x_max) = value_range(data.x()).expect("dataset is not empty");
    let (y_min, y_max) = value_range(data.y()).expect("dataset is not empty");
    println!("   Generated {} data points", data.len());
    println!("   X range: [{x_min:.2}, {x_max:.2}]");
    println!("   Y range: [{y_min:.2}, {y_max:.2}]");

    println!("\n3. Fitting least-squares line...");
    let fitted = OlsRegressor::new().fit(&data).expect("fit should succeed");

    let predictions = predict(&fitted, &data);
    let resid = residuals(&data, &predictions).expect("lengths match");
    let r2 = r_squared(&data, &predictions).expect("target is not constant");

    println!("\n4. Model evaluation:");
    println!(
        "   Coefficient (a): {:.4} (target: {:.1})",
        fitted.slope(),
        params.slope
    );
    println!(
        "   Intercept (b):   {:.4} (target: {TRUE_INTERCEPT:.1})",
        fitted.intercept()
    );
    println!("   R² score:        {r2:.4}");

    println!("\n5. Top 5 outliers:");
    let outliers = top_outliers(&data, &predictions, &resid, 5).expect("k is positive");
    println!(
        "   {:>5} {:>8} {:>12} {:>14} {:>9}",
        "Point", "X", "Y (Actual)", "Y (Predicted)", "Residual"
    );
    for o in &outliers {
        println!(
            "   {:>5} {:>8.3} {:>12.3} {:>14.3} {:>9.3}",
            o.point_index, o.x, o.y_actual, o.y_predicted, o.residual
        );
    }

    println!("\n6. Assembling summary through the engine...");
    let summary = RegressionEngine::default()
        .run(&params)
        .expect("engine run should succeed");
    assert_eq!(summary.outliers, outliers);
    println!(
        "   Line from ({:.2}, {:.2}) to ({:.2}, {:.2})",
        summary.plot_series.line_endpoints_x[0],
        summary.plot_series.line_endpoints_y[0],
        summary.plot_series.line_endpoints_x[1],
        summary.plot_series.line_endpoints_y[1]
    );
    println!(
        "   Outlier markers (0-based): {:?}",
        summary.plot_series.outlier_indices
    );

    println!("\n{}", "=".repeat(60));
    println!("All stages completed");
    println!("{}", "=".repeat(60));
}
