//! Ranking of the worst-predicted points.

use crate::core::{Dataset, OutlierRecord};
use crate::solvers::RegressionError;
use faer::Col;

/// Select the `k` points with the largest residuals.
///
/// Indices are stably sorted by residual, largest first, so exactly equal
/// residuals keep dataset order. Returns `min(k, n)` records.
pub fn top_outliers(
    data: &Dataset,
    predictions: &Col<f64>,
    residuals: &Col<f64>,
    k: usize,
) -> Result<Vec<OutlierRecord>, RegressionError> {
    if k < 1 {
        return Err(RegressionError::InvalidOutlierCount(k));
    }
    for len in [predictions.nrows(), residuals.nrows()] {
        if len != data.len() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: data.len(),
                y_len: len,
            });
        }
    }

    let mut order: Vec<usize> = (0..data.len()).collect();
    order.sort_by(|&a, &b| residuals[b].total_cmp(&residuals[a]));

    Ok(order
        .into_iter()
        .take(k)
        .map(|i| {
            let (x, y) = data.point(i);
            OutlierRecord {
                point_index: i + 1,
                x,
                y_actual: y,
                y_predicted: predictions[i],
                residual: residuals[i],
            }
        })
        .collect())
}

/// 0-based dataset positions of the given records, in the same order.
pub fn outlier_positions(outliers: &[OutlierRecord]) -> Vec<usize> {
    outliers.iter().map(OutlierRecord::position).collect()
}
