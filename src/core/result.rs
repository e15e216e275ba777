//! Evaluation result structures.

/// Reported fit coefficients, rounded for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Estimated slope.
    pub slope: f64,
    /// Estimated intercept.
    pub intercept: f64,
    /// Coefficient of determination (R²).
    pub r_squared: f64,
}

/// One of the worst-predicted points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierRecord {
    /// 1-based position in the dataset.
    pub point_index: usize,
    pub x: f64,
    pub y_actual: f64,
    pub y_predicted: f64,
    /// Absolute residual `|y_actual - y_predicted|`.
    pub residual: f64,
}

impl OutlierRecord {
    /// 0-based position in the dataset.
    ///
    /// # Panics
    /// Panics if `point_index` is 0, since records are numbered from 1.
    pub fn position(&self) -> usize {
        assert!(self.point_index >= 1, "point_index is 1-based, got 0");
        self.point_index - 1
    }
}

/// Everything needed to draw the scatter plot and the fitted line.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub predictions: Vec<f64>,
    /// 0-based indices of the reported outliers, in ranking order.
    pub outlier_indices: Vec<usize>,
    /// `[min x, max x]`.
    pub line_endpoints_x: [f64; 2],
    /// Fitted line evaluated at `line_endpoints_x`.
    pub line_endpoints_y: [f64; 2],
}

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationSummary {
    pub coefficients: Coefficients,
    /// Outliers ordered by residual, largest first.
    pub outliers: Vec<OutlierRecord>,
    pub plot_series: PlotSeries,
}
