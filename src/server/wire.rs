//! JSON shapes of the `/generate` endpoint.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

use crate::core::{EvaluationSummary, GenerationParameters, OutlierRecord, ValidationError};

/// Body of `POST /generate`. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GenerateRequest {
    #[serde(deserialize_with = "integral_i64")]
    pub n_points: i64,
    pub coefficient_a: f64,
    pub noise_variance: f64,
    #[serde(deserialize_with = "integral_u64")]
    pub random_seed: u64,
}

/// Accepts `100` and `100.0`, rejects `100.5`.
fn integral_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let n = Number::deserialize(deserializer)?;
    if let Some(v) = n.as_i64() {
        return Ok(v);
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(D::Error::custom(format!("expected an integer, got {n}"))),
    }
}

fn integral_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let n = Number::deserialize(deserializer)?;
    if let Some(v) = n.as_u64() {
        return Ok(v);
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= 0.0 && f < u64::MAX as f64 => Ok(f as u64),
        _ => Err(D::Error::custom(format!(
            "expected a non-negative integer, got {n}"
        ))),
    }
}

impl Default for GenerateRequest {
    fn default() -> Self {
        let params = GenerationParameters::default();
        Self {
            n_points: params.point_count as i64,
            coefficient_a: params.slope,
            noise_variance: params.noise_variance,
            random_seed: params.seed,
        }
    }
}

impl GenerateRequest {
    /// Parse a request body; an empty body means all defaults.
    pub fn from_body(body: &[u8]) -> serde_json::Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }

    /// Convert into validated generation parameters.
    pub fn into_params(self) -> Result<GenerationParameters, ValidationError> {
        GenerationParameters::try_new(
            self.n_points,
            self.coefficient_a,
            self.noise_variance,
            self.random_seed,
        )
    }
}

/// Client-facing message for a rejected parameter, using the wire field names.
pub fn validation_message(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::PointCount(_) => "n_points must be between 20 and 500",
        ValidationError::Slope(_) => "coefficient_a must be between -5.0 and 5.0",
        ValidationError::NoiseVariance(_) => "noise_variance must be between 0.0 and 10.0",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub y_pred: Vec<f64>,
    pub outlier_indices: Vec<usize>,
    pub x_line: [f64; 2],
    pub y_line: [f64; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireCoefficients {
    pub coefficient_a: f64,
    pub intercept_b: f64,
    pub r_squared: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireOutlier {
    #[serde(rename = "Point")]
    pub point: usize,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y (Actual)")]
    pub y_actual: f64,
    #[serde(rename = "Y (Predicted)")]
    pub y_predicted: f64,
    #[serde(rename = "Residual")]
    pub residual: f64,
}

impl From<&OutlierRecord> for WireOutlier {
    fn from(record: &OutlierRecord) -> Self {
        Self {
            point: record.point_index,
            x: record.x,
            y_actual: record.y_actual,
            y_predicted: record.y_predicted,
            residual: record.residual,
        }
    }
}

/// Successful `/generate` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub plot_data: PlotData,
    pub coefficients: WireCoefficients,
    pub outliers: Vec<WireOutlier>,
    /// The slope the data was generated with.
    pub target_coefficient: f64,
}

impl GenerateResponse {
    pub fn from_summary(summary: EvaluationSummary, target_coefficient: f64) -> Self {
        let EvaluationSummary {
            coefficients,
            outliers,
            plot_series,
        } = summary;

        Self {
            plot_data: PlotData {
                x: plot_series.x,
                y: plot_series.y,
                y_pred: plot_series.predictions,
                outlier_indices: plot_series.outlier_indices,
                x_line: plot_series.line_endpoints_x,
                y_line: plot_series.line_endpoints_y,
            },
            coefficients: WireCoefficients {
                coefficient_a: coefficients.slope,
                intercept_b: coefficients.intercept,
                r_squared: coefficients.r_squared,
            },
            outliers: outliers.iter().map(WireOutlier::from).collect(),
            target_coefficient,
        }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
