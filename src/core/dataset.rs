//! Paired observations.

use crate::solvers::RegressionError;
use faer::Col;

/// Ordered `(x, y)` observations stored as two columns of equal length.
#[derive(Debug, Clone)]
pub struct Dataset {
    x: Col<f64>,
    y: Col<f64>,
}

impl Dataset {
    /// Pair up two columns.
    pub fn new(x: Col<f64>, y: Col<f64>) -> Result<Self, RegressionError> {
        if x.nrows() != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: x.nrows(),
                y_len: y.nrows(),
            });
        }
        Ok(Self { x, y })
    }

    /// Pair up two columns already known to have the same length.
    pub(crate) fn from_columns(x: Col<f64>, y: Col<f64>) -> Self {
        debug_assert_eq!(x.nrows(), y.nrows());
        Self { x, y }
    }

    /// Build a dataset from `(x, y)` tuples.
    pub fn from_pairs(points: &[(f64, f64)]) -> Self {
        let n = points.len();
        Self {
            x: Col::from_fn(n, |i| points[i].0),
            y: Col::from_fn(n, |i| points[i].1),
        }
    }

    pub fn len(&self) -> usize {
        self.x.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn x(&self) -> &Col<f64> {
        &self.x
    }

    pub fn y(&self) -> &Col<f64> {
        &self.y
    }

    /// The `i`-th observation.
    ///
    /// # Panics
    /// If `i` is out of bounds.
    pub fn point(&self, i: usize) -> (f64, f64) {
        (self.x[i], self.y[i])
    }

    /// Iterate over observations in order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}
