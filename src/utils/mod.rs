//! Numeric utilities shared by the pipeline stages.

mod stats;

pub use stats::{center_vector, round_to, total_sum_of_squares, value_range};
