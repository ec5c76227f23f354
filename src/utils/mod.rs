//! Utility functions for matrix operations.

mod matrix;

pub use matrix::{all_finite, linear_predictor, prepend_ones_column};
