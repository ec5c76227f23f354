//! Core types for regression analysis.

mod options;
mod result;

pub use options::{OptionsError, RegressionOptions, RegressionOptionsBuilder};
pub use result::RegressionResult;
pub(crate) use result::r_squared;
