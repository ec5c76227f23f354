//! Ordinary least squares linear regression.
//!
//! This library provides a fit-in-place OLS estimator with an optional
//! intercept, backed by an SVD least-squares solve from `faer`. Rank-deficient
//! and underdetermined designs are solved in the minimum-norm sense instead of
//! failing.
//!
//! # Example
//!
//! ```rust,ignore
//! use linreg::prelude::*;
//!
//! // y = 1 + 2x
//! let x = Mat::from_fn(3, 1, |i, _| (i + 1) as f64);
//! let y = Col::from_fn(3, |i| 1.0 + 2.0 * (i + 1) as f64);
//!
//! let mut model = OlsRegressor::new(true);
//! model.fit(&x, &y)?;
//!
//! let x_new = Mat::from_fn(1, 1, |_, _| 4.0);
//! let predictions = model.predict(&x_new)?; // [9.0]
//! println!("intercept = {:?}", model.intercept());
//! ```
//!
//! Fitting takes `&mut self`; a shared instance must be synchronized by the
//! caller before refitting. Prediction only reads fitted state.

pub mod core;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        OptionsError, RegressionOptions, RegressionOptionsBuilder, RegressionResult,
    };
    pub use crate::solvers::{
        LeastSquaresSolution, LeastSquaresSolver, OlsRegressor, OlsRegressorBuilder,
        RegressionError, Regressor, SolverError, SvdSolver,
    };
    pub use faer::{Col, Mat};
}

pub use crate::core::{
    OptionsError, RegressionOptions, RegressionOptionsBuilder, RegressionResult,
};
pub use crate::solvers::{
    LeastSquaresSolution, LeastSquaresSolver, OlsRegressor, RegressionError, Regressor,
    SolverError, SvdSolver,
};
