//! Regression solvers implementing least-squares estimation.

mod traits;
mod ols;
mod svd;

pub use traits::{LeastSquaresSolution, LeastSquaresSolver, RegressionError, Regressor, SolverError};
pub use ols::{OlsRegressor, OlsRegressorBuilder};
pub use svd::SvdSolver;
