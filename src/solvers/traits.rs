//! Core traits for regression estimators.

use crate::core::{r_squared, OptionsError, RegressionResult};
use faer::{Col, Mat};
use thiserror::Error;

/// Errors raised by a least-squares solve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("shape mismatch: A has {a_rows} rows but b has {b_len} elements")]
    ShapeMismatch { a_rows: usize, b_len: usize },

    #[error("input contains NaN or infinite values")]
    NonFinite,

    #[error("singular value decomposition did not converge")]
    NoConvergence,
}

/// Errors that can occur during regression fitting and prediction.
#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("invalid shape: X has {x_rows} rows but y has {y_len} elements")]
    InvalidShape { x_rows: usize, y_len: usize },

    #[error("empty input: X is {rows}x{cols}, need at least one sample and one feature")]
    EmptyInput { rows: usize, cols: usize },

    #[error("model has not been fitted")]
    UnfittedModel,

    #[error("dimension mismatch: model was fit on {expected} features but X has {got} columns")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("least squares solve failed: {0}")]
    Solver(#[from] SolverError),

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),
}

/// Solution of `min ||A x - b||`.
#[derive(Debug, Clone)]
pub struct LeastSquaresSolution {
    /// Minimizer of the residual norm with the smallest Euclidean norm.
    pub solution: Col<f64>,
    /// Number of singular values above the cutoff.
    pub rank: usize,
    /// Singular values of `A`.
    pub singular_values: Col<f64>,
}

/// A dense least-squares primitive.
///
/// Implementations must return the minimum-norm solution when `A` is
/// rank deficient or has more columns than rows.
pub trait LeastSquaresSolver {
    /// Solve `min ||A x - b||` for `x`.
    fn solve(&self, a: &Mat<f64>, b: &Col<f64>) -> Result<LeastSquaresSolution, SolverError>;
}

/// A regression estimator that is fit in place and then predicts.
///
/// `fit` takes `&mut self`, so a single instance cannot be refit from several
/// threads without external synchronization. `predict` and `score` only read
/// the fitted state and may be called concurrently.
pub trait Regressor {
    /// Fit the model to the data, replacing any previously fitted state.
    ///
    /// # Arguments
    /// * `x` - Design matrix of shape (n_samples, n_features)
    /// * `y` - Target vector of length n_samples
    ///
    /// # Returns
    /// The regressor itself, so calls can be chained.
    fn fit(&mut self, x: &Mat<f64>, y: &Col<f64>) -> Result<&mut Self, RegressionError>;

    /// Make predictions on new data.
    ///
    /// # Arguments
    /// * `x` - Design matrix of shape (n_samples, n_features)
    ///
    /// # Returns
    /// Predicted values vector of length n_samples.
    fn predict(&self, x: &Mat<f64>) -> Result<Col<f64>, RegressionError>;

    /// Access the fit summary, `None` before the first successful fit.
    fn result(&self) -> Option<&RegressionResult>;

    /// Whether the model has been fitted.
    fn is_fitted(&self) -> bool {
        self.result().is_some()
    }

    /// Get the coefficients (convenience method).
    fn coefficients(&self) -> Option<&Col<f64>> {
        self.result().map(|r| &r.coefficients)
    }

    /// Get the intercept (convenience method).
    fn intercept(&self) -> Option<f64> {
        self.result().and_then(|r| r.intercept)
    }

    /// Calculate the score (R²) on new data.
    ///
    /// # Arguments
    /// * `x` - Design matrix
    /// * `y` - True target values
    fn score(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<f64, RegressionError> {
        if x.nrows() != y.nrows() {
            return Err(RegressionError::InvalidShape {
                x_rows: x.nrows(),
                y_len: y.nrows(),
            });
        }
        let predictions = self.predict(x)?;
        Ok(r_squared(y, &predictions))
    }
}
