//! Ordinary Least Squares regression solver.

use crate::core::{
    r_squared, OptionsError, RegressionOptions, RegressionOptionsBuilder, RegressionResult,
};
use crate::solvers::svd::SvdSolver;
use crate::solvers::traits::{
    LeastSquaresSolution, LeastSquaresSolver, RegressionError, Regressor,
};
use crate::utils::{linear_predictor, prepend_ones_column};
use faer::{Col, Mat};
use log::debug;

/// Ordinary Least Squares regression estimator.
///
/// Solves `min ||[1 | X] w - y||` (or `min ||X w - y||` without intercept)
/// through a [`LeastSquaresSolver`], SVD by default. Rank-deficient and
/// underdetermined designs get the minimum-norm solution rather than an
/// error.
///
/// The estimator is fit in place: `fit` stores the parameters on `self` and
/// returns `&mut Self`, so fitting and predicting can be chained.
///
/// # Example
///
/// ```rust,ignore
/// use linreg::prelude::*;
/// use faer::{Mat, Col};
///
/// let x = Mat::from_fn(100, 2, |i, j| (i * (j + 1)) as f64);
/// let y = Col::from_fn(100, |i| 1.0 + 2.0 * i as f64);
///
/// let mut model = OlsRegressor::new(true);
/// let predictions = model.fit(&x, &y)?.predict(&x)?;
///
/// println!("Coefficients: {:?}", model.coefficients());
/// ```
#[derive(Debug, Clone)]
pub struct OlsRegressor<S = SvdSolver> {
    options: RegressionOptions,
    solver: S,
    fitted: Option<RegressionResult>,
}

impl OlsRegressor {
    /// Create an unfitted regressor using the default SVD solver.
    pub fn new(fit_intercept: bool) -> Self {
        Self::from_options(RegressionOptions {
            with_intercept: fit_intercept,
            ..Default::default()
        })
    }

    /// Create an unfitted regressor from options.
    ///
    /// The options are not validated; use [`OlsRegressor::builder`] for that.
    pub fn from_options(options: RegressionOptions) -> Self {
        let solver = match options.rcond {
            Some(rcond) => SvdSolver::with_rcond(rcond),
            None => SvdSolver::new(),
        };
        Self::with_solver(options, solver)
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> OlsRegressorBuilder {
        OlsRegressorBuilder::default()
    }
}

impl Default for OlsRegressor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<S: LeastSquaresSolver> OlsRegressor<S> {
    /// Create an unfitted regressor backed by a custom least-squares solver.
    pub fn with_solver(options: RegressionOptions, solver: S) -> Self {
        Self {
            options,
            solver,
            fitted: None,
        }
    }

    /// Whether the model includes an intercept term.
    pub fn fit_intercept(&self) -> bool {
        self.options.with_intercept
    }

    /// Get the options used to configure this model.
    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }

    /// Get the underlying least-squares solver.
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Number of features seen during the most recent fit.
    pub fn n_features(&self) -> Option<usize> {
        self.fitted.as_ref().map(|r| r.n_features)
    }
}

impl<S: LeastSquaresSolver> Regressor for OlsRegressor<S> {
    fn fit(&mut self, x: &Mat<f64>, y: &Col<f64>) -> Result<&mut Self, RegressionError> {
        let n_samples = x.nrows();
        let n_features = x.ncols();

        // Validate dimensions before touching the solver
        if n_samples != y.nrows() {
            return Err(RegressionError::InvalidShape {
                x_rows: n_samples,
                y_len: y.nrows(),
            });
        }

        if n_samples == 0 || n_features == 0 {
            return Err(RegressionError::EmptyInput {
                rows: n_samples,
                cols: n_features,
            });
        }

        let with_intercept = self.options.with_intercept;
        let LeastSquaresSolution {
            solution,
            rank,
            singular_values,
        } = if with_intercept {
            let design = prepend_ones_column(x);
            self.solver.solve(&design, y)?
        } else {
            self.solver.solve(x, y)?
        };

        // Leading entry belongs to the ones column
        let (intercept, coefficients) = if with_intercept {
            (
                Some(solution[0]),
                Col::from_fn(n_features, |j| solution[j + 1]),
            )
        } else {
            (None, solution)
        };

        let fitted_values = linear_predictor(x, &coefficients, intercept);
        let residuals = Col::from_fn(n_samples, |i| y[i] - fitted_values[i]);
        let rss: f64 = residuals.iter().map(|&r| r * r).sum();

        let n_params = n_features + usize::from(with_intercept);
        debug!(
            "ols fit: n_samples={}, n_features={}, intercept={}, rank={}/{}, rss={:e}",
            n_samples, n_features, with_intercept, rank, n_params, rss
        );

        self.fitted = Some(RegressionResult {
            r_squared: r_squared(y, &fitted_values),
            coefficients,
            intercept,
            residuals,
            fitted_values,
            rank,
            singular_values,
            n_observations: n_samples,
            n_features,
            rss,
        });

        Ok(self)
    }

    fn predict(&self, x: &Mat<f64>) -> Result<Col<f64>, RegressionError> {
        let result = self.fitted.as_ref().ok_or(RegressionError::UnfittedModel)?;

        if x.ncols() != result.n_features {
            return Err(RegressionError::DimensionMismatch {
                expected: result.n_features,
                got: x.ncols(),
            });
        }

        Ok(linear_predictor(x, &result.coefficients, result.intercept))
    }

    fn result(&self) -> Option<&RegressionResult> {
        self.fitted.as_ref()
    }
}

/// Builder for `OlsRegressor`.
#[derive(Debug, Clone, Default)]
pub struct OlsRegressorBuilder {
    builder: RegressionOptionsBuilder,
}

impl OlsRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to include an intercept term.
    pub fn with_intercept(mut self, include: bool) -> Self {
        self.builder = self.builder.with_intercept(include);
        self
    }

    /// Set the relative singular-value cutoff of the SVD solver.
    pub fn rcond(mut self, rcond: f64) -> Self {
        self.builder = self.builder.rcond(rcond);
        self
    }

    /// Validate the options and build the OLS regressor.
    pub fn build(self) -> Result<OlsRegressor, OptionsError> {
        Ok(OlsRegressor::from_options(self.builder.build()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fit() {
        let x = Mat::from_fn(5, 1, |i, _| i as f64);
        let y = Col::from_fn(5, |i| 2.0 + 3.0 * i as f64);

        let mut model = OlsRegressor::new(true);
        model.fit(&x, &y).expect("model should fit");

        assert!((model.coefficients().expect("fitted")[0] - 3.0).abs() < 1e-10);
        assert!((model.intercept().expect("intercept exists") - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_predict() {
        let x = Mat::from_fn(5, 1, |i, _| i as f64);
        let y = Col::from_fn(5, |i| 2.0 + 3.0 * i as f64);

        let mut model = OlsRegressor::new(true);
        let x_new = Mat::from_fn(2, 1, |i, _| (i + 10) as f64);
        let preds = model
            .fit(&x, &y)
            .expect("model should fit")
            .predict(&x_new)
            .expect("model should predict");

        assert!((preds[0] - (2.0 + 3.0 * 10.0)).abs() < 1e-10);
        assert!((preds[1] - (2.0 + 3.0 * 11.0)).abs() < 1e-10);
    }

    #[test]
    fn test_default_fits_intercept() {
        let model = OlsRegressor::default();
        assert!(model.fit_intercept());
        assert!(!model.is_fitted());
        assert!(model.n_features().is_none());
    }

    #[test]
    fn test_builder_forwards_rcond() {
        let model = OlsRegressor::builder()
            .with_intercept(false)
            .rcond(1e-8)
            .build()
            .expect("valid options");

        assert!(!model.fit_intercept());
        assert_eq!(model.solver().rcond_for(5, 2), 1e-8);
    }

    #[test]
    fn test_builder_rejects_negative_rcond() {
        let result = OlsRegressor::builder().rcond(-1.0).build();
        assert!(matches!(result, Err(OptionsError::InvalidTolerance(_))));
    }

    #[test]
    fn test_empty_input() {
        let mut model = OlsRegressor::new(true);
        let err = model
            .fit(&Mat::zeros(3, 0), &Col::zeros(3))
            .map(|_| ())
            .unwrap_err();
        assert!(matches!(err, RegressionError::EmptyInput { rows: 3, cols: 0 }));
    }
}
