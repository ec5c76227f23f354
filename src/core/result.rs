//! Regression result structures.

use faer::Col;

/// Summary of a least-squares fit.
///
/// Holds the learned parameters together with the training-set fit
/// statistics that fall out of the solve.
#[derive(Debug, Clone)]
pub struct RegressionResult {
    // ========== Core Results ==========
    /// Estimated coefficients (excluding intercept), one per feature.
    pub coefficients: Col<f64>,

    /// Intercept term (if model was fit with intercept).
    pub intercept: Option<f64>,

    /// Residuals (y - fitted_values).
    pub residuals: Col<f64>,

    /// Fitted values (predictions on training data).
    pub fitted_values: Col<f64>,

    // ========== Rank Information ==========
    /// Numerical rank of the design matrix, intercept column included.
    pub rank: usize,

    /// Singular values of the design matrix.
    pub singular_values: Col<f64>,

    /// Number of observations.
    pub n_observations: usize,

    /// Number of features (excluding intercept).
    pub n_features: usize,

    // ========== Fit Statistics ==========
    /// Residual sum of squares.
    pub rss: f64,

    /// Coefficient of determination (R²) on the training data.
    pub r_squared: f64,
}

impl RegressionResult {
    /// Number of estimated parameters (including intercept if present).
    pub fn n_parameters(&self) -> usize {
        self.n_features + usize::from(self.intercept.is_some())
    }

    /// Whether the design matrix was rank deficient.
    pub fn is_rank_deficient(&self) -> bool {
        self.rank < self.n_parameters()
    }

    /// Ratio of largest to smallest singular value.
    ///
    /// Infinite when the smallest singular value is zero.
    pub fn condition_number(&self) -> f64 {
        if self.singular_values.nrows() == 0 {
            return f64::NAN;
        }
        let max = self.singular_values.iter().fold(0.0_f64, |acc, &s| acc.max(s));
        let min = self
            .singular_values
            .iter()
            .fold(f64::INFINITY, |acc, &s| acc.min(s));
        if min == 0.0 {
            f64::INFINITY
        } else {
            max / min
        }
    }
}

/// Coefficient of determination of `predicted` against `observed`.
///
/// A constant target scores 1.0 when predicted exactly and 0.0 otherwise.
pub(crate) fn r_squared(observed: &Col<f64>, predicted: &Col<f64>) -> f64 {
    let n = observed.nrows();
    if n == 0 {
        return f64::NAN;
    }

    let y_mean: f64 = observed.iter().sum::<f64>() / n as f64;
    let tss: f64 = observed.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
    let rss: f64 = observed
        .iter()
        .zip(predicted.iter())
        .map(|(&yi, &pi)| (yi - pi).powi(2))
        .sum();

    if tss == 0.0 {
        if rss == 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        1.0 - rss / tss
    }
}
