//! Matrix utility functions.

use faer::{Col, Mat};

/// Build the intercept design matrix `[1 | X]`.
///
/// The ones column is placed first so that the leading solution entry maps
/// to the intercept.
pub fn prepend_ones_column(x: &Mat<f64>) -> Mat<f64> {
    Mat::from_fn(x.nrows(), x.ncols() + 1, |i, j| {
        if j == 0 {
            1.0
        } else {
            x[(i, j - 1)]
        }
    })
}

/// Check that every entry of the matrix and the vector is finite.
pub fn all_finite(a: &Mat<f64>, b: &Col<f64>) -> bool {
    let matrix_ok = (0..a.ncols()).all(|j| (0..a.nrows()).all(|i| a[(i, j)].is_finite()));
    matrix_ok && b.iter().all(|v| v.is_finite())
}

/// Compute `X * beta + intercept` row by row.
///
/// Each row is accumulated over features from left to right before the
/// intercept is added. Callers must ensure `x.ncols() == beta.nrows()`.
pub fn linear_predictor(x: &Mat<f64>, beta: &Col<f64>, intercept: Option<f64>) -> Col<f64> {
    let n_features = x.ncols();
    Col::from_fn(x.nrows(), |i| {
        let mut pred = 0.0;
        for j in 0..n_features {
            pred += x[(i, j)] * beta[j];
        }
        match intercept {
            Some(b0) => pred + b0,
            None => pred,
        }
    })
}
