//! Least squares via the singular value decomposition.

use crate::solvers::traits::{LeastSquaresSolution, LeastSquaresSolver, SolverError};
use crate::utils::all_finite;
use faer::{Col, Mat};
use log::trace;

/// SVD-based least-squares solver.
///
/// Computes `x = V Σ⁺ Uᵀ b` from the thin decomposition `A = U Σ Vᵀ`.
/// Singular values at or below `rcond * σ_max` are dropped, which yields the
/// minimum-norm solution for rank-deficient and underdetermined systems.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SvdSolver {
    rcond: Option<f64>,
}

impl SvdSolver {
    /// Create a solver with the default cutoff `ε * max(n_rows, n_cols)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with an explicit relative cutoff.
    pub fn with_rcond(rcond: f64) -> Self {
        Self { rcond: Some(rcond) }
    }

    /// Relative cutoff applied to a matrix of the given shape.
    pub fn rcond_for(&self, n_rows: usize, n_cols: usize) -> f64 {
        self.rcond
            .unwrap_or_else(|| f64::EPSILON * n_rows.max(n_cols) as f64)
    }
}

impl LeastSquaresSolver for SvdSolver {
    fn solve(&self, a: &Mat<f64>, b: &Col<f64>) -> Result<LeastSquaresSolution, SolverError> {
        let n_rows = a.nrows();
        let n_cols = a.ncols();

        if n_rows != b.nrows() {
            return Err(SolverError::ShapeMismatch {
                a_rows: n_rows,
                b_len: b.nrows(),
            });
        }

        if !all_finite(a, b) {
            return Err(SolverError::NonFinite);
        }

        if n_rows == 0 || n_cols == 0 {
            return Ok(LeastSquaresSolution {
                solution: Col::zeros(n_cols),
                rank: 0,
                singular_values: Col::zeros(0),
            });
        }

        let svd = a.thin_svd().map_err(|_| SolverError::NoConvergence)?;
        let u = svd.U();
        let v = svd.V();
        let s = svd.S().column_vector();
        let k = n_rows.min(n_cols);

        let singular_values = Col::from_fn(k, |i| s[i]);
        let s_max = singular_values.iter().fold(0.0_f64, |acc, &sv| acc.max(sv));
        let cutoff = self.rcond_for(n_rows, n_cols) * s_max;

        // Project b onto the retained left singular vectors, scaled by 1/σ.
        let mut rank = 0;
        let mut scaled = Col::<f64>::zeros(k);
        for i in 0..k {
            if singular_values[i] > cutoff {
                let mut utb = 0.0;
                for r in 0..n_rows {
                    utb += u[(r, i)] * b[r];
                }
                scaled[i] = utb / singular_values[i];
                rank += 1;
            }
        }

        trace!(
            "svd least squares: shape={}x{}, cutoff={:e}, rank={}",
            n_rows,
            n_cols,
            cutoff,
            rank
        );

        let solution = Col::from_fn(n_cols, |j| {
            let mut xj = 0.0;
            for i in 0..k {
                xj += v[(j, i)] * scaled[i];
            }
            xj
        });

        Ok(LeastSquaresSolution {
            solution,
            rank,
            singular_values,
        })
    }
}
