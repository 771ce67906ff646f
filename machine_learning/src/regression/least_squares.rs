use log::debug;
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

use super::{LinearFit, Solver};
use crate::{MlErr, Result, dataset::Dataset};

/// Ordinary least squares in closed form.
///
/// When fitting the intercept, features and targets are centered first and the intercept is
/// recovered from the means, so it is never penalized by the minimum norm choice.
#[derive(Debug, Clone, Copy)]
pub struct LeastSquares {
    fit_intercept: bool,
}

impl LeastSquares {
    pub fn new(fit_intercept: bool) -> Self {
        Self { fit_intercept }
    }
}

impl Default for LeastSquares {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Solver for LeastSquares {
    fn name(&self) -> &'static str {
        "least-squares"
    }

    fn solve(&mut self, dataset: &Dataset) -> Result<LinearFit> {
        if dataset.y_size() != 1 {
            return Err(MlErr::SizeMismatch {
                what: "target columns",
                got: dataset.y_size(),
                expected: 1,
            });
        }

        let x = dataset.x().mapv(f64::from);
        let y = dataset.y().column(0).mapv(f64::from);

        if !self.fit_intercept {
            let coef = lstsq(x.view(), y.view())?;
            return Ok(LinearFit::new(narrow(&coef), 0.0));
        }

        let x_mean = x.mean_axis(Axis(0)).ok_or(MlErr::EmptyDataset)?;
        let y_mean = y.mean().ok_or(MlErr::EmptyDataset)?;

        let coef = lstsq((&x - &x_mean).view(), (&y - y_mean).view())?;
        let intercept = y_mean - x_mean.dot(&coef);

        Ok(LinearFit::new(narrow(&coef), intercept as f32))
    }
}

/// Solves `min ||a.x - b||` through a singular value decomposition.
///
/// Singular values below `max(sv) * max(rows, cols) * EPSILON` are treated as zero, so rank
/// deficient systems get the minimum norm solution.
///
/// # Arguments
/// * `a` - The design matrix.
/// * `b` - The right hand side, one entry per row of `a`.
///
/// # Errors
/// `MlErr::SizeMismatch` if `b` doesn't match the rows of `a`, `MlErr::SolveFailed` if the
/// decomposition can't produce a finite solution.
pub fn lstsq(a: ArrayView2<f64>, b: ArrayView1<f64>) -> Result<Array1<f64>> {
    let (rows, cols) = a.dim();
    if rows != b.len() {
        return Err(MlErr::SizeMismatch {
            what: "least squares right hand side",
            got: b.len(),
            expected: rows,
        });
    }

    if rows == 0 || cols == 0 {
        return Err(MlErr::EmptyDataset);
    }

    let a = DMatrix::from_fn(rows, cols, |i, j| a[[i, j]]);
    let b = DVector::from_iterator(rows, b.iter().copied());

    let svd = a.svd(true, true);
    let max_sv = svd.singular_values.max();
    let eps = max_sv * rows.max(cols) as f64 * f64::EPSILON;

    let rank = svd.singular_values.iter().filter(|&&sv| sv > eps).count();
    if rank < cols {
        debug!("rank deficient system, rank {rank} of {cols}, using the minimum norm solution");
    }

    let x = svd.solve(&b, eps).map_err(MlErr::SolveFailed)?;
    if !x.iter().all(|v| v.is_finite()) {
        return Err(MlErr::SolveFailed("the solution is not finite"));
    }

    Ok(x.iter().copied().collect())
}

fn narrow(coef: &Array1<f64>) -> Vec<f32> {
    coef.iter().map(|&c| c as f32).collect()
}
