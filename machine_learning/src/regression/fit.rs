use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::Serialize;

use crate::{MlErr, Result, dataset::Dataset};

/// The learned parameters of a linear regression, `y = x.coef + intercept`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearFit {
    coef: Vec<f32>,
    intercept: f32,
}

impl LinearFit {
    pub fn new(coef: Vec<f32>, intercept: f32) -> Self {
        Self { coef, intercept }
    }

    pub fn coef(&self) -> &[f32] {
        &self.coef
    }

    pub fn intercept(&self) -> f32 {
        self.intercept
    }

    /// Predicts the target of every row of `x`.
    ///
    /// # Errors
    /// `MlErr::SizeMismatch` if `x` doesn't have one column per coefficient.
    pub fn predict(&self, x: ArrayView2<f32>) -> Result<Array1<f32>> {
        if x.ncols() != self.coef.len() {
            return Err(MlErr::SizeMismatch {
                what: "features to predict",
                got: x.ncols(),
                expected: self.coef.len(),
            });
        }

        Ok(x.dot(&ArrayView1::from(&self.coef)) + self.intercept)
    }

    /// Mean squared error of the fit over `dataset`.
    pub fn mse(&self, dataset: &Dataset) -> Result<f32> {
        let (y_pred, y) = self.evaluate(dataset)?;
        Ok((&y_pred - &y)
            .mapv(|r| r.powi(2))
            .mean()
            .unwrap_or_default())
    }

    /// Coefficient of determination of the fit over `dataset`.
    ///
    /// A constant target scores `1.0` when predicted exactly and `0.0` otherwise.
    pub fn r2(&self, dataset: &Dataset) -> Result<f32> {
        let (y_pred, y) = self.evaluate(dataset)?;
        let y_mean = y.mean().unwrap_or_default();

        let ss_res: f32 = y_pred.iter().zip(&y).map(|(p, t)| (t - p).powi(2)).sum();
        let ss_tot: f32 = y.iter().map(|t| (t - y_mean).powi(2)).sum();

        if ss_tot == 0.0 {
            return Ok(if ss_res == 0.0 { 1.0 } else { 0.0 });
        }

        Ok(1.0 - ss_res / ss_tot)
    }

    fn evaluate(&self, dataset: &Dataset) -> Result<(Array1<f32>, Array1<f32>)> {
        if dataset.y_size() != 1 {
            return Err(MlErr::SizeMismatch {
                what: "target columns",
                got: dataset.y_size(),
                expected: 1,
            });
        }

        let y_pred = self.predict(dataset.x())?;
        let y = dataset.y().column(0).to_owned();
        Ok((y_pred, y))
    }
}
