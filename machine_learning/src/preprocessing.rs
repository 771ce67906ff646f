use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::{MlErr, Result};

/// Z-score feature scaling, `z = (x - mean) / std`, with the population standard deviation.
///
/// Constant columns keep a scale of one so they map to zero instead of dividing by zero.
#[derive(Debug, Clone)]
pub struct Standardizer {
    mean: Array1<f32>,
    scale: Array1<f32>,
}

impl Standardizer {
    /// Learns the per column mean and scale of `x`.
    ///
    /// # Errors
    /// `MlErr::EmptyDataset` if `x` has no rows.
    pub fn fit(x: ArrayView2<f32>) -> Result<Self> {
        let mean = x.mean_axis(Axis(0)).ok_or(MlErr::EmptyDataset)?;
        let scale = x
            .std_axis(Axis(0), 0.0)
            .mapv_into(|s| if s > f32::EPSILON { s } else { 1.0 });

        Ok(Self { mean, scale })
    }

    pub fn mean(&self) -> ArrayView1<'_, f32> {
        self.mean.view()
    }

    pub fn scale(&self) -> ArrayView1<'_, f32> {
        self.scale.view()
    }

    pub fn transform(&self, x: ArrayView2<f32>) -> Result<Array2<f32>> {
        self.check_width("features to standardize", x.ncols())?;
        Ok((&x - &self.mean) / &self.scale)
    }

    /// Maps the weights of a linear model trained on standardized features back to the raw
    /// feature scale.
    ///
    /// # Arguments
    /// * `coef` - The weights learned over standardized features.
    /// * `intercept` - The bias learned over standardized features.
    ///
    /// # Returns
    /// The equivalent weights and bias over raw features.
    pub fn unscale(&self, coef: ArrayView1<f32>, intercept: f32) -> Result<(Array1<f32>, f32)> {
        self.check_width("standardized weights", coef.len())?;

        let raw = &coef / &self.scale;
        let intercept = intercept - raw.dot(&self.mean);
        Ok((raw, intercept))
    }

    fn check_width(&self, what: &'static str, got: usize) -> Result<()> {
        if got != self.mean.len() {
            return Err(MlErr::SizeMismatch {
                what,
                got,
                expected: self.mean.len(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_transformed_columns_are_centered_with_unit_variance() {
        let x = array![[1.0f32, 10.0], [3.0, 10.0], [5.0, 10.0]];
        let scaler = Standardizer::fit(x.view()).unwrap();
        let z = scaler.transform(x.view()).unwrap();

        let mean = z.mean_axis(Axis(0)).unwrap();
        let std = z.std_axis(Axis(0), 0.0);
        assert!(mean.iter().all(|m| m.abs() < 1e-6));
        assert!((std[0] - 1.0).abs() < 1e-6);
        // Constant column.
        assert_eq!(scaler.scale()[1], 1.0);
        assert_eq!(z.column(1), array![0.0f32, 0.0, 0.0]);
    }

    #[test]
    fn test_unscale_gives_the_same_predictions() {
        let x = array![[50.0f32, 130.0], [10.0, 80.0], [0.0, 0.0]];
        let scaler = Standardizer::fit(x.view()).unwrap();
        let z = scaler.transform(x.view()).unwrap();

        let coef = array![0.7f32, -1.3];
        let intercept = 4.0;
        let (raw, raw_intercept) = scaler.unscale(coef.view(), intercept).unwrap();

        let scaled_pred = z.dot(&coef) + intercept;
        let raw_pred = x.dot(&raw) + raw_intercept;
        for (a, b) in scaled_pred.iter().zip(&raw_pred) {
            assert!((a - b).abs() < 1e-3, "{a} != {b}");
        }
    }

    #[test]
    fn test_rejects_wrong_width() {
        let scaler = Standardizer::fit(array![[1.0f32, 2.0]].view()).unwrap();
        assert!(scaler.transform(array![[1.0f32]].view()).is_err());
        assert!(scaler.unscale(array![1.0f32, 2.0, 3.0].view(), 0.0).is_err());
    }
}
