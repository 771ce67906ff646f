use ndarray::{Array2, ArrayView2};

use super::LossFn;

/// Mean squared error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    fn loss(&self, y_pred: ArrayView2<f32>, y: ArrayView2<f32>) -> f32 {
        (&y_pred - &y)
            .mapv(|x| x.powi(2))
            .mean()
            .unwrap_or_default()
    }

    fn loss_prime(&self, y_pred: ArrayView2<f32>, y: ArrayView2<f32>) -> Array2<f32> {
        let n = y_pred.len().max(1) as f32;
        (&y_pred - &y) * (2.0 / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_loss_is_the_mean_of_squared_residuals() {
        let y_pred = array![[1.0f32], [2.0], [4.0]];
        let y = array![[1.0f32], [0.0], [1.0]];

        assert_eq!(Mse.loss(y_pred.view(), y.view()), 13.0 / 3.0);
    }

    #[test]
    fn test_loss_prime_scales_residuals() {
        let y_pred = array![[3.0f32], [1.0]];
        let y = array![[1.0f32], [1.0]];

        let d = Mse.loss_prime(y_pred.view(), y.view());
        assert_eq!(d, array![[2.0f32], [0.0]]);
    }

    #[test]
    fn test_perfect_prediction_has_zero_loss() {
        let y = array![[45.0f32], [10.0]];
        assert_eq!(Mse::new().loss(y.view(), y.view()), 0.0);
    }
}
