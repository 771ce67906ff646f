use ndarray::{Array2, ArrayView2, Axis, linalg};

use super::Model;
use crate::{MlErr, Result};

/// A single output linear model, `y = x.w + b`.
///
/// The parameter slice is laid out as the `dim` weights followed by the bias.
#[derive(Clone)]
pub struct Linear {
    dim: usize,

    // Forward metadata
    x: Array2<f32>,
    z: Array2<f32>,
}

impl Linear {
    /// Creates a new `Linear`.
    ///
    /// # Arguments
    /// * `dim` - The amount of input features.
    pub fn new(dim: usize) -> Self {
        let zeros = Array2::zeros((1, 1));

        Self {
            dim,
            x: zeros.clone(),
            z: zeros,
        }
    }

    /// Gives a view of the raw parameter slice as the weights and bias of this model.
    ///
    /// # Arguments
    /// * `params` - A slice of parameters.
    ///
    /// # Returns
    /// A tuple containing the weights as a column and the bias.
    fn view_params<'a>(&self, params: &'a [f32]) -> Result<(ArrayView2<'a, f32>, f32)> {
        let mismatch = || MlErr::SizeMismatch {
            what: "linear parameters",
            got: params.len(),
            expected: self.size(),
        };

        let (w_raw, b_raw) = params.split_at_checked(self.dim).ok_or_else(mismatch)?;
        let &[b] = b_raw else {
            return Err(mismatch());
        };

        let w = ArrayView2::from_shape((self.dim, 1), w_raw).map_err(|_| mismatch())?;
        Ok((w, b))
    }
}

impl Model for Linear {
    fn size(&self) -> usize {
        self.dim + 1
    }

    fn forward(&mut self, params: &[f32], x: ArrayView2<f32>) -> Result<ArrayView2<'_, f32>> {
        if x.ncols() != self.dim {
            return Err(MlErr::SizeMismatch {
                what: "input features",
                got: x.ncols(),
                expected: self.dim,
            });
        }

        let (w, b) = self.view_params(params)?;

        self.z = Array2::from_elem((x.nrows(), 1), b);
        linalg::general_mat_mul(1.0, &x, &w, 1.0, &mut self.z);
        self.x = x.to_owned();

        Ok(self.z.view())
    }

    fn backward(&mut self, params: &[f32], grad: &mut [f32], d: ArrayView2<f32>) -> Result<()> {
        if grad.len() != params.len() {
            return Err(MlErr::SizeMismatch {
                what: "gradient buffer",
                got: grad.len(),
                expected: params.len(),
            });
        }
        self.view_params(params)?;

        if d.nrows() != self.x.nrows() {
            return Err(MlErr::SizeMismatch {
                what: "output deltas",
                got: d.nrows(),
                expected: self.x.nrows(),
            });
        }

        if d.ncols() != 1 {
            return Err(MlErr::SizeMismatch {
                what: "output columns",
                got: d.ncols(),
                expected: 1,
            });
        }
        let d = d.column(0);

        let (dw, db) = grad.split_at_mut(self.dim);
        for (g, col) in dw.iter_mut().zip(self.x.axis_iter(Axis(1))) {
            *g = col.dot(&d);
        }
        db[0] = d.sum();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        arch::loss::Mse,
        optimization::GradientDescent,
    };
    use ndarray::array;

    #[test]
    fn test_forward_applies_weights_and_bias() {
        let mut model = Linear::new(2);
        let x = array![[1.0f32, 2.0], [3.0, 4.0]];

        let y = model.forward(&[2.0, -1.0, 0.5], x.view()).unwrap();

        assert_eq!(y, array![[0.5f32], [2.5]]);
    }

    #[test]
    fn test_forward_rejects_wrong_feature_count() {
        let mut model = Linear::new(3);
        let x = array![[1.0f32, 2.0]];

        let err = model.forward(&[0.0; 4], x.view()).unwrap_err();
        assert!(matches!(err, MlErr::SizeMismatch { what: "input features", .. }));
    }

    #[test]
    fn test_forward_rejects_wrong_param_count() {
        let mut model = Linear::new(2);
        let x = array![[1.0f32, 2.0]];

        assert!(model.forward(&[0.0; 2], x.view()).is_err());
        assert!(model.forward(&[0.0; 4], x.view()).is_err());
    }

    #[test]
    fn test_backward_writes_weight_and_bias_grads() {
        let mut model = Linear::new(2);
        let params = [0.0f32; 3];
        let x = array![[1.0f32, 2.0], [3.0, 4.0]];
        model.forward(&params, x.view()).unwrap();

        let d = array![[1.0f32], [-1.0]];
        let mut grad = [0.0; 3];
        model.backward(&params, &mut grad, d.view()).unwrap();

        assert_eq!(grad, [-2.0, -2.0, 0.0]);
    }

    #[test]
    fn test_backprop_fits_a_line() {
        // y = 3x - 1
        let x = array![[0.0f32], [1.0], [2.0], [3.0]];
        let y = array![[-1.0f32], [2.0], [5.0], [8.0]];

        let mut model = Linear::new(1);
        let mut params = vec![0.0f32; model.size()];
        let mut grad = vec![0.0; model.size()];
        let mut optimizer = GradientDescent::new(0.05).unwrap();

        let mut loss = f32::INFINITY;
        for _ in 0..2000 {
            let batches = std::iter::once((x.view(), y.view()));
            loss = model
                .backprop(&mut params, &mut grad, &mut optimizer, &Mse, batches)
                .unwrap();
        }

        assert!(loss < 1e-6, "loss {loss}");
        assert!((params[0] - 3.0).abs() < 1e-3);
        assert!((params[1] + 1.0).abs() < 1e-3);
    }
}
