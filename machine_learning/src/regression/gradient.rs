use std::num::NonZeroUsize;

use log::debug;
use ndarray::ArrayView1;
use rand::{SeedableRng, rngs::StdRng};

use super::{LinearFit, Solver};
use crate::{
    MlErr, Result,
    arch::{Linear, Model, loss::Mse},
    dataset::Dataset,
    optimization::GradientDescent,
    preprocessing::Standardizer,
    training::ModelTrainer,
};

/// Fits a linear regression by gradient descent over the MSE, on standardized features.
///
/// The learned weights are mapped back to the raw feature scale, so the result is directly
/// comparable with `LeastSquares`.
#[derive(Debug, Clone)]
pub struct GradientDescentSolver {
    optimizer: GradientDescent,
    epochs: NonZeroUsize,
    batch_size: Option<NonZeroUsize>,
    seed: u64,
}

impl GradientDescentSolver {
    /// Returns a new `GradientDescentSolver`.
    ///
    /// # Arguments
    /// * `optimizer` - The update rule.
    /// * `epochs` - The amount of passes over the dataset.
    /// * `batch_size` - The rows per update, the whole dataset if `None`.
    /// * `seed` - The seed of the batch shuffling.
    pub fn new(
        optimizer: GradientDescent,
        epochs: NonZeroUsize,
        batch_size: Option<NonZeroUsize>,
        seed: u64,
    ) -> Self {
        Self {
            optimizer,
            epochs,
            batch_size,
            seed,
        }
    }
}

impl Solver for GradientDescentSolver {
    fn name(&self) -> &'static str {
        "gradient-descent"
    }

    fn solve(&mut self, dataset: &Dataset) -> Result<LinearFit> {
        if dataset.y_size() != 1 {
            return Err(MlErr::SizeMismatch {
                what: "target columns",
                got: dataset.y_size(),
                expected: 1,
            });
        }

        let scaler = Standardizer::fit(dataset.x())?;
        let scaled = scaler.transform(dataset.x())?;
        let scaled = Dataset::from_parts(scaled.view(), dataset.y())?;

        let batch_size = match self.batch_size {
            Some(batch_size) => batch_size,
            None => NonZeroUsize::new(scaled.len()).ok_or(MlErr::EmptyDataset)?,
        };

        let dim = dataset.x_size();
        let model = Linear::new(dim);
        let mut params = vec![0.0f32; model.size()];

        let mut trainer = ModelTrainer::new(
            model,
            self.optimizer,
            scaled,
            self.epochs,
            batch_size,
            Mse,
            StdRng::seed_from_u64(self.seed),
        );
        let losses = trainer.train(&mut params)?;

        if let Some(last) = losses.last() {
            debug!("gradient descent finished after {} epochs, loss {last}", losses.len());
        }

        let (w, b) = params.split_at(dim);
        let (coef, intercept) = scaler.unscale(ArrayView1::from(w), b[0])?;

        Ok(LinearFit::new(coef.to_vec(), intercept))
    }
}
