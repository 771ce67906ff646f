use std::num::NonZeroUsize;

use log::{debug, trace};
use rand::Rng;

use crate::{
    MlErr, Result,
    arch::{Model, loss::LossFn},
    dataset::Dataset,
    optimization::Optimizer,
};

/// Epochs between two progress lines in the debug log.
const LOG_EVERY: usize = 1000;

/// A model trainer. Contains the relevant components needed for training a model,
/// including the model itself.
pub struct ModelTrainer<M, O, L, R>
where
    M: Model,
    O: Optimizer,
    L: LossFn,
    R: Rng,
{
    grad: Vec<f32>,
    optimizer: O,
    dataset: Dataset,
    loss_fn: L,
    model: M,

    epochs: NonZeroUsize,
    batch_size: NonZeroUsize,
    rng: R,
}

impl<M, O, L, R> ModelTrainer<M, O, L, R>
where
    M: Model,
    O: Optimizer,
    L: LossFn,
    R: Rng,
{
    /// Returns a new `ModelTrainer`.
    ///
    /// # Arguments
    /// * `model` - The model that will be trained.
    /// * `optimizer` - The update rule applied after each batch.
    /// * `dataset` - The dataset the model will be trained with.
    /// * `epochs` - The amount of passes over the dataset per `train` call.
    /// * `batch_size` - The maximum amount of rows per batch.
    /// * `loss_fn` - The loss function used to measure the difference between a model's output and the expected one.
    /// * `rng` - A random number generator, used to shuffle the dataset each epoch.
    pub fn new(
        model: M,
        optimizer: O,
        dataset: Dataset,
        epochs: NonZeroUsize,
        batch_size: NonZeroUsize,
        loss_fn: L,
        rng: R,
    ) -> Self {
        Self {
            grad: vec![0.0; model.size()],
            model,
            optimizer,
            dataset,
            epochs,
            batch_size,
            loss_fn,
            rng,
        }
    }

    /// Performs `epochs` epochs of training its model, using its optimizer, dataset, loss
    /// function and batch size.
    ///
    /// # Arguments
    /// * `params` - The model's parameters, updated in place.
    ///
    /// # Returns
    /// The loss of each epoch, or an error if the loss stops being finite.
    pub fn train(&mut self, params: &mut [f32]) -> Result<Vec<f32>> {
        if params.len() != self.model.size() {
            return Err(MlErr::SizeMismatch {
                what: "model parameters",
                got: params.len(),
                expected: self.model.size(),
            });
        }

        let epochs = self.epochs.get();
        let mut losses = Vec::with_capacity(epochs);

        for epoch in 0..epochs {
            self.dataset.shuffle(&mut self.rng);
            let batches = self.dataset.batches(self.batch_size);

            let loss = self.model.backprop(
                params,
                &mut self.grad,
                &mut self.optimizer,
                &self.loss_fn,
                batches,
            )?;

            if !loss.is_finite() {
                return Err(MlErr::NonFinite {
                    what: "loss",
                    epoch,
                });
            }

            if epoch % LOG_EVERY == 0 {
                debug!("epoch {epoch}: loss {loss}");
            } else {
                trace!("epoch {epoch}: loss {loss}");
            }

            losses.push(loss);
        }

        Ok(losses)
    }
}
