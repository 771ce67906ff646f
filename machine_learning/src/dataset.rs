use std::num::NonZeroUsize;

use ndarray::{Array2, ArrayView2, Axis, concatenate, s};
use rand::{Rng, seq::SliceRandom};

use crate::{MlErr, Result};

/// An in-memory supervised dataset. Each row holds `x_size` features followed by `y_size`
/// targets, so shuffling rows never separates a sample from its label.
#[derive(Debug, Clone)]
pub struct Dataset {
    x_size: usize,
    y_size: usize,
    data: Array2<f32>,
}

impl Dataset {
    /// Creates a new `Dataset` from a row-major buffer.
    ///
    /// # Arguments
    /// * `data` - The rows, each one `x_size` features followed by `y_size` targets.
    /// * `x_size` - The amount of features per row.
    /// * `y_size` - The amount of targets per row.
    ///
    /// # Returns
    /// A new `Dataset` or an error if the buffer doesn't hold a whole number of rows.
    pub fn new(data: Vec<f32>, x_size: usize, y_size: usize) -> Result<Self> {
        let width = x_size + y_size;
        if x_size == 0 || y_size == 0 || data.is_empty() {
            return Err(MlErr::EmptyDataset);
        }

        if data.len() % width != 0 {
            return Err(MlErr::SizeMismatch {
                what: "dataset buffer",
                got: data.len(),
                expected: (data.len() / width + 1) * width,
            });
        }

        let len = data.len() / width;
        let data = Array2::from_shape_vec((len, width), data).map_err(|_| MlErr::SizeMismatch {
            what: "dataset buffer",
            got: len * width,
            expected: len * width,
        })?;

        Ok(Self {
            x_size,
            y_size,
            data,
        })
    }

    /// Creates a new `Dataset` out of separate feature and target tables.
    ///
    /// # Arguments
    /// * `x` - The features, one row per sample.
    /// * `y` - The targets, one row per sample.
    pub fn from_parts(x: ArrayView2<f32>, y: ArrayView2<f32>) -> Result<Self> {
        if x.nrows() != y.nrows() {
            return Err(MlErr::SizeMismatch {
                what: "feature and target rows",
                got: y.nrows(),
                expected: x.nrows(),
            });
        }

        if x.is_empty() || y.is_empty() {
            return Err(MlErr::EmptyDataset);
        }

        let data = concatenate(Axis(1), &[x, y]).map_err(|_| MlErr::SizeMismatch {
            what: "feature and target rows",
            got: y.nrows(),
            expected: x.nrows(),
        })?;

        Ok(Self {
            x_size: x.ncols(),
            y_size: y.ncols(),
            data,
        })
    }

    /// Returns the amount of rows.
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn x_size(&self) -> usize {
        self.x_size
    }

    pub fn y_size(&self) -> usize {
        self.y_size
    }

    /// Returns a view of every row's features.
    pub fn x(&self) -> ArrayView2<'_, f32> {
        self.data.slice(s![.., ..self.x_size])
    }

    /// Returns a view of every row's targets.
    pub fn y(&self) -> ArrayView2<'_, f32> {
        self.data.slice(s![.., self.x_size..])
    }

    /// Randomly permutes the rows.
    ///
    /// # Arguments
    /// * `rng` - The source of randomness.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.shuffle(rng);
        self.data = self.data.select(Axis(0), &order);
    }

    /// Splits the rows in consecutive batches, the last one may be smaller.
    ///
    /// # Arguments
    /// * `batch_size` - The maximum amount of rows per batch.
    ///
    /// # Returns
    /// An iterator over `(x, y)` views of each batch.
    pub fn batches(
        &self,
        batch_size: NonZeroUsize,
    ) -> impl Iterator<Item = (ArrayView2<'_, f32>, ArrayView2<'_, f32>)> {
        let x_size = self.x_size;

        self.data
            .axis_chunks_iter(Axis(0), batch_size.get())
            .map(move |batch| batch.split_at(Axis(1), x_size))
    }
}
