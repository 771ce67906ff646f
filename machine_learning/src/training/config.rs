use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Learning rate the gradient descent solver uses when none is given.
pub const DEFAULT_LEARNING_RATE: f32 = 0.2;
/// Epochs the gradient descent solver runs when none are given.
pub const DEFAULT_EPOCHS: NonZeroUsize = NonZeroUsize::new(20_000).unwrap();

/// Which algorithm fits the regression, and its hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolverConfig {
    LeastSquares {
        fit_intercept: bool,
    },
    GradientDescent {
        learning_rate: f32,
        epochs: NonZeroUsize,
        batch_size: Option<NonZeroUsize>,
        seed: u64,
    },
}

impl SolverConfig {
    /// Gradient descent with the default hyperparameters: full batches, seed zero.
    pub fn gradient_descent() -> Self {
        Self::GradientDescent {
            learning_rate: DEFAULT_LEARNING_RATE,
            epochs: DEFAULT_EPOCHS,
            batch_size: None,
            seed: 0,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::LeastSquares {
            fit_intercept: true,
        }
    }
}
