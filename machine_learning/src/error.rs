use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire machine learning module.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The machine learning module's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum MlErr {
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    EmptyDataset,
    InvalidHyperparameter {
        name: &'static str,
        value: f32,
    },
    NonFinite {
        what: &'static str,
        epoch: usize,
    },
    SolveFailed(&'static str),
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch in {what}, got {got} and expected {expected}"
            ),
            MlErr::EmptyDataset => write!(f, "The dataset has no rows to train on"),
            MlErr::InvalidHyperparameter { name, value } => {
                write!(f, "Invalid value {value} for hyperparameter {name}")
            }
            MlErr::NonFinite { what, epoch } => {
                write!(f, "The {what} became non finite at epoch {epoch}")
            }
            MlErr::SolveFailed(reason) => write!(f, "Least squares solve failed: {reason}"),
        }
    }
}

impl Error for MlErr {}
