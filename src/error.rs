use std::{error::Error, fmt};

use machine_learning::MlErr;

/// The trainer's result type.
pub type Result<T> = std::result::Result<T, TrainerErr>;

/// All errors that can occur while training and reporting the impact weights.
#[derive(Debug)]
pub enum TrainerErr {
    /// The numeric core failed to fit the model.
    Ml(MlErr),
    /// An environment variable holds a value that can't be used.
    InvalidConfig {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
    /// The command line arguments can't be understood.
    Usage(String),
    /// The report couldn't be serialized.
    Json(serde_json::Error),
}

impl fmt::Display for TrainerErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ml(e) => write!(f, "training error: {e}"),
            Self::InvalidConfig {
                key,
                value,
                expected,
            } => write!(f, "invalid config: {key}={value:?}, expected {expected}"),
            Self::Usage(msg) => write!(f, "usage error: {msg}"),
            Self::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl Error for TrainerErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ml(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MlErr> for TrainerErr {
    fn from(e: MlErr) -> Self {
        Self::Ml(e)
    }
}

impl From<serde_json::Error> for TrainerErr {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
