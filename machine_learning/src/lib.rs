pub mod arch;
pub mod dataset;
pub mod error;
pub mod optimization;
pub mod preprocessing;
pub mod regression;
pub mod training;

pub use error::{MlErr, Result};
