mod builder;
mod config;
mod model_trainer;

pub use builder::SolverBuilder;
pub use config::{DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE, SolverConfig};
pub use model_trainer::ModelTrainer;
