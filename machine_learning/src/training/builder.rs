use super::SolverConfig;
use crate::{
    Result,
    optimization::GradientDescent,
    regression::{GradientDescentSolver, LeastSquares, Solver},
};

/// Builds `Solver`s given a configuration.
#[derive(Default)]
pub struct SolverBuilder;

impl SolverBuilder {
    /// Creates a new `SolverBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new `Solver` following a configuration.
    ///
    /// # Arguments
    /// * `config` - The configuration for the solver.
    ///
    /// # Errors
    /// `MlErr::InvalidHyperparameter` if the configuration holds an unusable value.
    pub fn build(&self, config: &SolverConfig) -> Result<Box<dyn Solver>> {
        match *config {
            SolverConfig::LeastSquares { fit_intercept } => {
                Ok(Box::new(LeastSquares::new(fit_intercept)))
            }
            SolverConfig::GradientDescent {
                learning_rate,
                epochs,
                batch_size,
                seed,
            } => {
                let optimizer = GradientDescent::new(learning_rate)?;
                let solver = GradientDescentSolver::new(optimizer, epochs, batch_size, seed);
                Ok(Box::new(solver))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MlErr;

    #[test]
    fn test_builds_each_solver() {
        let builder = SolverBuilder::new();

        let solver = builder.build(&SolverConfig::default()).unwrap();
        assert_eq!(solver.name(), "least-squares");

        let solver = builder.build(&SolverConfig::gradient_descent()).unwrap();
        assert_eq!(solver.name(), "gradient-descent");
    }

    #[test]
    fn test_rejects_invalid_learning_rate() {
        let SolverConfig::GradientDescent {
            epochs,
            batch_size,
            seed,
            ..
        } = SolverConfig::gradient_descent()
        else {
            unreachable!()
        };
        let config = SolverConfig::GradientDescent {
            learning_rate: -1.0,
            epochs,
            batch_size,
            seed,
        };

        let err = SolverBuilder::new().build(&config).err().unwrap();
        assert!(matches!(err, MlErr::InvalidHyperparameter { name: "learning_rate", .. }));
    }
}
