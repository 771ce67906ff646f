mod fit;
mod gradient;
mod least_squares;
mod solver;

pub use fit::LinearFit;
pub use gradient::GradientDescentSolver;
pub use least_squares::{LeastSquares, lstsq};
pub use solver::Solver;
