use super::LinearFit;
use crate::{Result, dataset::Dataset};

/// Fits a linear regression over a dataset with a single target column.
pub trait Solver {
    /// A short name identifying the algorithm, used in logs and reports.
    fn name(&self) -> &'static str;

    fn solve(&mut self, dataset: &Dataset) -> Result<LinearFit>;
}
