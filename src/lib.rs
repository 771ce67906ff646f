//! Trains the weights of the Match Impact Score formula from a small expert labelled set of
//! cricket performances.

pub mod config;
pub mod error;
pub mod impact;
pub mod report;

use log::{debug, info};
use machine_learning::training::{SolverBuilder, SolverConfig};

pub use error::{Result, TrainerErr};

use crate::{
    impact::{ImpactWeights, TRAINING_SET},
    report::Report,
};

/// Fits the impact weights to the expert labelled training set.
///
/// # Arguments
/// * `config` - The solver to fit the weights with.
///
/// # Returns
/// A report with the learned weights and how well they reproduce the labels.
///
/// # Errors
/// `TrainerErr::Ml` if the solver can't be built or fails to fit the data.
pub fn train(config: &SolverConfig) -> Result<Report> {
    let dataset = impact::training_set()?;
    let mut solver = SolverBuilder::new().build(config)?;

    info!(
        "fitting {} performances with the {} solver",
        dataset.len(),
        solver.name()
    );

    let fit = solver.solve(&dataset)?;
    let weights = ImpactWeights::try_from(&fit)?;

    for (stats, impact) in &TRAINING_SET {
        debug!(
            "{stats:?}: labelled {impact}, scored {:.4}",
            weights.score(stats)
        );
    }

    let mse = fit.mse(&dataset)?;
    let r2 = fit.r2(&dataset)?;
    info!("trained weights {weights:?}, mse {mse:e}, r2 {r2}");

    Ok(Report {
        solver: *config,
        weights,
        mse,
        r2,
    })
}
