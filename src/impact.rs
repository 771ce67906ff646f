//! The cricket side of the model: the expert labelled training set and the weights the
//! scoring service consumes.

use machine_learning::{MlErr, dataset::Dataset, regression::LinearFit};
use serde::Serialize;

use crate::Result;

/// The per match statistics a player is scored on, in the column order of the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerStats {
    pub runs: f32,
    pub strike_rate: f32,
    pub wickets: f32,
    pub economy_rate: f32,
}

/// Amount of features of a `PlayerStats` row.
pub const NUM_FEATURES: usize = 4;

impl PlayerStats {
    pub const fn new(runs: f32, strike_rate: f32, wickets: f32, economy_rate: f32) -> Self {
        Self {
            runs,
            strike_rate,
            wickets,
            economy_rate,
        }
    }

    pub fn features(&self) -> [f32; NUM_FEATURES] {
        [self.runs, self.strike_rate, self.wickets, self.economy_rate]
    }
}

/// Mock historical performances and their expert assigned impact score (0-100).
pub const TRAINING_SET: [(PlayerStats, f32); 5] = [
    // Good batting
    (PlayerStats::new(50.0, 130.0, 0.0, 0.0), 45.0),
    // Poor batting
    (PlayerStats::new(10.0, 80.0, 0.0, 0.0), 10.0),
    // Excellent bowling
    (PlayerStats::new(0.0, 0.0, 3.0, 5.5), 85.0),
    // Average all-round
    (PlayerStats::new(5.0, 100.0, 1.0, 9.0), 35.0),
    // Match winning batting
    (PlayerStats::new(100.0, 160.0, 0.0, 0.0), 95.0),
];

/// Builds the `Dataset` of `TRAINING_SET`, one row per performance with the impact score as
/// the only target.
pub fn training_set() -> Result<Dataset> {
    let data = TRAINING_SET
        .iter()
        .flat_map(|(stats, impact)| stats.features().into_iter().chain([*impact]))
        .collect();

    Ok(Dataset::new(data, NUM_FEATURES, 1)?)
}

/// The learned weights of the impact formula,
/// `impact = batting * runs + strike_rate * sr + bowling * wickets + economy * er + bias`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactWeights {
    pub batting: f32,
    pub strike_rate: f32,
    pub bowling: f32,
    pub economy: f32,
    pub bias: f32,
}

impl ImpactWeights {
    /// Evaluates the impact formula for a performance.
    pub fn score(&self, stats: &PlayerStats) -> f32 {
        self.batting * stats.runs
            + self.strike_rate * stats.strike_rate
            + self.bowling * stats.wickets
            + self.economy * stats.economy_rate
            + self.bias
    }
}

impl TryFrom<&LinearFit> for ImpactWeights {
    type Error = MlErr;

    fn try_from(fit: &LinearFit) -> std::result::Result<Self, Self::Error> {
        let &[batting, strike_rate, bowling, economy] = fit.coef() else {
            return Err(MlErr::SizeMismatch {
                what: "impact coefficients",
                got: fit.coef().len(),
                expected: NUM_FEATURES,
            });
        };

        Ok(Self {
            batting,
            strike_rate,
            bowling,
            economy,
            bias: fit.intercept(),
        })
    }
}
