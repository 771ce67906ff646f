use std::{env, str::FromStr};

use log::warn;
use machine_learning::training::{DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE, SolverConfig};

use crate::{Result, TrainerErr};

pub const SOLVER_VAR: &str = "MIS_SOLVER";
pub const LEARNING_RATE_VAR: &str = "MIS_LEARNING_RATE";
pub const EPOCHS_VAR: &str = "MIS_EPOCHS";
pub const BATCH_SIZE_VAR: &str = "MIS_BATCH_SIZE";
pub const SEED_VAR: &str = "MIS_SEED";
pub const REPORT_VAR: &str = "MIS_REPORT";

const GRADIENT_DESCENT_VARS: [&str; 4] = [LEARNING_RATE_VAR, EPOCHS_VAR, BATCH_SIZE_VAR, SEED_VAR];

/// How the trained weights are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Everything a training run can be tuned with.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrainerConfig {
    pub solver: SolverConfig,
    pub format: ReportFormat,
}

impl TrainerConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// `TrainerErr::InvalidConfig` naming the first variable that can't be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration from `lookup`, which maps a variable name to its value.
    ///
    /// Unset variables fall back to their defaults: the least squares solver and a text
    /// report.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup(REPORT_VAR) {
            Some(value) => parse(REPORT_VAR, value, "text|json")?,
            None => ReportFormat::default(),
        };

        let solver = match lookup(SOLVER_VAR).as_deref() {
            None | Some("least-squares") => {
                for key in GRADIENT_DESCENT_VARS {
                    if lookup(key).is_some() {
                        warn!("{key} is ignored by the least-squares solver");
                    }
                }

                SolverConfig::default()
            }
            Some("gradient-descent") => gradient_descent(&lookup)?,
            Some(other) => {
                return Err(TrainerErr::InvalidConfig {
                    key: SOLVER_VAR,
                    value: other.to_string(),
                    expected: "least-squares|gradient-descent",
                });
            }
        };

        Ok(Self { solver, format })
    }

    /// Applies the command line arguments on top of this configuration.
    ///
    /// The only accepted argument is the report format, `text` or `json`.
    ///
    /// # Errors
    /// `TrainerErr::Usage` on an unknown or extra argument.
    pub fn with_args<I>(mut self, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        if let Some(arg) = args.next() {
            self.format = arg.parse().map_err(|_| {
                TrainerErr::Usage(format!("unknown report format {arg:?}, use text|json"))
            })?;
        }

        if let Some(extra) = args.next() {
            return Err(TrainerErr::Usage(format!("unexpected argument {extra:?}")));
        }

        Ok(self)
    }
}

fn gradient_descent<F>(lookup: &F) -> Result<SolverConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut learning_rate = DEFAULT_LEARNING_RATE;
    let mut epochs = DEFAULT_EPOCHS;
    let mut batch_size = None;
    let mut seed = 0;

    if let Some(value) = lookup(LEARNING_RATE_VAR) {
        learning_rate = parse(LEARNING_RATE_VAR, value, "a positive number")?;
    }
    if let Some(value) = lookup(EPOCHS_VAR) {
        epochs = parse(EPOCHS_VAR, value, "a positive integer")?;
    }
    if let Some(value) = lookup(BATCH_SIZE_VAR) {
        batch_size = Some(parse(BATCH_SIZE_VAR, value, "a positive integer")?);
    }
    if let Some(value) = lookup(SEED_VAR) {
        seed = parse(SEED_VAR, value, "an unsigned integer")?;
    }

    Ok(SolverConfig::GradientDescent {
        learning_rate,
        epochs,
        batch_size,
        seed,
    })
}

fn parse<T: FromStr>(key: &'static str, value: String, expected: &'static str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| TrainerErr::InvalidConfig {
            key,
            value,
            expected,
        })
}
