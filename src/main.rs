use std::{env, process};

use anyhow::Context;
use log::error;

use mis_trainer::config::TrainerConfig;

fn run() -> anyhow::Result<()> {
    let config = TrainerConfig::from_env()?.with_args(env::args().skip(1))?;
    let report = mis_trainer::train(&config.solver).context("failed to train the impact weights")?;

    println!("{}", report.render(config.format)?);
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{e:#}");
        process::exit(1);
    }
}
