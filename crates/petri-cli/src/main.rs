//! Headless driver for the petri dish simulation.
//!
//! Runs the configured number of generations and logs population
//! statistics; pass a JSON config file path as the first argument to
//! override the defaults.

use anyhow::{Context, Result};
use petri_core::SimConfig;
use petri_world::Simulation;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,petri_world=debug".into()),
        )
        .with_target(true)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(Path::new(&path))
            .with_context(|| format!("failed to load config from {path}"))?,
        None => SimConfig::default(),
    };

    info!(
        width = config.world.width,
        height = config.world.height,
        generations = config.generations,
        seed = config.seed,
        "starting petri dish"
    );

    let mut simulation = Simulation::new(config)?;
    simulation.run();

    info!(
        generation = simulation.generation(),
        population = simulation.grid().population(),
        "final dish state"
    );

    Ok(())
}
