// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Preflop heads-up equity simulation CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::{error, info};
use std::{path::PathBuf, time::Instant};

use preflop_sim::{Config, Simulator, chart, seed};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of heads-up deals to simulate.
    #[clap(long, short, default_value_t = 10_000_000, value_parser = clap::value_parser!(u64).range(1..))]
    trials: u64,
    /// The run seed, taken from the OS entropy if not set.
    ///
    /// A seed reproduces the same results for the same number of trials and
    /// tasks.
    #[clap(long, short)]
    seed: Option<u32>,
    /// Number of parallel tasks.
    #[clap(long, short = 'j', default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=256))]
    tasks: u16,
    /// The CSV output file.
    #[clap(long, short, default_value = "hands_equity.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = Config {
        trials: cli.trials,
        seed: cli.seed.unwrap_or_else(seed::os_seed),
        tasks: cli.tasks as usize,
    };

    info!(
        "Simulating {} trials with seed {} on {} tasks",
        config.trials, config.seed, config.tasks
    );

    let simulator = Simulator::new(config)?;

    let start = Instant::now();
    let stats = simulator.run(|p| info!("Progress: {}%", p.percent))?;
    let elapsed = start.elapsed().as_secs_f64();

    let trials = simulator.config().trials;
    info!(
        "Simulated {trials} hands in {elapsed:.3}s ({:.0} hands/sec)",
        trials as f64 / elapsed.max(f64::EPSILON)
    );

    match chart::save_csv(&stats, &cli.output) {
        Ok(()) => info!("Results saved to {}", cli.output.display()),
        Err(e) => error!("{e}"),
    }

    Ok(())
}
