// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte-Carlo simulation loop.
use log::debug;
use rand::{SeedableRng, rngs::StdRng};
use std::{
    sync::atomic::{AtomicU64, Ordering},
    thread,
};

use preflop_cards::Deck;
use preflop_eval::HandValue;

use crate::{SimError, StatsTable, Trial};

/// Trials between updates of the shared progress counter.
const PROGRESS_BATCH: u64 = 4096;

/// Simulation config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// The number of heads-up deals.
    pub trials: u64,
    /// The run seed.
    pub seed: u32,
    /// The number of parallel tasks.
    pub tasks: usize,
}

/// Simulation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Completed trials.
    pub done: u64,
    /// Total trials.
    pub total: u64,
    /// Completed percentage, a multiple of 10.
    pub percent: u8,
}

/// Runs heads-up deals and collects starting hands statistics.
#[derive(Debug)]
pub struct Simulator {
    config: Config,
}

impl Simulator {
    /// Creates a simulator and builds the evaluator tables.
    pub fn new(config: Config) -> Result<Self, SimError> {
        if config.trials == 0 {
            return Err(SimError::Config("the number of trials must be positive"));
        }

        if config.tasks == 0 {
            return Err(SimError::Config("the number of tasks must be positive"));
        }

        HandValue::init();

        Ok(Self { config })
    }

    /// The simulation config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs all the trials and returns the finalized statistics.
    ///
    /// The trials are split between the configured tasks, each task has its
    /// own deck, random generator and statistics that are added together at
    /// the end. The `progress` closure is called when the completed trials
    /// cross each 10% step.
    pub fn run<F>(&self, progress: F) -> Result<StatsTable, SimError>
    where
        F: Fn(Progress) + Sync,
    {
        let Config {
            trials,
            seed,
            tasks,
        } = self.config;

        let counter = Counter {
            done: AtomicU64::new(0),
            total: trials,
            progress: &progress,
        };

        counter.report(0);

        let chunks = (0..tasks)
            .map(|task_id| {
                let tasks = tasks as u64;
                trials / tasks + u64::from((task_id as u64) < trials % tasks)
            })
            .collect::<Vec<_>>();

        let partials = if tasks == 1 {
            vec![run_task(0, chunks[0], task_seed(seed, 0), &counter)]
        } else {
            thread::scope(|s| {
                let handles = chunks
                    .iter()
                    .enumerate()
                    .map(|(task_id, &n)| {
                        let counter = &counter;
                        s.spawn(move || run_task(task_id, n, task_seed(seed, task_id), counter))
                    })
                    .collect::<Vec<_>>();

                handles
                    .into_iter()
                    .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                    .collect::<Vec<_>>()
            })
        };

        let mut stats = StatsTable::try_new()?;
        for partial in partials {
            stats.merge(&partial?);
        }

        stats.finalize();
        Ok(stats)
    }
}

/// Shared progress counter.
struct Counter<'a, F> {
    done: AtomicU64,
    total: u64,
    progress: &'a F,
}

impl<F: Fn(Progress) + Sync> Counter<'_, F> {
    /// Adds completed trials and reports each crossed 10% step.
    fn add(&self, n: u64) {
        let prev = self.done.fetch_add(n, Ordering::Relaxed);
        let done = prev + n;

        for step in 1..10u64 {
            let mark = self.total * step / 10;
            if prev < mark && mark <= done {
                self.report(step as u8 * 10);
            }
        }
    }

    fn report(&self, percent: u8) {
        (self.progress)(Progress {
            done: self.done.load(Ordering::Relaxed),
            total: self.total,
            percent,
        });
    }
}

/// Derives a distinct generator seed for each task.
fn task_seed(seed: u32, task_id: usize) -> u64 {
    u64::from(seed) ^ (task_id as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// The task generator, the same seed gives the same stream on every platform.
fn task_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Runs `trials` deals with a private deck and generator.
fn run_task<F>(
    task_id: usize,
    trials: u64,
    seed: u64,
    counter: &Counter<'_, F>,
) -> Result<StatsTable, SimError>
where
    F: Fn(Progress) + Sync,
{
    debug!("Task {task_id} running {trials} trials");

    let mut rng = task_rng(seed);
    let mut deck = Deck::try_new()?;
    let mut stats = StatsTable::try_new()?;

    let mut pending = 0;
    for _ in 0..trials {
        deck.shuffle(&mut rng);
        Trial::play(&deck).record(&mut stats);

        pending += 1;
        if pending == PROGRESS_BATCH {
            counter.add(pending);
            pending = 0;
        }
    }

    counter.add(pending);

    debug!("Task {task_id} done");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn config(trials: u64, seed: u32, tasks: usize) -> Config {
        Config {
            trials,
            seed,
            tasks,
        }
    }

    #[test]
    fn invalid_config() {
        assert!(matches!(
            Simulator::new(config(0, 1, 1)),
            Err(SimError::Config(_))
        ));
        assert!(matches!(
            Simulator::new(config(10, 1, 0)),
            Err(SimError::Config(_))
        ));
    }

    #[test]
    fn progress_steps() {
        let steps = Mutex::new(Vec::new());
        let sim = Simulator::new(config(20_000, 3, 1)).unwrap();
        sim.run(|p| steps.lock().unwrap().push(p.percent)).unwrap();

        let steps = steps.into_inner().unwrap();
        assert_eq!(steps, (0..10).map(|s| s * 10).collect::<Vec<u8>>());
    }

    #[test]
    fn parallel_progress_steps() {
        let steps = Mutex::new(Vec::new());
        let sim = Simulator::new(config(30_000, 3, 3)).unwrap();
        sim.run(|p| steps.lock().unwrap().push(p.percent)).unwrap();

        let mut steps = steps.into_inner().unwrap();
        steps.sort();
        assert_eq!(steps, (0..10).map(|s| s * 10).collect::<Vec<u8>>());
    }

    #[test]
    fn chunks_cover_trials() {
        let sim = Simulator::new(config(1_001, 9, 4)).unwrap();
        let stats = sim.run(|_| {}).unwrap();
        assert_eq!(stats.total_occurrences(), 2 * 1_001);
        assert_eq!(stats.total_points(), 1_001.0);
    }

    #[test]
    fn keeps_config() {
        let sim = Simulator::new(config(500, 8, 2)).unwrap();
        assert_eq!(*sim.config(), config(500, 8, 2));
    }

    #[test]
    fn task_rng_is_std_rng() {
        use rand::Rng;

        let mut rng = task_rng(task_seed(42, 3));
        let mut expected = StdRng::seed_from_u64(task_seed(42, 3));
        for _ in 0..16 {
            assert_eq!(rng.random::<u64>(), expected.random::<u64>());
        }
    }

    #[test]
    fn task_seeds_differ() {
        let seeds = (0..8).map(|t| task_seed(42, t)).collect::<Vec<_>>();
        assert_eq!(seeds[0], 42);
        for (i, s) in seeds.iter().enumerate() {
            assert!(seeds[i + 1..].iter().all(|o| o != s));
        }
    }
}
