// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Preflop heads-up equity simulation.
//!
//! Estimates the heads-up equity of the 169 starting hand classes by dealing
//! random heads-up hands to showdown and collecting for each class how often
//! it wins. A win is worth one point and a tie half a point, the average
//! points of a class is its equity:
//!
//! ```
//! # use preflop_sim::*;
//! # use preflop_cards::Rank;
//! let config = Config {
//!     trials: 1_000,
//!     seed: 17,
//!     tasks: 2,
//! };
//!
//! let stats = Simulator::new(config)?.run(|_| {})?;
//! assert_eq!(stats.total_occurrences(), 2_000);
//! assert_eq!(stats.total_points(), 1_000.0);
//!
//! let aa = stats.get(HandClass::pair(Rank::Ace));
//! assert!((0.0..=1.0).contains(&aa.average()));
//! # Ok::<(), SimError>(())
//! ```
//!
//! The [chart] module writes the results as a 13x13 CSV matrix.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod chart;

mod class;
pub use class::HandClass;

mod error;
pub use error::SimError;

pub mod seed;

mod simulator;
pub use simulator::{Config, Progress, Simulator};

mod stats;
pub use stats::{HandStats, Outcome, StatsTable};

mod trial;
pub use trial::{BOARD_CARDS, DEALT_CARDS, HOLE_CARDS, NUM_PLAYERS, Player, Trial};
