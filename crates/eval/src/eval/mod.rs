// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! This evaluator is a port of the [Cactus Kev's][kevlink] poker evaluator to
//! evaluate 5 and 7 cards poker hands. Flushes are looked up directly by their
//! rank bits, all other hands go through a perfect hash of the product of
//! their rank primes.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html

pub mod eval;
pub use eval::{HandRank, HandValue};

mod tables;
