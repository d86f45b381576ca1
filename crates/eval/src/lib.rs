// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Preflop poker hand evaluator.
//!
//! Poker hand evaluator for 5 and 7 cards hands. This evaluator is a port of
//! the [Cactus Kev's][kevlink] poker evaluator, a 7 cards hand is evaluated
//! as the best of its 21 five cards subsets.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use preflop_eval::*;
//! // 2C, 2D, .., 4D
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval5(&cards[0..5].try_into().unwrap());
//! let v2 = HandValue::eval5(&cards[5..].try_into().unwrap());
//! assert_eq!(v1.rank(), HandRank::FourOfAKind);
//! assert_eq!(v2.rank(), HandRank::FullHouse);
//! assert!(v1 > v2);
//! ```
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use preflop_cards::{Card, Deck, Rank, Suit};
