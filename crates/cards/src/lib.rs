// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Preflop cards types.
//!
//! This crate define types to create cards using the Cactus Kev's bit layout:
//!
//! ```
//! # use preflop_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.rank_index(), 12);
//! assert_eq!(ah.to_string(), "AH");
//! ```
//!
//! and a [Deck] type for shuffling and iterating the cards in the deck, the
//! random generator is owned by the caller so that shuffles are reproducible:
//!
//! ```
//! # use preflop_cards::Deck;
//! # use rand::{SeedableRng, rngs::SmallRng};
//! let mut rng = SmallRng::seed_from_u64(101);
//! let mut deck = Deck::try_new().unwrap();
//! deck.shuffle(&mut rng);
//! assert_eq!(deck.count(), Deck::SIZE);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, PRIMES, RANK_MASK, Rank, SUIT_MASK, Suit};

mod deck;
pub use deck::Deck;
