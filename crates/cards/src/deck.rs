// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck.
use rand::Rng;
use std::collections::TryReserveError;

use crate::{Card, Rank, Suit};

/// A 52 cards deck.
///
/// The deck always holds each (rank, suit) pair exactly once, shuffling only
/// changes the cards order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a deck in canonical order.
    ///
    /// Cards are in rank major order, deuces first, and within a rank in
    /// clubs, diamonds, hearts, spades order. Fails if the deck storage
    /// cannot be allocated.
    pub fn try_new() -> Result<Self, TryReserveError> {
        let mut cards = Vec::new();
        cards.try_reserve_exact(Self::SIZE)?;
        cards.extend(Rank::ranks().flat_map(|r| Suit::suits().map(move |s| Card::new(r, s))));
        Ok(Self { cards })
    }

    /// Creates a deck with the given cards order.
    ///
    /// Returns `None` if the cards are not a permutation of a full deck.
    pub fn from_cards(cards: [Card; Self::SIZE]) -> Option<Self> {
        let mut seen = 0u64;
        for card in &cards {
            seen |= 1 << (card.rank_index() * Suit::COUNT + card.suit_index());
        }

        if seen == (1u64 << Self::SIZE) - 1 {
            Some(Self {
                cards: cards.to_vec(),
            })
        } else {
            None
        }
    }

    /// Shuffles the deck in place.
    ///
    /// Backward Fisher-Yates: for each position from the last down to 1 swap
    /// the card with a uniformly chosen card at or before that position.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// The deck cards in their current order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Calls the `f` closure for each K-cards subset of the deck.
    ///
    /// Subsets are visited in lexicographic order of the deck positions.
    pub fn for_each<const K: usize, F>(&self, mut f: F)
    where
        F: FnMut(&[Card; K]),
    {
        let n = self.cards.len();
        if K == 0 || K > n {
            return;
        }

        let mut idx = [0usize; K];
        for (i, v) in idx.iter_mut().enumerate() {
            *v = i;
        }

        let mut hand = [self.cards[0]; K];
        loop {
            for (h, &i) in hand.iter_mut().zip(&idx) {
                *h = self.cards[i];
            }

            f(&hand);

            // Find the rightmost index that can still move right.
            let Some(pos) = (0..K).rev().find(|&i| idx[i] != i + n - K) else {
                break;
            };

            idx[pos] += 1;
            for i in pos + 1..K {
                idx[i] = idx[i - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Rank::ranks()
            .flat_map(|r| Suit::suits().map(move |s| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
