// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation.
use std::{cmp::Ordering, fmt};

use preflop_cards::{Card, SUIT_MASK};

use super::tables::{
    self, FLUSH_LO, FOUR_OF_A_KIND_LO, FULL_HOUSE_LO, HIGH_CARD_LO, ONE_PAIR_LO,
    STRAIGHT_FLUSH_LO, STRAIGHT_LO, THREE_OF_A_KIND_LO, TWO_PAIR_LO, Tables,
};

/// The 21 five cards subsets of a seven cards hand.
const SUBSETS_7: [[usize; 5]; 21] = [
    [0, 1, 2, 3, 4],
    [0, 1, 2, 3, 5],
    [0, 1, 2, 3, 6],
    [0, 1, 2, 4, 5],
    [0, 1, 2, 4, 6],
    [0, 1, 2, 5, 6],
    [0, 1, 3, 4, 5],
    [0, 1, 3, 4, 6],
    [0, 1, 3, 5, 6],
    [0, 1, 4, 5, 6],
    [0, 2, 3, 4, 5],
    [0, 2, 3, 4, 6],
    [0, 2, 3, 5, 6],
    [0, 2, 4, 5, 6],
    [0, 3, 4, 5, 6],
    [1, 2, 3, 4, 5],
    [1, 2, 3, 4, 6],
    [1, 2, 3, 5, 6],
    [1, 2, 4, 5, 6],
    [1, 3, 4, 5, 6],
    [2, 3, 4, 5, 6],
];

/// Hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The strength of a poker hand.
///
/// The strength value goes from 1 for a royal flush to 7462 for 7-5-4-3-2
/// offsuit, a lower value is a stronger hand. The [Ord] implementation
/// follows hand strength so that a stronger hand compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandValue(u16);

impl HandValue {
    /// The strongest hand value.
    pub const BEST: HandValue = HandValue(1);

    /// The weakest hand value.
    pub const WORST: HandValue = HandValue(HIGH_CARD_LO);

    /// Builds the evaluator tables if they have not been built yet.
    ///
    /// Evaluation builds the tables on first use, call this to keep the build
    /// out of timed code.
    pub fn init() {
        tables::tables();
    }

    /// Evaluates a 5 cards hand.
    #[inline]
    pub fn eval5(cards: &[Card; 5]) -> HandValue {
        Self::eval5_with(tables::tables(), cards)
    }

    /// Evaluates a 7 cards hand returning the best 5 cards value.
    #[inline]
    pub fn eval7(cards: &[Card; 7]) -> HandValue {
        let tables = tables::tables();

        let mut best = u16::MAX;
        for subset in &SUBSETS_7 {
            let hand = subset.map(|i| cards[i]);
            best = best.min(Self::eval5_with(tables, &hand).0);
        }

        HandValue(best)
    }

    #[inline]
    fn eval5_with(tables: &Tables, cards: &[Card; 5]) -> HandValue {
        let [c1, c2, c3, c4, c5] = cards.map(|c| c.id());

        if c1 & c2 & c3 & c4 & c5 & SUIT_MASK != 0 {
            let rank_bits = (c1 | c2 | c3 | c4 | c5) >> 16;
            return HandValue(tables.flush(rank_bits));
        }

        let product = cards.iter().map(Card::prime).product();
        HandValue(tables.product(product))
    }

    /// The strength value, lower is stronger.
    #[inline]
    pub fn value(&self) -> u16 {
        self.0
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        const BANDS: [(u16, HandRank); 8] = [
            (STRAIGHT_FLUSH_LO, HandRank::StraightFlush),
            (FOUR_OF_A_KIND_LO, HandRank::FourOfAKind),
            (FULL_HOUSE_LO, HandRank::FullHouse),
            (FLUSH_LO, HandRank::Flush),
            (STRAIGHT_LO, HandRank::Straight),
            (THREE_OF_A_KIND_LO, HandRank::ThreeOfAKind),
            (TWO_PAIR_LO, HandRank::TwoPair),
            (ONE_PAIR_LO, HandRank::OnePair),
        ];

        BANDS
            .into_iter()
            .find(|&(lo, _)| self.0 <= lo)
            .map_or(HandRank::HighCard, |(_, rank)| rank)
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.rank(), self.0)
    }
}
