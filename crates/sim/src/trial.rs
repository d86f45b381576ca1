// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Single heads-up deal.
use preflop_cards::{Card, Deck};
use preflop_eval::HandValue;

use crate::{HandClass, Outcome, StatsTable};

/// Number of players in a deal.
pub const NUM_PLAYERS: usize = 2;

/// Number of hole cards for each player.
pub const HOLE_CARDS: usize = 2;

/// Number of community cards.
pub const BOARD_CARDS: usize = 5;

/// Number of cards used by a deal.
pub const DEALT_CARDS: usize = NUM_PLAYERS * HOLE_CARDS + BOARD_CARDS;

/// A player in a deal.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    /// The player hole cards.
    pub hole_cards: [Card; HOLE_CARDS],
    /// The best hand value with the board cards.
    pub value: HandValue,
    /// The player seat, the order in which cards were dealt.
    pub position: usize,
    /// The player outcome.
    pub outcome: Outcome,
}

/// A heads-up deal with its showdown result.
#[derive(Debug, Clone, Copy)]
pub struct Trial {
    /// The players sorted by hand strength, strongest first.
    pub players: [Player; NUM_PLAYERS],
    /// The community cards.
    pub board: [Card; BOARD_CARDS],
}

impl Trial {
    /// Deals the hole cards and the board from the top of the deck.
    ///
    /// Each player gets two cards starting from the top of the deck and then
    /// five cards go to the board, the remaining cards are not used.
    pub fn deal(deck: &Deck) -> ([[Card; HOLE_CARDS]; NUM_PLAYERS], [Card; BOARD_CARDS]) {
        let cards = deck.cards();

        let hole_cards = std::array::from_fn(|position| {
            let start = position * HOLE_CARDS;
            [cards[start], cards[start + 1]]
        });

        let mut board = [cards[0]; BOARD_CARDS];
        board.copy_from_slice(&cards[NUM_PLAYERS * HOLE_CARDS..DEALT_CARDS]);

        (hole_cards, board)
    }

    /// Plays a deal with the deck cards in their current order.
    pub fn play(deck: &Deck) -> Trial {
        let (hole_cards, board) = Self::deal(deck);

        let mut hand = [board[0]; HOLE_CARDS + BOARD_CARDS];
        hand[HOLE_CARDS..].copy_from_slice(&board);

        let mut players: [Player; NUM_PLAYERS] = std::array::from_fn(|position| {
            let hole_cards = hole_cards[position];
            hand[..HOLE_CARDS].copy_from_slice(&hole_cards);

            Player {
                hole_cards,
                value: HandValue::eval7(&hand),
                position,
                outcome: Outcome::Loss,
            }
        });

        // Stable sort, tied players keep their seats order.
        players.sort_by(|p1, p2| p2.value.cmp(&p1.value));

        if players[0].value == players[1].value {
            players[0].outcome = Outcome::Tie;
            players[1].outcome = Outcome::Tie;
        } else {
            players[0].outcome = Outcome::Win;
        }

        Trial { players, board }
    }

    /// Records the players outcomes by their starting hand class.
    #[inline]
    pub fn record(&self, stats: &mut StatsTable) {
        for player in &self.players {
            let [c1, c2] = player.hole_cards;
            stats.record(HandClass::new(c1, c2), player.outcome);
        }
    }

    /// The player in the given seat.
    pub fn seat(&self, position: usize) -> Option<&Player> {
        self.players.iter().find(|p| p.position == position)
    }
}
