// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Canonical starting hand classes.
use std::{fmt, str::FromStr};

use preflop_cards::{Card, Rank};

use crate::SimError;

/// One of the 169 canonical starting hands.
///
/// Two hole cards map to a class by their ranks and by whether they are
/// suited, the class does not depend on the cards order or on the suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandClass {
    high: Rank,
    low: Rank,
    suited: bool,
}

impl HandClass {
    /// The number of starting hand classes.
    pub const COUNT: usize = 169;

    /// Classifies two hole cards.
    pub fn new(c1: Card, c2: Card) -> Self {
        let (r1, r2) = (c1.rank(), c2.rank());
        Self {
            high: r1.max(r2),
            low: r1.min(r2),
            suited: r1 != r2 && c1.suit() == c2.suit(),
        }
    }

    /// Creates a pocket pair class.
    pub fn pair(rank: Rank) -> Self {
        Self {
            high: rank,
            low: rank,
            suited: false,
        }
    }

    /// Creates a class for two distinct ranks in any order.
    ///
    /// Returns `None` if the ranks are equal.
    pub fn unpaired(r1: Rank, r2: Rank, suited: bool) -> Option<Self> {
        (r1 != r2).then(|| Self {
            high: r1.max(r2),
            low: r1.min(r2),
            suited,
        })
    }

    /// The highest rank.
    pub fn high(&self) -> Rank {
        self.high
    }

    /// The lowest rank, same as the highest rank for pairs.
    pub fn low(&self) -> Rank {
        self.low
    }

    /// Checks if this is a pocket pair.
    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    /// Checks if this is a suited class.
    pub fn is_suited(&self) -> bool {
        self.suited
    }

    /// Dense index in `0..169`.
    ///
    /// Pairs come first from aces down to deuces, then for each high rank from
    /// ace down and each lower rank from the highest down a suited class
    /// followed by its offsuit class.
    pub fn index(&self) -> usize {
        let i = Rank::Ace as usize - self.high as usize;
        if self.is_pair() {
            return i;
        }

        let j = Rank::Ace as usize - self.low as usize;
        let row_start = i * 12 - i * i.saturating_sub(1) / 2;
        let combo = row_start + (j - i - 1);
        13 + 2 * combo + usize::from(!self.suited)
    }

    /// Returns all the classes in index order.
    pub fn all() -> impl Iterator<Item = HandClass> {
        let pairs = Rank::ranks().rev().map(HandClass::pair);
        let unpaired = Rank::ranks().rev().flat_map(|high| {
            Rank::ranks()
                .rev()
                .filter(move |&low| low < high)
                .flat_map(move |low| {
                    [true, false].map(|suited| HandClass { high, low, suited })
                })
        });

        pairs.chain(unpaired)
    }

    /// The class label, e.g. `AA`, `AKs`, `T9o`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pair() {
            write!(f, "{}{}", self.high, self.low)
        } else {
            let kind = if self.suited { 's' } else { 'o' };
            write!(f, "{}{}{kind}", self.high, self.low)
        }
    }
}

impl FromStr for HandClass {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SimError::InvalidHandClass(s.to_string());

        let mut chars = s.chars();
        let r1 = chars.next().and_then(Rank::from_char).ok_or_else(invalid)?;
        let r2 = chars.next().and_then(Rank::from_char).ok_or_else(invalid)?;
        let kind = chars.next();
        if chars.next().is_some() {
            return Err(invalid());
        }

        match kind {
            None if r1 == r2 => Ok(HandClass::pair(r1)),
            Some('s' | 'S') => HandClass::unpaired(r1, r2, true).ok_or_else(invalid),
            Some('o' | 'O') => HandClass::unpaired(r1, r2, false).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use preflop_cards::{Deck, Suit};

    #[test]
    fn classify_hands() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        let kh = Card::new(Rank::King, Suit::Hearts);
        let ks = Card::new(Rank::King, Suit::Spades);

        assert_eq!(HandClass::new(ah, ad).to_string(), "AA");
        assert_eq!(HandClass::new(ah, kh).to_string(), "AKs");
        assert_eq!(HandClass::new(kh, ah).to_string(), "AKs");
        assert_eq!(HandClass::new(ks, ah).to_string(), "AKo");

        let t = Card::new(Rank::Ten, Suit::Clubs);
        let n = Card::new(Rank::Nine, Suit::Diamonds);
        assert_eq!(HandClass::new(n, t).label(), "T9o");
    }

    #[test]
    fn all_classes_indexed() {
        let classes = HandClass::all().collect::<Vec<_>>();
        assert_eq!(classes.len(), HandClass::COUNT);

        for (idx, class) in classes.iter().enumerate() {
            assert_eq!(class.index(), idx, "{class}");
        }

        assert_eq!(classes[0].to_string(), "AA");
        assert_eq!(classes[12].to_string(), "22");
        assert_eq!(classes[13].to_string(), "AKs");
        assert_eq!(classes[14].to_string(), "AKo");
        assert_eq!(classes[168].to_string(), "32o");

        assert_eq!(classes.iter().filter(|c| c.is_pair()).count(), 13);
        assert_eq!(classes.iter().filter(|c| c.is_suited()).count(), 78);
    }

    #[test]
    fn every_hand_has_one_class() {
        let mut classes = HashSet::default();
        let mut combos = [0u32; HandClass::COUNT];

        Deck::default().for_each::<2, _>(|&[c1, c2]| {
            let class = HandClass::new(c1, c2);
            assert_eq!(class, HandClass::new(c2, c1));
            combos[class.index()] += 1;
            classes.insert(class);
        });

        assert_eq!(classes.len(), HandClass::COUNT);

        for class in HandClass::all() {
            let expected = if class.is_pair() {
                6
            } else if class.is_suited() {
                4
            } else {
                12
            };
            assert_eq!(combos[class.index()], expected, "{class}");
        }
    }

    #[test]
    fn parse_labels() {
        for class in HandClass::all() {
            assert_eq!(class.label().parse::<HandClass>().unwrap(), class);
        }

        assert_eq!("ka".parse::<HandClass>().ok(), None);
        assert_eq!("KAs".parse::<HandClass>().unwrap().label(), "AKs");
        assert!("AAs".parse::<HandClass>().is_err());
        assert!("AKx".parse::<HandClass>().is_err());
        assert!("AKso".parse::<HandClass>().is_err());
        assert!("".parse::<HandClass>().is_err());
    }
}
