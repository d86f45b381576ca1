// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Starting hands statistics.
use crate::{HandClass, SimError};

/// A player outcome in a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player has the strongest hand.
    Win,
    /// Both players have hands of the same strength.
    Tie,
    /// The other player has the strongest hand.
    Loss,
}

impl Outcome {
    /// The points awarded for this outcome, a tie splits the point.
    pub fn points(self) -> f64 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Tie => 0.5,
            Outcome::Loss => 0.0,
        }
    }
}

/// Statistics for a starting hand class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandStats {
    class: HandClass,
    wins: u64,
    ties: u64,
    occurrences: u64,
    average: f64,
}

impl HandStats {
    fn new(class: HandClass) -> Self {
        Self {
            class,
            wins: 0,
            ties: 0,
            occurrences: 0,
            average: 0.0,
        }
    }

    /// The starting hand class.
    pub fn class(&self) -> HandClass {
        self.class
    }

    /// Number of times the class was dealt.
    pub fn occurrences(&self) -> u64 {
        self.occurrences
    }

    /// Number of won trials.
    pub fn wins(&self) -> u64 {
        self.wins
    }

    /// Number of tied trials.
    pub fn ties(&self) -> u64 {
        self.ties
    }

    /// Total points, a win is one point and a tie half a point.
    pub fn points(&self) -> f64 {
        self.wins as f64 + self.ties as f64 / 2.0
    }

    /// Average points per occurrence, set by [StatsTable::finalize].
    ///
    /// This is 0.0 for classes that were never dealt.
    pub fn average(&self) -> f64 {
        self.average
    }

    fn record(&mut self, outcome: Outcome) {
        self.occurrences += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => {}
        }
    }
}

/// Statistics for all the 169 starting hand classes.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsTable {
    stats: Vec<HandStats>,
}

impl StatsTable {
    /// Creates an empty table, fails if the table storage cannot be allocated.
    pub fn try_new() -> Result<Self, SimError> {
        let mut stats = Vec::new();
        stats.try_reserve_exact(HandClass::COUNT)?;
        stats.extend(HandClass::all().map(HandStats::new));
        Ok(Self { stats })
    }

    /// Records an outcome for a starting hand class.
    #[inline]
    pub fn record(&mut self, class: HandClass, outcome: Outcome) {
        self.stats[class.index()].record(outcome);
    }

    /// Adds the counters of another table to this table.
    pub fn merge(&mut self, other: &StatsTable) {
        for (s, o) in self.stats.iter_mut().zip(&other.stats) {
            s.wins += o.wins;
            s.ties += o.ties;
            s.occurrences += o.occurrences;
        }
    }

    /// Computes the average points for each class.
    pub fn finalize(&mut self) {
        for s in self.stats.iter_mut().filter(|s| s.occurrences > 0) {
            s.average = s.points() / s.occurrences as f64;
        }
    }

    /// The statistics for a class.
    pub fn get(&self, class: HandClass) -> &HandStats {
        &self.stats[class.index()]
    }

    /// Iterates the statistics in class index order.
    pub fn iter(&self) -> impl Iterator<Item = &HandStats> {
        self.stats.iter()
    }

    /// Sum of all classes occurrences.
    pub fn total_occurrences(&self) -> u64 {
        self.stats.iter().map(|s| s.occurrences).sum()
    }

    /// Sum of all classes points.
    pub fn total_points(&self) -> f64 {
        self.stats.iter().map(HandStats::points).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use preflop_cards::Rank;

    #[test]
    fn record_and_finalize() {
        let aa = HandClass::pair(Rank::Ace);
        let ako = HandClass::unpaired(Rank::Ace, Rank::King, false).unwrap();
        let t2s = HandClass::unpaired(Rank::Ten, Rank::Deuce, true).unwrap();

        let mut table = StatsTable::try_new().unwrap();
        table.record(aa, Outcome::Win);
        table.record(aa, Outcome::Win);
        table.record(aa, Outcome::Loss);
        table.record(aa, Outcome::Tie);
        table.record(ako, Outcome::Loss);
        table.finalize();

        let s = table.get(aa);
        assert_eq!(s.class(), aa);
        assert_eq!(s.occurrences(), 4);
        assert_eq!(s.wins(), 2);
        assert_eq!(s.ties(), 1);
        assert_eq!(s.points(), 2.5);
        assert_eq!(s.average(), 0.625);

        assert_eq!(table.get(ako).average(), 0.0);
        assert_eq!(table.get(ako).occurrences(), 1);

        // Never dealt.
        assert_eq!(table.get(t2s).occurrences(), 0);
        assert_eq!(table.get(t2s).average(), 0.0);

        assert_eq!(table.total_occurrences(), 5);
        assert_eq!(table.total_points(), 2.5);
    }

    #[test]
    fn merge_tables() {
        let kk = HandClass::pair(Rank::King);

        let mut t1 = StatsTable::try_new().unwrap();
        t1.record(kk, Outcome::Win);

        let mut t2 = StatsTable::try_new().unwrap();
        t2.record(kk, Outcome::Loss);
        t2.record(kk, Outcome::Tie);

        t1.merge(&t2);
        t1.finalize();

        assert_eq!(t1.get(kk).occurrences(), 3);
        assert_eq!(t1.get(kk).points(), 1.5);
        assert_eq!(t1.get(kk).average(), 0.5);
        assert_eq!(t1.iter().count(), HandClass::COUNT);
    }

    #[test]
    fn outcome_points() {
        assert_eq!(Outcome::Win.points(), 1.0);
        assert_eq!(Outcome::Tie.points(), 0.5);
        assert_eq!(Outcome::Loss.points(), 0.0);
    }
}
