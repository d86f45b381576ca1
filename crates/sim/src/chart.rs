// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Starting hands equity chart.
//!
//! The chart is a 13x13 CSV matrix with ranks from aces down to deuces, pairs
//! are on the diagonal, suited hands above the diagonal and offsuit hands
//! below it:
//!
//! ```text
//! ,A,K,Q,..,2,
//! A,AA,AKs,AQs,..,A2s,
//! K,AKo,KK,KQs,..,K2s,
//! ..
//! ```
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use preflop_cards::Rank;

use crate::{HandClass, SimError, StatsTable};

/// Returns the class for a chart cell, rows and columns go from aces down.
pub fn cell_class(row: Rank, col: Rank) -> HandClass {
    HandClass::unpaired(row, col, row > col).unwrap_or_else(|| HandClass::pair(row))
}

/// Writes the chart of finalized statistics as CSV.
///
/// Values have three decimals, classes that were never dealt have an empty
/// cell.
pub fn write_csv<W: Write>(stats: &StatsTable, mut w: W) -> io::Result<()> {
    write!(w, ",")?;
    for rank in Rank::ranks().rev() {
        write!(w, "{rank},")?;
    }
    writeln!(w)?;

    for row in Rank::ranks().rev() {
        write!(w, "{row},")?;
        for col in Rank::ranks().rev() {
            let s = stats.get(cell_class(row, col));
            if s.occurrences() > 0 {
                write!(w, "{:.3},", s.average())?;
            } else {
                write!(w, ",")?;
            }
        }
        writeln!(w)?;
    }

    w.flush()
}

/// Saves the chart to a CSV file.
pub fn save_csv<P: AsRef<Path>>(stats: &StatsTable, path: P) -> Result<(), SimError> {
    let path = path.as_ref();
    let output_error = |source| SimError::Output {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(output_error)?;
    write_csv(stats, BufWriter::new(file)).map_err(output_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Outcome;

    #[test]
    fn cell_classes() {
        use Rank::*;
        assert_eq!(cell_class(Ace, Ace).label(), "AA");
        assert_eq!(cell_class(Ace, King).label(), "AKs");
        assert_eq!(cell_class(King, Ace).label(), "AKo");
        assert_eq!(cell_class(Trey, Deuce).label(), "32s");
        assert_eq!(cell_class(Deuce, Trey).label(), "32o");

        // Rows and columns in any order give the same ranks.
        for (row, col) in [(Queen, Nine), (Nine, Queen)] {
            let class = cell_class(row, col);
            assert_eq!(class.high(), Queen);
            assert_eq!(class.low(), Nine);
            assert_eq!(class.is_suited(), row > col);
        }

        let pair = cell_class(Seven, Seven);
        assert_eq!(pair.high(), pair.low());
        assert!(pair.is_pair());
    }

    #[test]
    fn csv_layout() {
        let mut stats = StatsTable::try_new().unwrap();
        let aks = HandClass::unpaired(Rank::Ace, Rank::King, true).unwrap();
        let ako = HandClass::unpaired(Rank::Ace, Rank::King, false).unwrap();
        let aa = HandClass::pair(Rank::Ace);

        stats.record(aa, Outcome::Win);
        stats.record(aks, Outcome::Win);
        stats.record(aks, Outcome::Loss);
        stats.record(aks, Outcome::Loss);
        stats.record(ako, Outcome::Loss);
        stats.finalize();

        let mut buf = Vec::new();
        write_csv(&stats, &mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        let lines = csv.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], ",A,K,Q,J,T,9,8,7,6,5,4,3,2,");
        assert_eq!(lines[1], format!("A,1.000,0.333,{}", ",".repeat(11)));
        assert_eq!(lines[2], format!("K,0.000,{}", ",".repeat(12)));
        assert_eq!(lines[13], format!("2,{}", ",".repeat(13)));

        for line in &lines {
            assert_eq!(line.matches(',').count(), 14);
        }
    }

    #[test]
    fn save_to_missing_dir() {
        let stats = StatsTable::try_new().unwrap();
        let path = std::env::temp_dir()
            .join("preflop-missing-dir")
            .join("nested")
            .join("out.csv");

        let err = save_csv(&stats, &path).unwrap_err();
        assert!(matches!(err, SimError::Output { .. }));
    }

    #[test]
    fn save_to_file() {
        let mut stats = StatsTable::try_new().unwrap();
        stats.record(HandClass::pair(Rank::Deuce), Outcome::Tie);
        stats.finalize();

        let path = std::env::temp_dir().join(format!("preflop-{}.csv", std::process::id()));
        save_csv(&stats, &path).unwrap();

        let csv = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(csv.ends_with(&format!("2,{}0.500,\n", ",".repeat(12))));
    }
}
