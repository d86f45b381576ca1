// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! End to end simulation runs.
use preflop_cards::Rank;
use preflop_sim::{Config, HandClass, StatsTable, Simulator, chart};

fn run(trials: u64, seed: u32, tasks: usize) -> StatsTable {
    let config = Config {
        trials,
        seed,
        tasks,
    };

    Simulator::new(config).unwrap().run(|_| {}).unwrap()
}

#[test]
fn seeded_runs_are_reproducible() {
    let s1 = run(1_000, 1234, 1);
    let s2 = run(1_000, 1234, 1);
    assert_eq!(s1, s2);

    let p1 = run(1_000, 1234, 4);
    let p2 = run(1_000, 1234, 4);
    assert_eq!(p1, p2);

    let other = run(1_000, 4321, 1);
    assert_ne!(s1, other);
}

#[test]
fn totals_are_conserved() {
    for (trials, tasks) in [(1_000, 1), (2_500, 3)] {
        let stats = run(trials, 99, tasks);
        assert_eq!(stats.total_occurrences(), 2 * trials);
        assert_eq!(stats.total_points(), trials as f64);

        let wins = stats.iter().map(|s| s.wins()).sum::<u64>();
        let ties = stats.iter().map(|s| s.ties()).sum::<u64>();
        assert_eq!(wins + ties / 2, trials);
        assert_eq!(ties % 2, 0);
    }
}

#[test]
fn averages_are_bounded() {
    let stats = run(5_000, 7, 2);
    for s in stats.iter() {
        assert!((0.0..=1.0).contains(&s.average()), "{}", s.class());
        if s.occurrences() == 0 {
            assert_eq!(s.average(), 0.0);
        }
    }
}

#[test]
fn aces_beat_seven_deuce() {
    let stats = run(100_000, 2024, 4);

    let aa = stats.get(HandClass::pair(Rank::Ace));
    let o72 = stats.get(HandClass::unpaired(Rank::Seven, Rank::Deuce, false).unwrap());

    assert!(aa.occurrences() > 0 && o72.occurrences() > 0);
    assert!(aa.average() > 0.75, "AA {}", aa.average());
    assert!(o72.average() < 0.45, "72o {}", o72.average());
}

#[test]
fn chart_from_run() {
    let stats = run(20_000, 5, 2);

    let mut buf = Vec::new();
    chart::write_csv(&stats, &mut buf).unwrap();
    let csv = String::from_utf8(buf).unwrap();

    let rows = csv.lines().collect::<Vec<_>>();
    assert_eq!(rows.len(), 14);

    for (row, line) in rows[1..].iter().zip(["A", "K", "Q", "J", "T", "9", "8"]) {
        assert!(row.starts_with(line));
    }

    // Every cell with a value has exactly three decimals.
    for cell in rows[1..].iter().flat_map(|r| r.split(',').skip(1)) {
        if !cell.is_empty() {
            let (_, decimals) = cell.split_once('.').unwrap();
            assert_eq!(decimals.len(), 3);
        }
    }
}
