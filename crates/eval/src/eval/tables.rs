// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator lookup tables.
//!
//! The flush table is indexed directly by the 13 rank bits of a flush. All
//! other hands are identified by the product of their five rank primes, the
//! product goes through a perfect hash: a mixing function picks a bucket and a
//! primary slot, and a per bucket displacement moves the primary slot so that
//! all the 6175 products land in distinct slots of the values table.
use std::{cmp::Reverse, sync::LazyLock};

use preflop_cards::PRIMES;

/// Number of buckets in the displacement table.
const BUCKETS: usize = 1 << 12;

/// Number of slots in the values table.
const SLOTS: usize = 1 << 15;

/// Bit shift to get the primary slot out of the mixed key.
const PRIMARY_SHIFT: u32 = 32 - SLOTS.trailing_zeros();

/// Initial mixing seed.
const SEED: u32 = 0xE91A_AA35;

/// Maximum number of seeds tried to build the perfect hash.
const MAX_SEEDS: u32 = 256;

/// Lowest strength of each hand category.
pub(crate) const STRAIGHT_FLUSH_LO: u16 = 10;
pub(crate) const FOUR_OF_A_KIND_LO: u16 = 166;
pub(crate) const FULL_HOUSE_LO: u16 = 322;
pub(crate) const FLUSH_LO: u16 = 1599;
pub(crate) const STRAIGHT_LO: u16 = 1609;
pub(crate) const THREE_OF_A_KIND_LO: u16 = 2467;
pub(crate) const TWO_PAIR_LO: u16 = 3325;
pub(crate) const ONE_PAIR_LO: u16 = 6185;
pub(crate) const HIGH_CARD_LO: u16 = 7462;

static TABLES: LazyLock<Tables> = LazyLock::new(Tables::build);

/// Returns the process wide tables, building them on first use.
#[inline]
pub(crate) fn tables() -> &'static Tables {
    &TABLES
}

/// Read only evaluator tables.
pub(crate) struct Tables {
    /// Flush strengths indexed by rank bits.
    flush: Vec<u16>,
    /// Per bucket displacement.
    adjust: Vec<u16>,
    /// Non flush strengths indexed by displaced slot.
    values: Vec<u16>,
    /// The seed used by the mixing function.
    seed: u32,
}

impl Tables {
    /// Strength of a flush with the given rank bits.
    #[inline]
    pub(crate) fn flush(&self, rank_bits: u32) -> u16 {
        self.flush[rank_bits as usize]
    }

    /// Strength of a non flush hand with the given primes product.
    #[inline]
    pub(crate) fn product(&self, product: u32) -> u16 {
        let h = mix(product, self.seed);
        let bucket = h as usize & (BUCKETS - 1);
        let slot = (h >> PRIMARY_SHIFT) as u16 ^ self.adjust[bucket];
        self.values[slot as usize]
    }

    fn build() -> Tables {
        let straights = straights();
        let no_straights = no_straights(&straights);

        let mut flush = vec![0u16; 1 << 13];
        let mut products = Vec::with_capacity(6175);
        let mut strength = 1u16;

        let mut next = || {
            let s = strength;
            strength += 1;
            s
        };

        for &bits in &straights {
            flush[bits as usize] = next();
        }

        for (quads, kicker) in pairs_desc() {
            products.push((PRIMES[quads].pow(4) * PRIMES[kicker], next()));
        }

        for (trips, pair) in pairs_desc() {
            products.push((PRIMES[trips].pow(3) * PRIMES[pair].pow(2), next()));
        }

        for &bits in &no_straights {
            flush[bits as usize] = next();
        }

        for &bits in &straights {
            products.push((bits_product(bits), next()));
        }

        for trips in (0..13).rev() {
            for k1 in (0..13).rev().filter(|&k| k != trips) {
                for k2 in (0..k1).rev().filter(|&k| k != trips) {
                    let p = PRIMES[trips].pow(3) * PRIMES[k1] * PRIMES[k2];
                    products.push((p, next()));
                }
            }
        }

        for p1 in (0..13).rev() {
            for p2 in (0..p1).rev() {
                for k in (0..13).rev().filter(|&k| k != p1 && k != p2) {
                    let p = PRIMES[p1].pow(2) * PRIMES[p2].pow(2) * PRIMES[k];
                    products.push((p, next()));
                }
            }
        }

        for pair in (0..13).rev() {
            for k1 in (0..13).rev().filter(|&k| k != pair) {
                for k2 in (0..k1).rev().filter(|&k| k != pair) {
                    for k3 in (0..k2).rev().filter(|&k| k != pair) {
                        let p = PRIMES[pair].pow(2) * PRIMES[k1] * PRIMES[k2] * PRIMES[k3];
                        products.push((p, next()));
                    }
                }
            }
        }

        for &bits in &no_straights {
            products.push((bits_product(bits), next()));
        }

        debug_assert_eq!(strength - 1, HIGH_CARD_LO);
        debug_assert_eq!(products.len(), 6175);

        for attempt in 0..MAX_SEEDS {
            let seed = SEED.wrapping_add(attempt.wrapping_mul(0x9E37_79B9));
            if let Some((adjust, values)) = displace(&products, seed) {
                return Tables {
                    flush,
                    adjust,
                    values,
                    seed,
                };
            }
        }

        panic!("No perfect hash found after {MAX_SEEDS} seeds");
    }
}

/// Mixes a primes product into a 32 bits hash key.
#[inline]
fn mix(product: u32, seed: u32) -> u32 {
    let mut h = product ^ seed;
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^ (h >> 16)
}

/// Finds a displacement for each bucket so that all products map to
/// distinct slots, returns the displacements and the values table.
fn displace(products: &[(u32, u16)], seed: u32) -> Option<(Vec<u16>, Vec<u16>)> {
    let mut buckets = vec![Vec::new(); BUCKETS];
    for &(product, strength) in products {
        let h = mix(product, seed);
        let primary = (h >> PRIMARY_SHIFT) as u16;
        buckets[h as usize & (BUCKETS - 1)].push((primary, strength));
    }

    // Place the largest buckets first while the table is mostly empty.
    let mut order = (0..BUCKETS).collect::<Vec<_>>();
    order.sort_by_key(|&b| Reverse(buckets[b].len()));

    let mut adjust = vec![0u16; BUCKETS];
    let mut values = vec![0u16; SLOTS];

    for b in order {
        let keys = &buckets[b];
        if keys.is_empty() {
            break;
        }

        // Two keys with the same primary slot move together, try another seed.
        let mut primaries = keys.iter().map(|&(p, _)| p).collect::<Vec<_>>();
        primaries.sort_unstable();
        if primaries.windows(2).any(|w| w[0] == w[1]) {
            return None;
        }

        let d = (0..SLOTS as u16).find(|&d| keys.iter().all(|&(p, _)| values[(p ^ d) as usize] == 0))?;

        for &(p, strength) in keys {
            values[(p ^ d) as usize] = strength;
        }

        adjust[b] = d;
    }

    Some((adjust, values))
}

/// Straight rank patterns from ace high down to the wheel.
fn straights() -> Vec<u32> {
    let mut straights = (4..13).rev().map(|high| 0x1F << (high - 4)).collect::<Vec<u32>>();
    straights.push(0x100F);
    straights
}

/// Five distinct ranks patterns that are not straights, strongest first.
///
/// With five distinct ranks comparing the patterns as integers is the same
/// as comparing the ranks from the highest down.
fn no_straights(straights: &[u32]) -> Vec<u32> {
    (0..1u32 << 13)
        .rev()
        .filter(|bits| bits.count_ones() == 5 && !straights.contains(bits))
        .collect()
}

/// Ordered pairs of distinct ranks, strongest first.
fn pairs_desc() -> impl Iterator<Item = (usize, usize)> {
    (0..13)
        .rev()
        .flat_map(|a| (0..13).rev().filter(move |&b| b != a).map(move |b| (a, b)))
}

/// Product of the primes for the ranks in a pattern.
fn bits_product(bits: u32) -> u32 {
    (0..13)
        .filter(|r| bits & (1 << r) != 0)
        .map(|r| PRIMES[r])
        .product()
}
