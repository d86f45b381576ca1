// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Run seed acquisition.
use log::warn;
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns a 32 bits seed from the OS entropy source.
///
/// Falls back to the current wall-clock time in seconds if the entropy
/// source is not available.
pub fn os_seed() -> u32 {
    match getrandom::u32() {
        Ok(seed) => seed,
        Err(e) => {
            warn!("OS entropy not available ({e}), seeding from the clock");
            clock_seed()
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_differ() {
        // Two equal 32 bits draws are possible but very unlikely.
        let seeds = (0..4).map(|_| os_seed()).collect::<Vec<_>>();
        assert!(seeds.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn clock_fallback() {
        assert!(clock_seed() > 0);
    }
}
