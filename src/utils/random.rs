// ABOUTME: Injectable, seedable random source shared by the decoy tools
// ABOUTME: Also generates fabricated reset reference ids that never repeat back-to-back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Randomness used by the tools: welcome message choice and reference ids.
//! A fixed seed makes both reproducible in tests.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::tools::{REFERENCE_ID_PREFIX, REFERENCE_ID_UPPER_BOUND};

/// Thread-safe pseudo-random source
#[derive(Debug)]
pub struct DecoyRng {
    inner: Mutex<StdRng>,
}

impl DecoyRng {
    /// Deterministic source
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Source seeded from OS entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seeded when `seed` is given, otherwise from entropy
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Uniform value in `[0, upper)`; returns 0 when `upper` is 0
    pub fn below(&self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        // A poisoned lock still holds a usable generator
        let mut rng = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..upper)
    }

    /// Pick one element uniformly
    pub fn choose<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        let upper = u32::try_from(items.len()).unwrap_or(u32::MAX);
        if upper == 0 {
            return None;
        }
        items.get(self.below(upper) as usize)
    }
}

/// Generates `OKTA-ADM-<n>` ids with `n` in `[0, 100000)`
#[derive(Debug)]
pub struct ReferenceIdGenerator {
    last: Mutex<Option<u32>>,
}

impl Default for ReferenceIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceIdGenerator {
    /// Create a generator with no history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: Mutex::new(None),
        }
    }

    /// Draw the next number; never equal to the previous one
    pub fn next_number(&self, rng: &DecoyRng) -> u32 {
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        let mut candidate = rng.below(REFERENCE_ID_UPPER_BOUND);
        while Some(candidate) == *last {
            candidate = rng.below(REFERENCE_ID_UPPER_BOUND);
        }
        *last = Some(candidate);
        candidate
    }

    /// Draw the next formatted reference id
    pub fn next_id(&self, rng: &DecoyRng) -> String {
        format!("{REFERENCE_ID_PREFIX}{}", self.next_number(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sources_agree() {
        let a = DecoyRng::seeded(7);
        let b = DecoyRng::seeded(7);
        let left: Vec<u32> = (0..16).map(|_| a.below(1000)).collect();
        let right: Vec<u32> = (0..16).map(|_| b.below(1000)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_below_stays_in_range() {
        let rng = DecoyRng::seeded(1);
        assert!((0..1000).all(|_| rng.below(3) < 3));
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    fn test_choose_empty_is_none() {
        let rng = DecoyRng::seeded(1);
        let empty: [&str; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&["only"]), Some(&"only"));
    }

    #[test]
    fn test_reference_ids_never_repeat_consecutively() {
        let rng = DecoyRng::seeded(42);
        let generator = ReferenceIdGenerator::new();
        let mut previous = generator.next_number(&rng);
        for _ in 0..10_000 {
            let next = generator.next_number(&rng);
            assert_ne!(next, previous);
            assert!(next < REFERENCE_ID_UPPER_BOUND);
            previous = next;
        }
    }

    #[test]
    fn test_reference_id_format() {
        let rng = DecoyRng::seeded(3);
        let id = ReferenceIdGenerator::new().next_id(&rng);
        let digits = id.strip_prefix("OKTA-ADM-").unwrap();
        assert!(digits.parse::<u32>().unwrap() < 100_000);
    }
}
