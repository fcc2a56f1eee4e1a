//! Seedable randomness for role assignment and content draws
//!
//! The game draws questions, words and impostors from a [`RandomSource`].
//! The default source is [`Lcg`], a small linear congruential generator that
//! is seeded once when the game is created and reproduces the same sequence
//! for the same seed. It is meant for a trust-based party game and offers no
//! protection against anyone trying to predict it.
//!
//! ```rust
//! use suspect::rng::{Lcg, RandomSource};
//!
//! let mut rng = Lcg::new(42);
//! let mut seats = [0, 1, 2, 3];
//! rng.shuffle(&mut seats);
//! ```

use serde::{Deserialize, Serialize};
use web_time::{SystemTime, UNIX_EPOCH};

/// Multiplier of the congruential step
const MULTIPLIER: u64 = 9301;
/// Increment of the congruential step
const INCREMENT: u64 = 49297;
/// Modulus of the congruential step, also the period upper bound
const MODULUS: u64 = 233_280;

/// A source of uniformly distributed randomness
///
/// Implementors only need to provide [`RandomSource::next_unit`]; the index,
/// choice and shuffle helpers are derived from it.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Returns an index in `0..bound`
    ///
    /// `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize {
        ((self.next_unit() * bound as f64) as usize).min(bound.saturating_sub(1))
    }

    /// Picks one element of `items` uniformly, or `None` when it is empty
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.below(items.len()))
        }
    }

    /// Shuffles `items` in place with the Fisher–Yates algorithm
    ///
    /// Walks from the last slot down, swapping each slot with a uniformly
    /// chosen slot at or below it.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

/// Linear congruential generator
///
/// `state' = (state * 9301 + 49297) mod 233280`, output `state' / 233280`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Creates a generator from a fixed seed
    ///
    /// Seeds congruent modulo 233280 produce the same sequence.
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % MODULUS,
        }
    }

    /// Creates a generator seeded from the wall clock in milliseconds
    pub fn from_clock() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default();
        tracing::debug!(seed = millis, "seeding role generator");
        Self::new(millis)
    }

    /// Returns the raw state
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Default for Lcg {
    /// Same as [`Lcg::from_clock`]
    fn default() -> Self {
        Self::from_clock()
    }
}

impl RandomSource for Lcg {
    fn next_unit(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }
}

impl RandomSource for fastrand::Rng {
    fn next_unit(&mut self) -> f64 {
        self.f64()
    }

    fn below(&mut self, bound: usize) -> usize {
        self.usize(..bound.max(1))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lcg_known_sequence() {
        let mut rng = Lcg::new(0);
        assert_eq!(rng.next_unit(), 49297.0 / 233_280.0);
        assert_eq!(rng.state(), 49297);

        let expected = (49297 * 9301 + 49297) % 233_280;
        rng.next_unit();
        assert_eq!(rng.state(), expected);
    }

    #[test]
    fn test_lcg_seed_is_reduced() {
        let mut a = Lcg::new(5);
        let mut b = Lcg::new(5 + MODULUS);
        for _ in 0..20 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_below_stays_in_range() {
        let mut rng = Lcg::new(7);
        for _ in 0..1000 {
            assert!(rng.below(6) < 6);
        }
        assert_eq!(rng.below(1), 0);
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = Lcg::new(1);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), None);
        assert!(rng.choose(&[1, 2, 3]).is_some());
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = Lcg::new(99);
        let mut seats: Vec<usize> = (0..10).collect();
        rng.shuffle(&mut seats);

        let mut sorted = seats.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_fastrand_source() {
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..100 {
            let value = rng.next_unit();
            assert!((0.0..1.0).contains(&value));
            assert!(rng.below(4) < 4);
        }
    }

    proptest! {
        #[test]
        fn prop_same_seed_same_shuffle(seed in any::<u64>()) {
            let mut first: Vec<usize> = (0..8).collect();
            let mut second = first.clone();
            Lcg::new(seed).shuffle(&mut first);
            Lcg::new(seed).shuffle(&mut second);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_unit_interval(seed in any::<u64>()) {
            let mut rng = Lcg::new(seed);
            for _ in 0..50 {
                let value = rng.next_unit();
                prop_assert!((0.0..1.0).contains(&value));
            }
        }
    }
}
