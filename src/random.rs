//! Seeded random sources and uniform sampling without replacement.
//!
//! Provides seeded RNG construction, seed resolution from a command-line
//! argument, a partial Fisher-Yates shuffle, and k-subset sampling built
//! on top of it.
//!
//! # Reproducibility
//!
//! For reproducible runs, use [`create_rng`] with a fixed seed and pass the
//! same generator, in the same order, to every [`sample`] call. The
//! underlying algorithm (SmallRng) is deterministic for a given seed on the
//! same platform. Runs without an explicit seed use [`SeedSource::TimeDerived`]
//! and are intentionally not reproducible.

use std::collections::BTreeSet;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use tracing::debug;

use crate::error::{to_i64, Result, SimError};

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_vaxsets::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Where the seed of a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// Parsed from the caller's argument. Runs are reproducible.
    Explicit(u64),
    /// Taken from the system clock because no usable argument was given.
    TimeDerived(u64),
}

impl SeedSource {
    pub fn value(self) -> u64 {
        match self {
            SeedSource::Explicit(seed) | SeedSource::TimeDerived(seed) => seed,
        }
    }

    pub fn is_reproducible(self) -> bool {
        matches!(self, SeedSource::Explicit(_))
    }
}

/// Resolves the seed for a run from an optional raw argument.
///
/// Accepts any `u64`, or a negative `i64` reinterpreted as its two's
/// complement bits. Anything else, including a missing argument, silently
/// falls back to [`time_seed`].
///
/// # Examples
/// ```
/// use u_vaxsets::random::{resolve_seed, SeedSource};
/// assert_eq!(resolve_seed(Some("7")), SeedSource::Explicit(7));
/// assert!(matches!(resolve_seed(Some("seven")), SeedSource::TimeDerived(_)));
/// ```
pub fn resolve_seed(raw: Option<&str>) -> SeedSource {
    let parsed = raw.and_then(|s| {
        let s = s.trim();
        s.parse::<u64>()
            .ok()
            .or_else(|| s.parse::<i64>().ok().map(|v| v as u64))
    });

    match parsed {
        Some(seed) => SeedSource::Explicit(seed),
        None => {
            if let Some(raw) = raw {
                debug!(raw, "seed argument is not an integer, using clock");
            }
            SeedSource::TimeDerived(time_seed())
        }
    }
}

/// Derives a seed from the wall clock (nanoseconds since the Unix epoch,
/// high and low halves folded together).
pub fn time_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    (nanos as u64) ^ ((nanos >> 64) as u64)
}

/// Partial Fisher-Yates shuffle of the first `amount` positions.
///
/// After the call, `slice[..amount]` is a uniformly random ordered
/// selection of `amount` distinct elements of the original slice; the
/// remainder holds the unselected elements in unspecified order.
///
/// # Algorithm
/// Forward (Durstenfeld) variant stopped early: for each `i < amount`,
/// swap position `i` with a position drawn uniformly from `[i, n)`.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(amount), Space: O(1) (in-place)
///
/// # Panics
/// Panics if `amount > slice.len()`.
///
/// # Examples
/// ```
/// use u_vaxsets::random::{create_rng, partial_shuffle};
/// let mut v = vec![1, 2, 3, 4, 5];
/// let mut rng = create_rng(42);
/// partial_shuffle(&mut v, 2, &mut rng);
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn partial_shuffle<T, R: Rng>(slice: &mut [T], amount: usize, rng: &mut R) {
    let n = slice.len();
    assert!(amount <= n, "amount {amount} exceeds slice length {n}");
    for i in 0..amount {
        let j = rng.random_range(i..n);
        slice.swap(i, j);
    }
}

/// Draws a uniformly random subset of exactly `amount` members, without
/// replacement.
///
/// The population is materialized in its ascending order, partially
/// shuffled with [`partial_shuffle`], and the first `amount` elements are
/// returned. Every `amount`-subset is equally likely. `population` is
/// never modified.
///
/// # Errors
/// [`SimError::InvalidArgument`] if `amount > population.len()`.
///
/// # Complexity
/// Time: O(n + k log k), Space: O(n)
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use u_vaxsets::random::{create_rng, sample};
/// let population: BTreeSet<u32> = (1..=10).collect();
/// let mut rng = create_rng(1);
/// let picked = sample(&population, 4, &mut rng).unwrap();
/// assert_eq!(picked.len(), 4);
/// assert!(picked.is_subset(&population));
/// ```
pub fn sample<T, R>(population: &BTreeSet<T>, amount: usize, rng: &mut R) -> Result<BTreeSet<T>>
where
    T: Ord + Clone,
    R: Rng,
{
    let n = population.len();
    if amount > n {
        return Err(SimError::invalid(
            "amount",
            to_i64(amount),
            format!("sample size must be within [0, {n}]"),
        ));
    }

    let mut pool: Vec<T> = population.iter().cloned().collect();
    partial_shuffle(&mut pool, amount, rng);
    pool.truncate(amount);

    debug!(population = n, amount, "drew uniform sample");
    Ok(pool.into_iter().collect())
}

/// Like [`sample`], but takes a signed size as received from outside the
/// crate, rejecting negatives.
///
/// # Errors
/// [`SimError::InvalidArgument`] if `amount < 0` or `amount > population.len()`.
pub fn sample_signed<T, R>(
    population: &BTreeSet<T>,
    amount: i64,
    rng: &mut R,
) -> Result<BTreeSet<T>>
where
    T: Ord + Clone,
    R: Rng,
{
    let amount = usize::try_from(amount).map_err(|_| {
        SimError::invalid("amount", amount, "sample size must not be negative")
    })?;
    sample(population, amount, rng)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn population(n: u32) -> BTreeSet<u32> {
        (1..=n).collect()
    }

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let vals1: Vec<f64> = (0..10).map(|_| rng1.random()).collect();
        let vals2: Vec<f64> = (0..10).map(|_| rng2.random()).collect();
        assert_eq!(vals1, vals2);
    }

    #[test]
    fn test_resolve_seed_explicit() {
        assert_eq!(resolve_seed(Some("123")), SeedSource::Explicit(123));
        assert_eq!(resolve_seed(Some(" 9 ")), SeedSource::Explicit(9));
    }

    #[test]
    fn test_resolve_seed_negative_wraps() {
        assert_eq!(resolve_seed(Some("-1")), SeedSource::Explicit(u64::MAX));
    }

    #[test]
    fn test_resolve_seed_fallbacks() {
        assert!(!resolve_seed(None).is_reproducible());
        assert!(!resolve_seed(Some("abc")).is_reproducible());
        assert!(!resolve_seed(Some("")).is_reproducible());
        assert!(matches!(resolve_seed(Some("-abc")), SeedSource::TimeDerived(_)));
        assert!(matches!(resolve_seed(Some("--seed")), SeedSource::TimeDerived(_)));
    }

    #[test]
    fn test_seed_source_value() {
        assert_eq!(SeedSource::Explicit(5).value(), 5);
        assert_eq!(SeedSource::TimeDerived(8).value(), 8);
    }

    #[test]
    fn test_partial_shuffle_preserves_elements() {
        let mut v: Vec<u32> = (1..=10).collect();
        let mut rng = create_rng(123);
        partial_shuffle(&mut v, 4, &mut rng);
        v.sort();
        assert_eq!(v, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_partial_shuffle_zero_is_noop() {
        let mut v = vec![3, 1, 2];
        let mut rng = create_rng(0);
        partial_shuffle(&mut v, 0, &mut rng);
        assert_eq!(v, vec![3, 1, 2]);
    }

    #[test]
    fn test_partial_shuffle_empty() {
        let mut v: Vec<i32> = vec![];
        let mut rng = create_rng(0);
        partial_shuffle(&mut v, 0, &mut rng); // should not panic
    }

    #[test]
    #[should_panic(expected = "exceeds slice length")]
    fn test_partial_shuffle_amount_too_large() {
        let mut v = vec![1, 2];
        let mut rng = create_rng(0);
        partial_shuffle(&mut v, 3, &mut rng);
    }

    #[test]
    fn test_sample_zero_is_empty() {
        let mut rng = create_rng(7);
        assert!(sample(&population(10), 0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_sample_everything_is_population() {
        let pop = population(10);
        let mut rng = create_rng(7);
        assert_eq!(sample(&pop, 10, &mut rng).unwrap(), pop);
    }

    #[test]
    fn test_sample_too_many_fails() {
        let mut rng = create_rng(7);
        let err = sample(&population(10), 11, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidArgument {
                name: "amount",
                value: 11,
                ..
            }
        ));
    }

    #[test]
    fn test_sample_signed_negative_fails() {
        let mut rng = create_rng(7);
        let err = sample_signed(&population(10), -1, &mut rng).unwrap_err();
        assert!(matches!(err, SimError::InvalidArgument { value: -1, .. }));
    }

    #[test]
    fn test_sample_signed_in_range() {
        let mut rng = create_rng(7);
        assert_eq!(sample_signed(&population(10), 3, &mut rng).unwrap().len(), 3);
    }

    #[test]
    fn test_sample_from_empty_population() {
        let empty: BTreeSet<u32> = BTreeSet::new();
        let mut rng = create_rng(0);
        assert!(sample(&empty, 0, &mut rng).unwrap().is_empty());
        assert!(sample(&empty, 1, &mut rng).is_err());
    }

    #[test]
    fn test_sample_does_not_touch_population() {
        let pop = population(20);
        let before = pop.clone();
        let mut rng = create_rng(3);
        let _ = sample(&pop, 5, &mut rng).unwrap();
        assert_eq!(pop, before);
    }

    #[test]
    fn test_sample_same_seed_same_subset() {
        let pop = population(500);
        let a = sample(&pop, 75, &mut create_rng(2024)).unwrap();
        let b = sample(&pop, 75, &mut create_rng(2024)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_shared_stream_differs() {
        // Two draws from one stream; identical 40-of-500 subsets are
        // astronomically unlikely.
        let pop = population(500);
        let mut rng = create_rng(1);
        let first = sample(&pop, 40, &mut rng).unwrap();
        let second = sample(&pop, 40, &mut rng).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_sample_roughly_uniform() {
        // 1-of-4 draws: each element should appear about 1/4 of the time.
        let pop = population(4);
        let mut rng = create_rng(42);
        let mut counts = [0u32; 4];
        let trials = 20_000;
        for _ in 0..trials {
            let picked = sample(&pop, 1, &mut rng).unwrap();
            let x = *picked.iter().next().unwrap();
            counts[(x - 1) as usize] += 1;
        }
        for c in counts {
            let p = c as f64 / trials as f64;
            assert!((p - 0.25).abs() < 0.02, "expected ~0.25, got {p}");
        }
    }

    #[test]
    fn test_sample_pairs_equally_likely() {
        // 2-of-4 draws: each of the 6 pairs should appear about 1/6 of the time.
        let pop = population(4);
        let mut rng = create_rng(7);
        let mut counts: std::collections::BTreeMap<Vec<u32>, u32> = Default::default();
        let trials = 30_000;
        for _ in 0..trials {
            let picked = sample(&pop, 2, &mut rng).unwrap();
            *counts.entry(picked.into_iter().collect()).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for (pair, c) in counts {
            let p = c as f64 / trials as f64;
            assert!((p - 1.0 / 6.0).abs() < 0.015, "pair {pair:?}: expected ~0.167, got {p}");
        }
    }
}
