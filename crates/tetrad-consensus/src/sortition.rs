//! Clock-seeded sortition.
//!
//! A bounded subset of candidates is drawn deterministically:
//!
//! ```text
//! bucket = now_millis / bucket_millis
//! seed   = u64(H("tetrad-sortition" ‖ bucket ‖ n)[..8])
//! k      = 3 + seed mod (n − 2)            (3 ≤ k ≤ n)
//! picked = sample(StdRng(seed), n, k), sorted ascending
//! ```
//!
//! The draw is a pure function of the candidate count and the clock bucket.
//! Candidates keep their relative order in the selection.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::Clock;
use crate::threshold::selection_bounds;

/// Default width of a sortition bucket.
pub const DEFAULT_BUCKET: Duration = Duration::from_secs(60);

/// Draws a bounded-size subset from a candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuorumSelector {
    bucket_millis: u64,
}

impl Default for QuorumSelector {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET)
    }
}

impl QuorumSelector {
    /// Create a selector whose seed changes once per `bucket`.
    ///
    /// Buckets shorter than a millisecond are widened to one.
    pub fn new(bucket: Duration) -> Self {
        Self {
            bucket_millis: (bucket.as_millis() as u64).max(1),
        }
    }

    /// Width of one bucket in milliseconds.
    pub const fn bucket_millis(&self) -> u64 {
        self.bucket_millis
    }

    /// The bucket the clock currently reads.
    pub fn bucket(&self, clock: &dyn Clock) -> u64 {
        clock.now_millis() / self.bucket_millis
    }

    /// Select from `candidates` using the clock's current bucket.
    pub fn select<T: Clone>(&self, candidates: &[T], clock: &dyn Clock) -> Vec<T> {
        self.select_in_bucket(candidates, self.bucket(clock))
    }

    /// Select from `candidates` for an explicit bucket.
    pub fn select_in_bucket<T: Clone>(&self, candidates: &[T], bucket: u64) -> Vec<T> {
        let n = candidates.len();
        let (min, max) = selection_bounds(n);
        if min == max {
            return candidates.to_vec();
        }

        let seed = sortition_seed(bucket, n);
        let k = min + (seed % (max - min + 1) as u64) as usize;

        let mut rng = StdRng::seed_from_u64(seed);
        let mut picked = rand::seq::index::sample(&mut rng, n, k).into_vec();
        picked.sort_unstable();

        picked.into_iter().map(|i| candidates[i].clone()).collect()
    }
}

/// Seed for one bucket over `n` candidates.
fn sortition_seed(bucket: u64, n: usize) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"tetrad-sortition");
    hasher.update(&bucket.to_le_bytes());
    hasher.update(&(n as u64).to_le_bytes());

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&hasher.finalize().as_bytes()[..8]);
    u64::from_le_bytes(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::threshold::MIN_QUORUM;
    use proptest::prelude::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("v{}", i)).collect()
    }

    #[test]
    fn two_candidates_returned_unchanged() {
        let clock = ManualClock::at(123_456);
        let candidates = vec!["b".to_string(), "a".to_string()];
        assert_eq!(QuorumSelector::default().select(&candidates, &clock), candidates);
    }

    #[test]
    fn empty_and_single() {
        let clock = ManualClock::at(0);
        let selector = QuorumSelector::default();
        assert!(selector.select::<u8>(&[], &clock).is_empty());
        assert_eq!(selector.select(&[7u8], &clock), vec![7]);
    }

    #[test]
    fn selection_is_deterministic() {
        let clock = ManualClock::at(1_700_000_000_000);
        let selector = QuorumSelector::default();
        let candidates = names(9);

        let first = selector.select(&candidates, &clock);
        let second = selector.select(&candidates, &clock);
        assert_eq!(first, second);
    }

    #[test]
    fn same_bucket_same_selection() {
        let selector = QuorumSelector::new(Duration::from_secs(60));
        let candidates = names(7);

        // Both instants fall in bucket 10
        let early = ManualClock::at(600_000);
        let late = ManualClock::at(659_999);
        assert_eq!(selector.bucket(&early), selector.bucket(&late));
        assert_eq!(
            selector.select(&candidates, &early),
            selector.select(&candidates, &late)
        );
    }

    #[test]
    fn buckets_can_change_selection() {
        let selector = QuorumSelector::default();
        let candidates = names(8);

        let draws: std::collections::HashSet<Vec<String>> = (0..50)
            .map(|bucket| selector.select_in_bucket(&candidates, bucket))
            .collect();
        assert!(draws.len() > 1, "50 buckets produced a single selection");
    }

    #[test]
    fn selection_preserves_candidate_order() {
        let candidates: Vec<u32> = (0..12).collect();
        for bucket in 0..20 {
            let picked = QuorumSelector::default().select_in_bucket(&candidates, bucket);
            assert!(picked.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn known_draws() {
        assert_eq!(sortition_seed(42, 9), 15_615_150_377_818_801_688);

        let selector = QuorumSelector::default();
        assert_eq!(
            selector.select_in_bucket(&names(9), 42),
            ["v0", "v1", "v3", "v5", "v6", "v7", "v8"]
        );
        assert_eq!(
            selector.select_in_bucket(&names(7), 0),
            ["v0", "v2", "v3", "v4", "v5", "v6"]
        );
        assert_eq!(
            selector.select_in_bucket(&(0..12u32).collect::<Vec<_>>(), 7),
            [4, 8, 9, 11]
        );
    }

    #[test]
    fn three_candidates_always_kept() {
        let candidates = names(3);
        for bucket in 0..20 {
            assert_eq!(QuorumSelector::default().select_in_bucket(&candidates, bucket), candidates);
        }
    }

    #[test]
    fn zero_bucket_is_widened() {
        assert_eq!(QuorumSelector::new(Duration::ZERO).bucket_millis(), 1);
    }

    proptest! {
        #[test]
        fn selection_bounds_hold(n in 0usize..40, now in any::<u64>()) {
            let candidates = names(n);
            let clock = ManualClock::at(now);
            let picked = QuorumSelector::default().select(&candidates, &clock);

            if n < MIN_QUORUM {
                prop_assert_eq!(&picked, &candidates);
            } else {
                prop_assert!(picked.len() >= MIN_QUORUM);
                prop_assert!(picked.len() <= n);
            }
            for p in &picked {
                prop_assert!(candidates.contains(p));
            }

            let unique: std::collections::HashSet<_> = picked.iter().collect();
            prop_assert_eq!(unique.len(), picked.len());
        }
    }
}
