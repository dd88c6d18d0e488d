//! Council eligibility and selection bounds.
//!
//! - weight > 80 → eligible for the governance quorum
//! - n < 3 candidates → sortition keeps all of them
//! - n ≥ 3 candidates → sortition keeps between 3 and n

/// Weight a vertex must strictly exceed to sit on the council.
pub const QUORUM_WEIGHT_THRESHOLD: u8 = 80;

/// Smallest selection sortition will shrink a candidate list to.
pub const MIN_QUORUM: usize = 3;

/// Check whether a weight qualifies for the council.
pub const fn is_eligible(weight: u8) -> bool {
    weight > QUORUM_WEIGHT_THRESHOLD
}

/// Inclusive `(min, max)` size of a sortition draw over `candidates`.
///
/// Below [`MIN_QUORUM`] the draw is the whole list, so both bounds equal
/// `candidates`.
pub const fn selection_bounds(candidates: usize) -> (usize, usize) {
    if candidates < MIN_QUORUM {
        (candidates, candidates)
    } else {
        (MIN_QUORUM, candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligibility_is_strict() {
        assert!(!is_eligible(0));
        assert!(!is_eligible(79));
        assert!(!is_eligible(80));
        assert!(is_eligible(81));
        assert!(is_eligible(100));
    }

    #[test]
    fn bounds_small_lists_unchanged() {
        assert_eq!(selection_bounds(0), (0, 0));
        assert_eq!(selection_bounds(1), (1, 1));
        assert_eq!(selection_bounds(2), (2, 2));
    }

    #[test]
    fn bounds_never_exceed_candidates() {
        for n in 0..=32 {
            let (min, max) = selection_bounds(n);
            assert!(min <= max, "bounds({}) inverted", n);
            assert_eq!(max, n);
        }
    }

    #[test]
    fn bounds_floor_at_min_quorum() {
        for n in MIN_QUORUM..=32 {
            assert_eq!(selection_bounds(n).0, MIN_QUORUM);
        }
    }
}
