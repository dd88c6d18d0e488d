//! Majority synthesis of ternary ballots.
//!
//! ```text
//! positive > negative → Positive
//! negative > positive → Negative
//! otherwise           → Neutral (transcendent synthesis)
//! ```
//!
//! Neutral ballots never tip the balance; they only count toward the
//! confidence of a transcendent outcome.

use crate::ternary::{TernaryState, TernaryValue};

/// Provenance of a decided majority.
pub const SOURCE_MAJORITY: &str = "ternary_logic_majority_synthesis";

/// Provenance of a tie, including the empty ballot box.
pub const SOURCE_TRANSCENDENT: &str = "ternary_logic_transcendent_synthesis";

/// Ballot counts per state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl Tally {
    /// Count a ballot list.
    pub fn of(votes: &[TernaryValue]) -> Self {
        votes.iter().fold(Self::default(), |mut tally, vote| {
            match vote.state {
                TernaryState::Positive => tally.positive += 1,
                TernaryState::Negative => tally.negative += 1,
                TernaryState::Neutral => tally.neutral += 1,
            }
            tally
        })
    }

    /// Total ballots counted.
    pub const fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Ballots cast for `state`.
    pub const fn count(&self, state: TernaryState) -> usize {
        match state {
            TernaryState::Positive => self.positive,
            TernaryState::Negative => self.negative,
            TernaryState::Neutral => self.neutral,
        }
    }

    /// The majority outcome.
    pub fn outcome(&self) -> TernaryState {
        use std::cmp::Ordering;

        match self.positive.cmp(&self.negative) {
            Ordering::Greater => TernaryState::Positive,
            Ordering::Less => TernaryState::Negative,
            Ordering::Equal => TernaryState::Neutral,
        }
    }
}

/// Reduce ballots to a single judgment.
///
/// Confidence is the share of ballots matching the outcome, floored at
/// [`MIN_CONFIDENCE`](crate::MIN_CONFIDENCE) so an unanimous-by-absence Neutral still carries weight.
pub fn synthesize(votes: &[TernaryValue]) -> TernaryValue {
    let tally = Tally::of(votes);
    if tally.total() == 0 {
        return TernaryValue::neutral(SOURCE_TRANSCENDENT);
    }

    let state = tally.outcome();

    let source = match state {
        TernaryState::Neutral => SOURCE_TRANSCENDENT,
        _ => SOURCE_MAJORITY,
    };

    let confidence = tally.count(state) as f64 / tally.total() as f64;
    TernaryValue::new(state, confidence, source)
}
