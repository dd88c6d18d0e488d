//! Weighted Ternary Consensus
//!
//! Tetrad participants don't vote yes/no. Every judgment is **three-valued**
//! (Positive, Negative or Neutral) and carries a confidence and a provenance
//! tag naming the subsystem that produced it.
//!
//! # Validation
//!
//! [`validate`] is a pure policy function: a stable hash of the payload and
//! its context tags is reduced into [0, 1], pulled toward the band centre by
//! the context's amplification and compared against two fixed thresholds.
//!
//! # Synthesis
//!
//! [`synthesize`] reduces a list of ballots to one value by simple majority
//! of Positive against Negative. A tie (including no ballots at all) is the
//! *transcendent* outcome: Neutral.
//!
//! # Sortition
//!
//! [`QuorumSelector`] draws a bounded subset of candidates. The draw is
//! seeded by a coarse bucket of an injected [`Clock`], so identical
//! candidates within one bucket always produce the identical selection.
//!
//! # Eligibility
//!
//! Only vertices with weight strictly above [`QUORUM_WEIGHT_THRESHOLD`] sit
//! on the governance council.

mod threshold;
mod ternary;
mod validator;
mod synthesis;
mod clock;
mod sortition;

pub use threshold::{QUORUM_WEIGHT_THRESHOLD, MIN_QUORUM, is_eligible, selection_bounds};
pub use ternary::{TernaryState, TernaryValue, MIN_CONFIDENCE};
pub use validator::{
    validate, ValidationContext, AMPLIFICATION_PULL, LOWER_THRESHOLD, UPPER_THRESHOLD, SOURCE_PROTOCOL,
    SOURCE_VOTE,
};
pub use synthesis::{synthesize, Tally, SOURCE_MAJORITY, SOURCE_TRANSCENDENT};
pub use clock::{Clock, ManualClock, SystemClock};
pub use sortition::{QuorumSelector, DEFAULT_BUCKET};
