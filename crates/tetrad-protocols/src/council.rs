//! Weighted governance council.
//!
//! # Decision Procedure
//!
//! 1. Quorum: every vertex with weight > 80, optionally narrowed by
//!    clock-seeded sortition
//! 2. Ballots: each member judges the proposal content from its own weight
//!    and category
//! 3. Synthesis: majority of Positive against Negative; ties are Neutral
//! 4. Coherence: agreeing share of the quorum × mean quorum weight / 100
//! 5. Consensus position: centroid of the quorum's positions
//!
//! An empty quorum is not an error. The decision is Neutral with coherence
//! 0 and the caller can detect it with
//! [`GovernanceDecision::has_empty_quorum`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tetrad_consensus::{
    is_eligible, synthesize, validate, Clock, QuorumSelector, TernaryState, TernaryValue,
    ValidationContext, DEFAULT_BUCKET, SOURCE_VOTE,
};
use tetrad_geometry::{centroid, Position};
use tracing::{debug, warn};

use crate::error::Result;
use crate::registry::RegistrySnapshot;
use crate::vertex::Vertex;

/// Prefix of every proposal id.
pub const PROPOSAL_PREFIX: &str = "agc_";

/// A matter put before the council.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub title: String,
    pub body: String,
}

impl Proposal {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Text the council votes on.
    pub fn content(&self) -> String {
        format!("{}\n{}", self.title, self.body)
    }

    /// Stable id: [`PROPOSAL_PREFIX`] followed by 16 hex chars of the
    /// content hash. Identical proposals share an id.
    pub fn id(&self) -> String {
        let hash = blake3::hash(self.content().as_bytes());
        format!("{}{}", PROPOSAL_PREFIX, hex::encode(&hash.as_bytes()[..8]))
    }
}

/// One member's ballot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub vertex_id: String,
    pub value: TernaryValue,
}

/// Outcome of one council session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernanceDecision {
    pub proposal_id: String,
    pub coherence_score: f64,
    /// Members, in registry order; every weight is above the threshold
    pub quorum: Vec<Vertex>,
    pub votes: Vec<Vote>,
    pub synthesis: TernaryValue,
    pub consensus_position: Position,
}

impl GovernanceDecision {
    /// True when no vertex was eligible to vote.
    pub fn has_empty_quorum(&self) -> bool {
        self.quorum.is_empty()
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Council configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CouncilConfig {
    /// Narrow the weight-filtered quorum with sortition.
    pub sortition: bool,

    /// Width of a sortition bucket.
    pub bucket: Duration,
}

impl Default for CouncilConfig {
    fn default() -> Self {
        Self {
            sortition: false,
            bucket: DEFAULT_BUCKET,
        }
    }
}

impl CouncilConfig {
    /// Enable or disable sortition.
    #[must_use]
    pub fn with_sortition(mut self, enabled: bool) -> Self {
        self.sortition = enabled;
        self
    }

    /// Set the sortition bucket width.
    #[must_use]
    pub fn with_bucket(mut self, bucket: Duration) -> Self {
        self.bucket = bucket;
        self
    }
}

/// Runs decisions over registry snapshots.
#[derive(Debug, Clone)]
pub struct GovernanceCouncil {
    config: CouncilConfig,
    selector: QuorumSelector,
}

impl Default for GovernanceCouncil {
    fn default() -> Self {
        Self::new(CouncilConfig::default())
    }
}

impl GovernanceCouncil {
    #[must_use]
    pub fn new(config: CouncilConfig) -> Self {
        Self {
            selector: QuorumSelector::new(config.bucket),
            config,
        }
    }

    pub const fn config(&self) -> &CouncilConfig {
        &self.config
    }

    /// Eligible members of `snapshot`, in registry order.
    pub fn quorum(&self, snapshot: &RegistrySnapshot, clock: &dyn Clock) -> Vec<Vertex> {
        let eligible: Vec<Vertex> = snapshot
            .vertices
            .iter()
            .filter(|v| is_eligible(v.weight.value()))
            .cloned()
            .collect();

        if self.config.sortition {
            self.selector.select(&eligible, clock)
        } else {
            eligible
        }
    }

    /// Decide `proposal` against `snapshot`.
    ///
    /// Fails only with `InvariantViolation` if the snapshot holds an
    /// out-of-bounds vertex.
    pub fn decide(
        &self,
        snapshot: &RegistrySnapshot,
        proposal: &Proposal,
        clock: &dyn Clock,
    ) -> Result<GovernanceDecision> {
        snapshot.check_invariants()?;

        let proposal_id = proposal.id();
        let quorum = self.quorum(snapshot, clock);

        if quorum.is_empty() {
            warn!(proposal = %proposal_id, "Empty quorum, deciding Neutral");
        }

        let content = proposal.content();
        let votes: Vec<Vote> = quorum.iter().map(|m| cast_vote(m, &content)).collect();
        let ballots: Vec<TernaryValue> = votes.iter().map(|v| v.value.clone()).collect();
        let synthesis = synthesize(&ballots);

        let coherence_score = coherence_score(&quorum, &votes, synthesis.state);
        let positions: Vec<Position> = quorum.iter().map(|m| m.position).collect();
        let consensus_position = centroid(&positions);

        debug!(
            proposal = %proposal_id,
            quorum = quorum.len(),
            outcome = %synthesis.state,
            coherence = coherence_score,
            "Council decided"
        );

        Ok(GovernanceDecision {
            proposal_id,
            coherence_score,
            quorum,
            votes,
            synthesis,
            consensus_position,
        })
    }
}

/// A member's ballot on `content`, derived from its weight and category.
pub fn cast_vote(member: &Vertex, content: &str) -> Vote {
    let ctx = ValidationContext::new(member.weight.fraction(), SOURCE_VOTE)
        .with_tag(member.category.token());

    Vote {
        vertex_id: member.id.clone(),
        value: validate(content.as_bytes(), &ctx),
    }
}

/// Agreeing share of the quorum scaled by its mean weight.
///
/// 0 for an empty quorum or when no member agrees with `outcome`.
pub fn coherence_score(quorum: &[Vertex], votes: &[Vote], outcome: TernaryState) -> f64 {
    if quorum.is_empty() {
        return 0.0;
    }

    let n = quorum.len() as f64;
    let agreeing = votes.iter().filter(|v| v.value.state == outcome).count() as f64;
    let mean_weight = quorum.iter().map(|m| m.weight.fraction()).sum::<f64>() / n;

    (agreeing / n) * mean_weight
}
