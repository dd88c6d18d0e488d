//! Coordinator - single owner of a registry and its message log.
//!
//! The [`Coordinator`] is the only object through which vertices are added,
//! weights change, messages are sent and proposals are decided. It holds no
//! hidden global state; share it by putting it behind one lock.
//!
//! # Sending
//!
//! [`send`](Coordinator::send) composes a message from the current registry
//! state, stamps it with the next sequence number and a timestamp that never
//! runs backwards along the log, appends it, and hands a copy back.
//!
//! # Deciding
//!
//! [`decide`](Coordinator::decide) snapshots the registry and runs the
//! [`GovernanceCouncil`] over it. Decisions are returned, never retained.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tetrad_consensus::{Clock, SystemClock};
use tracing::{debug, warn};

use crate::coherence::{calculate_coherence, coherence_report, CoherenceReport};
use crate::council::{CouncilConfig, GovernanceCouncil, GovernanceDecision, Proposal};
use crate::error::Result;
use crate::log::{LogFilter, LogStats, MessageLog};
use crate::message::{compose, Message};
use crate::registry::{default_seed, Registry, RegistrySnapshot};
use crate::vertex::{Vertex, VertexDraft};

/// Configuration for a coordinator.
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    /// Vertices registered at construction, in order.
    pub seed: Vec<VertexDraft>,

    /// Governance settings.
    pub council: CouncilConfig,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            council: CouncilConfig::default(),
        }
    }
}

impl CoordinatorConfig {
    /// Replace the seed vertices.
    #[must_use]
    pub fn with_seed(mut self, seed: Vec<VertexDraft>) -> Self {
        self.seed = seed;
        self
    }

    /// Start with an empty registry.
    #[must_use]
    pub fn unseeded(mut self) -> Self {
        self.seed.clear();
        self
    }

    /// Set the governance settings.
    #[must_use]
    pub fn with_council(mut self, council: CouncilConfig) -> Self {
        self.council = council;
        self
    }
}

/// Everything a status report needs, from one consistent view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub registry: RegistrySnapshot,
    pub coherence: CoherenceReport,
    pub messages: LogStats,
}

/// Owns the registry, the log and the council.
#[derive(Debug)]
pub struct Coordinator {
    registry: Registry,
    log: MessageLog,
    council: GovernanceCouncil,
    clock: Arc<dyn Clock>,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(CoordinatorConfig::default())
    }
}

impl Coordinator {
    /// Create a coordinator reading the system clock.
    #[must_use]
    pub fn new(config: CoordinatorConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a coordinator reading `clock`.
    #[must_use]
    pub fn with_clock(config: CoordinatorConfig, clock: Arc<dyn Clock>) -> Self {
        let registry = Registry::from_drafts(config.seed);

        debug!(
            vertices = registry.len(),
            sortition = config.council.sortition,
            bucket = ?config.council.bucket,
            "Created coordinator"
        );

        Self {
            registry,
            log: MessageLog::new(),
            council: GovernanceCouncil::new(config.council),
            clock,
        }
    }

    /// Register a vertex. False, with no change, on a duplicate id.
    pub fn add_vertex(&mut self, draft: VertexDraft) -> bool {
        self.registry.add_vertex(draft)
    }

    /// Register a vertex, reporting a duplicate id as an error.
    pub fn try_add_vertex(&mut self, draft: VertexDraft) -> Result<Vertex> {
        self.registry.try_add_vertex(draft).cloned()
    }

    /// Set a weight, clamped into [0, 100]. False on an unknown id.
    pub fn update_weight(&mut self, id: &str, value: i64) -> bool {
        self.registry.update_weight(id, value)
    }

    /// Send `payload` from one vertex to another.
    ///
    /// Fails with `NotFound` if either id is unregistered; nothing is
    /// appended in that case.
    pub fn send(&mut self, from: &str, to: &str, payload: impl Into<Value>) -> Result<Message> {
        let floor = self.log.last().map_or(0, |m| m.timestamp);
        let timestamp = self.clock.now_millis().max(floor);
        let sequence = self.log.next_sequence();

        let msg = match compose(&self.registry, from, to, payload.into(), sequence, timestamp) {
            Ok(msg) => msg,
            Err(e) => {
                warn!(from, to, error = %e, "Send rejected");
                return Err(e);
            }
        };

        debug!(
            sequence,
            from,
            to,
            signature = %msg.harmonic_signature,
            amplification = msg.amplification,
            validation = %msg.validation.state,
            "Sent message"
        );

        self.log.append(msg.clone());
        Ok(msg)
    }

    /// Messages matching `filter`, in send order.
    pub fn query(&self, filter: &LogFilter) -> Vec<&Message> {
        self.log.query(filter)
    }

    /// Put a proposal before the council.
    pub fn decide(&self, proposal: &Proposal) -> Result<GovernanceDecision> {
        self.council
            .decide(&self.registry.snapshot(), proposal, self.clock.as_ref())
    }

    /// Current registry coherence, in (0, 100].
    pub fn coherence(&self) -> f64 {
        calculate_coherence(&self.registry.snapshot())
    }

    /// Consistent copy of the registry.
    pub fn snapshot(&self) -> RegistrySnapshot {
        self.registry.snapshot()
    }

    /// Registry, coherence and log statistics from one view.
    pub fn status(&self) -> Status {
        let registry = self.registry.snapshot();
        Status {
            coherence: coherence_report(&registry),
            messages: self.log.stats(),
            registry,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn council(&self) -> &GovernanceCouncil {
        &self.council
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::vertex::Category;
    use std::time::Duration;
    use tetrad_consensus::ManualClock;

    fn pinned() -> (Coordinator, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::at(10_000));
        let coordinator = Coordinator::with_clock(CoordinatorConfig::default(), clock.clone());
        (coordinator, clock)
    }

    #[test]
    fn default_is_seeded() {
        let coordinator = Coordinator::default();
        assert_eq!(coordinator.registry().len(), 4);
        assert!(coordinator.log().is_empty());
    }

    #[test]
    fn unseeded_config_starts_empty() {
        let coordinator = Coordinator::new(CoordinatorConfig::default().unseeded());
        assert!(coordinator.registry().is_empty());
    }

    #[test]
    fn send_appends_in_order() {
        let (mut coordinator, clock) = pinned();

        let first = coordinator.send("A", "B", "one").unwrap();
        clock.advance(Duration::from_millis(5));
        let second = coordinator.send("B", "C", "two").unwrap();

        assert_eq!(first.sequence, 0);
        assert_eq!(second.sequence, 1);
        assert_eq!(first.timestamp, 10_000);
        assert_eq!(second.timestamp, 10_005);
        assert_eq!(coordinator.log().len(), 2);
        assert_eq!(coordinator.log().last(), Some(&second));
    }

    #[test]
    fn timestamps_never_run_backwards() {
        let (mut coordinator, clock) = pinned();

        coordinator.send("A", "B", "first").unwrap();
        clock.set(5);
        let late = coordinator.send("A", "B", "second").unwrap();
        assert_eq!(late.timestamp, 10_000);
    }

    #[test]
    fn unknown_vertex_appends_nothing() {
        let (mut coordinator, _) = pinned();

        let err = coordinator.send("A", "nobody", "hi").unwrap_err();
        assert!(matches!(err, Error::NotFound { id } if id == "nobody"));
        assert!(coordinator.log().is_empty());
    }

    #[test]
    fn weights_flow_into_new_messages() {
        let (mut coordinator, _) = pinned();

        let before = coordinator.send("C", "A", "x").unwrap();
        assert!(coordinator.update_weight("C", 100));
        let after = coordinator.send("C", "A", "x").unwrap();

        assert!(after.amplification > before.amplification);
        // Earlier messages are not touched
        assert_eq!(coordinator.log().iter().next(), Some(&before));
    }

    #[test]
    fn query_through_coordinator() {
        let (mut coordinator, clock) = pinned();
        coordinator.send("A", "B", 1).unwrap();
        clock.advance(Duration::from_secs(1));
        coordinator.send("B", "A", 2).unwrap();
        coordinator.send("A", "D", 3).unwrap();

        assert_eq!(coordinator.query(&LogFilter::new().sender("A")).len(), 2);
        assert_eq!(coordinator.query(&LogFilter::new().since(11_000)).len(), 2);
    }

    #[test]
    fn try_add_reports_duplicates() {
        let (mut coordinator, _) = pinned();
        let added = coordinator
            .try_add_vertex(VertexDraft::new("E", Category::Earth, 55))
            .unwrap();
        assert_eq!(added.weight.value(), 55);

        assert!(matches!(
            coordinator.try_add_vertex(VertexDraft::new("E", Category::Air, 1)),
            Err(Error::Duplicate { .. })
        ));
        assert_eq!(coordinator.registry().len(), 5);
    }

    #[test]
    fn status_is_consistent() {
        let (mut coordinator, _) = pinned();
        coordinator.send("A", "B", "hello").unwrap();

        let status = coordinator.status();
        assert_eq!(status.registry.len(), 4);
        assert_eq!(status.messages.total, 1);
        assert_eq!(status.coherence.score, coordinator.coherence());

        let encoded = serde_json::to_string(&status).unwrap();
        assert!(encoded.contains("\"phi\""));
    }
}
