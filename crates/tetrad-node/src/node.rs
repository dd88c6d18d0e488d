//! Shared node handle.
//!
//! One [`Coordinator`] behind one `RwLock`. Mutations take the write lock;
//! reads share the read lock and always see a consistent registry and log.

use std::sync::Arc;

use serde_json::Value;
use tetrad_protocols::{
    Clock, Coordinator, GovernanceDecision, LogFilter, Message, Proposal, RegistrySnapshot,
    Status, SystemClock, VertexDraft,
};
use tokio::sync::RwLock;
use tracing::info;

use crate::config::NodeConfig;
use crate::error::Result;

/// A cloneable handle to one coordinator.
#[derive(Debug, Clone)]
pub struct TetradNode {
    state: Arc<RwLock<Coordinator>>,
}

impl TetradNode {
    /// Create a node reading the system clock.
    pub fn new(config: &NodeConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a node reading `clock`.
    pub fn with_clock(config: &NodeConfig, clock: Arc<dyn Clock>) -> Self {
        let coordinator = Coordinator::with_clock(config.coordinator(), clock);
        info!(
            vertices = coordinator.registry().len(),
            sortition = config.sortition,
            "Node ready"
        );

        Self {
            state: Arc::new(RwLock::new(coordinator)),
        }
    }

    /// Get the shared state.
    pub fn state(&self) -> Arc<RwLock<Coordinator>> {
        Arc::clone(&self.state)
    }

    /// Register a vertex. False on a duplicate id.
    pub async fn add_vertex(&self, draft: VertexDraft) -> bool {
        let id = draft.id.clone();
        let added = self.state.write().await.add_vertex(draft);
        if added {
            info!(%id, "Vertex joined");
        }
        added
    }

    /// Set a weight, clamped into [0, 100]. False on an unknown id.
    pub async fn update_weight(&self, id: &str, value: i64) -> bool {
        self.state.write().await.update_weight(id, value)
    }

    /// Send `payload` between two registered vertices.
    pub async fn send(&self, from: &str, to: &str, payload: impl Into<Value>) -> Result<Message> {
        Ok(self.state.write().await.send(from, to, payload)?)
    }

    /// Owned copies of the messages matching `filter`.
    pub async fn query(&self, filter: &LogFilter) -> Vec<Message> {
        self.state
            .read()
            .await
            .query(filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Put a proposal before the council.
    pub async fn decide(&self, proposal: &Proposal) -> Result<GovernanceDecision> {
        let decision = self.state.read().await.decide(proposal)?;
        info!(
            proposal = %decision.proposal_id,
            outcome = %decision.synthesis.state,
            quorum = decision.quorum.len(),
            coherence = decision.coherence_score,
            "Decision reached"
        );
        Ok(decision)
    }

    pub async fn snapshot(&self) -> RegistrySnapshot {
        self.state.read().await.snapshot()
    }

    pub async fn coherence(&self) -> f64 {
        self.state.read().await.coherence()
    }

    pub async fn status(&self) -> Status {
        self.state.read().await.status()
    }
}
