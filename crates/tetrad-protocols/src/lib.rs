//! Tetrad Protocols - Vertex Registry, Messaging and Governance
//!
//! This crate ties the geometry and consensus primitives into one
//! coordination core around a small set of weighted vertices.
//!
//! # Overview
//!
//! ## Registry
//!
//! The [`Registry`] holds every vertex in registration order. Each vertex has
//! a [`Category`], a [`Weight`] clamped into [0, 100], and a position on the
//! golden-angle lattice fixed at registration.
//!
//! ## Messaging
//!
//! [`Coordinator::send`] composes a [`Message`] from the registry's current
//! state and appends it to the [`MessageLog`]. Every message carries a
//! harmonic signature, an amplification in (0, 1], an interpolated position
//! and a ternary validation of its payload.
//!
//! ## Governance
//!
//! [`Coordinator::decide`] puts a [`Proposal`] before the high-weight quorum.
//! Members vote, votes are synthesized by majority, and the
//! [`GovernanceDecision`] reports a coherence score and the quorum centroid.
//!
//! # Example
//!
//! ```
//! use tetrad_protocols::{Coordinator, LogFilter, Proposal};
//!
//! let mut core = Coordinator::default();
//! let msg = core.send("A", "B", "hello").unwrap();
//! assert_eq!(msg.harmonic_signature, "fire_water_phi_1.618");
//!
//! let decision = core.decide(&Proposal::new("Adopt", "Adopt the charter")).unwrap();
//! assert_eq!(decision.quorum.len(), 3);
//!
//! assert_eq!(core.query(&LogFilter::new().sender("A")).len(), 1);
//! ```

pub mod coherence;
pub mod coordinator;
pub mod council;
pub mod error;
pub mod log;
pub mod message;
pub mod registry;
pub mod vertex;

pub use coherence::{calculate_coherence, coherence_report, CoherenceReport, COHERENCE_EPSILON};
pub use coordinator::{Coordinator, CoordinatorConfig, Status};
pub use council::{
    cast_vote, coherence_score, CouncilConfig, GovernanceCouncil, GovernanceDecision, Proposal,
    Vote, PROPOSAL_PREFIX,
};
pub use error::{Error, Result};
pub use log::{LogFilter, LogStats, MessageLog};
pub use message::{amplification, harmonic_signature, Message, MessageScalars, AMPLIFICATION_FLOOR};
pub use registry::{default_seed, Registry, RegistrySnapshot};
pub use vertex::{Category, Vertex, VertexDraft, Weight};

pub use tetrad_consensus::{Clock, ManualClock, SystemClock, TernaryState, TernaryValue};
pub use tetrad_geometry::{Position, PHI, PHI_INVERSE};
