//! Registry-wide coherence.
//!
//! ```text
//! g_i   = 1 − ½ · |alignment_i − 1/φ| / (1/φ)      ∈ [½, 1]
//! raw   = Σ (weight_i / 100) · g_i / n             ∈ [0, 1]
//! score = 100 · (ε + raw) / (1 + ε)                ∈ (0, 100]
//! ```
//!
//! Every vertex contributes at least half its weight, so lowering any one
//! weight strictly lowers the score. The ε floor keeps an all-zero registry
//! above zero.

use serde::{Deserialize, Serialize};
use tetrad_geometry::PHI_INVERSE;

use crate::registry::RegistrySnapshot;
use crate::vertex::Vertex;

/// Floor added before normalization.
pub const COHERENCE_EPSILON: f64 = 0.01;

/// Alignment every vertex is measured against.
pub const TARGET_ALIGNMENT: f64 = PHI_INVERSE;

/// Coherence with the aggregates it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoherenceReport {
    pub score: f64,
    pub vertex_count: usize,
    pub mean_weight: f64,
    pub mean_alignment: f64,
}

/// System health scalar in (0, 100].
pub fn calculate_coherence(snapshot: &RegistrySnapshot) -> f64 {
    let raw = if snapshot.is_empty() {
        0.0
    } else {
        let total: f64 = snapshot
            .vertices
            .iter()
            .map(|v| v.weight.fraction() * alignment_factor(v))
            .sum();
        total / snapshot.len() as f64
    };

    100.0 * (COHERENCE_EPSILON + raw) / (1.0 + COHERENCE_EPSILON)
}

/// Coherence together with mean weight and alignment.
pub fn coherence_report(snapshot: &RegistrySnapshot) -> CoherenceReport {
    let mean_alignment = if snapshot.is_empty() {
        0.0
    } else {
        snapshot.vertices.iter().map(|v| v.position.alignment).sum::<f64>() / snapshot.len() as f64
    };

    CoherenceReport {
        score: calculate_coherence(snapshot),
        vertex_count: snapshot.len(),
        mean_weight: snapshot.mean_weight(),
        mean_alignment,
    }
}

/// How close a vertex sits to the target alignment, in [½, 1].
fn alignment_factor(vertex: &Vertex) -> f64 {
    let distance = (vertex.position.alignment - TARGET_ALIGNMENT).abs();
    (1.0 - 0.5 * distance / TARGET_ALIGNMENT).clamp(0.5, 1.0)
}
