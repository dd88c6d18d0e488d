//! Vertex registry.
//!
//! Owns the table of vertices. A vertex's position is fixed at insertion:
//! the `n`-th vertex added is placed at `position_for(n, n + 1)` and never
//! moves, even as later vertices join. That puts the first vertex on the
//! equator and each later one lower, at `z = −n / (n + 1)`, with the golden
//! angle separating them in longitude.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tetrad_geometry::{position_for, Position, GOLDEN_ANGLE, PHI};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::vertex::{Category, Vertex, VertexDraft, Weight};

/// The conventional four-vertex seed: one vertex per category.
pub fn default_seed() -> Vec<VertexDraft> {
    vec![
        VertexDraft::new("A", Category::Fire, 100),
        VertexDraft::new("B", Category::Water, 85),
        VertexDraft::new("C", Category::Earth, 70),
        VertexDraft::new("D", Category::Air, 90),
    ]
}

/// Mutable table of vertices, in insertion order.
#[derive(Debug, Clone)]
pub struct Registry {
    vertices: Vec<Vertex>,
    by_id: HashMap<String, usize>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Create a registry holding [`default_seed`].
    pub fn seeded() -> Self {
        Self::from_drafts(default_seed())
    }

    /// Create a registry from drafts, in order.
    ///
    /// Drafts repeating an earlier id are skipped.
    pub fn from_drafts(drafts: impl IntoIterator<Item = VertexDraft>) -> Self {
        let mut registry = Self::new();
        for draft in drafts {
            registry.add_vertex(draft);
        }
        registry
    }

    /// Add a vertex. Returns false, leaving the registry untouched, if the id
    /// is already registered.
    pub fn add_vertex(&mut self, draft: VertexDraft) -> bool {
        self.try_add_vertex(draft).is_ok()
    }

    /// Add a vertex, reporting a duplicate id as [`Error::Duplicate`].
    pub fn try_add_vertex(&mut self, draft: VertexDraft) -> Result<&Vertex> {
        if self.by_id.contains_key(&draft.id) {
            warn!(id = %draft.id, "Rejected duplicate vertex");
            return Err(Error::Duplicate { id: draft.id });
        }

        let index = self.vertices.len();
        let vertex = Vertex {
            id: draft.id,
            category: draft.category,
            weight: Weight::clamped(draft.weight),
            position: position_for(index, index + 1),
        };

        debug!(
            id = %vertex.id,
            category = %vertex.category,
            weight = %vertex.weight,
            position = %vertex.position,
            "Registered vertex"
        );

        self.by_id.insert(vertex.id.clone(), index);
        self.vertices.push(vertex);
        Ok(&self.vertices[index])
    }

    /// Set a vertex's weight, clamped into [0, 100].
    ///
    /// Returns false and does nothing for an unknown id.
    pub fn update_weight(&mut self, id: &str, value: i64) -> bool {
        let Some(&index) = self.by_id.get(id) else {
            warn!(id, "Weight update for unknown vertex");
            return false;
        };

        let vertex = &mut self.vertices[index];
        let previous = vertex.weight;
        vertex.weight = Weight::clamped(value);

        debug!(id, from = %previous, to = %vertex.weight, requested = value, "Updated weight");
        true
    }

    /// Look up a vertex.
    pub fn get(&self, id: &str) -> Option<&Vertex> {
        self.by_id.get(id).map(|&i| &self.vertices[i])
    }

    /// Look up a vertex, reporting absence as [`Error::NotFound`].
    pub fn require(&self, id: &str) -> Result<&Vertex> {
        self.get(id).ok_or_else(|| Error::NotFound { id: id.to_string() })
    }

    /// Check if an id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// All ids, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(|v| v.id.as_str())
    }

    /// Consistent copy of the table plus the geometric constants.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            vertices: self.vertices.clone(),
            phi: PHI,
            golden_angle: GOLDEN_ANGLE,
        }
    }
}

/// Immutable view of a registry at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub vertices: Vec<Vertex>,
    pub phi: f64,
    pub golden_angle: f64,
}

impl RegistrySnapshot {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    /// Positions in insertion order.
    pub fn positions(&self) -> Vec<Position> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    /// Mean weight, 0 for an empty snapshot.
    pub fn mean_weight(&self) -> f64 {
        if self.vertices.is_empty() {
            return 0.0;
        }
        let total: f64 = self.vertices.iter().map(|v| f64::from(v.weight.value())).sum();
        total / self.vertices.len() as f64
    }

    /// Check every vertex's bounds.
    pub fn check_invariants(&self) -> Result<()> {
        self.vertices.iter().try_for_each(Vertex::check_invariants)
    }
}
