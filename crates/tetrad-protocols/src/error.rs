//! Error types for tetrad-protocols.

use thiserror::Error;

/// Result type for tetrad-protocols operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during registry, messaging or governance operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A vertex id referenced by an operation is not registered.
    #[error("vertex not found: {id}")]
    NotFound { id: String },

    /// A vertex with this id is already registered.
    #[error("duplicate vertex id: {id}")]
    Duplicate { id: String },

    /// A category token did not name a known category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A textual vertex draft was not `id:category:weight`.
    #[error("invalid vertex draft: {0}")]
    InvalidDraft(String),

    /// Weight or alignment escaped its bounds. Indicates a clamping defect.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// JSON encoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
