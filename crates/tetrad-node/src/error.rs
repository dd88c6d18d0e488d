//! Error types for the Tetrad node.

use thiserror::Error;

/// Result type for node operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in node operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Registry, messaging or governance error
    #[error("Protocol error: {0}")]
    Protocol(#[from] tetrad_protocols::Error),

    /// Bad configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
