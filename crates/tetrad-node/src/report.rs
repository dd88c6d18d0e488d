//! JSON run report.

use serde::Serialize;
use tetrad_protocols::{GovernanceDecision, Message, Status};

use crate::error::Result;

/// Messages sent, the decision reached and the final status of one run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub messages: Vec<Message>,
    pub decision: GovernanceDecision,
    pub status: Status,
}

impl Report {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
