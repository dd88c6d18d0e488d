//! Append-only message log.

use serde::{Deserialize, Serialize};
use tetrad_consensus::TernaryState;

use crate::message::Message;

/// Query filter. Every set field must match; unset fields match anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogFilter {
    pub from: Option<String>,
    pub to: Option<String>,
    /// Inclusive lower bound on the timestamp
    pub since: Option<u64>,
    /// Inclusive lower bound on amplification
    pub min_amplification: Option<f64>,
}

impl LogFilter {
    /// A filter matching every message.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sender(mut self, id: impl Into<String>) -> Self {
        self.from = Some(id.into());
        self
    }

    #[must_use]
    pub fn receiver(mut self, id: impl Into<String>) -> Self {
        self.to = Some(id.into());
        self
    }

    #[must_use]
    pub fn since(mut self, timestamp: u64) -> Self {
        self.since = Some(timestamp);
        self
    }

    #[must_use]
    pub fn min_amplification(mut self, amplification: f64) -> Self {
        self.min_amplification = Some(amplification);
        self
    }

    /// Check a single message against the filter.
    pub fn matches(&self, msg: &Message) -> bool {
        self.from.as_deref().map_or(true, |id| msg.from == id)
            && self.to.as_deref().map_or(true, |id| msg.to == id)
            && self.since.map_or(true, |t| msg.timestamp >= t)
            && self.min_amplification.map_or(true, |a| msg.amplification >= a)
    }
}

/// Aggregate view of a log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LogStats {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// 0 for an empty log
    pub mean_amplification: f64,
}

/// Ordered store of messages. Messages are never mutated once appended.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Append a message at the end.
    pub fn append(&mut self, msg: Message) {
        self.messages.push(msg);
    }

    /// Messages matching `filter`, in insertion order.
    pub fn query(&self, filter: &LogFilter) -> Vec<&Message> {
        self.messages.iter().filter(|m| filter.matches(m)).collect()
    }

    /// Sequence number the next appended message should carry.
    pub fn next_sequence(&self) -> u64 {
        self.messages.len() as u64
    }

    /// Most recent message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Up to `n` most recent messages, oldest first.
    pub fn recent(&self, n: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Count messages by validation state.
    pub fn stats(&self) -> LogStats {
        let mut stats = LogStats {
            total: self.messages.len(),
            ..LogStats::default()
        };

        let mut amplification = 0.0;
        for msg in &self.messages {
            match msg.validation.state {
                TernaryState::Positive => stats.positive += 1,
                TernaryState::Negative => stats.negative += 1,
                TernaryState::Neutral => stats.neutral += 1,
            }
            amplification += msg.amplification;
        }

        if stats.total > 0 {
            stats.mean_amplification = amplification / stats.total as f64;
        }
        stats
    }
}
