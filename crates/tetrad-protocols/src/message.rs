//! Message composition.
//!
//! A message between two registered vertices carries everything derived
//! from its endpoints at send time:
//!
//! - **Harmonic signature**: `"{from}_{to}_phi_{φ^d}"` where `d` is the
//!   ordinal distance between the two categories
//! - **Amplification**: normalized product of the two weights, floored so it
//!   is never zero
//! - **Validation**: ternary judgment of the payload in the endpoints' context
//! - **Position**: the point `amplification` of the way from sender to
//!   receiver

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tetrad_consensus::{validate, TernaryValue, ValidationContext, SOURCE_PROTOCOL};
use tetrad_geometry::{interpolate, Position, PHI};
use tracing::trace;

use crate::error::Result;
use crate::registry::Registry;
use crate::vertex::{Category, Weight};

/// Smallest amplification a message can carry.
pub const AMPLIFICATION_FLOOR: f64 = 0.01;

/// Auxiliary message scalars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MessageScalars {
    /// Combined weight of both endpoints, in [0, 1]
    #[serde(rename = "L")]
    pub l: f64,
    /// Amplification, in (0, 1]
    #[serde(rename = "A")]
    pub a: f64,
}

/// An immutable message between two vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Position in the log; identity of the message
    pub sequence: u64,
    pub from: String,
    pub to: String,
    pub payload: Value,
    pub harmonic_signature: String,
    pub amplification: f64,
    pub position: Position,
    pub validation: TernaryValue,
    /// Unix milliseconds; non-decreasing along a log
    pub timestamp: u64,
    pub scalars: MessageScalars,
}

impl Message {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Deterministic label for a category pairing.
///
/// # Examples
///
/// ```
/// use tetrad_protocols::{harmonic_signature, Category};
///
/// assert_eq!(harmonic_signature(Category::Fire, Category::Water), "fire_water_phi_1.618");
/// assert_eq!(harmonic_signature(Category::Air, Category::Air), "air_air_phi_1.000");
/// ```
pub fn harmonic_signature(from: Category, to: Category) -> String {
    let distance = (i32::from(from.ordinal()) - i32::from(to.ordinal())).abs();
    format!("{}_{}_phi_{:.3}", from.token(), to.token(), PHI.powi(distance))
}

/// Normalized weight product, floored at [`AMPLIFICATION_FLOOR`].
///
/// Non-decreasing in both weights; in (0, 1].
pub fn amplification(from: Weight, to: Weight) -> f64 {
    (from.fraction() * to.fraction()).max(AMPLIFICATION_FLOOR)
}

/// Build a message from registry state.
///
/// Fails with `NotFound` if either endpoint is unregistered (the sender is
/// checked first) and with `InvariantViolation` if either endpoint is out of
/// bounds.
pub fn compose(
    registry: &Registry,
    from: &str,
    to: &str,
    payload: Value,
    sequence: u64,
    timestamp: u64,
) -> Result<Message> {
    let sender = registry.require(from)?;
    let receiver = registry.require(to)?;
    sender.check_invariants()?;
    receiver.check_invariants()?;

    let harmonic_signature = harmonic_signature(sender.category, receiver.category);
    let amplification = amplification(sender.weight, receiver.weight);

    let ctx = ValidationContext::new(amplification, SOURCE_PROTOCOL)
        .with_tags([sender.category.token(), receiver.category.token()]);
    let validation = validate(payload.to_string().as_bytes(), &ctx);

    let position = interpolate(&sender.position, &receiver.position, amplification);
    let combined = (sender.weight.fraction() + receiver.weight.fraction()) / 2.0;

    trace!(
        from,
        to,
        signature = %harmonic_signature,
        amplification,
        validation = %validation,
        "Composed message"
    );

    Ok(Message {
        sequence,
        from: sender.id.clone(),
        to: receiver.id.clone(),
        payload,
        harmonic_signature,
        amplification,
        position,
        validation,
        timestamp,
        scalars: MessageScalars {
            l: combined,
            a: amplification,
        },
    })
}
