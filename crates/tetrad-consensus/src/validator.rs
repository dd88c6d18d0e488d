//! Deterministic ternary validation.
//!
//! ```text
//! s        = u64(H(payload ‖ 0x1f ‖ tag₀ ‖ 0x1f ‖ tag₁ …)[..8]) / u64::MAX
//! α        = ½ · amplification
//! combined = s · (1 − α) + ½ · α
//!
//! combined > 0.66 → Positive
//! combined < 0.33 → Negative
//! otherwise      → Neutral
//! ```
//!
//! Amplification pulls the payload scalar toward the centre of the Neutral
//! band. At full amplification `combined` spans [0.25, 0.75], so every
//! context can still reach all three states; heavier contexts only need a
//! more decisive hash to leave Neutral.
//!
//! Confidence is the distance from the nearest threshold, normalized by the
//! width of the band the value fell into.

use crate::ternary::{TernaryState, TernaryValue};

/// Combined scalars above this are Positive.
pub const UPPER_THRESHOLD: f64 = 0.66;

/// Combined scalars below this are Negative.
pub const LOWER_THRESHOLD: f64 = 0.33;

/// Provenance of judgments attached to messages.
pub const SOURCE_PROTOCOL: &str = "tetrahedron_protocol";

/// Provenance of individual council ballots.
pub const SOURCE_VOTE: &str = "tetrahedron_council_vote";

/// Largest share of the combined scalar amplification can claim.
pub const AMPLIFICATION_PULL: f64 = 0.5;

const TAG_SEPARATOR: u8 = 0x1f;

/// Signals that accompany a payload into validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationContext {
    /// Weight-derived amplification, clamped into [0, 1] when used
    pub amplification: f64,
    /// Tags mixed into the payload hash (e.g. category tokens)
    pub tags: Vec<String>,
    /// Provenance copied onto the resulting value
    pub source: String,
}

impl ValidationContext {
    /// Create a context with no tags.
    pub fn new(amplification: f64, source: impl Into<String>) -> Self {
        Self {
            amplification,
            tags: Vec::new(),
            source: source.into(),
        }
    }

    /// Append a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Append several tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}

/// Judge `payload` in the given context.
///
/// Pure: identical payload bytes and context always yield the identical
/// value.
///
/// # Examples
///
/// ```
/// use tetrad_consensus::{validate, ValidationContext, SOURCE_PROTOCOL};
///
/// let ctx = ValidationContext::new(0.9, SOURCE_PROTOCOL).with_tag("fire");
/// let a = validate(b"hello", &ctx);
/// let b = validate(b"hello", &ctx);
/// assert_eq!(a, b);
/// assert!(a.confidence > 0.0);
/// ```
pub fn validate(payload: &[u8], ctx: &ValidationContext) -> TernaryValue {
    let s = payload_scalar(payload, &ctx.tags);
    let amplification = if ctx.amplification.is_nan() {
        0.0
    } else {
        ctx.amplification.clamp(0.0, 1.0)
    };
    let pull = AMPLIFICATION_PULL * amplification;
    let combined = s * (1.0 - pull) + 0.5 * pull;

    let (state, confidence) = classify(combined);
    TernaryValue::new(state, confidence, ctx.source.clone())
}

/// Map a combined scalar in [0, 1] to a state and raw confidence.
fn classify(combined: f64) -> (TernaryState, f64) {
    if combined > UPPER_THRESHOLD {
        (
            TernaryState::Positive,
            (combined - UPPER_THRESHOLD) / (1.0 - UPPER_THRESHOLD),
        )
    } else if combined < LOWER_THRESHOLD {
        (
            TernaryState::Negative,
            (LOWER_THRESHOLD - combined) / LOWER_THRESHOLD,
        )
    } else {
        let half_band = (UPPER_THRESHOLD - LOWER_THRESHOLD) / 2.0;
        let nearest = (combined - LOWER_THRESHOLD).min(UPPER_THRESHOLD - combined);
        (TernaryState::Neutral, nearest / half_band)
    }
}

/// Stable hash of payload and tags reduced into [0, 1].
fn payload_scalar(payload: &[u8], tags: &[String]) -> f64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(payload);
    for tag in tags {
        hasher.update(&[TAG_SEPARATOR]);
        hasher.update(tag.as_bytes());
    }
    let hash = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_be_bytes(prefix) as f64 / u64::MAX as f64
}
