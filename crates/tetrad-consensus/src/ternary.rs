//! Three-valued judgments.

/// Floor applied to every confidence so a judgment is never weightless.
pub const MIN_CONFIDENCE: f64 = 0.01;

/// Outcome of a ternary judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TernaryState {
    Positive,
    Negative,
    Neutral,
}

impl TernaryState {
    /// All three states, in declaration order.
    pub const ALL: [Self; 3] = [Self::Positive, Self::Negative, Self::Neutral];
}

impl std::fmt::Display for TernaryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// A ternary judgment with confidence and provenance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TernaryValue {
    pub state: TernaryState,
    /// In [`MIN_CONFIDENCE`, 1]
    pub confidence: f64,
    /// Tag of the subsystem that produced the judgment
    pub source: String,
}

impl TernaryValue {
    /// Create a value, clamping `confidence` into [`MIN_CONFIDENCE`, 1].
    pub fn new(state: TernaryState, confidence: f64, source: impl Into<String>) -> Self {
        let confidence = if confidence.is_nan() {
            MIN_CONFIDENCE
        } else {
            confidence.clamp(MIN_CONFIDENCE, 1.0)
        };

        Self {
            state,
            confidence,
            source: source.into(),
        }
    }

    /// A floor-confidence Neutral judgment.
    pub fn neutral(source: impl Into<String>) -> Self {
        Self::new(TernaryState::Neutral, MIN_CONFIDENCE, source)
    }
}

impl std::fmt::Display for TernaryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.2}, {})", self.state, self.confidence, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_clamped() {
        assert_eq!(TernaryValue::new(TernaryState::Positive, 0.0, "t").confidence, MIN_CONFIDENCE);
        assert_eq!(TernaryValue::new(TernaryState::Positive, -4.0, "t").confidence, MIN_CONFIDENCE);
        assert_eq!(TernaryValue::new(TernaryState::Positive, 3.0, "t").confidence, 1.0);
        assert_eq!(TernaryValue::new(TernaryState::Positive, f64::NAN, "t").confidence, MIN_CONFIDENCE);
    }

    #[test]
    fn neutral_helper() {
        let v = TernaryValue::neutral("ternary_logic");
        assert_eq!(v.state, TernaryState::Neutral);
        assert_eq!(v.confidence, MIN_CONFIDENCE);
        assert_eq!(v.source, "ternary_logic");
    }

    #[test]
    fn display_forms() {
        assert_eq!(TernaryState::Negative.to_string(), "negative");
        let v = TernaryValue::new(TernaryState::Positive, 0.75, "vote");
        assert_eq!(v.to_string(), "positive (0.75, vote)");
    }
}
