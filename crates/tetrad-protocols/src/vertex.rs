//! Vertices: the weighted participants of a registry.

use serde::{Deserialize, Serialize};
use tetrad_geometry::Position;

use crate::error::{Error, Result};

/// The fixed set of vertex categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fire,
    Water,
    Earth,
    Air,
}

impl Category {
    /// Every category, in ordinal order.
    pub const ALL: [Self; 4] = [Self::Fire, Self::Water, Self::Earth, Self::Air];

    /// Lowercase token used in signatures and validation tags.
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Earth => "earth",
            Self::Air => "air",
        }
    }

    /// Position in [`Category::ALL`].
    pub const fn ordinal(&self) -> u8 {
        match self {
            Self::Fire => 0,
            Self::Water => 1,
            Self::Earth => 2,
            Self::Air => 3,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.token().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Influence weight, always in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(u8);

impl Weight {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Clamp an arbitrary integer into [0, 100].
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Weight as a fraction of [`Weight::MAX`].
    #[inline]
    pub fn fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl From<Weight> for u8 {
    fn from(value: Weight) -> Self {
        value.0
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: String,
    pub category: Category,
    pub weight: Weight,
    pub position: Position,
}

impl Vertex {
    /// Check the weight and alignment bounds.
    ///
    /// Registry mutations clamp, so a failure here means a vertex was built
    /// or deserialized around them.
    pub fn check_invariants(&self) -> Result<()> {
        if self.weight > Weight::MAX {
            return Err(Error::InvariantViolation(format!(
                "vertex {} has weight {} outside [0, 100]",
                self.id, self.weight
            )));
        }
        if !self.position.is_well_formed() {
            return Err(Error::InvariantViolation(format!(
                "vertex {} has malformed position {}",
                self.id, self.position
            )));
        }
        Ok(())
    }
}

/// Input to [`Registry::add_vertex`](crate::Registry::add_vertex).
///
/// The weight is clamped on insertion; the position is assigned by the
/// registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexDraft {
    pub id: String,
    pub category: Category,
    pub weight: i64,
}

impl VertexDraft {
    pub fn new(id: impl Into<String>, category: Category, weight: i64) -> Self {
        Self {
            id: id.into(),
            category,
            weight,
        }
    }
}

impl std::str::FromStr for VertexDraft {
    type Err = Error;

    /// Parse `id:category:weight`.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().splitn(3, ':');
        let (Some(id), Some(category), Some(weight)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::InvalidDraft(s.to_string()));
        };

        let weight = weight
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::InvalidDraft(s.to_string()))?;

        Ok(Self::new(id.trim(), category.parse()?, weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_clamps() {
        assert_eq!(Weight::clamped(150), Weight::MAX);
        assert_eq!(Weight::clamped(-10), Weight::MIN);
        assert_eq!(Weight::clamped(42).value(), 42);
        assert_eq!(Weight::clamped(i64::MAX).value(), 100);
        assert_eq!(Weight::clamped(i64::MIN).value(), 0);
    }

    #[test]
    fn weight_fraction() {
        assert_eq!(Weight::clamped(100).fraction(), 1.0);
        assert_eq!(Weight::clamped(0).fraction(), 0.0);
        assert!((Weight::clamped(85).fraction() - 0.85).abs() < 1e-12);
    }

    #[test]
    fn category_tokens_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.token().parse::<Category>().unwrap(), category);
            assert_eq!(Category::ALL[category.ordinal() as usize], category);
        }
        assert_eq!(" AIR ".parse::<Category>().unwrap(), Category::Air);
        assert!(matches!("aether".parse::<Category>(), Err(Error::UnknownCategory(_))));
    }

    #[test]
    fn category_serializes_as_token() {
        assert_eq!(serde_json::to_string(&Category::Water).unwrap(), "\"water\"");
    }

    #[test]
    fn draft_parses() {
        let draft: VertexDraft = "E:earth:120".parse().unwrap();
        assert_eq!(draft, VertexDraft::new("E", Category::Earth, 120));

        assert!(matches!("E:earth".parse::<VertexDraft>(), Err(Error::InvalidDraft(_))));
        assert!(matches!("E:earth:heavy".parse::<VertexDraft>(), Err(Error::InvalidDraft(_))));
        assert!(matches!("E:plasma:10".parse::<VertexDraft>(), Err(Error::UnknownCategory(_))));
    }

    #[test]
    fn invariants_detect_malformed_position() {
        let mut vertex = Vertex {
            id: "A".into(),
            category: Category::Fire,
            weight: Weight::MAX,
            position: Position::ORIGIN,
        };
        assert!(vertex.check_invariants().is_ok());

        vertex.position.alignment = 1.5;
        assert!(matches!(vertex.check_invariants(), Err(Error::InvariantViolation(_))));
    }

    #[test]
    fn out_of_range_weight_detected() {
        // Only reachable by deserializing around the clamp
        let vertex: Vertex = serde_json::from_str(
            r#"{"id":"X","category":"air","weight":200,"position":{"x":0.0,"y":0.0,"z":0.0,"alignment":0.5}}"#,
        )
        .unwrap();
        assert!(matches!(vertex.check_invariants(), Err(Error::InvariantViolation(_))));
    }
}
