//! Positions in the bounded coordinate space.
//!
//! A position is a Cartesian point plus an alignment scalar. Coordinates are
//! unconstrained `f64` values (placement keeps them inside the sphere of
//! [`RADIUS`](crate::RADIUS)); alignment is always kept in [0, 1].

use std::ops::{Add, Sub};

/// A point in 3D space with an attached alignment in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Alignment scalar, clamped into [0, 1]
    pub alignment: f64,
}

impl Position {
    /// Origin with zero alignment.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0, z: 0.0, alignment: 0.0 };

    /// Create a position, clamping `alignment` into [0, 1].
    pub fn new(x: f64, y: f64, z: f64, alignment: f64) -> Self {
        Self { x, y, z, alignment: clamp_unit(alignment) }
    }

    /// Euclidean distance between the two points (alignment ignored).
    pub fn distance(&self, other: &Self) -> f64 {
        let d = *self - *other;
        (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
    }

    /// Distance from the origin.
    pub fn norm(&self) -> f64 {
        self.distance(&Self::ORIGIN)
    }

    /// True when every component is finite and alignment is in [0, 1].
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.z.is_finite()
            && (0.0..=1.0).contains(&self.alignment)
    }
}

/// Clamp into [0, 1]; NaN maps to 0.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

// Coordinate arithmetic. Alignment follows the left operand so the
// operators stay closed over well-formed positions.

impl Add for Position {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
            alignment: self.alignment,
        }
    }
}

impl Sub for Position {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
            alignment: self.alignment,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.3}, {:.3}, {:.3} | {:.3})",
            self.x, self.y, self.z, self.alignment
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_zero() {
        let origin = Position::ORIGIN;
        assert_eq!(origin.x, 0.0);
        assert_eq!(origin.y, 0.0);
        assert_eq!(origin.z, 0.0);
        assert_eq!(origin.alignment, 0.0);
        assert!(origin.is_well_formed());
    }

    #[test]
    fn new_clamps_alignment() {
        assert_eq!(Position::new(0.0, 0.0, 0.0, 1.7).alignment, 1.0);
        assert_eq!(Position::new(0.0, 0.0, 0.0, -0.2).alignment, 0.0);
        assert_eq!(Position::new(0.0, 0.0, 0.0, f64::NAN).alignment, 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Position::new(1.0, 2.0, 2.0, 0.5);
        let b = Position::ORIGIN;
        assert!((a.distance(&b) - 3.0).abs() < 1e-12);
        assert_eq!(a.distance(&b), b.distance(&a));
        assert!((a.norm() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn addition_subtraction() {
        let a = Position::new(1.0, 2.0, 3.0, 0.25);
        let b = Position::new(4.0, -1.0, 2.0, 0.75);

        let sum = a + b;
        assert_eq!((sum.x, sum.y, sum.z), (5.0, 1.0, 5.0));
        assert_eq!(sum.alignment, 0.25);

        let diff = a - b;
        assert_eq!((diff.x, diff.y, diff.z), (-3.0, 3.0, 1.0));
        assert_eq!(diff.alignment, 0.25);
        assert!(((a - b) + b).distance(&a) < 1e-12);
    }

    #[test]
    fn non_finite_is_not_well_formed() {
        let p = Position { x: f64::INFINITY, ..Position::ORIGIN };
        assert!(!p.is_well_formed());

        let p = Position { alignment: 2.0, ..Position::ORIGIN };
        assert!(!p.is_well_formed());
    }
}
