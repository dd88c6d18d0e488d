//! Golden-angle placement of vertices.
//!
//! Deterministic mapping from `(index, total)` to a [`Position`] on the
//! sphere of radius [`RADIUS`]. Successive indices rotate by the golden
//! angle.
//!
//! For a fixed `total` the heights step evenly from pole to pole, so
//! [`Placement::of`] covers the sphere uniformly. A registry instead places
//! each vertex with the size it had at insertion, `position_for(i, i + 1)`,
//! which puts vertex `i` at `z = −i / (i + 1)`: the first sits on the
//! equator and later ones descend toward the south pole while the golden
//! angle keeps them apart in longitude.

use crate::position::clamp_unit;
use crate::{Position, GOLDEN_ANGLE, PHI, RADIUS};

/// Compute the position of the vertex at `index` in a registry of `total`.
///
/// `total` is raised to `index + 1` when smaller, so every index has a
/// well-defined slot. The result is bounded by [`RADIUS`] on every axis and
/// its alignment is `frac(index × φ)`.
///
/// # Examples
///
/// ```
/// use tetrad_geometry::position_for;
///
/// let a = position_for(3, 8);
/// let b = position_for(3, 8);
/// assert_eq!(a, b);
/// assert!((0.0..=1.0).contains(&a.alignment));
/// ```
pub fn position_for(index: usize, total: usize) -> Position {
    let total = total.max(index + 1) as f64;
    let i = index as f64;

    let theta = i * GOLDEN_ANGLE;
    let z = RADIUS * (1.0 - 2.0 * (i + 0.5) / total);
    let ring = (RADIUS * RADIUS - z * z).max(0.0).sqrt();

    Position {
        x: ring * theta.cos(),
        y: ring * theta.sin(),
        z,
        alignment: clamp_unit((i * PHI).fract()),
    }
}

/// Iterator over the placements of a registry of fixed size.
#[derive(Debug, Clone)]
pub struct Placement {
    current: usize,
    total: usize,
}

impl Placement {
    /// Yield `position_for(i, total)` for every `i` in `0..total`.
    pub fn of(total: usize) -> Self {
        Self { current: 0, total }
    }
}

impl Iterator for Placement {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.total {
            return None;
        }

        let position = position_for(self.current, self.total);
        self.current += 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total.saturating_sub(self.current);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Placement {}
