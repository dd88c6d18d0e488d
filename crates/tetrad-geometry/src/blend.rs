//! Centroids and interpolation.

use crate::position::clamp_unit;
use crate::Position;

/// Arithmetic mean of a set of positions.
///
/// Alignment is the mean of the input alignments, re-clamped into [0, 1].
/// An empty set yields [`Position::ORIGIN`].
pub fn centroid(positions: &[Position]) -> Position {
    if positions.is_empty() {
        return Position::ORIGIN;
    }

    let n = positions.len() as f64;
    let sum = positions.iter().fold(Position::ORIGIN, |acc, p| acc + *p);
    let alignment: f64 = positions.iter().map(|p| p.alignment).sum();

    Position {
        x: sum.x / n,
        y: sum.y / n,
        z: sum.z / n,
        alignment: clamp_unit(alignment / n),
    }
}

/// Blend from `a` toward `b` by `weight`.
///
/// `weight` is clamped into [0, 1]: 0 returns `a`, 1 returns `b`. Alignment
/// is blended the same way.
pub fn interpolate(a: &Position, b: &Position, weight: f64) -> Position {
    let t = clamp_unit(weight);
    // Weighted form keeps both endpoints exact
    let lerp = |from: f64, to: f64| from * (1.0 - t) + to * t;

    Position {
        x: lerp(a.x, b.x),
        y: lerp(a.y, b.y),
        z: lerp(a.z, b.z),
        alignment: clamp_unit(lerp(a.alignment, b.alignment)),
    }
}
